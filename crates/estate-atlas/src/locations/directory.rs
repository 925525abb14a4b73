use super::dataset::{AREAS, CITIES, COMPOUNDS, TOP_LEVEL_REGIONS};
use super::domain::{
    Area, CatalogIntegrityError, City, Compound, IntegrityIssue, LocationKind, TopLevelRegion,
};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use tracing::{debug, warn};

static STANDARD_DIRECTORY: OnceLock<LocationDirectory> = OnceLock::new();

/// Read-only view over the City → Area → Compound tables with id indexes.
///
/// Records keep their string foreign keys; the indexes only accelerate
/// parent lookups. When an id is declared twice the first declaration wins.
#[derive(Debug)]
pub struct LocationDirectory {
    cities: &'static [City],
    areas: &'static [Area],
    compounds: &'static [Compound],
    regions: &'static [TopLevelRegion],
    city_index: HashMap<&'static str, usize>,
    area_index: HashMap<&'static str, usize>,
    compound_index: HashMap<&'static str, usize>,
    region_index: HashMap<&'static str, usize>,
}

impl LocationDirectory {
    pub fn new(
        cities: &'static [City],
        areas: &'static [Area],
        compounds: &'static [Compound],
        regions: &'static [TopLevelRegion],
    ) -> Self {
        Self {
            cities,
            areas,
            compounds,
            regions,
            city_index: index_by(cities, |city| city.id),
            area_index: index_by(areas, |area| area.id),
            compound_index: index_by(compounds, |compound| compound.id),
            region_index: index_by(regions, |region| region.id),
        }
    }

    /// The built-in marketplace directory, built on first use.
    pub fn standard() -> &'static LocationDirectory {
        STANDARD_DIRECTORY.get_or_init(|| {
            let directory = Self::new(CITIES, AREAS, COMPOUNDS, TOP_LEVEL_REGIONS);
            let issues = directory.integrity_issues();
            if issues.is_empty() {
                debug!(
                    cities = directory.cities.len(),
                    areas = directory.areas.len(),
                    compounds = directory.compounds.len(),
                    "location directory loaded"
                );
            }
            for issue in &issues {
                warn!(%issue, "location directory integrity issue");
            }
            directory
        })
    }

    pub fn cities(&self) -> &[City] {
        self.cities
    }

    pub fn areas(&self) -> &[Area] {
        self.areas
    }

    pub fn compounds(&self) -> &[Compound] {
        self.compounds
    }

    pub fn regions(&self) -> &[TopLevelRegion] {
        self.regions
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.city_index.get(id).map(|&idx| &self.cities[idx])
    }

    pub fn area(&self, id: &str) -> Option<&Area> {
        self.area_index.get(id).map(|&idx| &self.areas[idx])
    }

    pub fn compound(&self, id: &str) -> Option<&Compound> {
        self.compound_index.get(id).map(|&idx| &self.compounds[idx])
    }

    pub fn region(&self, id: &str) -> Option<&TopLevelRegion> {
        self.region_index.get(id).map(|&idx| &self.regions[idx])
    }

    pub fn areas_by_city(&self, city_id: &str) -> Vec<Area> {
        self.areas
            .iter()
            .filter(|area| area.city_id == city_id)
            .copied()
            .collect()
    }

    /// Areas of every city grouped under the region, in area declaration
    /// order. Unknown regions yield no areas.
    pub fn areas_by_region(&self, region_id: &str) -> Vec<Area> {
        let Some(region) = self.region(region_id) else {
            return Vec::new();
        };
        let city_ids: HashSet<&str> = region.city_ids.iter().copied().collect();

        self.areas
            .iter()
            .filter(|area| city_ids.contains(area.city_id))
            .copied()
            .collect()
    }

    pub fn cities_by_region(&self, region_id: &str) -> Vec<City> {
        let Some(region) = self.region(region_id) else {
            return Vec::new();
        };

        self.cities
            .iter()
            .filter(|city| region.city_ids.contains(&city.id))
            .copied()
            .collect()
    }

    pub fn compounds_by_area(&self, area_id: &str) -> Vec<Compound> {
        self.compounds
            .iter()
            .filter(|compound| compound.area_id == area_id)
            .copied()
            .collect()
    }

    /// Exact, case-sensitive name match.
    pub fn region_id_by_name(&self, name: &str) -> Option<&'static str> {
        self.regions
            .iter()
            .find(|region| region.name == name)
            .map(|region| region.id)
    }

    /// Exact, case-sensitive name match.
    pub fn area_id_by_name(&self, name: &str) -> Option<&'static str> {
        self.areas
            .iter()
            .find(|area| area.name == name)
            .map(|area| area.id)
    }

    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        collect_duplicates(self.cities, LocationKind::City, |city| city.id, &mut issues);
        collect_duplicates(self.areas, LocationKind::Area, |area| area.id, &mut issues);
        collect_duplicates(
            self.compounds,
            LocationKind::Compound,
            |compound| compound.id,
            &mut issues,
        );

        let mut city_names = HashSet::new();
        for city in self.cities {
            if !city_names.insert(city.name) {
                issues.push(IntegrityIssue::DuplicateCityName { name: city.name });
            }
        }

        for area in self.areas {
            if self.city(area.city_id).is_none() {
                issues.push(IntegrityIssue::AreaWithoutCity {
                    area_id: area.id,
                    city_id: area.city_id,
                });
            }
        }

        for compound in self.compounds {
            if self.area(compound.area_id).is_none() {
                issues.push(IntegrityIssue::CompoundWithoutArea {
                    compound_id: compound.id,
                    area_id: compound.area_id,
                });
            }
        }

        for region in self.regions {
            for &city_id in region.city_ids {
                if self.city(city_id).is_none() {
                    issues.push(IntegrityIssue::RegionWithoutCity {
                        region_id: region.id,
                        city_id,
                    });
                }
            }
        }

        issues
    }

    pub fn verify(&self) -> Result<(), CatalogIntegrityError> {
        let issues = self.integrity_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CatalogIntegrityError { issues })
        }
    }
}

fn index_by<T>(records: &[T], key: impl Fn(&T) -> &'static str) -> HashMap<&'static str, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        index.entry(key(record)).or_insert(idx);
    }
    index
}

fn collect_duplicates<T>(
    records: &[T],
    kind: LocationKind,
    key: impl Fn(&T) -> &'static str,
    issues: &mut Vec<IntegrityIssue>,
) {
    let mut seen = HashSet::new();
    for record in records {
        let id = key(record);
        if !seen.insert(id) {
            issues.push(IntegrityIssue::DuplicateId { kind, id });
        }
    }
}
