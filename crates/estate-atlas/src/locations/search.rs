use super::directory::LocationDirectory;
use super::domain::{Area, City, Compound, LocationKind, LocationSearchResult};

impl LocationDirectory {
    /// Case-insensitive substring search over location names.
    ///
    /// Results are tiered rather than scored: compounds first, then areas,
    /// then cities, each tier in declaration order. Parent names are not
    /// searched. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<LocationSearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let matches = |name: &str| name.to_lowercase().contains(&needle);

        let compounds = self
            .compounds()
            .iter()
            .filter(|compound| matches(compound.name))
            .map(|compound| self.compound_entry(compound));
        let areas = self
            .areas()
            .iter()
            .filter(|area| matches(area.name))
            .map(|area| self.area_entry(area));
        let cities = self
            .cities()
            .iter()
            .filter(|city| matches(city.name))
            .map(city_entry);

        compounds.chain(areas).chain(cities).collect()
    }

    /// Every location as a dropdown entry: cities, then areas, then compounds.
    pub fn flatten(&self) -> Vec<LocationSearchResult> {
        let cities = self.cities().iter().map(city_entry);
        let areas = self.areas().iter().map(|area| self.area_entry(area));
        let compounds = self
            .compounds()
            .iter()
            .map(|compound| self.compound_entry(compound));

        cities.chain(areas).chain(compounds).collect()
    }

    fn area_entry(&self, area: &Area) -> LocationSearchResult {
        let city = self.city(area.city_id);
        LocationSearchResult {
            kind: LocationKind::Area,
            id: area.id,
            name: area.name,
            parent_name: city.map(|city| city.name),
            full_path: join_path(&[Some(area.name), city.map(|city| city.name)]),
        }
    }

    fn compound_entry(&self, compound: &Compound) -> LocationSearchResult {
        let area = self.area(compound.area_id);
        let city = area.and_then(|area| self.city(area.city_id));
        LocationSearchResult {
            kind: LocationKind::Compound,
            id: compound.id,
            name: compound.name,
            parent_name: area.map(|area| area.name),
            full_path: join_path(&[
                Some(compound.name),
                area.map(|area| area.name),
                city.map(|city| city.name),
            ]),
        }
    }
}

fn city_entry(city: &City) -> LocationSearchResult {
    LocationSearchResult {
        kind: LocationKind::City,
        id: city.id,
        name: city.name,
        parent_name: None,
        full_path: city.name.to_string(),
    }
}

/// Missing segments stay in the path as empty strings, so an orphaned
/// compound renders as `"Name, , "`. Consumers rely on the fixed arity.
fn join_path(segments: &[Option<&str>]) -> String {
    segments
        .iter()
        .map(|&segment| segment.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(", ")
}
