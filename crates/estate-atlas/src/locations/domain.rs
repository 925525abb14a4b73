use serde::Serialize;

/// Top of the location hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Area {
    pub id: &'static str,
    pub name: &'static str,
    pub city_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compound {
    pub id: &'static str,
    pub name: &'static str,
    pub area_id: &'static str,
}

/// Coarse grouping of one or more cities offered as a single choice in
/// location pickers. Not part of the strict three-level hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopLevelRegion {
    pub id: &'static str,
    pub name: &'static str,
    pub city_ids: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    City,
    Area,
    Compound,
}

impl LocationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::City => "City",
            Self::Area => "Area",
            Self::Compound => "Compound",
        }
    }
}

/// Projection used by search boxes and dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationSearchResult {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub id: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<&'static str>,
    pub full_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityIssue {
    #[error("area {area_id} references unknown city {city_id}")]
    AreaWithoutCity {
        area_id: &'static str,
        city_id: &'static str,
    },
    #[error("compound {compound_id} references unknown area {area_id}")]
    CompoundWithoutArea {
        compound_id: &'static str,
        area_id: &'static str,
    },
    #[error("region {region_id} references unknown city {city_id}")]
    RegionWithoutCity {
        region_id: &'static str,
        city_id: &'static str,
    },
    #[error("{} id {id} is declared more than once", .kind.label())]
    DuplicateId {
        kind: LocationKind,
        id: &'static str,
    },
    #[error("city name {name} is declared more than once")]
    DuplicateCityName { name: &'static str },
}

#[derive(Debug, thiserror::Error)]
#[error("location directory has {} integrity issue(s)", .issues.len())]
pub struct CatalogIntegrityError {
    pub issues: Vec<IntegrityIssue>,
}
