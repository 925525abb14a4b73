mod dataset;
mod directory;
pub mod domain;
pub mod router;
mod search;

pub use directory::LocationDirectory;
pub use domain::{
    Area, CatalogIntegrityError, City, Compound, IntegrityIssue, LocationKind,
    LocationSearchResult, TopLevelRegion,
};
pub use router::location_router;

pub fn search_locations(query: &str) -> Vec<LocationSearchResult> {
    LocationDirectory::standard().search(query)
}

pub fn all_locations_flat() -> Vec<LocationSearchResult> {
    LocationDirectory::standard().flatten()
}

pub fn areas_by_city(city_id: &str) -> Vec<Area> {
    LocationDirectory::standard().areas_by_city(city_id)
}

pub fn areas_by_region(region_id: &str) -> Vec<Area> {
    LocationDirectory::standard().areas_by_region(region_id)
}

pub fn compounds_by_area(area_id: &str) -> Vec<Compound> {
    LocationDirectory::standard().compounds_by_area(area_id)
}

pub fn region_id_by_name(name: &str) -> Option<&'static str> {
    LocationDirectory::standard().region_id_by_name(name)
}

pub fn area_id_by_name(name: &str) -> Option<&'static str> {
    LocationDirectory::standard().area_id_by_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mivida_resolves_to_a_single_compound() {
        let results = search_locations("Mivida");
        assert_eq!(results.len(), 1);
        let mivida = &results[0];
        assert_eq!(mivida.kind, LocationKind::Compound);
        assert_eq!(mivida.parent_name, Some("5th Settlement"));
        assert_eq!(mivida.full_path, "Mivida, 5th Settlement, New Cairo");
    }

    #[test]
    fn every_result_contains_the_query() {
        for query in ["a", "Cairo", "west", "EL ", "settle", "z"] {
            let needle = query.to_lowercase();
            for result in search_locations(query) {
                assert!(
                    result.name.to_lowercase().contains(&needle),
                    "{} does not contain {query}",
                    result.name
                );
            }
        }
    }

    #[test]
    fn search_tiers_are_never_interleaved() {
        let rank = |kind: LocationKind| match kind {
            LocationKind::Compound => 0,
            LocationKind::Area => 1,
            LocationKind::City => 2,
        };
        let ranks: Vec<_> = search_locations("e")
            .into_iter()
            .map(|result| rank(result.kind))
            .collect();
        assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn new_cairo_has_seven_areas_in_declaration_order() {
        let areas = areas_by_city("new-cairo");
        assert_eq!(areas.len(), 7);
        assert!(areas.iter().all(|area| area.city_id == "new-cairo"));
        assert_eq!(areas[0].name, "5th Settlement");
        assert_eq!(areas[6].name, "Mostakbal City");
    }

    #[test]
    fn sheikh_zayed_compounds_follow_declaration_order() {
        let names: Vec<_> = compounds_by_area("sz-general")
            .into_iter()
            .map(|compound| compound.name)
            .collect();
        assert_eq!(
            names,
            vec!["Allegria", "Beverly Hills", "Etapa", "Karma", "Greens", "Sodic West"]
        );
    }

    #[test]
    fn name_lookups_are_exact() {
        assert_eq!(region_id_by_name("North Coast \u{2013} Sahel"), Some("north-coast"));
        assert_eq!(region_id_by_name("north coast"), None);
        assert_eq!(area_id_by_name("5th Settlement"), Some("nc-5th-settlement"));
        assert_eq!(area_id_by_name("5th"), None);
    }

    #[test]
    fn unknown_ids_yield_empty_collections() {
        assert!(areas_by_city("atlantis").is_empty());
        assert!(areas_by_region("atlantis").is_empty());
        assert!(compounds_by_area("atlantis").is_empty());
    }
}
