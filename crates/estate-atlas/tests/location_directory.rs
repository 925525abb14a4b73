use estate_atlas::locations::{
    all_locations_flat, area_id_by_name, areas_by_city, areas_by_region, compounds_by_area,
    region_id_by_name, search_locations, LocationDirectory, LocationKind,
};

#[test]
fn search_results_always_contain_the_query() {
    for query in ["cairo", "Hills", "ZAYED", "bay", "1st", "o"] {
        let needle = query.to_lowercase();
        let results = search_locations(query);
        assert!(!results.is_empty(), "expected matches for {query}");
        assert!(results
            .iter()
            .all(|result| result.name.to_lowercase().contains(&needle)));
    }
}

#[test]
fn blank_searches_are_empty() {
    assert!(search_locations("").is_empty());
    assert!(search_locations("   ").is_empty());
}

#[test]
fn search_tiers_follow_the_hierarchy() {
    let results = search_locations("Cairo");
    let ids: Vec<_> = results.iter().map(|result| result.id).collect();
    assert_eq!(ids, vec!["cairo", "new-cairo"]);
    assert!(results.iter().all(|result| result.kind == LocationKind::City));

    let zayed: Vec<_> = search_locations("zayed")
        .into_iter()
        .map(|result| (result.kind, result.id))
        .collect();
    assert_eq!(
        zayed,
        vec![
            (LocationKind::Area, "sz-general"),
            (LocationKind::Area, "sz-new-zayed"),
            (LocationKind::City, "sheikh-zayed"),
        ]
    );
}

#[test]
fn flat_listing_covers_every_record_once() {
    let directory = LocationDirectory::standard();
    let flat = all_locations_flat();
    assert_eq!(
        flat.len(),
        directory.cities().len() + directory.areas().len() + directory.compounds().len()
    );

    let first_area = flat
        .iter()
        .position(|entry| entry.kind == LocationKind::Area)
        .expect("areas listed");
    let first_compound = flat
        .iter()
        .position(|entry| entry.kind == LocationKind::Compound)
        .expect("compounds listed");
    assert_eq!(first_area, directory.cities().len());
    assert_eq!(first_compound, first_area + directory.areas().len());

    let allegria = flat
        .iter()
        .find(|entry| entry.id == "allegria")
        .expect("allegria listed");
    assert_eq!(allegria.full_path, "Allegria, Sheikh Zayed, Sheikh Zayed");
    assert_eq!(allegria.parent_name, Some("Sheikh Zayed"));
}

#[test]
fn north_coast_region_spans_four_cities() {
    let areas = areas_by_region("north-coast");
    let city_ids: Vec<_> = areas.iter().map(|area| area.city_id).collect();
    assert_eq!(
        city_ids,
        vec!["new-alamein", "sidi-abdel-rahman", "ras-el-hekma", "el-dabaa"]
    );
    assert_eq!(
        region_id_by_name("North Coast \u{2013} Sahel"),
        Some("north-coast")
    );
}

#[test]
fn hierarchy_lookups_match_fixture_counts() {
    assert_eq!(areas_by_city("new-cairo").len(), 7);
    assert_eq!(compounds_by_area("sz-general").len(), 6);
    assert_eq!(compounds_by_area("nc-5th-settlement")[0].name, "Mivida");
    assert_eq!(area_id_by_name("Sheikh Zayed"), Some("sz-general"));
    assert_eq!(area_id_by_name("sheikh zayed"), None);
    assert_eq!(region_id_by_name("Atlantis"), None);
}

#[test]
fn lookups_are_idempotent() {
    assert_eq!(search_locations("el"), search_locations("el"));
    assert_eq!(all_locations_flat(), all_locations_flat());
    assert_eq!(areas_by_region("giza"), areas_by_region("giza"));
    assert_eq!(compounds_by_area("sar-bay"), compounds_by_area("sar-bay"));
}
