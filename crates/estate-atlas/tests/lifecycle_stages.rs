use estate_atlas::lifecycle::{
    resolve_stage_index, resolve_stage_match, LifecycleEntity, LifecycleError, PropertyStage,
    StageState, TenantStage,
};

#[test]
fn every_canonical_label_resolves_to_its_position() {
    for (idx, stage) in TenantStage::ordered().into_iter().enumerate() {
        let progress = resolve_stage_index(LifecycleEntity::Tenant, stage.label());
        assert_eq!(progress.current_index, idx);
        assert!(progress.matched);
    }
    for (idx, stage) in PropertyStage::ordered().into_iter().enumerate() {
        assert_eq!(
            resolve_stage_match(LifecycleEntity::Property, stage.label()),
            Some(idx)
        );
    }
}

#[test]
fn property_normalization_matches_canonical_stage() {
    assert_eq!(
        resolve_stage_index(LifecycleEntity::Property, "Active").current_index,
        resolve_stage_index(LifecycleEntity::Property, "Approved").current_index
    );
    assert_eq!(
        resolve_stage_index(LifecycleEntity::Property, "Pending").current_label,
        "Pending Review"
    );
}

#[test]
fn unknown_status_defaults_to_first_stage() {
    let progress = resolve_stage_index(LifecycleEntity::Property, "UnknownStatus");
    assert_eq!(progress.current_index, 0);
    assert!(!progress.matched);
    assert_eq!(progress.stage_states()[0].1, StageState::Current);
}

#[test]
fn entity_names_parse_loosely() {
    assert_eq!(
        " Tenant ".parse::<LifecycleEntity>(),
        Ok(LifecycleEntity::Tenant)
    );
    assert_eq!(
        "PROPERTY".parse::<LifecycleEntity>(),
        Ok(LifecycleEntity::Property)
    );
    assert_eq!(
        "agent".parse::<LifecycleEntity>(),
        Err(LifecycleError::UnknownEntity("agent".to_string()))
    );
}
