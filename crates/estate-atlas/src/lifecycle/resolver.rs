use super::domain::{LifecycleEntity, StageState};
use super::normalizer::normalize_label;
use serde::Serialize;
use tracing::debug;

/// Position of an entity within its lifecycle, ready for a progress timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleProgress {
    pub entity: LifecycleEntity,
    pub stages: Vec<&'static str>,
    pub current_index: usize,
    pub current_label: &'static str,
    /// False when the label was not recognised and `current_index` fell back
    /// to the first stage.
    pub matched: bool,
}

impl LifecycleProgress {
    pub fn stage_states(&self) -> Vec<(&'static str, StageState)> {
        self.stages
            .iter()
            .enumerate()
            .map(|(idx, &stage)| {
                let state = match idx.cmp(&self.current_index) {
                    std::cmp::Ordering::Less => StageState::Completed,
                    std::cmp::Ordering::Equal => StageState::Current,
                    std::cmp::Ordering::Greater => StageState::Upcoming,
                };
                (stage, state)
            })
            .collect()
    }

    pub fn completion_pct(&self) -> f32 {
        if self.stages.len() <= 1 {
            return 100.0;
        }
        self.current_index as f32 * 100.0 / (self.stages.len() - 1) as f32
    }
}

/// Strict lookup: the stage index for `label`, or `None` when the label is
/// not a known stage after normalization.
pub fn resolve_stage_match(entity: LifecycleEntity, label: &str) -> Option<usize> {
    let normalized = normalize_label(entity, label);
    entity
        .stage_labels()
        .iter()
        .position(|stage| *stage == normalized)
}

/// Resolves `label` against the entity's stage sequence. Unrecognised labels
/// resolve to the first stage, which renders the same as a genuine first
/// stage; check `matched` to tell the two apart.
pub fn resolve_stage_index(entity: LifecycleEntity, label: &str) -> LifecycleProgress {
    let stages = entity.stage_labels();
    let matched = resolve_stage_match(entity, label);
    if matched.is_none() {
        debug!(
            entity = entity.label(),
            label, "unrecognised lifecycle stage, defaulting to first stage"
        );
    }
    let current_index = matched.unwrap_or(0);

    LifecycleProgress {
        entity,
        current_label: stages[current_index],
        stages,
        current_index,
        matched: matched.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_rented_is_third_stage() {
        let progress = resolve_stage_index(LifecycleEntity::Tenant, "Rented");
        assert_eq!(progress.current_index, 2);
        assert_eq!(
            progress.stages,
            vec!["Prospect", "Approved", "Rented", "Past Tenant"]
        );
        assert!(progress.matched);
    }

    #[test]
    fn property_active_is_treated_as_approved() {
        let active = resolve_stage_index(LifecycleEntity::Property, "Active");
        let approved = resolve_stage_index(LifecycleEntity::Property, "Approved");
        assert_eq!(active.current_index, approved.current_index);
        assert_eq!(active.current_index, 2);
        assert_eq!(active.current_label, "Approved");

        let pending = resolve_stage_index(LifecycleEntity::Property, "Pending");
        assert_eq!(pending.current_index, 1);
    }

    #[test]
    fn unknown_labels_fall_back_to_first_stage() {
        let progress = resolve_stage_index(LifecycleEntity::Property, "UnknownStatus");
        assert_eq!(progress.current_index, 0);
        assert_eq!(progress.current_label, "Draft");
        assert!(!progress.matched);

        assert_eq!(
            resolve_stage_match(LifecycleEntity::Property, "UnknownStatus"),
            None
        );
        assert_eq!(
            resolve_stage_match(LifecycleEntity::Property, "Rejected"),
            None
        );
    }

    #[test]
    fn tenant_labels_are_not_normalized() {
        assert_eq!(resolve_stage_match(LifecycleEntity::Tenant, "Active"), None);
        assert_eq!(resolve_stage_match(LifecycleEntity::Tenant, "Pending"), None);
        assert_eq!(
            resolve_stage_match(LifecycleEntity::Tenant, "Past Tenant"),
            Some(3)
        );
    }

    #[test]
    fn stage_states_mark_a_single_current_stage() {
        let progress = resolve_stage_index(LifecycleEntity::Property, "Assigned");
        let states: Vec<_> = progress
            .stage_states()
            .into_iter()
            .map(|(_, state)| state)
            .collect();
        assert_eq!(
            states,
            vec![
                StageState::Completed,
                StageState::Completed,
                StageState::Completed,
                StageState::Current,
                StageState::Upcoming,
                StageState::Upcoming,
            ]
        );
        assert!((progress.completion_pct() - 60.0).abs() < 1e-3);
    }

    #[test]
    fn resolution_is_repeatable() {
        for label in ["Pending", "Vacant", "Draft", "???"] {
            assert_eq!(
                resolve_stage_index(LifecycleEntity::Property, label),
                resolve_stage_index(LifecycleEntity::Property, label)
            );
        }
    }
}
