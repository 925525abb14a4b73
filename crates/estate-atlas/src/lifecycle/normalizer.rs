use super::domain::LifecycleEntity;

/// Status labels used elsewhere in the product that stand for a canonical
/// property stage. Tenant labels are never rewritten.
const PROPERTY_ALIASES: &[(&str, &str)] = &[("Pending", "Pending Review"), ("Active", "Approved")];

pub(crate) fn normalize_label(entity: LifecycleEntity, label: &str) -> &str {
    match entity {
        LifecycleEntity::Tenant => label,
        LifecycleEntity::Property => PROPERTY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == label)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(label),
    }
}
