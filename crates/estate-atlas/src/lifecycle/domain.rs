use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEntity {
    Tenant,
    Property,
}

impl LifecycleEntity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tenant => "Tenant",
            Self::Property => "Property",
        }
    }

    /// Canonical stage labels in progression order.
    pub fn stage_labels(self) -> Vec<&'static str> {
        match self {
            Self::Tenant => TenantStage::ordered().map(TenantStage::label).to_vec(),
            Self::Property => PropertyStage::ordered().map(PropertyStage::label).to_vec(),
        }
    }
}

impl FromStr for LifecycleEntity {
    type Err = LifecycleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tenant" => Ok(Self::Tenant),
            "property" => Ok(Self::Property),
            _ => Err(LifecycleError::UnknownEntity(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenantStage {
    Prospect,
    Approved,
    Rented,
    PastTenant,
}

impl TenantStage {
    pub const fn ordered() -> [Self; 4] {
        [Self::Prospect, Self::Approved, Self::Rented, Self::PastTenant]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Prospect => "Prospect",
            Self::Approved => "Approved",
            Self::Rented => "Rented",
            Self::PastTenant => "Past Tenant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStage {
    Draft,
    PendingReview,
    Approved,
    Assigned,
    Rented,
    Vacant,
}

impl PropertyStage {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Draft,
            Self::PendingReview,
            Self::Approved,
            Self::Assigned,
            Self::Rented,
            Self::Vacant,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingReview => "Pending Review",
            Self::Approved => "Approved",
            Self::Assigned => "Assigned",
            Self::Rented => "Rented",
            Self::Vacant => "Vacant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageState {
    Completed,
    Current,
    Upcoming,
}

impl StageState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Current => "Current",
            Self::Upcoming => "Upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("unknown lifecycle entity '{0}', expected 'tenant' or 'property'")]
    UnknownEntity(String),
}
