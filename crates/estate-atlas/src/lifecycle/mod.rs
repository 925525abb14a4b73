pub mod domain;
mod normalizer;
mod resolver;
pub mod router;

pub use domain::{LifecycleEntity, LifecycleError, PropertyStage, StageState, TenantStage};
pub use resolver::{resolve_stage_index, resolve_stage_match, LifecycleProgress};
pub use router::{lifecycle_router, LifecycleProgressView, StageStateView};
