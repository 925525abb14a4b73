//! Reference data for the rental marketplace: the City → Area → Compound
//! location directory and the tenant/property lifecycle stage resolver.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod locations;
pub mod telemetry;
