//! Service layer: refresh orchestration and demo data generation

pub mod monitor;
pub mod scenario;
