//! Shared types and the risk engine for the Marine Safety Dashboard
//!
//! This crate contains the domain models and the pure computation core:
//! per-factor risk scoring, weighted aggregation, 24-hour forecast
//! synthesis, and risk-level diffing for alerts. Everything here is
//! synchronous and side-effect-free; randomness is injected through a
//! `rand::Rng` parameter so callers can seed it for reproducible output.

pub mod alerting;
pub mod forecast;
pub mod models;
pub mod scoring;

pub use alerting::*;
pub use forecast::*;
pub use models::*;
pub use scoring::*;
