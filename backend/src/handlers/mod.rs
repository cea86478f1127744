//! HTTP handlers

pub mod alerts;
pub mod dashboard;
pub mod health;
pub mod sites;

pub use alerts::*;
pub use dashboard::*;
pub use health::*;
pub use sites::*;
