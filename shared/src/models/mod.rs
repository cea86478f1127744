//! Domain models for work sites, environment readings, risk, and alerts

pub mod alert;
pub mod dashboard;
pub mod environment;
pub mod forecast;
pub mod risk;
pub mod site;

pub use alert::*;
pub use dashboard::*;
pub use environment::*;
pub use forecast::*;
pub use risk::*;
pub use site::*;
