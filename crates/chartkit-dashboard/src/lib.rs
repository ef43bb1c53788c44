// File: crates/chartkit-dashboard/src/lib.rs
// Summary: Dashboard library: config, dataset loading, logging and the render pipeline.

pub mod config;
pub mod dataset;
pub mod dashboard;
pub mod logger;

pub use config::DashboardConfig;
pub use dashboard::{sample_config, Dashboard};
