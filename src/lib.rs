//! VectorPlan - Weekly Training Plan Generator
//!
//! Builds a seven-day running and lifting schedule from an athlete's
//! experience level, available training days and goal, and exports it as
//! text, JSON or CSV.

pub mod export;
pub mod plan;
pub mod storage;

// Re-export commonly used types
pub use plan::generator::{generate, pick_tip, PlanRequest};
pub use plan::types::{Day, ExperienceLevel, Goal, PlanError, Schedule};
pub use storage::config::AppConfig;
