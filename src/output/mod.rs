// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Stages build an [`OutputPlan`] from pure data; [`deliver`] performs the
//! writes and reports what happened.

mod paths;
mod types;
mod writer;

// Re-export the public interface
pub use paths::{article_filename, article_path};
pub use types::{DeliveryTarget, ExecutionStats, OutputPlan, OutputReport};
pub use writer::deliver;
