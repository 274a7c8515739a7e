// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where generated files are written.

use super::types::*;
use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Delivers the output plan. A failed write is recorded in the report and
/// the remaining operations still run.
pub fn deliver(plan: OutputPlan) -> Result<OutputReport, AppError> {
    let mut report = OutputReport::new();

    log::debug!("Executing output plan with {} operations", plan.len());

    for operation in plan.operations {
        match execute_operation(&operation) {
            Ok(bytes_written) => {
                report = report.with_completed(CompletedOperation {
                    operation,
                    bytes_written,
                });
            }
            Err(e) => {
                log::error!("Operation failed: {}", e);
                report = report.with_failed(FailedOperation {
                    operation,
                    error: e.to_string(),
                });
            }
        }
    }

    log::debug!(
        "Output plan execution complete: {} succeeded, {} failed, {} bytes written",
        report.stats.operations_completed,
        report.stats.operations_failed,
        report.stats.bytes_written
    );

    Ok(report)
}

fn execute_operation(operation: &DeliveryTarget) -> Result<usize, AppError> {
    match operation {
        DeliveryTarget::WriteFile { path, content } => write_file(path, content),
    }
}

/// Writes content to a file, creating parent directories if needed.
fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;
    Ok(content.len())
}
