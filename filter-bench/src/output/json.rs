//! JSON output for benchmark results.
//!
//! Serializes the data points with a host and schedule header.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::BenchConfig;
use crate::harness::DataPoint;
use crate::host::HostInfo;

#[derive(Serialize)]
struct JsonReport<'a> {
    host: &'a HostInfo,
    schedule: Schedule,
    timestamp: String,
    results: &'a [DataPoint],
}

#[derive(Serialize)]
struct Schedule {
    warmup_iterations: u32,
    measured_iterations: u32,
    iteration_ms: u64,
    checks_enabled: bool,
}

/// Write benchmark results to a JSON file.
pub fn write_json(
    path: &Path,
    data: &[DataPoint],
    host: &HostInfo,
    config: &BenchConfig,
) -> Result<(), String> {
    let report = JsonReport {
        host,
        schedule: Schedule {
            warmup_iterations: config.warmup,
            measured_iterations: config.iterations,
            iteration_ms: config.iteration_time.as_millis() as u64,
            checks_enabled: config.validate,
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
        results: data,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("JSON serialization failed: {}", e))?;

    super::ensure_parent_dir(path)?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

    tracing::info!(path = %path.display(), "JSON results written");
    Ok(())
}
