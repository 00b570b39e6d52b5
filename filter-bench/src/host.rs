//! Host detection for report headers and parallel-efficiency figures.

use serde::Serialize;

/// CPU and platform facts for the machine running the benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
    /// Logical CPUs reported by the OS.
    pub logical_cpus: usize,
    /// Worker threads in rayon's global pool.
    pub rayon_threads: usize,
    pub os: String,
    pub arch: String,
}

impl HostInfo {
    /// Detect the current host. Call after any global pool configuration.
    pub fn detect() -> Self {
        let logical_cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        Self {
            logical_cpus,
            rayon_threads: rayon::current_num_threads(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// Percentage of ideal linear scaling achieved by a parallel speedup.
    pub fn parallel_efficiency(&self, speedup: f64) -> f64 {
        if self.rayon_threads > 0 {
            speedup / self.rayon_threads as f64 * 100.0
        } else {
            0.0
        }
    }
}
