use std::path::PathBuf;

use clap::Parser;

/// Throughput comparison of compound, staged, parallel, and indexed-loop filters
#[derive(Parser, Debug, Default)]
#[command(name = "filter-bench", version, about)]
pub struct BenchArgs {
    /// Variants to run (e.g., one_filter indexed_loop). Use "all" for every variant.
    #[arg(value_name = "VARIANTS")]
    pub variants: Vec<String>,

    /// Input sizes (e.g., 10,1K,1M). Each must be 10, 100, 1000, 10000, 100000 or 1000000.
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<String>>,

    /// Benchmark profile: quick, standard, thorough
    #[arg(long)]
    pub profile: Option<String>,

    /// Warm-up iterations per size [default: 10]
    #[arg(long)]
    pub warmup: Option<u32>,

    /// Measured iterations per size [default: 10]
    #[arg(long)]
    pub iterations: Option<u32>,

    /// Measured time budget per iteration in milliseconds [default: 200]
    #[arg(long)]
    pub iteration_ms: Option<u64>,

    /// Worker threads for the parallel variants (defaults to available parallelism)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Skip the parallel/sequential and predicate cross-checks
    #[arg(long)]
    pub no_validate: bool,

    /// Write JSON results to file
    #[arg(long)]
    pub json_file: Option<PathBuf>,

    /// Write CSV results to file
    #[arg(long)]
    pub csv_file: Option<PathBuf>,
}
