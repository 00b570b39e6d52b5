mod cli;
mod config;
mod harness;
mod host;
mod output;
mod stats;
mod timing;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::BenchArgs;
use harness::{attach_comparisons, format_size, run_variant, DataPoint, Validation};
use host::HostInfo;
use output::progress::BenchProgress;
use output::summary::print_summary;
use output::table::render_all_tables;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = BenchArgs::parse();

    let config = match config::resolve(&args) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            tracing::error!("Failed to configure {} worker threads: {}", threads, e);
            std::process::exit(1);
        }
    }

    let host = HostInfo::detect();

    println!("filter-bench: sequence filter throughput comparison");
    println!(
        "  Host: {} cores, {} rayon threads ({}/{})",
        host.logical_cpus, host.rayon_threads, host.os, host.arch
    );
    println!(
        "  Variants: {:?}",
        config.variants.iter().map(|v| v.name()).collect::<Vec<_>>()
    );
    println!(
        "  Sizes: {:?}",
        config
            .sizes
            .iter()
            .map(|s| format_size(s.elements()))
            .collect::<Vec<_>>()
    );
    println!(
        "  Warmup: {}, Iterations: {} x {} ms",
        config.warmup,
        config.iterations,
        config.iteration_time.as_millis()
    );
    if let Some(ref path) = args.json_file {
        println!("  JSON output: {}", path.display());
    }
    if let Some(ref path) = args.csv_file {
        println!("  CSV output: {}", path.display());
    }
    println!();

    tracing::info!(
        variants = config.variants.len(),
        sizes = config.sizes.len(),
        "run started"
    );

    let progress = BenchProgress::new();
    let mut all_results: Vec<DataPoint> = Vec::new();
    let mut failed = false;

    for &variant in &config.variants {
        let cb = progress.callback();
        match run_variant(variant, &config, Some(&cb)) {
            Ok(results) => all_results.extend(results),
            Err(e) => {
                tracing::error!(variant = variant.name(), size = e.size(), "run aborted: {}", e);
                failed = true;
            }
        }
    }

    progress.finish();

    attach_comparisons(&mut all_results, &host);
    render_all_tables(&all_results);
    print_summary(&all_results);

    let mismatches = all_results
        .iter()
        .filter(|dp| matches!(dp.validation, Validation::Failed(_)))
        .count();
    if mismatches > 0 {
        tracing::warn!(mismatches, "count validation failed; see MISMATCH rows");
    }

    if let Some(ref path) = args.json_file {
        if let Err(e) = output::json::write_json(path, &all_results, &host, &config) {
            tracing::error!("Error writing JSON: {}", e);
            failed = true;
        }
    }
    if let Some(ref path) = args.csv_file {
        if let Err(e) = output::csv::write_csv(path, &all_results) {
            tracing::error!("Error writing CSV: {}", e);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}
