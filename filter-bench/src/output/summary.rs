//! Summary output with throughput verdicts relative to the baseline variant:
//!   >1.1x = FASTER, 0.9-1.1x = SIMILAR, <0.9x = SLOWER

use crate::harness::{format_size, DataPoint, BASELINE};

/// Classify a relative throughput into a verdict string.
pub fn verdict(speedup: f64) -> &'static str {
    if speedup > 1.1 {
        "FASTER"
    } else if speedup >= 0.9 {
        "SIMILAR"
    } else {
        "SLOWER"
    }
}

/// ANSI color code for a verdict.
fn verdict_color(v: &str) -> &'static str {
    match v {
        "FASTER" => "\x1b[32m",
        "SIMILAR" => "\x1b[33m",
        "SLOWER" => "\x1b[31m",
        _ => "\x1b[0m",
    }
}

const RESET: &str = "\x1b[0m";

/// Print a summary of every non-baseline result with its verdict.
pub fn print_summary(data: &[DataPoint]) {
    let compared: Vec<(&DataPoint, f64)> = data
        .iter()
        .filter(|dp| dp.variant != BASELINE)
        .filter_map(|dp| dp.speedup.map(|s| (dp, s)))
        .collect();
    if compared.is_empty() {
        return;
    }

    println!("\n{}", "=".repeat(72));
    println!("  SUMMARY (relative to {})", BASELINE.name());
    println!("{}", "=".repeat(72));
    println!(
        "  {:<28} {:>8} {:>14} {:>9}  {}",
        "Variant", "Size", "ops/s", "Relative", "Verdict"
    );
    println!("  {}", "-".repeat(68));

    let mut counts = [0u32; 3];
    for (dp, speedup) in &compared {
        let v = verdict(*speedup);
        match v {
            "FASTER" => counts[0] += 1,
            "SIMILAR" => counts[1] += 1,
            _ => counts[2] += 1,
        }
        println!(
            "  {:<28} {:>8} {:>14.0} {:>8.2}x  {}{}{}",
            dp.variant.name(),
            format_size(dp.size),
            dp.stats.mean,
            speedup,
            verdict_color(v),
            v,
            RESET,
        );
    }

    println!("{}", "=".repeat(72));
    println!(
        "  FASTER: {}  SIMILAR: {}  SLOWER: {}",
        counts[0], counts[1], counts[2]
    );
    println!();
}
