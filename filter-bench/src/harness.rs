//! Measurement harness: runs filter variants through warm-up and measured
//! iterations, collects throughput statistics, and returns DataPoint results.
//!
//! An iteration repeatedly invokes the variant until the accumulated measured
//! time reaches the configured budget. Each invocation gets a freshly
//! generated fixture, and generation happens outside the timed interval.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Serialize, Serializer};

use filter_core::{generate, Blackhole, FilterError, FilterVariant, InputSize};

use crate::config::BenchConfig;
use crate::host::HostInfo;
use crate::stats::{compute_stats, Stats};
use crate::timing::BenchTimer;

/// Variant every other variant is compared against.
pub const BASELINE: FilterVariant = FilterVariant::OneFilter;

/// Outcome of the pre-measurement count checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Validation {
    Passed,
    /// Counts disagreed; carries the mismatch description.
    Failed(String),
    /// Checks disabled with `--no-validate`.
    Skipped,
}

impl Validation {
    pub fn from_mismatch(mismatch: Option<String>) -> Self {
        match mismatch {
            None => Validation::Passed,
            Some(msg) => Validation::Failed(msg),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Validation::Passed => "passed",
            Validation::Failed(_) => "failed",
            Validation::Skipped => "skipped",
        }
    }
}

fn serialize_variant<S: Serializer>(variant: &FilterVariant, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(variant.name())
}

/// A single benchmark data point for one variant at one size.
#[derive(Debug, Clone, Serialize)]
pub struct DataPoint {
    #[serde(serialize_with = "serialize_variant")]
    pub variant: FilterVariant,
    pub size: usize,
    pub parallel: bool,
    pub predicate: String,
    /// Throughput in operations (variant invocations) per second.
    pub stats: Stats,
    /// Invocations across all measured iterations.
    pub invocations: u64,
    /// Count returned by the last measured invocation.
    pub match_count: u64,
    /// Throughput relative to the baseline variant at the same size.
    pub speedup: Option<f64>,
    pub validation: Validation,
    pub metrics: HashMap<String, f64>,
}

/// Outcome of one time-budgeted iteration.
#[derive(Debug, Clone, Copy)]
pub struct IterationResult {
    pub invocations: u64,
    pub measured: Duration,
}

impl IterationResult {
    pub fn ops_per_sec(&self) -> f64 {
        let secs = self.measured.as_secs_f64();
        if secs > 0.0 {
            self.invocations as f64 / secs
        } else {
            0.0
        }
    }
}

/// Run invocations of `variant` until `budget` of measured time has accumulated.
pub fn run_iteration(
    variant: FilterVariant,
    size: InputSize,
    budget: Duration,
    sink: &mut Blackhole,
) -> Result<IterationResult, FilterError> {
    let mut measured = Duration::ZERO;
    let mut invocations = 0u64;

    loop {
        let fixture = generate(size.elements())?;
        let timer = BenchTimer::start();
        variant.measure(&fixture, sink);
        measured += timer.stop();
        invocations += 1;

        if measured >= budget {
            break;
        }
    }

    Ok(IterationResult {
        invocations,
        measured,
    })
}

/// Describe a disagreement between a variant's count and a reference count.
pub fn count_mismatch(
    variant: FilterVariant,
    count: u64,
    reference: &str,
    expected: u64,
    size: InputSize,
) -> Option<String> {
    (count != expected).then(|| {
        format!(
            "count mismatch: {}={} {}={} (size={})",
            variant, count, reference, expected, size
        )
    })
}

/// Cross-check a variant on one fresh fixture.
///
/// Parallel variants must agree with their sequential counterpart, and
/// every variant must agree with its declarative predicate. Returns a
/// description of the first mismatch, if any.
pub fn validate(variant: FilterVariant, size: InputSize) -> Result<Option<String>, FilterError> {
    let fixture = generate(size.elements())?;
    let count = variant.apply(&fixture);

    let counterpart = variant.sequential_counterpart();
    if counterpart != variant {
        let expected = counterpart.apply(&fixture);
        if let Some(msg) = count_mismatch(variant, count, counterpart.name(), expected, size) {
            return Ok(Some(msg));
        }
    }

    let predicate = variant.predicate();
    let oracle = predicate.count(&fixture);
    let reference = format!("predicate `{}`", predicate);
    Ok(count_mismatch(variant, count, &reference, oracle, size))
}

/// Run the count checks for one configuration, or skip them when disabled.
fn check(
    variant: FilterVariant,
    size: InputSize,
    enabled: bool,
) -> Result<Validation, FilterError> {
    if !enabled {
        return Ok(Validation::Skipped);
    }
    let validation = Validation::from_mismatch(validate(variant, size)?);
    if let Validation::Failed(msg) = &validation {
        tracing::warn!(
            variant = variant.name(),
            size = size.elements(),
            "validation failed: {}",
            msg
        );
    }
    Ok(validation)
}

/// Run a variant across all configured sizes.
///
/// For each size:
/// 1. validate() -- cross-check counts (unless disabled)
/// 2. warm-up iterations (discarded)
/// 3. measured iterations -> ops/s samples
/// 4. compute_stats -> DataPoint
///
/// A fixture generation failure aborts the variant and is returned to the caller.
pub fn run_variant(
    variant: FilterVariant,
    config: &BenchConfig,
    progress_cb: Option<&dyn Fn(&str)>,
) -> Result<Vec<DataPoint>, FilterError> {
    let mut results = Vec::with_capacity(config.sizes.len());
    let mut sink = Blackhole::new();

    for &size in &config.sizes {
        let size_label = format_size(size.elements());
        let report = |stage: &str| {
            if let Some(cb) = progress_cb {
                cb(&format!("{} @ {}: {}", variant, size_label, stage));
            }
        };

        tracing::info!(variant = variant.name(), size = size.elements(), "starting");

        if config.validate {
            report("validate");
        }
        // A failed check does not stop the measurement; the data point carries it
        let validation = check(variant, size, config.validate)?;

        report(&format!("warmup ({} iterations)", config.warmup));
        for _ in 0..config.warmup {
            run_iteration(variant, size, config.iteration_time, &mut sink)?;
        }

        report(&format!("measuring ({} iterations)", config.iterations));
        let mut samples = Vec::with_capacity(config.iterations as usize);
        let mut invocations = 0u64;
        for _ in 0..config.iterations {
            let it = run_iteration(variant, size, config.iteration_time, &mut sink)?;
            invocations += it.invocations;
            samples.push(it.ops_per_sec());
        }

        let stats = compute_stats(&samples);
        let match_count = sink.last().unwrap_or(0);

        let elements = size.elements() as f64;
        let mut metrics = HashMap::new();
        metrics.insert("elements_per_sec".to_string(), stats.mean * elements);
        metrics.insert(
            "selectivity_pct".to_string(),
            match_count as f64 / elements * 100.0,
        );
        if stats.mean > 0.0 {
            metrics.insert("mean_invocation_us".to_string(), 1e6 / stats.mean);
        }

        tracing::info!(
            variant = variant.name(),
            size = size.elements(),
            ops_per_sec = stats.mean,
            cv_pct = stats.cv_percent,
            "measured"
        );
        report(&format!("done ({:.0} ops/s)", stats.mean));

        results.push(DataPoint {
            variant,
            size: size.elements(),
            parallel: variant.is_parallel(),
            predicate: variant.predicate().to_string(),
            stats,
            invocations,
            match_count,
            speedup: None,
            validation,
            metrics,
        });
    }

    Ok(results)
}

/// Fill in cross-variant comparisons once every variant has run.
///
/// - `speedup`: mean throughput over the baseline's at the same size.
/// - `parallel_efficiency_pct` (parallel variants only): speedup over the
///   sequential counterpart, as a share of ideal scaling on `host`.
pub fn attach_comparisons(results: &mut [DataPoint], host: &HostInfo) {
    let mean_of = |results: &[DataPoint], variant: FilterVariant, size: usize| {
        results
            .iter()
            .find(|dp| dp.variant == variant && dp.size == size)
            .map(|dp| dp.stats.mean)
            .filter(|&m| m > 0.0)
    };

    let lookups: Vec<(Option<f64>, Option<f64>)> = results
        .iter()
        .map(|dp| {
            let baseline = mean_of(results, BASELINE, dp.size);
            let sequential = if dp.variant.is_parallel() {
                mean_of(results, dp.variant.sequential_counterpart(), dp.size)
            } else {
                None
            };
            (baseline, sequential)
        })
        .collect();

    for (dp, (baseline, sequential)) in results.iter_mut().zip(lookups) {
        dp.speedup = baseline.map(|b| dp.stats.mean / b);
        if let Some(seq) = sequential {
            let par_speedup = dp.stats.mean / seq;
            dp.metrics
                .insert("parallel_speedup".to_string(), par_speedup);
            dp.metrics.insert(
                "parallel_efficiency_pct".to_string(),
                host.parallel_efficiency(par_speedup),
            );
        }
    }
}

/// Format a size number for display (e.g., 1000000 -> "1M").
pub fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        format!("{}", size)
    }
}
