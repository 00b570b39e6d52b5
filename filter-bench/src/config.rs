use std::time::Duration;

use filter_core::{FilterVariant, InputSize};

use crate::cli::BenchArgs;

pub const DEFAULT_WARMUP: u32 = 10;
pub const DEFAULT_ITERATIONS: u32 = 10;
pub const DEFAULT_ITERATION_MS: u64 = 200;

/// A benchmark profile with preset sizes and measurement schedule.
#[derive(Debug, Clone)]
pub struct BenchProfile {
    pub name: String,
    pub sizes: Vec<usize>,
    pub warmup: u32,
    pub iterations: u32,
    pub iteration_ms: u64,
}

fn all_sizes() -> Vec<usize> {
    InputSize::ALL.iter().map(|s| s.elements()).collect()
}

/// Returns the "quick" profile: 1K+100K / 2 warmup / 3 x 50ms.
pub fn quick_profile() -> BenchProfile {
    BenchProfile {
        name: "quick".to_string(),
        sizes: vec![1_000, 100_000],
        warmup: 2,
        iterations: 3,
        iteration_ms: 50,
    }
}

/// Returns the "standard" profile: all sizes / 5 warmup / 10 x 200ms.
pub fn standard_profile() -> BenchProfile {
    BenchProfile {
        name: "standard".to_string(),
        sizes: all_sizes(),
        warmup: 5,
        iterations: 10,
        iteration_ms: 200,
    }
}

/// Returns the "thorough" profile: all sizes / 10 warmup / 20 x 500ms.
pub fn thorough_profile() -> BenchProfile {
    BenchProfile {
        name: "thorough".to_string(),
        sizes: all_sizes(),
        warmup: 10,
        iterations: 20,
        iteration_ms: 500,
    }
}

/// Lookup a profile by name.
pub fn get_profile(name: &str) -> Option<BenchProfile> {
    match name {
        "quick" => Some(quick_profile()),
        "standard" => Some(standard_profile()),
        "thorough" => Some(thorough_profile()),
        _ => None,
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub variants: Vec<FilterVariant>,
    pub sizes: Vec<InputSize>,
    pub warmup: u32,
    pub iterations: u32,
    pub iteration_time: Duration,
    pub validate: bool,
}

/// Parse a human-readable size string to a usize.
///
/// Accepts "1M"/"1m", "100K"/"100k", "0.5K", "1_000_000" and "1000000".
pub fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim();

    let (digits, scale) = if let Some(p) = s.strip_suffix('M').or_else(|| s.strip_suffix('m')) {
        (p, 1_000_000.0)
    } else if let Some(p) = s.strip_suffix('K').or_else(|| s.strip_suffix('k')) {
        (p, 1_000.0)
    } else {
        return s
            .replace('_', "")
            .parse::<usize>()
            .map_err(|e| format!("Invalid size '{}': {}", s, e));
    };

    let num: f64 = digits
        .replace('_', "")
        .parse()
        .map_err(|e| format!("Invalid size '{}': {}", s, e))?;
    if !num.is_finite() || num < 0.0 {
        return Err(format!("Invalid size '{}': must be a non-negative number", s));
    }
    Ok((num * scale).round() as usize)
}

/// Parse size strings and check each against the benchmarked set.
pub fn parse_sizes(raw: &[String]) -> Result<Vec<InputSize>, String> {
    raw.iter()
        .map(|s| {
            let n = parse_size(s)?;
            InputSize::try_from(n).map_err(|e| e.to_string())
        })
        .collect()
}

/// Resolve variant names; empty or "all" selects every variant.
pub fn select_variants(names: &[String]) -> Result<Vec<FilterVariant>, String> {
    if names.is_empty() || names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
        return Ok(FilterVariant::ALL.to_vec());
    }
    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let v: FilterVariant = name.parse()?;
        if !selected.contains(&v) {
            selected.push(v);
        }
    }
    Ok(selected)
}

/// Merge CLI arguments with an optional profile. Explicit flags win.
pub fn resolve(args: &BenchArgs) -> Result<BenchConfig, String> {
    let profile = match args.profile.as_deref() {
        Some(name) => Some(get_profile(name).ok_or_else(|| {
            format!("Unknown profile '{}'. Valid: quick, standard, thorough", name)
        })?),
        None => None,
    };
    if let Some(p) = &profile {
        tracing::debug!(profile = %p.name, "applying profile");
    }

    let sizes = match (&args.sizes, &profile) {
        (Some(raw), _) => parse_sizes(raw)?,
        (None, Some(p)) => p
            .sizes
            .iter()
            .map(|&n| InputSize::try_from(n).map_err(|e| e.to_string()))
            .collect::<Result<Vec<_>, _>>()?,
        (None, None) => InputSize::ALL.to_vec(),
    };
    if sizes.is_empty() {
        return Err("No sizes selected".to_string());
    }

    let warmup = args
        .warmup
        .or(profile.as_ref().map(|p| p.warmup))
        .unwrap_or(DEFAULT_WARMUP);
    let iterations = args
        .iterations
        .or(profile.as_ref().map(|p| p.iterations))
        .unwrap_or(DEFAULT_ITERATIONS);
    let iteration_ms = args
        .iteration_ms
        .or(profile.as_ref().map(|p| p.iteration_ms))
        .unwrap_or(DEFAULT_ITERATION_MS);

    if iterations == 0 {
        return Err("--iterations must be at least 1".to_string());
    }
    if iteration_ms == 0 {
        return Err("--iteration-ms must be at least 1".to_string());
    }
    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    Ok(BenchConfig {
        variants: select_variants(&args.variants)?,
        sizes,
        warmup,
        iterations,
        iteration_time: Duration::from_millis(iteration_ms),
        validate: !args.no_validate,
    })
}
