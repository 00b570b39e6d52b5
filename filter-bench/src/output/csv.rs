//! CSV output for benchmark results.
//!
//! Columns:
//! variant,size,parallel,ops_per_sec,stddev,cv_pct,elements_per_sec,match_count,speedup,validation

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::harness::DataPoint;

const HEADER: &str =
    "variant,size,parallel,ops_per_sec,stddev,cv_pct,elements_per_sec,match_count,speedup,validation";

/// Write benchmark results to a CSV file.
pub fn write_csv(path: &Path, data: &[DataPoint]) -> Result<(), String> {
    super::ensure_parent_dir(path)?;

    let file = fs::File::create(path)
        .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    let mut out = BufWriter::new(file);
    write_rows(&mut out, data).map_err(|e| format!("Write error: {}", e))?;

    tracing::info!(path = %path.display(), "CSV results written");
    Ok(())
}

fn write_rows<W: Write>(out: &mut W, data: &[DataPoint]) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for dp in data {
        let elements_per_sec = dp.metrics.get("elements_per_sec").copied().unwrap_or(0.0);
        let speedup = dp
            .speedup
            .map(|s| format!("{:.4}", s))
            .unwrap_or_default();

        writeln!(
            out,
            "{},{},{},{:.2},{:.2},{:.2},{:.0},{},{},{}",
            dp.variant.name(),
            dp.size,
            dp.parallel,
            dp.stats.mean,
            dp.stats.stddev,
            dp.stats.cv_percent,
            elements_per_sec,
            dp.match_count,
            speedup,
            dp.validation.label(),
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use filter_core::FilterVariant;

    use super::*;
    use crate::harness::Validation;
    use crate::stats::Stats;

    fn point(variant: FilterVariant, speedup: Option<f64>) -> DataPoint {
        DataPoint {
            variant,
            size: 1_000,
            parallel: variant.is_parallel(),
            predicate: String::new(),
            stats: Stats {
                mean: 5000.0,
                stddev: 50.0,
                cv_percent: 1.0,
                ..Stats::default()
            },
            invocations: 100,
            match_count: 140,
            speedup,
            validation: Validation::Passed,
            metrics: HashMap::from([("elements_per_sec".to_string(), 5e6)]),
        }
    }

    #[test]
    fn test_rows_match_header() {
        let mut buf = Vec::new();
        let data = vec![
            point(FilterVariant::OneFilter, Some(1.0)),
            point(FilterVariant::OneFilterParallel, None),
        ];
        write_rows(&mut buf, &data).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);

        let columns = HEADER.split(',').count();
        for line in &lines[1..] {
            assert_eq!(line.split(',').count(), columns, "{}", line);
        }
        assert_eq!(
            lines[1],
            "one_filter,1000,false,5000.00,50.00,1.00,5000000,140,1.0000,passed"
        );
        assert!(lines[2].starts_with("one_filter_parallel,1000,true,"));
    }

    #[test]
    fn test_write_csv_creates_file() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("out").join("results.csv");
        let mut failed = point(FilterVariant::IndexedLoop, Some(0.8));
        failed.validation = Validation::Failed("count mismatch".to_string());
        write_csv(&path, &[failed]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("variant,"));
        assert!(text.contains("indexed_loop"));
        assert!(text.lines().nth(1).unwrap().ends_with(",failed"));
    }
}
