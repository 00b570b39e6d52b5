//! Table output using comfy-table.
//!
//! One table per variant with columns:
//! Size | ops/s | ± stddev | Melem/s | Matches | CV% | vs one_filter | Par.eff%

use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use filter_core::FilterVariant;

use super::summary::verdict;
use crate::harness::{format_size, DataPoint, Validation, BASELINE};

fn right(text: impl Into<String>) -> Cell {
    Cell::new(text.into()).set_alignment(CellAlignment::Right)
}

/// Colour matching the summary verdict for a relative throughput.
fn speedup_color(speedup: f64) -> Color {
    match verdict(speedup) {
        "FASTER" => Color::Green,
        "SIMILAR" => Color::Yellow,
        _ => Color::Red,
    }
}

fn speedup_cell(speedup: Option<f64>) -> Cell {
    match speedup {
        None => right("-"),
        Some(s) => right(format!("{:.2}x", s)).fg(speedup_color(s)),
    }
}

fn matches_cell(dp: &DataPoint) -> Cell {
    match dp.validation {
        Validation::Passed => right(dp.match_count.to_string()),
        Validation::Failed(_) => right(format!("{} MISMATCH", dp.match_count))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Validation::Skipped => right(format!("{} (unchecked)", dp.match_count)),
    }
}

/// Build the table for one variant's data points.
pub fn build_table(data: &[&DataPoint]) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            [
                "Size".to_string(),
                "ops/s".to_string(),
                "± stddev".to_string(),
                "Melem/s".to_string(),
                "Matches".to_string(),
                "CV%".to_string(),
                format!("vs {}", BASELINE.name()),
                "Par.eff%".to_string(),
            ]
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );

    for dp in data {
        let melems = dp
            .metrics
            .get("elements_per_sec")
            .map(|v| format!("{:.1}", v / 1e6))
            .unwrap_or_else(|| "-".to_string());
        let par_eff = dp
            .metrics
            .get("parallel_efficiency_pct")
            .map(|v| format!("{:.0}", v))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            right(format_size(dp.size)),
            right(format!("{:.0}", dp.stats.mean)),
            right(format!("{:.0}", dp.stats.stddev)),
            right(melems),
            matches_cell(dp),
            right(format!("{:.1}", dp.stats.cv_percent)),
            speedup_cell(dp.speedup),
            right(par_eff),
        ]);
    }

    table
}

/// Render results grouped by variant, in first-seen order.
pub fn render_all_tables(data: &[DataPoint]) {
    if data.is_empty() {
        println!("No results to display.");
        return;
    }

    let mut groups: Vec<(FilterVariant, Vec<&DataPoint>)> = Vec::new();
    for dp in data {
        if let Some(group) = groups.iter_mut().find(|(v, _)| *v == dp.variant) {
            group.1.push(dp);
        } else {
            groups.push((dp.variant, vec![dp]));
        }
    }

    for (name, points) in &groups {
        println!("\n=== {} [{}] ===", name, points[0].predicate);
        println!("{}", build_table(points));
    }
}
