//! Report rendering for the command line

use crate::config::OutputFormat;
use crate::error::Result;
use crate::types::RankingReport;
use std::fmt::Write;

/// Render a report in the requested format
pub fn render(report: &RankingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Pretty-printed JSON of the whole report
pub fn render_json(report: &RankingReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Plain text tables: every list in order, then the aggregate
pub fn render_text(report: &RankingReport) -> String {
    let mut out = String::new();

    for list in &report.lists {
        let width = column_width(list.standings.iter().map(|s| s.item.as_str()));
        write_header(&mut out, &list.name, 1);
        for standing in &list.standings {
            write_row(&mut out, &standing.item, standing.rating, width);
        }
    }

    let header = format!(
        "Item to avg rating (above {:.1})",
        report.min_aggregate_rating
    );
    let width = column_width(report.aggregate.iter().map(|e| e.item.as_str()));
    write_header(&mut out, &header, 2);
    for entry in &report.aggregate {
        write_row(&mut out, &entry.item, entry.rating, width);
    }

    if !report.skipped.is_empty() {
        write_header(&mut out, "Skipped lists", 2);
        for skipped in &report.skipped {
            let _ = writeln!(out, "{}: {}", skipped.name, skipped.reason);
        }
    }

    out
}

/// Longest item name plus four spaces of gutter
fn column_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(|s| s.chars().count()).max().unwrap_or(0) + 4
}

fn write_header(out: &mut String, title: &str, blank_lines: usize) {
    for _ in 0..blank_lines {
        out.push('\n');
    }
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

fn write_row(out: &mut String, item: &str, rating: i64, width: usize) {
    let _ = writeln!(out, "{:<width$}{}", item, rating, width = width);
}
