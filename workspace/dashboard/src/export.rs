//! CSV export of the loaded trend series.

use common::TrendSeries;
use tracing::debug;

use crate::state::SectorData;

pub const CSV_HEADER: [&str; 4] = ["Year", "Estimated Jobs", "Actual Jobs", "Installed Capacity (MW)"];

/// A CSV document ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: String,
}

pub fn file_name(sector: &str) -> String {
    format!("{}_employment_data.csv", sector)
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Header plus one comma-joined row per index, newline separated, no trailing newline.
pub fn csv_content(trends: &TrendSeries) -> String {
    let rows = trends.rows().map(|row| {
        [
            cell(row.year),
            cell(row.estimated_jobs),
            cell(row.actual_jobs),
            cell(row.installed_capacity),
        ]
        .join(",")
    });

    std::iter::once(CSV_HEADER.join(","))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn csv_export(data: &SectorData) -> CsvExport {
    let export = CsvExport {
        file_name: file_name(&data.sector),
        content: csv_content(&data.trends),
    };
    debug!(file = %export.file_name, rows = data.trends.len(), "Prepared CSV export");
    export
}
