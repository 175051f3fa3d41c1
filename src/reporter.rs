use crate::metric::ResultTable;
use serde::Serialize;

#[derive(Serialize)]
struct ReportRow<'a> {
    group: &'a str,
    unit: &'a str,
    count: u64,
    average: f64,
}

/// One line per group in key order, e.g. ` 6 boys  averaging 54.00kg`.
pub fn render(table: &ResultTable) -> Vec<String> {
    table
        .iter()
        .map(|(key, result)| {
            format!(
                "{:>2} {:<5} averaging {:.2}{}",
                result.count(),
                key.group(),
                result.average(),
                key.unit()
            )
        })
        .collect()
}

/// Same rows as [`render`] as a JSON array, with unrounded averages.
pub fn render_json(table: &ResultTable) -> serde_json::Result<String> {
    let rows: Vec<ReportRow> = table
        .iter()
        .map(|(key, result)| ReportRow {
            group: key.group(),
            unit: key.unit(),
            count: result.count(),
            average: result.average(),
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}
