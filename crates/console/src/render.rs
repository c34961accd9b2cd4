use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;
use core_types::RecordSet;

pub const NO_RECORDS: &str = "No records found matching the search criteria.";

/// Formats a read result. The header is whatever columns the query reported.
pub fn render_records(records: &RecordSet) -> String {
    if records.is_empty() {
        return NO_RECORDS.to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_header(records.columns.iter());
    for row in &records.rows {
        table.add_row(row.iter());
    }
    table.to_string()
}
