use std::path::PathBuf;

use crate::cli::{open_register, resolve_filters};
use crate::db::fetch_all_rows;
use crate::error::Result;
use crate::export::{csv_rows_for, export_file_name, write_csv_file};
use crate::models::ReportLayout;
use crate::register::filter_rows;

pub fn run(month: Option<String>, layout: ReportLayout, output: Option<String>) -> Result<()> {
    let conn = open_register()?;
    let filters = resolve_filters(&month, None);

    // Exports always cover the whole month, never a focused day.
    let all_rows = fetch_all_rows(&conn)?;
    let rows = filter_rows(&all_rows, filters.year, filters.month, None);

    let grid = csv_rows_for(&rows, filters.year, filters.month, layout);
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(export_file_name(filters.year, filters.month, layout)));

    write_csv_file(&path, &grid)?;
    println!("Exported {} rows to {}", rows.len(), path.display());
    Ok(())
}
