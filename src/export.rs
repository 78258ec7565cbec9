//! CSV export of the register, in either layout.
//!
//! Output is UTF-8 with a leading BOM so spreadsheet applications pick the
//! encoding up correctly. Field quoting (commas, quotes, newlines) is left
//! to the csv writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::dates::format_date_for_display;
use crate::error::Result;
use crate::fmt::number;
use crate::matrix::{build_monthly_matrix, matrix_csv_rows, unique_item_names};
use crate::models::{RegisterRow, ReportLayout};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const ROW_HEADERS: [&str; 8] = [
    "Date",
    "Item",
    "Opening Stock",
    "Purchase",
    "Total Quantity",
    "Sales",
    "Price",
    "Closing Stock",
];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Generated file name: Stock_Register_<MonthName>_<Year>[_Matrix].csv
pub fn export_file_name(year: i32, month: u32, layout: ReportLayout) -> String {
    match layout {
        ReportLayout::Row => format!("Stock_Register_{}_{year}.csv", month_name(month)),
        ReportLayout::Matrix => format!("Stock_Register_{}_{year}_Matrix.csv", month_name(month)),
    }
}

/// Flat row layout: one header row plus one data row per ledger row,
/// dates in display format and numbers fixed to 2 decimals.
pub fn row_csv_rows(rows: &[RegisterRow]) -> Vec<Vec<String>> {
    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(ROW_HEADERS.iter().map(|s| s.to_string()).collect());
    for row in rows {
        out.push(vec![
            format_date_for_display(&row.date),
            row.item_name.clone(),
            number(row.opening_stock, 2),
            number(row.purchase, 2),
            number(row.total_quantity, 2),
            number(row.sales, 2),
            number(row.price, 2),
            number(row.closing_stock, 2),
        ]);
    }
    out
}

/// The export grid for the chosen layout. The caller passes the full
/// month's rows; a focused day never narrows an export.
pub fn csv_rows_for(
    rows: &[RegisterRow],
    year: i32,
    month: u32,
    layout: ReportLayout,
) -> Vec<Vec<String>> {
    match layout {
        ReportLayout::Row => row_csv_rows(rows),
        ReportLayout::Matrix => {
            let matrix = build_monthly_matrix(rows, year, month);
            let item_names = unique_item_names(rows);
            matrix_csv_rows(&matrix, &item_names)
        }
    }
}

/// Serialize a grid of strings to CSV bytes with a UTF-8 BOM prefix.
pub fn csv_bytes(grid: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.extend_from_slice("\u{FEFF}".as_bytes());
    let mut writer = csv::Writer::from_writer(buf);
    for row in grid {
        writer.write_record(row)?;
    }
    Ok(writer
        .into_inner()
        .map_err(|e| crate::error::StockregError::Other(e.to_string()))?)
}

pub fn write_csv_file(path: &Path, grid: &[Vec<String>]) -> Result<()> {
    let bytes = csv_bytes(grid)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}
