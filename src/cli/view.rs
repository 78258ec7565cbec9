use comfy_table::{Cell, Table};

use crate::cli::{open_register, resolve_filters};
use crate::db::{fetch_all_rows, get_metadata};
use crate::error::Result;
use crate::export::month_name;
use crate::fmt::number;
use crate::matrix::{build_monthly_matrix, unique_item_names, MatrixDay, MATRIX_SUBCOLUMNS};
use crate::models::{RegisterRow, ReportLayout};
use crate::register::filter_rows;

/// Prepend the shop name as a header line if set.
fn with_header(shop_name: &str, body: String) -> String {
    if shop_name.is_empty() {
        body
    } else {
        format!("{shop_name}\n{body}")
    }
}

// ---------------------------------------------------------------------------
// Data-fetching wrappers (used by dispatch)
// ---------------------------------------------------------------------------

pub fn show(month: Option<String>, day: Option<u32>, layout: ReportLayout) -> Result<()> {
    render(month, day, layout, true)
}

/// Read-only render without the ID column, for physical/PDF output.
pub fn print_view(month: Option<String>, layout: ReportLayout) -> Result<()> {
    render(month, None, layout, false)
}

fn render(
    month: Option<String>,
    day: Option<u32>,
    layout: ReportLayout,
    show_ids: bool,
) -> Result<()> {
    let conn = open_register()?;
    let shop = get_metadata(&conn, "shop_name").unwrap_or_default();
    let filters = resolve_filters(&month, day);
    let all_rows = fetch_all_rows(&conn)?;

    let title = format!(
        "Stock Register — {} {}",
        month_name(filters.month),
        filters.year
    );

    let body = match layout {
        ReportLayout::Row => {
            // The focused day narrows the row view only.
            let rows = filter_rows(&all_rows, filters.year, filters.month, filters.focused_day);
            format!("{title}\n{}", format_register(&rows, show_ids))
        }
        ReportLayout::Matrix => {
            // The matrix always covers the full month.
            let rows = filter_rows(&all_rows, filters.year, filters.month, None);
            let matrix = build_monthly_matrix(&rows, filters.year, filters.month);
            let item_names = unique_item_names(&rows);
            format!("{title}\n{}", format_matrix(&matrix, &item_names))
        }
    };

    println!("{}", with_header(&shop, body));
    Ok(())
}

// ---------------------------------------------------------------------------
// Pure formatting functions (register data -> String)
// ---------------------------------------------------------------------------

pub fn format_register(rows: &[RegisterRow], show_ids: bool) -> String {
    let mut table = Table::new();
    let mut header = Vec::new();
    if show_ids {
        header.push("ID");
    }
    header.extend([
        "Date",
        "Item",
        "Opening Stock",
        "Purchase",
        "Total Quantity",
        "Sales",
        "Price",
        "Closing Stock",
    ]);
    table.set_header(header);

    let mut any_manual = false;
    for row in rows {
        let total_mark = if row.manual_total_quantity { "*" } else { "" };
        let closing_mark = if row.manual_closing_stock { "*" } else { "" };
        any_manual |= row.manual_total_quantity || row.manual_closing_stock;

        let mut cells = Vec::new();
        if show_ids {
            cells.push(Cell::new(row.id));
        }
        cells.extend([
            Cell::new(&row.date),
            Cell::new(&row.item_name),
            Cell::new(number(row.opening_stock, 2)),
            Cell::new(number(row.purchase, 2)),
            Cell::new(format!("{}{total_mark}", number(row.total_quantity, 2))),
            Cell::new(number(row.sales, 2)),
            Cell::new(number(row.price, 2)),
            Cell::new(format!("{}{closing_mark}", number(row.closing_stock, 2))),
        ]);
        table.add_row(cells);
    }

    let mut out = table.to_string();
    if rows.is_empty() {
        out.push_str("\n(no rows for this period)");
    }
    if any_manual {
        out.push_str("\n* manually overridden");
    }
    out
}

pub fn format_matrix(matrix: &[MatrixDay], item_names: &[String]) -> String {
    let mut table = Table::new();

    // Two-row header, matching the CSV layout: item names spanning six
    // padded columns, then the sub-column labels.
    let mut header = vec![Cell::new("Day")];
    let mut sub_header = vec![Cell::new("")];
    for name in item_names {
        header.push(Cell::new(name));
        header.extend((0..5).map(|_| Cell::new("")));
        sub_header.extend(MATRIX_SUBCOLUMNS.iter().map(Cell::new));
    }
    table.set_header(header);
    table.add_row(sub_header);

    for day_data in matrix {
        let mut cells = vec![Cell::new(day_data.day)];
        for name in item_names {
            match day_data.items.get(name) {
                Some(s) => cells.extend([
                    Cell::new(number(s.opening_stock, 2)),
                    Cell::new(number(s.purchase, 2)),
                    Cell::new(number(s.total_quantity, 2)),
                    Cell::new(number(s.sales, 2)),
                    Cell::new(number(s.price, 2)),
                    Cell::new(number(s.closing_stock, 2)),
                ]),
                None => cells.extend((0..6).map(|_| Cell::new(""))),
            }
        }
        table.add_row(cells);
    }

    let mut out = table.to_string();
    if item_names.is_empty() {
        out.push_str("\n(no items this month)");
    }
    out
}
