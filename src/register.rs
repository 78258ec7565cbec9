//! Register row arithmetic and update semantics.
//!
//! The two derived fields follow the user around: total quantity is opening
//! stock plus purchases, closing stock is total quantity minus sales. Both
//! recompute automatically on every edit until the user writes the derived
//! field directly, at which point it is frozen as a manual override.

use crate::dates::{compare_date_strings, matches_year_month, matches_year_month_day};
use crate::models::RegisterRow;

pub fn total_quantity(opening_stock: f64, purchase: f64) -> f64 {
    opening_stock + purchase
}

pub fn closing_stock(total_quantity: f64, sales: f64) -> f64 {
    total_quantity - sales
}

/// A single-field edit to a register row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Date(String),
    ItemName(String),
    OpeningStock(f64),
    Purchase(f64),
    TotalQuantity(f64),
    Sales(f64),
    Price(f64),
    ClosingStock(f64),
}

impl FieldEdit {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldEdit::Date(_) => "date",
            FieldEdit::ItemName(_) => "item",
            FieldEdit::OpeningStock(_) => "opening stock",
            FieldEdit::Purchase(_) => "purchase",
            FieldEdit::TotalQuantity(_) => "total quantity",
            FieldEdit::Sales(_) => "sales",
            FieldEdit::Price(_) => "price",
            FieldEdit::ClosingStock(_) => "closing stock",
        }
    }
}

/// Apply a field edit, cascading into the derived fields.
///
/// Recomputation is driven by the post-update row: an opening-stock or
/// purchase edit refreshes total quantity (unless overridden), and any
/// change to total quantity, direct or cascaded, refreshes closing stock
/// (unless overridden). Only a direct write to a derived field sets its
/// manual flag; a cascaded recomputation never does.
pub fn apply_edit(row: &mut RegisterRow, edit: &FieldEdit) {
    match edit {
        FieldEdit::Date(v) => row.date = v.clone(),
        FieldEdit::ItemName(v) => row.item_name = v.clone(),
        FieldEdit::OpeningStock(v) => row.opening_stock = *v,
        FieldEdit::Purchase(v) => row.purchase = *v,
        FieldEdit::TotalQuantity(v) => row.total_quantity = *v,
        FieldEdit::Sales(v) => row.sales = *v,
        FieldEdit::Price(v) => row.price = *v,
        FieldEdit::ClosingStock(v) => row.closing_stock = *v,
    }

    let recomputed_total = matches!(edit, FieldEdit::OpeningStock(_) | FieldEdit::Purchase(_))
        && !row.manual_total_quantity;
    if recomputed_total {
        row.total_quantity = total_quantity(row.opening_stock, row.purchase);
    }

    let total_changed = recomputed_total || matches!(edit, FieldEdit::TotalQuantity(_));
    if (total_changed || matches!(edit, FieldEdit::Sales(_))) && !row.manual_closing_stock {
        row.closing_stock = closing_stock(row.total_quantity, row.sales);
    }

    if matches!(edit, FieldEdit::TotalQuantity(_)) {
        row.manual_total_quantity = true;
    }
    if matches!(edit, FieldEdit::ClosingStock(_)) {
        row.manual_closing_stock = true;
    }
}

/// Rows matching the year/month (and focused day, when given), sorted
/// ascending by date string.
pub fn filter_rows(
    rows: &[RegisterRow],
    year: i32,
    month: u32,
    day: Option<u32>,
) -> Vec<RegisterRow> {
    let mut matched: Vec<RegisterRow> = rows
        .iter()
        .filter(|row| match day {
            Some(d) => matches_year_month_day(&row.date, year, month, d),
            None => matches_year_month(&row.date, year, month),
        })
        .cloned()
        .collect();
    matched.sort_by(|a, b| compare_date_strings(&a.date, &b.date));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> RegisterRow {
        let mut row = RegisterRow::blank("2024-03-01".to_string());
        row.id = 1;
        row.item_name = "Product A".to_string();
        row
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(total_quantity(100.0, 50.0), 150.0);
        assert_eq!(closing_stock(150.0, 30.0), 120.0);
        // No clamping: negative and fractional results pass through.
        assert_eq!(closing_stock(10.0, 25.5), -15.5);
    }

    #[test]
    fn test_opening_edit_recomputes_both_derived_fields() {
        let mut row = sample_row();
        apply_edit(&mut row, &FieldEdit::Purchase(50.0));
        apply_edit(&mut row, &FieldEdit::OpeningStock(100.0));
        assert_eq!(row.total_quantity, 150.0);
        assert_eq!(row.closing_stock, 150.0);
        assert!(!row.manual_total_quantity);
        assert!(!row.manual_closing_stock);
    }

    #[test]
    fn test_sales_edit_recomputes_closing() {
        let mut row = sample_row();
        apply_edit(&mut row, &FieldEdit::OpeningStock(100.0));
        apply_edit(&mut row, &FieldEdit::Sales(30.0));
        assert_eq!(row.closing_stock, 70.0);
    }

    #[test]
    fn test_direct_total_write_freezes_it() {
        let mut row = sample_row();
        apply_edit(&mut row, &FieldEdit::TotalQuantity(500.0));
        assert!(row.manual_total_quantity);
        // Closing stock still follows the manually set total.
        assert_eq!(row.closing_stock, 500.0);

        // Later stock edits must not overwrite the manual total.
        apply_edit(&mut row, &FieldEdit::OpeningStock(10.0));
        apply_edit(&mut row, &FieldEdit::Purchase(10.0));
        assert_eq!(row.total_quantity, 500.0);
    }

    #[test]
    fn test_direct_closing_write_freezes_it() {
        let mut row = sample_row();
        apply_edit(&mut row, &FieldEdit::ClosingStock(99.0));
        assert!(row.manual_closing_stock);

        apply_edit(&mut row, &FieldEdit::Sales(30.0));
        apply_edit(&mut row, &FieldEdit::TotalQuantity(200.0));
        assert_eq!(row.closing_stock, 99.0);
        // The total write still froze the total itself.
        assert!(row.manual_total_quantity);
    }

    #[test]
    fn test_cascade_does_not_set_manual_flag() {
        let mut row = sample_row();
        // Cascades into total_quantity, but is not a direct write to it.
        apply_edit(&mut row, &FieldEdit::OpeningStock(100.0));
        assert!(!row.manual_total_quantity);
        assert!(!row.manual_closing_stock);
    }

    #[test]
    fn test_price_and_item_edits_leave_derived_fields_alone() {
        let mut row = sample_row();
        apply_edit(&mut row, &FieldEdit::OpeningStock(100.0));
        let total = row.total_quantity;
        let closing = row.closing_stock;
        apply_edit(&mut row, &FieldEdit::Price(25.5));
        apply_edit(&mut row, &FieldEdit::ItemName("Product B".to_string()));
        assert_eq!(row.total_quantity, total);
        assert_eq!(row.closing_stock, closing);
    }

    #[test]
    fn test_filter_rows_by_month_sorted() {
        let mut a = sample_row();
        a.date = "2024-03-15".to_string();
        let mut b = sample_row();
        b.date = "2024-03-02".to_string();
        let mut other = sample_row();
        other.date = "2024-04-02".to_string();
        let mut bad = sample_row();
        bad.date = "garbage".to_string();

        let rows = vec![a, b, other, bad];
        let filtered = filter_rows(&rows, 2024, 3, None);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date, "2024-03-02");
        assert_eq!(filtered[1].date, "2024-03-15");
    }

    #[test]
    fn test_filter_rows_focused_day() {
        let mut a = sample_row();
        a.date = "2024-03-15".to_string();
        let mut b = sample_row();
        b.date = "2024-03-02".to_string();
        let filtered = filter_rows(&[a, b], 2024, 3, Some(15));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, "2024-03-15");
    }
}
