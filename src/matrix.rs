//! Per-item monthly pivot of the register.
//!
//! Recomputed from the current row set on every render; a pure function of
//! (rows, year, month) with no caching.

use std::collections::BTreeMap;

use crate::dates::{days_in_month, parse_ymd};
use crate::fmt::number;
use crate::models::RegisterRow;

pub const MATRIX_SUBCOLUMNS: [&str; 6] = [
    "Opening Stock",
    "Purchase",
    "Total Quantity",
    "Sales",
    "Price",
    "Closing Stock",
];

/// One item's snapshot values for one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSnapshot {
    pub opening_stock: f64,
    pub purchase: f64,
    pub total_quantity: f64,
    pub sales: f64,
    pub price: f64,
    pub closing_stock: f64,
}

impl ItemSnapshot {
    fn from_row(row: &RegisterRow) -> Self {
        Self {
            opening_stock: row.opening_stock,
            purchase: row.purchase,
            total_quantity: row.total_quantity,
            sales: row.sales,
            price: row.price,
            closing_stock: row.closing_stock,
        }
    }

    fn values(&self) -> [f64; 6] {
        [
            self.opening_stock,
            self.purchase,
            self.total_quantity,
            self.sales,
            self.price,
            self.closing_stock,
        ]
    }
}

/// One calendar day's slice of the pivot: item name -> snapshot.
#[derive(Debug, Clone)]
pub struct MatrixDay {
    pub day: u32,
    pub items: BTreeMap<String, ItemSnapshot>,
}

/// Sorted distinct item names; blank and whitespace-only names excluded.
pub fn unique_item_names(rows: &[RegisterRow]) -> Vec<String> {
    let mut names: Vec<String> = rows
        .iter()
        .filter(|row| !row.item_name.trim().is_empty())
        .map(|row| row.item_name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Pivot a month's rows into one entry per calendar day. Every day of the
/// month is present even when empty. Duplicate day+item pairs are
/// last-write-wins; no aggregation.
pub fn build_monthly_matrix(rows: &[RegisterRow], year: i32, month: u32) -> Vec<MatrixDay> {
    let days = days_in_month(year, month);
    let mut matrix: Vec<MatrixDay> = (1..=days)
        .map(|day| MatrixDay {
            day,
            items: BTreeMap::new(),
        })
        .collect();

    for row in rows {
        let Some(parsed) = parse_ymd(&row.date) else {
            continue;
        };
        if parsed.day >= 1 && parsed.day <= days && !row.item_name.trim().is_empty() {
            matrix[(parsed.day - 1) as usize]
                .items
                .insert(row.item_name.clone(), ItemSnapshot::from_row(row));
        }
    }

    matrix
}

/// Render the pivot as a grid of strings for CSV export: a two-row header
/// (each item name spanning six padded columns, sub-labels repeated below),
/// then one row per day with six 2-decimal values or six blanks per item.
pub fn matrix_csv_rows(matrix: &[MatrixDay], item_names: &[String]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(matrix.len() + 2);

    let mut header1 = vec!["Day".to_string()];
    let mut header2 = vec![String::new()];
    for name in item_names {
        header1.push(name.clone());
        header1.extend(std::iter::repeat(String::new()).take(5));
        header2.extend(MATRIX_SUBCOLUMNS.iter().map(|s| s.to_string()));
    }
    rows.push(header1);
    rows.push(header2);

    for day_data in matrix {
        let mut row = vec![day_data.day.to_string()];
        for name in item_names {
            match day_data.items.get(name) {
                Some(snapshot) => row.extend(snapshot.values().iter().map(|v| number(*v, 2))),
                None => row.extend(std::iter::repeat(String::new()).take(6)),
            }
        }
        rows.push(row);
    }

    rows
}
