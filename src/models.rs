use chrono::{Datelike, Local};
use clap::ValueEnum;

use crate::dates::format_ymd;

/// One dated stock-movement entry for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterRow {
    pub id: i64,
    /// Stored as YYYY-MM-DD; sortable as a plain string.
    pub date: String,
    pub item_name: String,
    pub opening_stock: f64,
    pub purchase: f64,
    pub total_quantity: f64,
    pub sales: f64,
    pub price: f64,
    pub closing_stock: f64,
    /// Once true, total_quantity is frozen against auto-recomputation.
    pub manual_total_quantity: bool,
    /// Once true, closing_stock is frozen against auto-recomputation.
    pub manual_closing_stock: bool,
}

impl RegisterRow {
    /// A fresh zero-valued row for the given date, both overrides off.
    pub fn blank(date: String) -> Self {
        Self {
            id: 0,
            date,
            item_name: String::new(),
            opening_stock: 0.0,
            purchase: 0.0,
            total_quantity: 0.0,
            sales: 0.0,
            price: 0.0,
            closing_stock: 0.0,
            manual_total_quantity: false,
            manual_closing_stock: false,
        }
    }
}

/// View-scoping selection: which year/month the register shows, and an
/// optional focused day narrowing the row view within that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFilters {
    pub year: i32,
    /// 1-12
    pub month: u32,
    /// 1-31, or None meaning the whole month.
    pub focused_day: Option<u32>,
}

impl Default for RegisterFilters {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
            focused_day: None,
        }
    }
}

impl RegisterFilters {
    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn set_month(&mut self, month: u32) {
        self.month = month;
    }

    pub fn set_focused_day(&mut self, day: Option<u32>) {
        self.focused_day = day;
    }

    /// Date for a newly added row: the focused day, or day 1 of the month.
    pub fn new_row_date(&self) -> String {
        format_ymd(self.year, self.month, self.focused_day.unwrap_or(1))
    }
}

/// Flat chronological register vs. per-item monthly pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportLayout {
    Row,
    Matrix,
}
