use colored::Colorize;

use crate::cli::open_register;
use crate::db::insert_row;
use crate::error::Result;
use crate::models::{RegisterFilters, RegisterRow};
use crate::register::{closing_stock, total_quantity};

struct DemoRow {
    day: u32,
    item: &'static str,
    opening: f64,
    purchase: f64,
    sales: f64,
    price: f64,
}

const SAMPLE_ROWS: &[DemoRow] = &[
    DemoRow { day: 1, item: "Product A", opening: 100.0, purchase: 50.0, sales: 30.0, price: 25.5 },
    DemoRow { day: 1, item: "Product B", opening: 150.0, purchase: 25.0, sales: 40.0, price: 15.75 },
    DemoRow { day: 2, item: "Product B", opening: 200.0, purchase: 75.0, sales: 50.0, price: 15.75 },
    DemoRow { day: 3, item: "Product A", opening: 120.0, purchase: 30.0, sales: 25.0, price: 25.5 },
];

pub fn run() -> Result<()> {
    let conn = open_register()?;
    let mut filters = RegisterFilters::default();

    for sample in SAMPLE_ROWS {
        filters.set_focused_day(Some(sample.day));
        let mut row = RegisterRow::blank(filters.new_row_date());
        row.item_name = sample.item.to_string();
        row.opening_stock = sample.opening;
        row.purchase = sample.purchase;
        row.sales = sample.sales;
        row.price = sample.price;
        row.total_quantity = total_quantity(row.opening_stock, row.purchase);
        row.closing_stock = closing_stock(row.total_quantity, row.sales);
        insert_row(&conn, &row)?;
    }

    println!(
        "{}",
        format!("Loaded {} sample rows for the current month.", SAMPLE_ROWS.len()).green()
    );
    println!("Try `stockreg show` or `stockreg show --layout matrix`.");
    Ok(())
}
