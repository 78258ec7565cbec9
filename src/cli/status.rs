use crate::db::{get_connection, get_metadata};
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::settings::get_data_dir;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let db_path = data_dir.join("stockreg.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {}", format_bytes(size));

        let conn = get_connection(&db_path)?;

        let shop = get_metadata(&conn, "shop_name");
        println!("Shop:       {}", shop.as_deref().unwrap_or("(not set)"));

        let rows: i64 = conn.query_row("SELECT count(*) FROM register_rows", [], |r| r.get(0))?;
        let items: i64 = conn.query_row(
            "SELECT count(DISTINCT item_name) FROM register_rows WHERE trim(item_name) != ''",
            [],
            |r| r.get(0),
        )?;
        let overridden: i64 = conn.query_row(
            "SELECT count(*) FROM register_rows \
             WHERE manual_total_quantity = 1 OR manual_closing_stock = 1",
            [],
            |r| r.get(0),
        )?;
        let range: (Option<String>, Option<String>) = conn.query_row(
            "SELECT min(date), max(date) FROM register_rows",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )?;

        println!();
        println!("Rows:        {rows}");
        println!("Items:       {items}");
        println!("Overridden:  {overridden}");
        if let (Some(first), Some(last)) = range {
            println!("Dates:       {first} .. {last}");
        }
    } else {
        println!();
        println!("Database not found. Run `stockreg init` to set up.");
    }

    Ok(())
}
