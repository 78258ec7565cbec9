use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;
use crate::models::RegisterRow;
use crate::register::{apply_edit, FieldEdit};

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS register_rows (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    item_name TEXT NOT NULL DEFAULT '',
    opening_stock REAL NOT NULL DEFAULT 0,
    purchase REAL NOT NULL DEFAULT 0,
    total_quantity REAL NOT NULL DEFAULT 0,
    sales REAL NOT NULL DEFAULT 0,
    price REAL NOT NULL DEFAULT 0,
    closing_stock REAL NOT NULL DEFAULT 0,
    manual_total_quantity INTEGER NOT NULL DEFAULT 0,
    manual_closing_stock INTEGER NOT NULL DEFAULT 0,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn get_metadata(conn: &Connection, key: &str) -> Option<String> {
    conn.query_row(
        "SELECT value FROM metadata WHERE key = ?1",
        [key],
        |row| row.get(0),
    )
    .ok()
}

pub fn set_metadata(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO metadata (key, value) VALUES (?1, ?2) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        [key, value],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Register store: the add/update/delete/list contract
// ---------------------------------------------------------------------------

fn row_from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<RegisterRow> {
    Ok(RegisterRow {
        id: row.get(0)?,
        date: row.get(1)?,
        item_name: row.get(2)?,
        opening_stock: row.get(3)?,
        purchase: row.get(4)?,
        total_quantity: row.get(5)?,
        sales: row.get(6)?,
        price: row.get(7)?,
        closing_stock: row.get(8)?,
        manual_total_quantity: row.get(9)?,
        manual_closing_stock: row.get(10)?,
    })
}

const ROW_COLUMNS: &str = "id, date, item_name, opening_stock, purchase, \
     total_quantity, sales, price, closing_stock, \
     manual_total_quantity, manual_closing_stock";

pub fn insert_row(conn: &Connection, row: &RegisterRow) -> Result<i64> {
    conn.execute(
        "INSERT INTO register_rows (date, item_name, opening_stock, purchase, \
         total_quantity, sales, price, closing_stock, \
         manual_total_quantity, manual_closing_stock) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        rusqlite::params![
            row.date,
            row.item_name,
            row.opening_stock,
            row.purchase,
            row.total_quantity,
            row.sales,
            row.price,
            row.closing_stock,
            row.manual_total_quantity,
            row.manual_closing_stock,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn fetch_row(conn: &Connection, id: i64) -> Result<Option<RegisterRow>> {
    let sql = format!("SELECT {ROW_COLUMNS} FROM register_rows WHERE id = ?1");
    match conn.query_row(&sql, [id], row_from_sql) {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All rows, newest first. Filtering and date-sorting happen in
/// `register::filter_rows` so lenient date matching stays in one place.
pub fn fetch_all_rows(conn: &Connection) -> Result<Vec<RegisterRow>> {
    let sql = format!("SELECT {ROW_COLUMNS} FROM register_rows ORDER BY id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], row_from_sql)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn save_row(conn: &Connection, row: &RegisterRow) -> Result<()> {
    conn.execute(
        "UPDATE register_rows SET date = ?1, item_name = ?2, opening_stock = ?3, \
         purchase = ?4, total_quantity = ?5, sales = ?6, price = ?7, \
         closing_stock = ?8, manual_total_quantity = ?9, manual_closing_stock = ?10 \
         WHERE id = ?11",
        rusqlite::params![
            row.date,
            row.item_name,
            row.opening_stock,
            row.purchase,
            row.total_quantity,
            row.sales,
            row.price,
            row.closing_stock,
            row.manual_total_quantity,
            row.manual_closing_stock,
            row.id,
        ],
    )?;
    Ok(())
}

/// Apply a single-field edit to the stored row, cascading derived fields
/// per `register::apply_edit`. Returns false (no-op) when the id is absent.
pub fn update_field(conn: &Connection, id: i64, edit: &FieldEdit) -> Result<bool> {
    let Some(mut row) = fetch_row(conn, id)? else {
        return Ok(false);
    };
    apply_edit(&mut row, edit);
    save_row(conn, &row)?;
    Ok(true)
}

/// Remove a row. Returns false (no-op) when the id is absent.
pub fn delete_row(conn: &Connection, id: i64) -> Result<bool> {
    let changed = conn.execute("DELETE FROM register_rows WHERE id = ?1", [id])?;
    Ok(changed > 0)
}
