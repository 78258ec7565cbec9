use colored::Colorize;

use crate::cli::{open_register, resolve_filters, EditField};
use crate::dates::parse_ymd;
use crate::db::{delete_row, fetch_row, insert_row, update_field};
use crate::error::Result;
use crate::fmt::{number, parse_input};
use crate::models::RegisterRow;
use crate::register::FieldEdit;

pub fn add(month: Option<String>, day: Option<u32>) -> Result<()> {
    let conn = open_register()?;
    let filters = resolve_filters(&month, day);
    let date = filters.new_row_date();
    let id = insert_row(&conn, &RegisterRow::blank(date.clone()))?;
    println!("Added row {id} ({date}). Set the item with `stockreg edit {id} item <name>`.");
    Ok(())
}

fn numeric_edit(value: &str, make: fn(f64) -> FieldEdit) -> Option<FieldEdit> {
    parse_input(value).map(make)
}

pub fn edit(id: i64, field: EditField, value: &str) -> Result<()> {
    let conn = open_register()?;

    let edit = match field {
        EditField::Date => {
            if parse_ymd(value).is_none() {
                println!(
                    "{}",
                    format!("Warning: '{value}' is not YYYY-MM-DD; the row will not match any month view.").yellow()
                );
            }
            Some(FieldEdit::Date(value.to_string()))
        }
        EditField::Item => Some(FieldEdit::ItemName(value.to_string())),
        EditField::Opening => numeric_edit(value, FieldEdit::OpeningStock),
        EditField::Purchase => numeric_edit(value, FieldEdit::Purchase),
        EditField::Total => numeric_edit(value, FieldEdit::TotalQuantity),
        EditField::Sales => numeric_edit(value, FieldEdit::Sales),
        EditField::Price => numeric_edit(value, FieldEdit::Price),
        EditField::Closing => numeric_edit(value, FieldEdit::ClosingStock),
    };
    let Some(edit) = edit else {
        println!("{}", format!("'{value}' is not a number; field unchanged.").yellow());
        return Ok(());
    };

    if !update_field(&conn, id, &edit)? {
        println!("No row with id {id}.");
        return Ok(());
    }

    if let Some(row) = fetch_row(&conn, id)? {
        println!(
            "Updated row {id}: {} — total {} closing {}{}",
            edit.field_name(),
            number(row.total_quantity, 2),
            number(row.closing_stock, 2),
            if row.manual_total_quantity || row.manual_closing_stock {
                " (manual override active)"
            } else {
                ""
            }
        );
    }
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = open_register()?;
    if delete_row(&conn, id)? {
        println!("Deleted row {id}.");
    } else {
        println!("No row with id {id}.");
    }
    Ok(())
}
