use colored::Colorize;

use crate::db::{get_connection, init_db, set_metadata};
use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(data_dir: Option<String>, shop_name: Option<String>) -> Result<()> {
    // Re-running init must not reset an already-configured data dir.
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }

    std::fs::create_dir_all(&settings.data_dir)?;
    let db_path = std::path::Path::new(&settings.data_dir).join("stockreg.db");
    let conn = get_connection(&db_path)?;
    init_db(&conn)?;

    if let Some(name) = shop_name {
        set_metadata(&conn, "shop_name", &name)?;
    }

    save_settings(&settings)?;

    println!("{}", "Stock register initialized.".green());
    println!("Data dir:  {}", settings.data_dir);
    println!("Database:  {}", db_path.display());
    println!();
    println!("Next: `stockreg add` to enter a row, or `stockreg demo` for sample data.");
    Ok(())
}
