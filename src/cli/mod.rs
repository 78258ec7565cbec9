pub mod demo;
pub mod export;
pub mod init;
pub mod rows;
pub mod status;
pub mod view;

use clap::{Parser, Subcommand, ValueEnum};
use rusqlite::Connection;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::models::{RegisterFilters, ReportLayout};
use crate::settings::get_data_dir;

/// Parse a `YYYY-MM` argument. Both components must parse or the whole
/// argument is ignored; a half-applied filter would show the user a
/// period they never asked for.
pub(crate) fn parse_month_opt(month: &Option<String>) -> (Option<i32>, Option<u32>) {
    if let Some(m) = month {
        let parts: Vec<&str> = m.split('-').collect();
        if parts.len() == 2 {
            if let (Ok(year), Ok(month)) = (parts[0].parse(), parts[1].parse()) {
                return (Some(year), Some(month));
            }
        }
    }
    (None, None)
}

/// Build the view filters from command-line arguments, defaulting to the
/// current local month.
pub(crate) fn resolve_filters(month: &Option<String>, day: Option<u32>) -> RegisterFilters {
    let mut filters = RegisterFilters::default();
    let (year, month) = parse_month_opt(month);
    if let Some(y) = year {
        filters.set_year(y);
    }
    if let Some(m) = month {
        filters.set_month(m);
    }
    filters.set_focused_day(day);
    filters
}

/// Open the register database in the configured data directory, creating
/// the schema on first use.
pub(crate) fn open_register() -> Result<Connection> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let conn = get_connection(&data_dir.join("stockreg.db"))?;
    init_db(&conn)?;
    Ok(conn)
}

/// Editable row fields as they appear on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EditField {
    Date,
    Item,
    Opening,
    Purchase,
    Total,
    Sales,
    Price,
    Closing,
}

#[derive(Parser)]
#[command(name = "stockreg", about = "Daily stock register CLI for small shops.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up stockreg: choose a data directory and initialize the database.
    Init {
        /// Path for stockreg data (default: ~/Documents/stockreg)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Shop name printed above reports and exports
        #[arg(long = "shop-name")]
        shop_name: Option<String>,
    },
    /// Add a blank row at the focused date.
    Add {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Day of month to focus (default: day 1)
        #[arg(long)]
        day: Option<u32>,
    },
    /// Edit one field of a row. Derived fields recompute automatically
    /// unless they have been manually overridden.
    Edit {
        /// Row ID (shown in `stockreg show`)
        id: i64,
        /// Field to change
        field: EditField,
        /// New value
        value: String,
    },
    /// Delete a row.
    Delete {
        /// Row ID (shown in `stockreg show`)
        id: i64,
    },
    /// Show the register grid or the per-item monthly matrix.
    Show {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Narrow the row view to a single day
        #[arg(long)]
        day: Option<u32>,
        /// Layout: row or matrix
        #[arg(long, value_enum, default_value = "row")]
        layout: ReportLayout,
    },
    /// Read-only render without the ID column, for printing.
    Print {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Layout: row or matrix
        #[arg(long, value_enum, default_value = "row")]
        layout: ReportLayout,
    },
    /// Export a month to CSV (always the whole month).
    Export {
        /// Month: YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Layout: row or matrix
        #[arg(long, value_enum, default_value = "row")]
        layout: ReportLayout,
        /// Output file path (default: Stock_Register_<Month>_<Year>[_Matrix].csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Load sample rows for the current month to explore stockreg.
    Demo,
    /// Show the current database and summary statistics.
    Status,
}
