mod cli;
mod dates;
mod db;
mod error;
mod export;
mod fmt;
mod matrix;
mod models;
mod register;
mod settings;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir, shop_name } => cli::init::run(data_dir, shop_name),
        Commands::Add { month, day } => cli::rows::add(month, day),
        Commands::Edit { id, field, value } => cli::rows::edit(id, field, &value),
        Commands::Delete { id } => cli::rows::delete(id),
        Commands::Show { month, day, layout } => cli::view::show(month, day, layout),
        Commands::Print { month, layout } => cli::view::print_view(month, layout),
        Commands::Export {
            month,
            layout,
            output,
        } => cli::export::run(month, layout, output),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
