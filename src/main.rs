mod access;
mod actions;
mod amount;
mod annotator;
mod cli;
mod error;
mod fmt;
mod ledger;
mod matcher;
mod models;
mod quick_add;
mod rows;
mod settings;
mod settlement;
mod summary;
mod view;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Logs go to stderr so table output stays clean. `HISAAB_LOG` takes the
/// usual filter syntax, e.g. `HISAAB_LOG=hisaab=debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("HISAAB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Init {
            data_dir,
            name,
            email,
            sanjaya_email,
            ravi_email,
        }) => cli::init::run(cli::init::InitArgs {
            data_dir,
            name,
            email,
            sanjaya_email,
            ravi_email,
        }),
        Some(Commands::Status) => cli::status::run(),
        Some(Commands::History {
            show_paid,
            show_payments,
            hide_payments,
        }) => cli::history::run(show_paid, show_payments, hide_payments),
        None => cli::history::run(false, false, false),
        Some(Commands::Paid) => cli::paid::run(),
        Some(Commands::Select { id }) => cli::select::run(&id),
        Some(Commands::Delete { id }) => cli::delete::run(&id),
        Some(Commands::Settle { method, date }) => cli::settle::run(&method, date),
        Some(Commands::Quick) => cli::quick::run(),
        Some(Commands::Add {
            quick_id,
            description,
            extra,
            date,
        }) => cli::add::run(&quick_id, description.as_deref(), extra, date),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
