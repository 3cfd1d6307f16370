//! taskop - command-line client for the task-tracking service

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod storage;
mod tasks;
mod validate;
mod view;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if debug {
        builder.filter_module("taskop", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { username, password } => cli::auth::login(&opts, username, password).await,
        Commands::Register {
            username,
            email,
            password,
        } => cli::auth::register(&opts, username, email, password).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::List => cli::task::list(&opts).await,
        Commands::Add { title, text, due } => cli::task::add(&opts, title, text, due).await,
        Commands::Done { id } => cli::task::set_completed(&opts, id, true).await,
        Commands::Undo { id } => cli::task::set_completed(&opts, id, false).await,
        Commands::Edit { id } => cli::task::edit(&opts, id).await,
        Commands::Delete { id } => cli::task::delete(&opts, id).await,
        Commands::Version => {
            println!("taskop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
