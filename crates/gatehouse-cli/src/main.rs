//! Gatehouse CLI - user registration and login
//!
//! A command-line interface for registering and checking users directly
//! against the database, and for running the HTTP API.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gatehouse_core::db::DB_PATH_ENV;

#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(author, version, about = "Username/password registration and login", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Override database path (or set GATEHOUSE_DB_PATH env var)
    #[arg(long, env = DB_PATH_ENV, global = true)]
    db: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),

    /// Register a new user
    Register {
        /// Username (at least 3 characters)
        username: String,

        /// Password (at least 6 characters)
        password: String,
    },

    /// Check a username and password
    Login {
        username: String,
        password: String,
    },

    /// Inspect stored users
    User {
        #[command(subcommand)]
        action: commands::user::UserAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // The server logs at info; one-shot commands only surface problems
    let default_level = if matches!(cli.command, Commands::Serve(_)) {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let db_source = commands::config::DbPathSource::detect(cli.db.as_deref());

    // Set up database path if provided
    if let Some(db_path) = &cli.db {
        std::env::set_var(DB_PATH_ENV, shellexpand::tilde(db_path).as_ref());
    }

    let (format, quiet) = (cli.format, cli.quiet);

    // Execute command
    match cli.command {
        // Config commands must work even when the database can't be opened
        Commands::Config { action } => commands::config::execute(action, format, db_source),
        Commands::Serve(args) => {
            commands::serve::execute(&context(format, quiet).await?, args).await
        }
        Commands::Register { username, password } => {
            commands::user::register(&context(format, quiet).await?, &username, &password).await
        }
        Commands::Login { username, password } => {
            commands::user::login(&context(format, quiet).await?, &username, &password).await
        }
        Commands::User { action } => {
            commands::user::execute(&context(format, quiet).await?, action).await
        }
    }
}

/// Open the database and create the context for commands
async fn context(format: output::OutputFormat, quiet: bool) -> Result<commands::Context> {
    let db = gatehouse_core::Database::new().await?;
    Ok(commands::Context { db, format, quiet })
}
