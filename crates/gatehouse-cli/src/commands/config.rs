//! Config commands
//!
//! Commands for inspecting the resolved CLI configuration.

use anyhow::Result;
use clap::Subcommand;
use gatehouse_core::db::{get_db_path, DB_PATH_ENV};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_records, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
}

/// Where the database path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbPathSource {
    Flag,
    Env,
    Default,
}

impl DbPathSource {
    /// Must run before `--db` is copied into the environment
    pub fn detect(flag: Option<&str>) -> Self {
        let env = std::env::var(DB_PATH_ENV).ok();
        match (flag, env) {
            (Some(flag), Some(env)) if flag == env => DbPathSource::Env,
            (Some(_), _) => DbPathSource::Flag,
            (None, _) => DbPathSource::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DbPathSource::Flag => "flag",
            DbPathSource::Env => "env",
            DbPathSource::Default => "default",
        }
    }
}

/// Config row for table display
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub fn execute(action: ConfigAction, format: OutputFormat, db_source: DbPathSource) -> Result<()> {
    match action {
        ConfigAction::Show => show_config(format, db_source),
    }
}

fn show_config(format: OutputFormat, db_source: DbPathSource) -> Result<()> {
    let rows = get_all_config(db_source);
    print_records(&rows, format)?;
    Ok(())
}

fn get_all_config(db_source: DbPathSource) -> Vec<ConfigRow> {
    let db_path = get_db_path()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| "Unknown".to_string());

    vec![
        ConfigRow {
            key: DB_PATH_ENV.to_string(),
            value: db_path,
            source: db_source.as_str().to_string(),
        },
        ConfigRow {
            key: "min_username_length".to_string(),
            value: gatehouse_core::MIN_USERNAME_LEN.to_string(),
            source: "built-in".to_string(),
        },
        ConfigRow {
            key: "min_password_length".to_string(),
            value: gatehouse_core::MIN_PASSWORD_LEN.to_string(),
            source: "built-in".to_string(),
        },
    ]
}
