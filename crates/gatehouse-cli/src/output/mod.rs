//! Output formatting module
//!
//! Renders user and config rows as a table or JSON, and prints colored
//! status lines for register/login outcomes.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid format: {}. Use 'table' or 'json'", s)),
        }
    }
}

/// Render one record; JSON output is a single object
pub fn format_record<T>(record: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + Tabled,
{
    Ok(match format {
        OutputFormat::Table => Table::new([record]).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
    })
}

/// Render several records; JSON output is an array
pub fn format_records<T>(records: &[T], format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + Tabled,
{
    Ok(match format {
        OutputFormat::Table => Table::new(records).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
    })
}

pub fn print_record<T>(record: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    println!("{}", format_record(record, format)?);
    Ok(())
}

pub fn print_records<T>(records: &[T], format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabled,
{
    println!("{}", format_records(records, format)?);
    Ok(())
}

/// Outcome line for a successful register/login (respects quiet mode)
pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", colored::Colorize::green(message));
    }
}

/// Rejection or failure line, always shown on stderr
pub fn print_error(message: &str) {
    eprintln!("{}", colored::Colorize::red(message));
}

pub fn print_info(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message);
    }
}
