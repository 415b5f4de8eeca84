//! User commands
//!
//! Register and log in directly against the database, and inspect stored users.

use anyhow::{bail, Result};
use clap::Subcommand;
use gatehouse_core::{CredentialStore, User};
use serde::Serialize;
use tabled::Tabled;

use super::Context;
use crate::output::{print_record, print_success};

#[derive(Subcommand)]
pub enum UserAction {
    /// Show a user by username
    Show {
        /// Username (case-sensitive)
        username: String,
    },
}

/// User row for table display; never carries the password
#[derive(Debug, Serialize, Tabled)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Username")]
    pub username: String,
    #[tabled(rename = "Created")]
    pub created_at: String,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

pub async fn execute(ctx: &Context, action: UserAction) -> Result<()> {
    match action {
        UserAction::Show { username } => show_user(ctx, &username).await,
    }
}

pub async fn register(ctx: &Context, username: &str, password: &str) -> Result<()> {
    let user = ctx.auth().register(username, password).await?;

    print_success("Registration successful", ctx.quiet);
    print_record(&UserRow::from(user), ctx.format)?;
    Ok(())
}

pub async fn login(ctx: &Context, username: &str, password: &str) -> Result<()> {
    ctx.auth().login(username, password).await?;

    print_success("Login successful", ctx.quiet);
    Ok(())
}

async fn show_user(ctx: &Context, username: &str) -> Result<()> {
    match ctx.auth().store().find_by_username(username).await? {
        Some(user) => print_record(&UserRow::from(user), ctx.format),
        None => bail!("User not found: {}", username),
    }
}
