//! Serve command
//!
//! Runs the HTTP API against the configured database.

use anyhow::{Context as _, Result};
use clap::Args;
use std::net::{IpAddr, SocketAddr};

use super::Context;
use crate::output::print_info;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "GATEHOUSE_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "GATEHOUSE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Allowed CORS origin; repeat or comma-separate for several, `*` for any
    #[arg(
        long = "allowed-origin",
        env = "GATEHOUSE_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = gatehouse_api::DEFAULT_ALLOWED_ORIGIN
    )]
    pub allowed_origins: Vec<String>,
}

pub async fn execute(ctx: &Context, args: ServeArgs) -> Result<()> {
    let cors = gatehouse_api::cors_layer(&args.allowed_origins)?;
    let app = gatehouse_api::create_router(ctx.auth(), cors);
    let addr = SocketAddr::new(args.host, args.port);

    log::info!("Starting API server on {}", addr);
    print_info(
        &format!("Serving on http://{} (origins: {})", addr, args.allowed_origins.join(", ")),
        ctx.quiet,
    );

    gatehouse_api::serve(addr, app)
        .await
        .with_context(|| format!("API server on {} failed", addr))
}
