use anyhow::Result;
use clap::Parser;
use shorturl::config::{self, CliArgs};
use shorturl::{server, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = config::load(args)?;

    telemetry::init(&config)?;
    config.print_summary();

    server::run(config).await
}
