use std::error::Error;

use configuration::{get_config, ResponderConfiguration};
use dns::QueryHandler;
use tokio::net::UdpSocket;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: cli_args::CliArgs = argh::from_env();
    let config: ResponderConfiguration = get_config(args.config)?;

    let records = config.resolution_table();
    tracing::info!("loaded {} records", records.len());

    let address = config.server.bind_address();
    let sock = UdpSocket::bind(address).await?;
    tracing::info!("Listening on: {}, pid: {}", address, std::process::id());

    server::serve(sock, QueryHandler::new(records)).await;

    Ok(())
}
