//! `loadgen-target`: the server the load generator is pointed at.

use anyhow::Context;
use clap::Parser;
use loadgen_target::{serve, TargetConfig};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve a fast `/` and a slow `/sleep` endpoint behind a fixed worker limit
#[derive(Parser, Debug)]
#[command(name = "loadgen-target")]
#[command(about = "Serve a fast `/` and a slow `/sleep` endpoint behind a fixed worker limit")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:7878")]
    addr: SocketAddr,

    /// Number of requests served concurrently (1-15)
    #[arg(long, default_value_t = 5)]
    workers: usize,

    /// Delay of the /sleep endpoint, in milliseconds
    #[arg(long, default_value_t = 5000)]
    sleep_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = TargetConfig::builder()
        .workers(args.workers)
        .sleep(Duration::from_millis(args.sleep_ms))
        .build()?;

    let listener = TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("failed to bind {}", args.addr))?;
    tracing::info!("Serving your application at http://{}", listener.local_addr()?);

    serve(listener, config, async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutting down, waiting for in-flight requests");
    })
    .await?;
    Ok(())
}
