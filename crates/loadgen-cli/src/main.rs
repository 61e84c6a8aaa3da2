//! `loadgen`: fire N concurrent GET requests at a server and wait for all of
//! them.
//!
//! Even-numbered requests go to `<url>/sleep`, odd-numbered ones to `<url>`.
//! Every failed request prints `Failed to open <url>: <reason>` on stderr;
//! nothing else is printed unless `-v` is given. The exit code is 0 whenever
//! the run completes, however many requests failed.

use clap::Parser;
use loadgen_dispatch::{join_all, DispatchEvent, Dispatcher, DispatcherConfig, HttpGet, LoadEvent};
use std::time::Instant;

/// Hit the target endpoints with GET requests
#[derive(Parser, Debug, Clone)]
#[command(name = "loadgen")]
#[command(about = "Hit the target endpoints with concurrent GET requests")]
struct Args {
    /// The base of the target url
    #[arg(short, long, default_value = "http://127.0.0.1:7878")]
    url: String,

    /// Number of GET requests to send
    #[arg(short, long, default_value_t = 100)]
    number: usize,

    /// Log more about the run on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let config = DispatcherConfig::builder()
        .on_event(move |event: &DispatchEvent| log_event(event, start))
        .build();
    let dispatcher = Dispatcher::new(HttpGet::new()?, config);

    tracing::info!(url = %args.url, requests = args.number, "dispatching");
    let tasks = dispatcher.dispatch(&args.url, args.number);
    let joined = join_all(tasks).await;
    tracing::info!(tasks = joined.tasks, "all requests finished");

    Ok(())
}

/// Traces every dispatch event with its offset from the start of the run.
fn log_event(event: &DispatchEvent, start: Instant) {
    tracing::trace!(
        event = event.event_type(),
        source = event.source_name(),
        at_ms = event.timestamp().saturating_duration_since(start).as_millis() as u64,
        "{event:?}"
    );
}
