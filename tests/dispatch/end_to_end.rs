use loadgen_dispatch::{Dispatcher, DispatcherConfig, HttpGet, MemoryReporter};
use loadgen_target::TargetConfig;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// The generator against the bundled target server, which only serves two
/// requests at a time
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn generator_against_target_server() {
    let sleep = Duration::from_millis(100);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let config = TargetConfig::builder()
        .workers(2)
        .sleep(sleep)
        .build()
        .unwrap();

    let (stop, stopped) = oneshot::channel::<()>();
    let server = tokio::spawn(loadgen_target::serve(listener, config, async {
        stopped.await.ok();
    }));

    let reporter = MemoryReporter::new();
    let dispatcher = Dispatcher::new(
        HttpGet::new().unwrap(),
        DispatcherConfig::builder()
            .reporter(reporter.clone())
            .build(),
    );

    let start = Instant::now();
    let joined = dispatcher.dispatch(&base, 8).join().await;

    assert_eq!(joined.tasks, 8);
    assert!(reporter.failures().is_empty(), "{:?}", reporter.lines());
    // Four sleeping requests through two workers need at least two rounds.
    assert!(start.elapsed() >= sleep * 2);

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}
