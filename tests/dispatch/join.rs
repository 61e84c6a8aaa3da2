use super::{hits, target_server};
use loadgen_dispatch::{join_all, Dispatcher, DispatcherConfig, HttpGet, MemoryReporter};
use std::time::{Duration, Instant};

/// Dispatch returns well before a delayed endpoint could have answered
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn dispatch_does_not_wait_for_responses() {
    let delay = Duration::from_millis(500);
    let server = target_server(delay).await;
    let dispatcher = Dispatcher::new(HttpGet::new().unwrap(), DispatcherConfig::default());

    let start = Instant::now();
    let tasks = dispatcher.dispatch(&server.uri(), 20);
    let dispatch_time = start.elapsed();

    assert_eq!(tasks.len(), 20);
    assert!(
        dispatch_time < delay,
        "dispatch blocked for {dispatch_time:?}"
    );
    assert!(tasks.completed() < 20);

    let joined = join_all(tasks).await;
    assert_eq!(joined.tasks, 20);
    assert!(start.elapsed() >= delay);
}

/// All delayed requests overlap instead of running one after another
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn delayed_requests_overlap() {
    let delay = Duration::from_millis(300);
    let server = target_server(delay).await;
    let dispatcher = Dispatcher::new(HttpGet::new().unwrap(), DispatcherConfig::default());

    let start = Instant::now();
    dispatcher.dispatch(&server.uri(), 10).join().await;

    // Serial execution would take ten delays.
    assert!(start.elapsed() < delay * 5, "took {:?}", start.elapsed());
    assert_eq!(hits(&server, "/sleep").await + hits(&server, "/").await, 10);
}

/// Zero requests: immediate return, no network activity, no output
#[tokio::test]
async fn zero_requests_do_nothing() {
    let server = target_server(Duration::ZERO).await;
    let reporter = MemoryReporter::new();
    let config = DispatcherConfig::builder()
        .reporter(reporter.clone())
        .build();
    let dispatcher = Dispatcher::new(HttpGet::new().unwrap(), config);

    let tasks = dispatcher.dispatch(&server.uri(), 0);
    assert!(tasks.is_empty());
    let joined = join_all(tasks).await;

    assert_eq!(joined.tasks, 0);
    assert!(reporter.failures().is_empty());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

/// Boundary: there is no per-request timeout, so a hung target keeps the
/// join pending for as long as it hangs
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn hung_request_blocks_join() {
    let server = target_server(Duration::from_secs(30)).await;
    let dispatcher = Dispatcher::new(HttpGet::new().unwrap(), DispatcherConfig::default());

    let tasks = dispatcher.dispatch(&server.uri(), 2);
    let outcome = tokio::time::timeout(Duration::from_millis(300), join_all(tasks)).await;

    assert!(outcome.is_err(), "join finished although the target never answered");
}
