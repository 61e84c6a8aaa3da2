//! Dispatch stress tests

use loadgen_dispatch::{Dispatcher, DispatcherConfig, MemoryReporter, RequestTarget};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tower::BoxError;

use super::ConcurrencyTracker;

/// Test: Ten thousand simultaneous tasks, all in flight at once
#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn stress_ten_thousand_tasks() {
    let tracker = ConcurrencyTracker::new();
    let tracker_clone = Arc::clone(&tracker);

    let svc = tower::service_fn(move |_: RequestTarget| {
        let tracker = Arc::clone(&tracker_clone);
        async move {
            tracker.enter();
            sleep(Duration::from_millis(200)).await;
            tracker.exit();
            Ok::<(), BoxError>(())
        }
    });

    let start = Instant::now();
    let tasks = Dispatcher::new(svc, DispatcherConfig::default()).dispatch("http://h", 10_000);
    let dispatched = start.elapsed();
    let joined = tasks.join().await;

    println!(
        "dispatched 10000 tasks in {:?}, joined after {:?}, peak concurrency {}",
        dispatched,
        start.elapsed(),
        tracker.peak()
    );
    assert_eq!(joined.tasks, 10_000);
    assert_eq!(tracker.current(), 0);
    // No pool: nearly every task is sleeping at the same time.
    assert!(tracker.peak() > 9_000);
}

/// Test: Every task fails; every one reports and every one is joined
#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn stress_mass_failure() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let a = Arc::clone(&attempts);

    let svc = tower::service_fn(move |_: RequestTarget| {
        let attempts = Arc::clone(&a);
        async move {
            attempts.fetch_add(1, Ordering::Relaxed);
            Err::<(), BoxError>("connection refused".into())
        }
    });

    let reporter = MemoryReporter::new();
    let config = DispatcherConfig::builder()
        .reporter(reporter.clone())
        .build();

    let joined = Dispatcher::new(svc, config)
        .dispatch("http://h", 50_000)
        .join()
        .await;

    assert_eq!(joined.tasks, 50_000);
    assert_eq!(attempts.load(Ordering::Relaxed), 50_000);
    assert_eq!(reporter.failures().len(), 50_000);
}

/// Test: Repeated dispatch/join rounds leave nothing running behind
#[tokio::test(flavor = "multi_thread")]
#[ignore]
async fn stress_repeated_rounds() {
    let tracker = ConcurrencyTracker::new();
    let tracker_clone = Arc::clone(&tracker);

    let svc = tower::service_fn(move |_: RequestTarget| {
        let tracker = Arc::clone(&tracker_clone);
        async move {
            tracker.enter();
            sleep(Duration::from_millis(1)).await;
            tracker.exit();
            Ok::<(), BoxError>(())
        }
    });
    let dispatcher = Dispatcher::new(svc, DispatcherConfig::default());

    for _ in 0..200 {
        let tasks = dispatcher.dispatch("http://h", 500);
        let joined = tasks.join().await;
        assert_eq!(joined.tasks, 500);
        assert_eq!(tracker.current(), 0);
    }
}
