//! Dispatch/join tests against mock and real target servers.
//!
//! Test organization:
//! - parity.rs: which URL each request index hits
//! - join.rs: non-blocking dispatch and the join barrier
//! - failure.rs: per-task failure reporting
//! - end_to_end.rs: the generator against the bundled target server

mod end_to_end;
mod join;

use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a mock server answering `/` and `/sleep` after `delay`.
pub async fn target_server(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    for endpoint in ["/", "/sleep"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .mount(&server)
            .await;
    }
    server
}

/// How many requests the mock server received on `endpoint`.
pub async fn hits(server: &MockServer, endpoint: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == endpoint)
        .count()
}

/// A base URL nobody is listening on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
