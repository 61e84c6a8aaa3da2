//! Request handlers and the router that ties them together.

use crate::config::TargetConfig;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::time::Duration;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::trace::TraceLayer;

const HELLO_PAGE: &str = include_str!("../html/hello.html");
const SLEEP_PAGE: &str = include_str!("../html/sleep.html");
const NOT_FOUND_PAGE: &str = include_str!("../html/404.html");
const METHOD_NOT_ALLOWED_PAGE: &str = include_str!("../html/405.html");

#[derive(Clone)]
struct AppState {
    sleep: Duration,
}

/// Builds the router.
///
/// | path | methods | response |
/// |---|---|---|
/// | `/` | GET, POST | 200, hello page |
/// | `/sleep`, `/sleep/*` | GET, POST | 200 after the configured delay |
/// | known path | anything else | 405 |
/// | anything else | any | 404 |
///
/// All routes share one concurrency limit of `config.workers()`.
pub fn router(config: &TargetConfig) -> Router {
    let state = AppState {
        sleep: config.sleep,
    };

    Router::new()
        .route("/", page(get(hello).post(hello)))
        .route("/sleep", page(get(sleepy).post(sleepy)))
        .route("/sleep/*rest", page(get(sleepy).post(sleepy)))
        .fallback(not_found)
        .with_state(state)
        .layer(GlobalConcurrencyLimitLayer::new(config.workers))
        .layer(TraceLayer::new_for_http())
}

fn page(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(method_not_allowed)
}

async fn hello() -> Html<&'static str> {
    Html(HELLO_PAGE)
}

async fn sleepy(State(state): State<AppState>) -> Html<&'static str> {
    tokio::time::sleep(state.sleep).await;
    Html(SLEEP_PAGE)
}

async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

async fn method_not_allowed() -> (StatusCode, Html<&'static str>) {
    (StatusCode::METHOD_NOT_ALLOWED, Html(METHOD_NOT_ALLOWED_PAGE))
}
