//! Error types for request tasks.

/// Errors produced while issuing a single GET.
///
/// None of these ever escape a task: they are turned into a failure report
/// by the task that hit them.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent, or its response could not be read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Result type for request operations.
pub type Result<T> = std::result::Result<T, RequestError>;

/// Renders an error and its chain of sources on one line.
///
/// A source is skipped when the error directly above it already printed it,
/// either verbatim or as a `: <source>` suffix, so wrappers that repeat their
/// cause do not produce stuttering output.
pub fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut previous = err.to_string();
    let mut message = previous.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !repeats(&previous, &text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        previous = text;
        source = cause.source();
    }
    message
}

fn repeats(previous: &str, text: &str) -> bool {
    text.is_empty()
        || previous == text
        || previous
            .strip_suffix(text)
            .is_some_and(|head| head.ends_with(": "))
}
