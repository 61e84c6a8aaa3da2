//! Parity split: which URL a given request index targets.

/// Path appended to the base URL for even request indices.
pub const SLEEP_PATH: &str = "/sleep";

/// The endpoint a request is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The slow path, `base_url + "/sleep"`. Chosen for even indices.
    Sleep,
    /// The base URL itself. Chosen for odd indices.
    Base,
}

impl Endpoint {
    /// Selects the endpoint for request `index`.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Endpoint::Sleep
        } else {
            Endpoint::Base
        }
    }

    /// Builds the full URL for this endpoint.
    ///
    /// This is plain concatenation; `base_url` is not parsed or normalised, so a
    /// malformed base only shows up once the request is attempted.
    pub fn url(self, base_url: &str) -> String {
        match self {
            Endpoint::Sleep => format!("{base_url}{SLEEP_PATH}"),
            Endpoint::Base => base_url.to_string(),
        }
    }
}

/// One request to be issued: the index it was dispatched under and its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    /// Position in dispatch order, in `[0, n)`.
    pub index: usize,
    /// Endpoint chosen by the index parity.
    pub endpoint: Endpoint,
    /// Full URL the GET is sent to.
    pub url: String,
}

impl RequestTarget {
    /// Builds the target for request `index` against `base_url`.
    pub fn new(base_url: &str, index: usize) -> Self {
        let endpoint = Endpoint::for_index(index);
        Self {
            index,
            endpoint,
            url: endpoint.url(base_url),
        }
    }
}

/// Yields the targets for indices `0..n` in dispatch order.
pub fn targets(base_url: &str, n: usize) -> impl Iterator<Item = RequestTarget> + '_ {
    (0..n).map(move |index| RequestTarget::new(base_url, index))
}
