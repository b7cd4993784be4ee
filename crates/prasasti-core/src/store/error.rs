use thiserror::Error;

/// Errors that can occur while talking to the triple store.
///
/// The service layer converts all of these into empty results; they exist so
/// call sites can log what actually went wrong.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network unreachable, DNS failure, or the timeout elapsed.
    #[error("Connection to SPARQL endpoint failed: {0}")]
    Connection(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("SPARQL endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },

    /// The body was not JSON or lacked the expected results envelope.
    #[error("Malformed SPARQL results envelope: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::MalformedResponse(err.to_string())
        } else {
            StoreError::Connection(err.to_string())
        }
    }
}
