//! Built-in configuration defaults.

/// Local development address of the Fuseki dataset
/// (`fuseki-server --update --file=data.ttl /kawali`).
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:3030/kawali/sparql";

/// Per-query timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
