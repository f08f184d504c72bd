//! Greeting endpoint.

/// Body returned from the root path.
pub const GREETING: &str = "Hello World!";

/// GET / — returns the greeting as plain text.
pub async fn hello() -> &'static str {
    GREETING
}
