//! Greeting endpoint

/// Fixed greeting returned at the root route.
pub const GREETING: &str = "Hello from Omar Alaswar, this is Pikade task 👋 — running on Rust!";

/// GET / - Return the fixed greeting text
pub async fn get() -> &'static str {
    GREETING
}
