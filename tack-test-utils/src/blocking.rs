//! Bridging blocking HTTP clients into async tests
//!
//! `wiremock` needs a Tokio runtime, while `reqwest::blocking` refuses to run
//! (or be dropped) on a runtime thread. Tests therefore build, use and drop
//! the blocking client on a dedicated blocking thread.

/// Run `f` on Tokio's blocking pool and return its result.
///
/// Panics inside `f` are re-raised in the calling test.
pub async fn run_blocking<F, T>(f: F) -> T
where
  F: FnOnce() -> T + Send + 'static,
  T: Send + 'static,
{
  match tokio::task::spawn_blocking(f).await {
    Ok(value) => value,
    Err(err) => std::panic::resume_unwind(err.into_panic()),
  }
}
