//! Test utilities shared across the tack workspace
//!
//! This crate provides common testing infrastructure including:
//! - Throwaway home directories with a `.netrc` ([`NetrcGuard`])
//! - Running blocking client code from async tests ([`run_blocking`])

pub mod blocking;
pub mod netrc;

// Re-export commonly used items
pub use blocking::run_blocking;
pub use netrc::NetrcGuard;
