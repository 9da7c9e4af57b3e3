pub mod adapters;
pub mod application;
pub mod domain;
pub mod infra;

// In-memory stores and state builders for unit and HTTP-level tests.
#[cfg(test)]
pub mod test_utils;

// Re-exports for shorter use statements.
pub use application::*;
pub use domain::*;
