pub mod fixtures;
#[cfg(unix)]
pub mod test_env;

// Re-export key testing utilities
pub use fixtures::GoTreeFixture;
#[cfg(unix)]
pub use test_env::{HermeticSessionBuilder, MockBehavior, TestEnvironment};
