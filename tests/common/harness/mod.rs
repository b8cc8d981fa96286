//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic record creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod record;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::SlugCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use record::TestRecord;
