//! Test utilities for the packaging code
//!
//! In-memory stand-ins for the collaborators the packaging code talks to,
//! so plans and edits can be tested without a project directory:
//!
//! - [`MemoryProject`] - project model and dependency registry
//! - [`ScriptedPrompter`] - answers questions from a script, in order
//! - [`MemorySources`] - keeps generated classes in a list
//!
//! # Example
//!
//! ```rust,no_run
//! use osgi_plugin::test_utils::{MemoryProject, ScriptedPrompter};
//!
//! let project = MemoryProject::new("com.acme");
//! let mut prompter = ScriptedPrompter::new().yes_no(false).yes_no(false);
//! // run setup with the prompter, then
//! prompter.assert_exhausted();
//! ```

mod memory;

pub use memory::{MemoryProject, MemorySources, ScriptedPrompter};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, tests run without a subscriber.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
