//! Command implementations for the simulator
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod run;
mod validate;

use std::path::PathBuf;

pub use run::Run;
pub use validate::Validate;

/// Content shipped with the workspace.
fn default_content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data")
}
