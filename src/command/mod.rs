//! # Command Module
//!
//! Named external operations and the ordered registry they live in.
//!
//! A [`CommandSpec`] captures everything needed to run one external
//! process: the display name, the program, an explicit argument vector,
//! and a working directory. Commands are spawned directly (no shell
//! wrapper), so shell metacharacters in arguments are never interpreted.
//!
//! Commands are registered once at startup from configuration and never
//! added or removed at runtime.

pub mod registry;
pub mod runner;

pub use registry::Registry;

use std::path::PathBuf;

/// A named external command. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Display name shown in the palette and panel titles.
    pub name: String,
    /// Executable to spawn, resolved via PATH.
    pub program: String,
    /// Explicit argument vector, passed without shell interpretation.
    pub args: Vec<String>,
    /// Working directory the process runs in.
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: Vec<String>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
            cwd: cwd.into(),
        }
    }

    /// Title used for the output panel: `name (working directory)`.
    pub fn panel_title(&self) -> String {
        format!("{} ({})", self.name, self.cwd.display())
    }

    /// One-line rendering of the underlying invocation for the palette.
    pub fn invocation(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
