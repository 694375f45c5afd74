//! # Command Registry
//!
//! An ordered, fixed-size collection of commands with cyclic navigation.
//! The registry is built once at startup; the palette addresses entries
//! by index and moves through them with wrap-around, so no out-of-range
//! selection state is reachable through [`Registry::next`] and
//! [`Registry::previous`].

use crate::command::CommandSpec;

/// Ordered command collection. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    pub fn new(commands: Vec<CommandSpec>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    /// Look up a command by index.
    ///
    /// An out-of-range index is a UI-state invariant violation: it fails
    /// fast in debug builds and clamps to the last entry in release
    /// builds. Callers must ensure the registry is non-empty.
    pub fn get(&self, index: usize) -> &CommandSpec {
        debug_assert!(
            index < self.commands.len(),
            "registry index {index} out of range (len {})",
            self.commands.len()
        );
        let clamped = index.min(self.commands.len().saturating_sub(1));
        &self.commands[clamped]
    }

    /// Index after `index`, wrapping to 0 past the end.
    pub fn next(&self, index: usize) -> usize {
        if self.commands.is_empty() {
            return 0;
        }
        (index + 1) % self.commands.len()
    }

    /// Index before `index`, wrapping to the last entry below 0.
    pub fn previous(&self, index: usize) -> usize {
        if self.commands.is_empty() {
            return 0;
        }
        if index == 0 {
            self.commands.len() - 1
        } else {
            index - 1
        }
    }

    /// Clamp an index into the valid range. Used when the palette opens
    /// with a remembered selection against a registry that may be
    /// smaller than it was.
    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.commands.len().saturating_sub(1))
    }
}
