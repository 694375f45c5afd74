//! # Configuration
//!
//! User configuration stored in `~/.config/forge/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON
//! file in the user's XDG config directory (resolved via the
//! `directories` crate) or a path given with `--config`. It selects the
//! theme and enumerates the commands available in the palette; the
//! command list is injected here instead of being hard-coded in the
//! binary.
//!
//! A missing file yields defaults: the Forge theme and two git commands
//! (`status`, `fetch`) running in the workspace directory. A command
//! entry without `cwd` inherits the workspace directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::{CommandSpec, Registry};

/// Persisted user configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the active theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Commands offered in the palette. Empty means "use the defaults".
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

/// One configured command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandEntry {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Working directory; the workspace directory when omitted.
    #[serde(default)]
    pub cwd: Option<PathBuf>,
}

fn default_theme_name() -> String {
    "Forge".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            commands: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default location. Returns
    /// `Config::default()` if the file does not exist or cannot be
    /// parsed.
    pub fn load() -> Self {
        Self::try_load().unwrap_or_default()
    }

    fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific path. Returns
    /// `Config::default()` if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the path to the config file.
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "forge")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Build the session registry, resolving relative entries against
    /// the workspace directory and falling back to the default git
    /// commands when none are configured.
    pub fn build_registry(&self, workspace: &Path) -> Registry {
        if self.commands.is_empty() {
            return Registry::new(default_commands(workspace));
        }

        let specs = self
            .commands
            .iter()
            .map(|entry| {
                let cwd = entry
                    .cwd
                    .clone()
                    .unwrap_or_else(|| workspace.to_path_buf());
                CommandSpec::new(&entry.name, &entry.program, entry.args.clone(), cwd)
            })
            .collect();
        Registry::new(specs)
    }
}

/// The built-in command set: git status and git fetch in the workspace.
pub fn default_commands(workspace: &Path) -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(
            "status",
            "git",
            vec![
                "status".to_string(),
                "--short".to_string(),
                "--branch".to_string(),
            ],
            workspace,
        ),
        CommandSpec::new(
            "fetch",
            "git",
            vec!["fetch".to_string(), "--progress".to_string()],
            workspace,
        ),
    ]
}
