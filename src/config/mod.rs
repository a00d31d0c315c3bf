//! Configuration management for the jot application.
//!
//! Settings come from the environment:
//!
//! - `EDITOR`: Editor used to open the journal (required)
//! - `JOT_FILE`: Path to the journal file (defaults to `~/.j.md`)
//! - `HOME`: Used to locate the default journal file

use crate::constants::{
    DEFAULT_JOURNAL_FILENAME, EDITOR_FORBIDDEN_CHARS, ENV_VAR_EDITOR, ENV_VAR_HOME,
    ENV_VAR_JOT_FILE, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the jot application.
///
/// # Examples
///
/// ```
/// use jot::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     editor: "nano".to_string(),
///     journal_file: PathBuf::from("/home/me/.j.md"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Editor command used when no entries are given.
    pub editor: String,

    /// The single markdown file every entry is written to.
    pub journal_file: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("editor", &REDACTED_PLACEHOLDER)
            .field("journal_file", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Config {
    /// Validates an editor command string for security.
    ///
    /// The command must be non-empty and free of spaces and shell
    /// metacharacters. Editors that need arguments go behind a wrapper script.
    fn validate_editor_command(editor_cmd: &str) -> AppResult<&str> {
        if editor_cmd.is_empty() {
            return Err(AppError::Config(format!(
                "{} is not set",
                ENV_VAR_EDITOR
            )));
        }

        if editor_cmd.contains(' ') {
            return Err(AppError::Config(
                "Editor command cannot contain spaces. Use a wrapper script or shell alias for editors requiring arguments".to_string(),
            ));
        }

        if let Some(ch) = editor_cmd
            .chars()
            .find(|ch| EDITOR_FORBIDDEN_CHARS.contains(ch))
        {
            return Err(AppError::Config(format!(
                "Editor command cannot contain shell metacharacters: '{}'. Use a wrapper script or shell alias instead",
                ch
            )));
        }

        Ok(editor_cmd)
    }

    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `EDITOR` is unset, empty, or fails validation
    /// - `JOT_FILE` cannot be expanded
    /// - `JOT_FILE` is unset and the home directory cannot be determined
    pub fn load() -> AppResult<Self> {
        let editor_raw = env::var(ENV_VAR_EDITOR).unwrap_or_default();
        let editor = Config::validate_editor_command(&editor_raw)?.to_string();

        let journal_file = match env::var(ENV_VAR_JOT_FILE) {
            Ok(raw) if !raw.is_empty() => {
                let expanded = shellexpand::full(&raw).map_err(|e| {
                    AppError::Config(format!("Failed to expand {}: {}", ENV_VAR_JOT_FILE, e))
                })?;
                PathBuf::from(expanded.into_owned())
            }
            _ => Config::home_dir()?.join(DEFAULT_JOURNAL_FILENAME),
        };

        let config = Config {
            editor,
            journal_file,
        };
        config.validate()?;
        Ok(config)
    }

    fn home_dir() -> AppResult<PathBuf> {
        match env::var(ENV_VAR_HOME) {
            Ok(home) if !home.is_empty() => Ok(PathBuf::from(home)),
            _ => Err(AppError::Config(format!(
                "Cannot determine home directory: {} is not set",
                ENV_VAR_HOME
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the editor or the journal path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.editor.is_empty() {
            return Err(AppError::Config("Editor command is empty".to_string()));
        }

        if self.journal_file.as_os_str().is_empty() {
            return Err(AppError::Config("Journal file path is empty".to_string()));
        }

        Ok(())
    }
}
