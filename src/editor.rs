//! Editor abstraction for opening the journal file.
//!
//! This module provides an abstraction for opening the journal in an external
//! editor, so the binary can be tested without launching a real one.

use crate::errors::{AppResult, EditorError};
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Trait defining the interface for an editor component.
///
/// # Examples
///
/// ```
/// use jot::editor::Editor;
/// use jot::errors::AppResult;
/// use std::path::Path;
///
/// struct DummyEditor;
///
/// impl Editor for DummyEditor {
///     fn open(&self, path: &Path) -> AppResult<()> {
///         println!("Would open {}", path.display());
///         Ok(())
///     }
/// }
///
/// DummyEditor.open(Path::new("journal.md")).unwrap();
/// ```
pub trait Editor {
    /// Opens `path` and blocks until the editor exits.
    ///
    /// # Errors
    ///
    /// Different implementations may return different errors when opening fails.
    fn open(&self, path: &Path) -> AppResult<()>;
}

/// An `Editor` that runs a system command with the file as its only argument.
///
/// The editor inherits this process's stdin, stdout, stderr and environment.
///
/// # Examples
///
/// ```no_run
/// use jot::editor::{Editor, SystemEditor};
/// use std::path::Path;
///
/// let editor = SystemEditor {
///     editor_cmd: "vim".to_string(),
/// };
/// editor.open(Path::new("/home/me/.j.md")).expect("Failed to open journal");
/// ```
pub struct SystemEditor {
    /// The command to use for opening files (e.g., "vim", "nano").
    pub editor_cmd: String,
}

impl Editor for SystemEditor {
    /// # Errors
    ///
    /// Returns `AppError::Editor` with:
    /// - `EditorError::CommandNotFound` if the editor command doesn't exist
    /// - `EditorError::PermissionDenied` if the editor cannot be executed
    /// - `EditorError::ExecutionFailed` for other spawn failures
    /// - `EditorError::NonZeroExit` if the editor exits unsuccessfully
    fn open(&self, path: &Path) -> AppResult<()> {
        debug!("Launching editor: {} {:?}", self.editor_cmd, path);

        let status = Command::new(&self.editor_cmd)
            .arg(path)
            .status()
            .map_err(|e| spawn_error(&self.editor_cmd, e))?;

        if status.success() {
            Ok(())
        } else {
            Err(EditorError::NonZeroExit {
                command: self.editor_cmd.clone(),
                status_code: status.code().unwrap_or(-1),
            }
            .into())
        }
    }
}

fn spawn_error(command: &str, source: io::Error) -> EditorError {
    let command = command.to_string();
    match source.kind() {
        io::ErrorKind::NotFound => EditorError::CommandNotFound { command, source },
        io::ErrorKind::PermissionDenied => EditorError::PermissionDenied { command, source },
        _ => EditorError::ExecutionFailed { command, source },
    }
}
