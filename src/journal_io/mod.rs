//! Journal file persistence.
//!
//! The journal is read fully into a `Document`, changed in memory, and written
//! back over the original file in one go. There is no locking; two runs at the
//! same time race and the last writer wins.

use crate::document::Document;
use crate::errors::{AppError, AppResult};
use crate::journal::{AppendTarget, Entry};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use tracing::{debug, info};

/// Loads the journal at `path`.
///
/// A journal that does not exist yet loads as an empty document.
///
/// # Errors
///
/// Returns `AppError::Io` if the file exists but cannot be opened or read.
pub fn load_journal(path: &Path) -> AppResult<Document> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No journal at {:?}, starting empty", path);
            return Ok(Document::new());
        }
        Err(e) => {
            return Err(AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to open journal file {}: {}", path.display(), e),
            )))
        }
    };

    Document::read_from(BufReader::new(file))
}

/// Overwrites the journal at `path` with `document`.
///
/// Missing parent directories are created. A journal created here is
/// readable and writable by its owner only.
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be created or written. A failed
/// write may leave the file truncated.
pub fn save_journal(path: &Path, document: &Document) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = create_journal_file(path)?;
    let mut writer = BufWriter::new(file);
    document.write_to(&mut writer)?;
    writer.flush()?;

    debug!(lines = document.len(), "Wrote journal to {:?}", path);
    Ok(())
}

fn create_journal_file(path: &Path) -> AppResult<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    // Only applies when the file is created; existing permissions are kept
    #[cfg(unix)]
    options.mode(crate::constants::DEFAULT_FILE_PERMISSIONS);

    options.open(path).map_err(|e| {
        AppError::Io(io::Error::new(
            e.kind(),
            format!("Failed to create journal file {}: {}", path.display(), e),
        ))
    })
}

/// Adds `entries` to the journal at `path` under `target` and saves it.
///
/// This is one full read-modify-write cycle. The updated document is returned.
pub fn append_entries(
    path: &Path,
    target: &AppendTarget,
    entries: &[Entry],
) -> AppResult<Document> {
    let mut document = load_journal(path)?;
    let lines: Vec<String> = entries.iter().map(Entry::to_line).collect();

    target.apply(&mut document, &lines)?;
    save_journal(path, &document)?;

    info!(count = entries.len(), "Appended entries to journal");
    Ok(document)
}
