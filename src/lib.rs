/*!
# Jot

Jot appends notes and todo items to a single markdown journal, grouped under
header sections, or opens the journal in your editor when given nothing to add.

## Core Features

- Add notes (`-m`, `note ...`) and todos (`-t`, `todo ...`) under today's dated header
- Target any other section by its exact header text (`-s`)
- New sections are created at the top of the journal
- Open the journal in `$EDITOR` when no entries are given

## Architecture

- `document`: Line-and-header model of the journal file
- `journal`: Dated and named section operations, entry rendering
- `journal_io`: Loading and saving the journal file
- `editor`: Launching the external editor
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust
use chrono::NaiveDate;
use jot::document::Document;
use jot::journal;

fn main() -> jot::AppResult<()> {
    let mut doc = Document::parse("# (Thu) Mar 13 2025\nolder note\n");
    let today = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();

    journal::append_dated(&mut doc, today, &["- [ ] buy milk".to_string()])?;

    assert_eq!(
        doc.to_string(),
        "# (Fri) Mar 14 2025\n- [ ] buy milk\n# (Thu) Mar 13 2025\nolder note\n"
    );
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// In-memory journal document
pub mod document;
/// Launching the external editor
pub mod editor;
/// Error types and utilities for error handling
pub mod errors;
/// Section-level journal operations
pub mod journal;
/// Journal file persistence
pub mod journal_io;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use document::Document;
pub use errors::{AppError, AppResult};
pub use journal::{AppendTarget, Entry};
