//! Journal operations built on the document model.
//!
//! Entries go either under a dated header for the day they were written, or
//! under a section the caller names. Nothing here touches the disk.

use crate::constants::{DATE_HEADER_FORMAT, TODO_PREFIX, TRAILING_WHITESPACE};
use crate::document::{is_header, Document};
use crate::errors::AppResult;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// A single line queued for the journal.
///
/// ```
/// use jot::journal::Entry;
///
/// assert_eq!(Entry::Note("call mom".to_string()).to_line(), "call mom");
/// assert_eq!(Entry::Todo("buy milk".to_string()).to_line(), "- [ ] buy milk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Freeform text, written as-is.
    Note(String),
    /// A todo item, written with an unchecked checkbox in front.
    Todo(String),
}

impl Entry {
    /// Renders the entry as the line stored in the journal.
    pub fn to_line(&self) -> String {
        match self {
            Entry::Note(text) => text.clone(),
            Entry::Todo(text) => format!("{}{}", TODO_PREFIX, text),
        }
    }
}

/// Which section a batch of entries goes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendTarget {
    /// The dated section for this day.
    Dated(NaiveDate),
    /// A section identified by its literal header text.
    Named(String),
}

impl AppendTarget {
    /// Picks the named section if one was given, otherwise today's.
    pub fn from_section(section: Option<String>, today: NaiveDate) -> Self {
        match section {
            Some(title) => AppendTarget::Named(title),
            None => AppendTarget::Dated(today),
        }
    }

    /// Appends `lines` to the section this target names.
    pub fn apply(&self, document: &mut Document, lines: &[String]) -> AppResult<()> {
        match self {
            AppendTarget::Dated(date) => append_dated(document, *date, lines),
            AppendTarget::Named(title) => append_named(document, title, lines),
        }
    }
}

/// Header text for the section holding a day's entries.
///
/// ```
/// use chrono::NaiveDate;
/// use jot::journal::date_header;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
/// assert_eq!(date_header(date), "# (Fri) Mar 14 2025");
/// ```
pub fn date_header(date: NaiveDate) -> String {
    date.format(DATE_HEADER_FORMAT).to_string()
}

/// Appends `lines` to the section for `date`, creating it at the top of the
/// document if this is the first entry of the day.
pub fn append_dated(document: &mut Document, date: NaiveDate, lines: &[String]) -> AppResult<()> {
    let header = date_header(date);
    debug!(header = %header, count = lines.len(), "Appending to dated section");
    document.append_to_section(&header, lines.iter().cloned())
}

/// Appends `lines` to the section whose header is exactly `title`.
///
/// The title is used verbatim apart from trailing whitespace, which parsing
/// would strip anyway; no `#` is added. Pass the same text every time to keep
/// entries grouped.
pub fn append_named(document: &mut Document, title: &str, lines: &[String]) -> AppResult<()> {
    let title = title.trim_end_matches(TRAILING_WHITESPACE);
    if !is_header(title) {
        warn!(
            section = title,
            "Section title is not a markdown header; it will not be recognized the next time the journal is read"
        );
    }
    debug!(section = title, count = lines.len(), "Appending to named section");
    document.append_to_section(title, lines.iter().cloned())
}
