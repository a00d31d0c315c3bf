//! In-memory model of the journal file.
//!
//! A `Document` is the file's lines in order plus an index from header-line
//! text to the line it sits on. Both live behind the same set of methods so
//! the index can never drift from the lines it describes: for every indexed
//! header `h`, `lines[headers[h]] == h`.
//!
//! A header is any line matching `^#+ +.*`. Depth is ignored; `## B` ends the
//! section started by `# A` just as `# B` would.


use crate::constants::{HEADER_PATTERN, TRAILING_WHITESPACE};
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;
use tracing::debug;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEADER_PATTERN).unwrap());

/// Returns true if `line` counts as a section header.
///
/// ```
/// use jot::document::is_header;
///
/// assert!(is_header("# (Fri) Mar 14 2025"));
/// assert!(is_header("### Work"));
/// assert!(!is_header("#hashtag"));
/// assert!(!is_header("- [ ] # not a header"));
/// ```
pub fn is_header(line: &str) -> bool {
    HEADER_RE.is_match(line)
}

/// Lines of a journal file and the positions of its headers.
///
/// # Examples
///
/// ```
/// use jot::document::Document;
///
/// let mut doc = Document::parse("# Work\nship it\n# Home\nwater plants\n");
/// doc.append_to_section("# Work", ["review PR"]).unwrap();
///
/// assert_eq!(
///     doc.to_string(),
///     "# Work\nship it\nreview PR\n# Home\nwater plants\n"
/// );
/// assert_eq!(doc.header_position("# Home"), Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    headers: HashMap<String, usize>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses persisted journal text.
    ///
    /// Lines are split on `\n` and stripped of trailing spaces, tabs and
    /// carriage returns. A missing final newline does not drop the last line,
    /// and a present one does not add an empty line. When the same header text
    /// appears twice, the later occurrence is the one indexed.
    pub fn parse(text: &str) -> Self {
        let mut document = Document::new();
        for raw in text.split_terminator('\n') {
            document.push_line(raw);
        }
        document
    }

    /// Parses a document from a buffered reader.
    ///
    /// End of input ends the document. Any other read failure is returned
    /// rather than treated as the end of the file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the reader fails, including on invalid UTF-8.
    pub fn read_from<R: BufRead>(mut reader: R) -> AppResult<Self> {
        let mut document = Document::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            document.push_line(&buf);
        }
        debug!(
            lines = document.lines.len(),
            headers = document.headers.len(),
            "Parsed journal document"
        );
        Ok(document)
    }

    fn push_line(&mut self, raw: &str) {
        let line = raw.trim_end_matches(TRAILING_WHITESPACE);
        if is_header(line) {
            self.headers.insert(line.to_string(), self.lines.len());
        }
        self.lines.push(line.to_string());
    }

    /// The document's lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line index of the header with exactly this text, if indexed.
    pub fn header_position(&self, header: &str) -> Option<usize> {
        self.headers.get(header).copied()
    }

    /// Indexed headers and their positions, in no particular order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, usize)> {
        self.headers.iter().map(|(text, &pos)| (text.as_str(), pos))
    }

    /// Splices `new_lines` into the document so the first of them lands at
    /// `position`.
    ///
    /// Every header recorded at or after `position` moves down by the number
    /// of inserted lines. Inserted lines that look like headers are indexed
    /// with the same later-occurrence-wins rule `parse` applies.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` if `position` is past the end of the
    /// document. The document is left unchanged.
    pub fn insert_at<I, S>(&mut self, position: usize, new_lines: I) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if position > self.lines.len() {
            return Err(AppError::Journal(format!(
                "Insertion position {} is past the end of the document ({} lines)",
                position,
                self.lines.len()
            )));
        }

        let new_lines: Vec<String> = new_lines.into_iter().map(Into::into).collect();
        let count = new_lines.len();
        if count == 0 {
            return Ok(());
        }

        for recorded in self.headers.values_mut() {
            if *recorded >= position {
                *recorded += count;
            }
        }

        for (offset, line) in new_lines.iter().enumerate() {
            if is_header(line) {
                let index = position + offset;
                self.headers
                    .entry(line.clone())
                    .and_modify(|recorded| {
                        if *recorded < index {
                            *recorded = index;
                        }
                    })
                    .or_insert(index);
            }
        }

        self.lines.splice(position..position, new_lines);
        Ok(())
    }

    /// Where new lines for `header`'s section belong.
    ///
    /// That is the position of the nearest header below it, or the end of the
    /// document when it is the last section. Returns `None` if the header is
    /// not in the document.
    pub fn find_section_insertion_point(&self, header: &str) -> Option<usize> {
        let start = *self.headers.get(header)?;
        let end = self.lines.len();
        let next = self
            .headers
            .values()
            .copied()
            .filter(|&pos| pos > start && pos < end)
            .min();
        Some(next.unwrap_or(end))
    }

    /// Appends `new_lines` to the end of `header`'s section.
    ///
    /// A section that does not exist yet is created at the very top of the
    /// document, header first. The new header is indexed even if it does not
    /// look like one, so later appends to this document find it. If the new
    /// lines repeat the header, the later copy is the indexed one.
    pub fn append_to_section<I, S>(&mut self, header: &str, new_lines: I) -> AppResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.find_section_insertion_point(header) {
            Some(position) => {
                debug!(header, position, "Appending to existing section");
                self.insert_at(position, new_lines)
            }
            None => {
                debug!(header, "Creating section at top of document");
                let lines = std::iter::once(header.to_string())
                    .chain(new_lines.into_iter().map(Into::into));
                self.insert_at(0, lines)?;
                // Titles that look like headers were indexed by insert_at
                self.headers.entry(header.to_string()).or_insert(0);
                Ok(())
            }
        }
    }

    /// Writes every line followed by `\n`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
