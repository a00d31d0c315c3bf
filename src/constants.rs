//! Constants used throughout the application.
//!
//! This module contains all constants used in the jot application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "jot";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Append notes and todos to a single markdown journal";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable naming the editor command. Required.
pub const ENV_VAR_EDITOR: &str = "EDITOR";
/// Environment variable overriding the journal file location.
pub const ENV_VAR_JOT_FILE: &str = "JOT_FILE";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Journal file name inside the user's home directory.
pub const DEFAULT_JOURNAL_FILENAME: &str = ".j.md";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// Default POSIX permissions for a newly created journal file (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Document Format
/// Pattern a line must match to count as a section header.
pub const HEADER_PATTERN: &str = "^#+ +.*";
/// Characters stripped from the end of every parsed line.
pub const TRAILING_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];
/// Marker prepended to todo entries.
pub const TODO_PREFIX: &str = "- [ ] ";
/// chrono format for dated section headers, e.g. `# (Fri) Mar 14 2025`.
pub const DATE_HEADER_FORMAT: &str = "# (%a) %b %-d %Y";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "jot";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
