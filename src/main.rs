/*!
# Jot - Markdown Journal Appender

Appends notes and todos to `~/.j.md` under a header for today, or under any
section named with `-s`. With nothing to add, opens the journal in `$EDITOR`.

## Usage

```text
jot [OPTIONS] [COMMAND]

Commands:
  todo  Add the remaining words as one todo [aliases: to]
  note  Add the remaining words as one note

Options:
  -s, --section <SECTION>     Section header to append to, matched by exact text
  -m, --message <TEXT>        Queue a note line (repeatable)
  -t, --todo <TEXT>           Queue a todo line (repeatable)
  -v, --verbose               Print verbose output
      --log-format <FORMAT>   Log output format [default: text] [possible values: text, json]
```

## Configuration

- `EDITOR`: Editor command (required)
- `JOT_FILE`: Journal file path (defaults to `~/.j.md`)
- `RUST_LOG`: Overrides the log filter
*/

use chrono::Local;
use jot::cli::CliArgs;
use jot::config::Config;
use jot::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use jot::editor::{Editor, SystemEditor};
use jot::errors::AppResult;
use jot::journal::AppendTarget;
use jot::journal_io;
use std::process::ExitCode;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

fn init_logging(args: &CliArgs) {
    let default_level = if args.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if args.log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Runs one invocation: either a single read-modify-write of the journal, or
/// one editor session.
fn run(args: CliArgs) -> AppResult<()> {
    // Obtain the date once so every entry lands under the same header
    let today = Local::now().date_naive();

    let config = Config::load()?;
    debug!("Loaded configuration: {:?}", config);

    let entries = args.entries();
    if entries.is_empty() {
        info!("No entries given, opening journal in editor");
        let editor = SystemEditor {
            editor_cmd: config.editor.clone(),
        };
        return editor.open(&config.journal_file);
    }

    let target = AppendTarget::from_section(args.section, today);
    journal_io::append_entries(&config.journal_file, &target, &entries)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args);

    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %uuid::Uuid::new_v4()
    );
    let _guard = span.enter();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Invocation failed");
            eprintln!("Error: {}", e);
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}
