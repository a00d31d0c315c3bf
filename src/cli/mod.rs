use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::journal::Entry;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};

/// Append notes and todos to a single markdown journal
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Section header to append to, matched by exact text (e.g. "# Work")
    #[clap(short = 's', long = "section", value_name = "SECTION",
           allow_hyphen_values = true, overrides_with = "section")]
    pub section: Option<String>,

    /// Queue a note line (repeatable)
    #[clap(short = 'm', long = "message", value_name = "TEXT", allow_hyphen_values = true)]
    pub messages: Vec<String>,

    /// Queue a todo line, written as "- [ ] TEXT" (repeatable)
    #[clap(short = 't', long = "todo", value_name = "TEXT", allow_hyphen_values = true)]
    pub todos: Vec<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, value_name = "FORMAT", default_value = LOG_FORMAT_TEXT,
           value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Entries from -m/-t in command-line order
    #[clap(skip)]
    ordered: Vec<Entry>,
}

/// Trailing forms that swallow the rest of the command line as one entry.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the remaining words as one todo
    #[clap(visible_alias = "to", disable_help_flag = true)]
    Todo {
        #[clap(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Add the remaining words as one note
    #[clap(disable_help_flag = true)]
    Note {
        #[clap(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

impl Commands {
    fn to_entry(&self) -> Entry {
        match self {
            Commands::Todo { words } => Entry::Todo(words.join(" ")),
            Commands::Note { words } => Entry::Note(words.join(" ")),
        }
    }
}

impl CliArgs {
    /// Parse command-line arguments, exiting with a usage error on failure
    pub fn parse() -> Self {
        Self::try_parse_from(std::env::args()).unwrap_or_else(|e| e.exit())
    }

    /// Parse arguments from an iterator, keeping the relative order of -m and -t
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(itr)?;
        let mut args = Self::from_arg_matches(&matches)?;
        args.ordered = ordered_flag_entries(&matches);
        Ok(args)
    }

    /// Every queued entry: flags in the order given, then the trailing subcommand
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries = self.ordered.clone();
        if let Some(command) = &self.command {
            entries.push(command.to_entry());
        }
        entries
    }
}

fn ordered_flag_entries(matches: &ArgMatches) -> Vec<Entry> {
    let mut indexed: Vec<(usize, Entry)> = Vec::new();
    collect_indexed(matches, "messages", Entry::Note, &mut indexed);
    collect_indexed(matches, "todos", Entry::Todo, &mut indexed);
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, entry)| entry).collect()
}

fn collect_indexed(
    matches: &ArgMatches,
    id: &str,
    make: fn(String) -> Entry,
    out: &mut Vec<(usize, Entry)>,
) {
    if let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<String>(id)) {
        out.extend(indices.zip(values).map(|(i, v)| (i, make(v.clone()))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_default_args() {
        let args = parse(&["jot"]);
        assert!(args.section.is_none());
        assert!(args.entries().is_empty());
        assert!(!args.verbose);
        assert_eq!(args.log_format, LOG_FORMAT_TEXT);
    }

    #[test]
    fn test_message_and_todo_flags_keep_order() {
        let args = parse(&["jot", "-t", "first", "-m", "second", "--todo", "third"]);

        assert_eq!(
            args.entries(),
            vec![
                Entry::Todo("first".to_string()),
                Entry::Note("second".to_string()),
                Entry::Todo("third".to_string()),
            ]
        );
    }

    #[test]
    fn test_section_flag() {
        let args = parse(&["jot", "-s", "# Work", "-m", "standup"]);

        assert_eq!(args.section.as_deref(), Some("# Work"));
        assert_eq!(args.entries(), vec![Entry::Note("standup".to_string())]);
    }

    #[test]
    fn test_section_alone_has_no_entries() {
        let args = parse(&["jot", "-s", "# Work"]);
        assert!(args.entries().is_empty());
    }

    #[test]
    fn test_todo_subcommand_joins_words() {
        for name in ["todo", "to"] {
            let args = parse(&["jot", name, "buy", "oat", "milk"]);
            assert_eq!(args.entries(), vec![Entry::Todo("buy oat milk".to_string())]);
        }
    }

    #[test]
    fn test_note_subcommand_swallows_flags() {
        let args = parse(&["jot", "note", "remember", "-m", "is", "literal"]);
        assert_eq!(
            args.entries(),
            vec![Entry::Note("remember -m is literal".to_string())]
        );
    }

    #[test]
    fn test_flags_then_subcommand() {
        let args = parse(&["jot", "-s", "# Home", "-m", "a", "todo", "fix", "sink"]);

        assert_eq!(args.section.as_deref(), Some("# Home"));
        assert_eq!(
            args.entries(),
            vec![
                Entry::Note("a".to_string()),
                Entry::Todo("fix sink".to_string()),
            ]
        );
    }

    #[test]
    fn test_usage_errors() {
        assert!(CliArgs::try_parse_from(["jot", "-m"]).is_err());
        assert!(CliArgs::try_parse_from(["jot", "-s"]).is_err());
        assert!(CliArgs::try_parse_from(["jot", "todo"]).is_err());
        assert!(CliArgs::try_parse_from(["jot", "note"]).is_err());
        assert!(CliArgs::try_parse_from(["jot", "bogus"]).is_err());
        assert!(CliArgs::try_parse_from(["jot", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn test_verbose_and_log_format() {
        let args = parse(&["jot", "-v", "--log-format", "json"]);
        assert!(args.verbose);
        assert_eq!(args.log_format, LOG_FORMAT_JSON);
    }

    #[test]
    fn test_flag_values_may_start_with_hyphen() {
        let args = parse(&["jot", "-m", "-3 degrees this morning", "-t", "-x"]);
        assert_eq!(
            args.entries(),
            vec![
                Entry::Note("-3 degrees this morning".to_string()),
                Entry::Todo("-x".to_string()),
            ]
        );

        let args = parse(&["jot", "-s", "-draft", "-m", "x"]);
        assert_eq!(args.section.as_deref(), Some("-draft"));
    }

    #[test]
    fn test_subcommand_words_are_literal() {
        let args = parse(&["jot", "note", "--help", "me"]);
        assert_eq!(args.entries(), vec![Entry::Note("--help me".to_string())]);

        let args = parse(&["jot", "to", "-h", "-s", "x"]);
        assert_eq!(args.entries(), vec![Entry::Todo("-h -s x".to_string())]);
    }

    #[test]
    fn test_last_section_wins() {
        let args = parse(&["jot", "-s", "# First", "-s", "# Second", "-m", "x"]);
        assert_eq!(args.section.as_deref(), Some("# Second"));
    }

    #[test]
    fn test_command_definition() {
        CliArgs::command().debug_assert();
    }
}
