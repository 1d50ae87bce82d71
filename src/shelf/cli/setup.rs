use clap::{Parser, Subcommand, ValueEnum};
use shelf::api::SortKey;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Keep a small catalog of books from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load and save (defaults to the configured data-file)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, env = "SHELF_HOME", help_heading = "Options")]
    pub home: Option<PathBuf>,

    /// Log verbosity (RUST_LOG overrides it)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn, help_heading = "Options")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (the default)
    Menu,

    /// Print the catalog file as a table
    #[command(alias = "ls")]
    List {
        /// Sort before printing
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Only books whose title contains this text
        #[arg(short, long)]
        title: Option<String>,

        /// Only books whose author contains this text
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, autoload, autosave)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Price,
    Year,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Price => SortKey::Price,
            SortArg::Year => SortKey::Year,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Logs go to stderr so they never mix with menu output on stdout.
pub fn initialize_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["shelf"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn parses_list_options() {
        let cli = Cli::try_parse_from([
            "shelf", "list", "--sort", "year", "--author", "herbert", "-f", "b.txt",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("b.txt")));
        match cli.command {
            Some(Commands::List {
                sort,
                title,
                author,
            }) => {
                assert_eq!(sort, Some(SortArg::Year));
                assert_eq!(title, None);
                assert_eq!(author.as_deref(), Some("herbert"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_config_set() {
        let cli = Cli::try_parse_from(["shelf", "config", "autosave", "true"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("autosave"));
                assert_eq!(value.as_deref(), Some("true"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_sort_key() {
        assert!(Cli::try_parse_from(["shelf", "list", "--sort", "title"]).is_err());
    }

    #[test]
    fn log_level_maps_to_directive() {
        let cli = Cli::try_parse_from(["shelf", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.to_filter_directive(), "debug");
    }

    #[test]
    fn sort_arg_converts_to_key() {
        assert_eq!(SortKey::from(SortArg::Price), SortKey::Price);
        assert_eq!(SortKey::from(SortArg::Year), SortKey::Year);
    }
}
