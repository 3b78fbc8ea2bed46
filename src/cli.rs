//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// eventdesk - event planning assistant client
#[derive(Parser)]
#[command(
    name = "eventdesk",
    about = "Event planning assistant client: facts, summaries, posters and rules",
    version = env!("CARGO_PKG_VERSION"),
    after_help = "Logs are written to: ~/.local/share/eventdesk/logs/eventdesk.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// List the recorded facts
    Facts {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Save a pending fact
    Save {
        /// Fact ID
        fact_id: String,
    },

    /// Discard a fact
    Discard {
        /// Fact ID
        fact_id: String,
    },

    /// Print the markdown document that would be summarized
    Markdown {
        /// Read facts from a JSON file instead of the backend
        #[arg(long, value_name = "PATH")]
        facts_file: Option<PathBuf>,
    },

    /// Generate the event summary, poster and rules
    Summarize {
        /// Read facts from a JSON file instead of the backend
        #[arg(long, value_name = "PATH")]
        facts_file: Option<PathBuf>,

        /// Override the venue delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write the rules document to this file
        #[arg(long, value_name = "PATH")]
        rules_out: Option<PathBuf>,
    },

    /// Check that the backend is up
    Health,
}

/// Output format for listing commands
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Get the log file path
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eventdesk")
        .join("logs")
        .join("eventdesk.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["eventdesk"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_facts_json() {
        let cli = Cli::parse_from(["eventdesk", "facts", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Some(Command::Facts {
                format: OutputFormat::Json
            })
        ));
    }

    #[test]
    fn test_cli_parse_discard() {
        let cli = Cli::parse_from(["eventdesk", "discard", "fact_42"]);
        if let Some(Command::Discard { fact_id }) = cli.command {
            assert_eq!(fact_id, "fact_42");
        } else {
            panic!("Expected Discard command");
        }
    }

    #[test]
    fn test_cli_parse_summarize() {
        let cli = Cli::parse_from([
            "eventdesk",
            "summarize",
            "--facts-file",
            "facts.json",
            "--delay-ms",
            "0",
            "--rules-out",
            "rules.md",
        ]);
        if let Some(Command::Summarize {
            facts_file,
            delay_ms,
            format,
            rules_out,
        }) = cli.command
        {
            assert_eq!(facts_file, Some(PathBuf::from("facts.json")));
            assert_eq!(delay_ms, Some(0));
            assert!(matches!(format, OutputFormat::Text));
            assert_eq!(rules_out, Some(PathBuf::from("rules.md")));
        } else {
            panic!("Expected Summarize command");
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!("table".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["eventdesk", "-c", "/path/to/config.yml", "health"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
        assert!(matches!(cli.command, Some(Command::Health)));
    }
}
