//! CLI module for tubesum.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// tubesum - YouTube transcripts and LLM summaries
///
/// Fetches video transcripts and summarizes them, from the command line or over HTTP.
#[derive(Parser, Debug)]
#[command(name = "tubesum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TUBESUM_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the transcript of a video
    Transcript {
        /// YouTube video ID
        video_id: String,
    },

    /// Summarize a video's transcript
    Summary {
        /// YouTube video ID
        video_id: String,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Summarize arbitrary text
    SummarizeText {
        /// Text to summarize
        text: String,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["tubesum", "serve", "--host", "0.0.0.0", "-p", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_summary_with_model() {
        let cli = Cli::try_parse_from(["tubesum", "-vv", "summary", "abc12", "--model", "gpt-4o"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Summary { video_id, model } => {
                assert_eq!(video_id, "abc12");
                assert_eq!(model.as_deref(), Some("gpt-4o"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_summarize_text_subcommand_name() {
        let cli = Cli::try_parse_from(["tubesum", "summarize-text", "some long text"]).unwrap();
        assert!(matches!(cli.command, Commands::SummarizeText { .. }));
    }
}
