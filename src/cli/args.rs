//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translation keys used under a directory
//! - `types`: List supported project types
//! - `init`: Initialize keysweep configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.args.common.verbose,
            Some(Command::Types) | Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project type to extract keys for (overrides config file)
    #[arg(long, env = "KEYSWEEP_PROJECT_TYPE")]
    pub project_type: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One key per line
    #[default]
    Text,
    /// Keys, scanned files and skipped paths as a JSON object
    Json,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 if any file or directory could not be read
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the translation keys referenced in a source tree
    Extract(ExtractCommand),
    /// List supported project types
    Types,
    /// Initialize a new .keysweeprc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
