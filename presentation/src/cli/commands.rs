//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for parley
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(version, about = "Interactive chat with an OpenAI-compatible completion API")]
#[command(long_about = r#"
Parley starts an interactive chat session against a hosted completion API.

Type a message and press enter to send it; the full conversation history is
resent with every request. Control commands (case-insensitive):
  exit / quit / bye   end the session
  clear               reset the conversation history

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./parley.toml       Project-level config
3. ~/.config/parley/config.toml   Global config

The API key is read from the OPENAI_API_KEY environment variable (the
variable name is configurable via provider.api_key_env).

Example:
  parley
  parley -m gpt-4o-mini
"#)]
pub struct Cli {
    /// Model to chat with
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the in-flight spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
