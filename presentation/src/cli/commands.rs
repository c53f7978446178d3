//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quickask
#[derive(Parser, Debug)]
#[command(name = "quickask")]
#[command(author, version, about = "Ask a local language model one question")]
#[command(long_about = r#"
quickask prompts for a question on standard input, sends it to the llama3
model on an Ollama-compatible server, and prints the answer.

The server location is read from OLLAMA_HOST (default 127.0.0.1:11434) or
from the [server] section of a config file. Configuration files are loaded
from (in priority order):
1. --config <path>     Explicit config file
2. ./quickask.toml     Project-level config
3. ~/.config/quickask/config.toml   Global config

Example:
  echo "What model are you?" | quickask
  OLLAMA_HOST=gpu-box:11434 quickask --stream
"#)]
pub struct Cli {
    /// Write the answer incrementally as it is generated
    #[arg(long)]
    pub stream: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

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
