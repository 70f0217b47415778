//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for focus-api
#[derive(Parser, Debug)]
#[command(name = "focus-api")]
#[command(author, version, about = "Motivational phrase generator over HTTP")]
#[command(long_about = r#"
focus-api serves POST /frases: every goal in the request is sent to the
chat-completion API concurrently (one key per call, rotated round-robin)
and the phrases from all replies are returned as one JSON list.

API keys are read from OPENAI_KEY_1..OPENAI_KEY_N, or OPENAI_KEY.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./focus.toml        Project-level config
3. ~/.config/focus-api/config.toml   Global config

Environment overrides use FOCUS_<SECTION>__<KEY>, plus PORT.

Example:
  focus-api --port 8080 -v
  curl -X POST localhost:8080/frases -d '{"goals": ["run a marathon"]}'
"#)]
pub struct Cli {
    /// Address to bind (overrides server.bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Port to listen on (overrides server.port and PORT)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Default tracing filter for the given `-v` count
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
