//! Configuration loading for focus-api
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FOCUS_*` environment variables and `PORT`
//! 2. `--config <path>` specified file
//! 3. Project root: `./focus.toml` or `./.focus.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/focus-api/config.toml`
//! 5. Default values
//!
//! API keys are not part of the merge: they are resolved from `OPENAI_KEY_N`
//! / `OPENAI_KEY` by [`FileOpenAiConfig::resolve_credentials`].

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGenerationConfig, FileLoggingConfig, FileOpenAiConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
