//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

/// Project-level file names, checked in order
const PROJECT_FILES: [&str; 2] = ["focus.toml", ".focus.toml"];

/// Dotenv file read into the process environment before loading
const DOTENV_FILE: &str = ".env";

/// Prefix for environment overrides (`FOCUS_SERVER__PORT=9000`)
const ENV_PREFIX: &str = "FOCUS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `FOCUS_*` (nested with `__`), then plain `PORT`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./focus.toml` or `./.focus.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/focus-api/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::files(config_path))
            .extract()
            .map_err(Box::new)
    }

    /// Load defaults plus environment overrides (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Self::defaults()).extract().map_err(Box::new)
    }

    /// Read `./.env` (or the nearest one in a parent directory) into the
    /// process environment. Variables already set are left untouched.
    ///
    /// Call before [`ConfigLoader::load`] so both the `FOCUS_*` overrides and
    /// the `OPENAI_KEY*` credentials can come from the file.
    pub fn load_dotenv() -> Option<PathBuf> {
        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded environment file");
                Some(path)
            }
            Err(e) => {
                debug!("No {} loaded: {}", DOTENV_FILE, e);
                None
            }
        }
    }

    fn defaults() -> Figment {
        Figment::new().merge(Serialized::defaults(FileConfig::default()))
    }

    fn files(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Self::defaults();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/focus-api/config.toml if set,
    /// otherwise falls back to ~/.config/focus-api/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("focus-api").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources() -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}* and PORT", ENV_PREFIX));

        let dotenv = PathBuf::from(DOTENV_FILE);
        let marker = if dotenv.exists() { "FOUND" } else { "     " };
        lines.push(format!(
            "  [{}] Dotenv:  ./{} (fills unset variables)",
            marker, DOTENV_FILE
        ));

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./focus.toml or ./.focus.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", marker, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileOpenAiConfig;
    use figment::Jail;

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("focus-api"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file("focus.toml", "[generation]\nmax_goals = 2\nlanguage = \"Spanish\"\n")?;
            jail.create_file("custom.toml", "[generation]\nmax_goals = 3\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.generation.max_goals, 3);
            assert_eq!(config.generation.language, "Spanish");
            assert_eq!(config.generation.generations_per_goal, 1);
            Ok(())
        });
    }

    #[test]
    fn test_env_precedence_over_files() {
        Jail::expect_with(|jail| {
            jail.create_file("focus.toml", "[server]\nport = 9000\n")?;
            assert_eq!(ConfigLoader::load(None).map_err(|e| *e)?.server.port, 9000);

            jail.set_env("PORT", "9100");
            assert_eq!(ConfigLoader::load(None).map_err(|e| *e)?.server.port, 9100);

            jail.set_env("FOCUS_SERVER__PORT", "9200");
            jail.set_env("FOCUS_GENERATION__MAX_GOALS", "3");
            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.port, 9200);
            assert_eq!(config.generation.max_goals, 3);
            Ok(())
        });
    }

    #[test]
    fn test_without_files_keeps_env_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file("focus.toml", "[generation]\nmax_goals = 2\n")?;
            jail.set_env("FOCUS_GENERATION__LANGUAGE", "English");
            jail.set_env("PORT", "9300");

            let config = ConfigLoader::load_without_files().map_err(|e| *e)?;
            assert_eq!(config.generation.max_goals, 6);
            assert_eq!(config.generation.language, "English");
            assert_eq!(config.server.port, 9300);
            Ok(())
        });
    }

    #[test]
    fn test_dotenv_supplies_credentials() {
        Jail::expect_with(|jail| {
            jail.create_file(".env", "DOTENV_TEST_OPENAI_KEY=sk-from-dotenv\n")?;

            let loaded = ConfigLoader::load_dotenv();
            assert!(loaded.is_some_and(|path| path.ends_with(".env")));

            let openai = FileOpenAiConfig {
                api_key_env: "DOTENV_TEST_OPENAI_KEY".to_string(),
                key_slots: 0,
                ..FileOpenAiConfig::default()
            };
            let credentials = openai.resolve_credentials();
            assert_eq!(credentials.len(), 1);
            assert_eq!(credentials[0].expose(), "sk-from-dotenv");

            let sources = ConfigLoader::describe_sources();
            assert!(sources.iter().any(|line| line.contains("[FOUND] Dotenv")));
            Ok(())
        });
    }

    #[test]
    fn test_dotenv_does_not_override_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("DOTENV_TEST_PRESET", "from-env");
            jail.create_file(".env", "DOTENV_TEST_PRESET=from-file\n")?;

            ConfigLoader::load_dotenv();
            assert_eq!(std::env::var("DOTENV_TEST_PRESET").as_deref(), Ok("from-env"));
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_lists_defaults_last() {
        let lines = ConfigLoader::describe_sources();
        assert!(lines[0].starts_with("Configuration sources"));
        assert!(lines.last().unwrap().contains("built-in defaults"));
    }
}
