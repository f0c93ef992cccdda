// src/config.rs
use std::{env, path::PathBuf, str::FromStr};
use thiserror::Error;

pub const STORE_VAR: &str = "ARTICLECLI_STORE";
pub const LOG_VAR: &str = "ARTICLECLI_LOG";
pub const FORMAT_VAR: &str = "ARTICLECLI_FORMAT";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid(format!(
                "{FORMAT_VAR} must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    store_path: Option<PathBuf>,
    log_filter: String,
    output_format: OutputFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_log_filter() -> String {
    "warn".into()
}

/// Values given on the command line; they win over the environment.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub store_path: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
}

impl AppConfig {
    /// Build configuration from the process environment, after letting a
    /// `.env` file populate it when present.
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), overrides)
    }

    /// An environment value that is overridden is never parsed, so a bad
    /// `ARTICLECLI_FORMAT` does not matter when `--format` is given.
    pub fn from_lookup<F>(lookup: F, overrides: Overrides) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_path = overrides.store_path.or_else(|| {
            lookup(STORE_VAR)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        let output_format = match (overrides.output_format, lookup(FORMAT_VAR)) {
            (Some(format), _) => format,
            (None, Some(raw)) if !raw.trim().is_empty() => raw.parse()?,
            (None, _) => OutputFormat::default(),
        };

        Ok(Self {
            store_path,
            log_filter,
            output_format,
        })
    }

    pub fn store_path(&self) -> Option<&PathBuf> {
        self.store_path.as_ref()
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub const fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(
        vars: &[(&str, &str)],
        overrides: Overrides,
    ) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned(), overrides)
    }

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        config_with(vars, Overrides::default())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert!(cfg.store_path().is_none());
        assert_eq!(cfg.log_filter(), "warn");
        assert_eq!(cfg.output_format(), OutputFormat::Text);
    }

    #[test]
    fn reads_environment_values() {
        let cfg = config(&[
            (STORE_VAR, "/tmp/articles.json"),
            (LOG_VAR, "articlecli=debug"),
            (FORMAT_VAR, "JSON"),
        ])
        .unwrap();
        assert_eq!(
            cfg.store_path(),
            Some(&PathBuf::from("/tmp/articles.json"))
        );
        assert_eq!(cfg.log_filter(), "articlecli=debug");
        assert_eq!(cfg.output_format(), OutputFormat::Json);
    }

    #[test]
    fn blank_store_path_means_in_memory() {
        let cfg = config(&[(STORE_VAR, "   ")]).unwrap();
        assert!(cfg.store_path().is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = config(&[(FORMAT_VAR, "yaml")]).unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn flags_override_environment() {
        let cfg = config_with(
            &[(STORE_VAR, "env.json"), (FORMAT_VAR, "json")],
            Overrides {
                store_path: Some(PathBuf::from("flag.json")),
                output_format: Some(OutputFormat::Text),
            },
        )
        .unwrap();
        assert_eq!(cfg.store_path(), Some(&PathBuf::from("flag.json")));
        assert_eq!(cfg.output_format(), OutputFormat::Text);

        let untouched = config_with(&[(STORE_VAR, "env.json")], Overrides::default()).unwrap();
        assert_eq!(untouched.store_path(), Some(&PathBuf::from("env.json")));
    }

    #[test]
    fn format_flag_masks_invalid_environment_format() {
        let cfg = config_with(
            &[(FORMAT_VAR, "yaml")],
            Overrides {
                store_path: None,
                output_format: Some(OutputFormat::Text),
            },
        )
        .unwrap();
        assert_eq!(cfg.output_format(), OutputFormat::Text);
    }
}
