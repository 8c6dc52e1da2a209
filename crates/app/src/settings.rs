//! Settings for the session.
//!
//! Read in order, later sources winning: the TOML file (`config/budget.toml`
//! unless `--config` says otherwise, optional), `BUDGET_*` environment
//! variables, command-line flags.
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/budget.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_file: PathBuf,
    pub log_level: String,
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("transactions.txt"),
            log_level: "info".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "budget", about = "Personal budget tracker")]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    pub config: Option<String>,
    /// Override the transactions file.
    #[arg(long)]
    pub data_file: Option<PathBuf>,
    /// Override the log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

const ENV_PREFIX: &str = "BUDGET";

pub fn load() -> Result<Settings> {
    load_from(Args::parse(), config::Environment::with_prefix(ENV_PREFIX))
}

/// `env` is the environment layer, normally `Environment::with_prefix("BUDGET")`.
pub fn load_from(args: Args, env: config::Environment) -> Result<Settings> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(env);
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(data_file) = args.data_file {
        settings.data_file = data_file;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use uuid::Uuid;

    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/test_files")
            .join(format!("settings_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// An environment layer fed from `vars` instead of the process.
    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn missing_config_file_gives_defaults() {
        let args = Args {
            config: Some("does/not/exist.toml".to_string()),
            ..Args::default()
        };

        let settings = load_from(args, env_with(&[])).unwrap();

        assert_eq!(settings.data_file, PathBuf::from("transactions.txt"));
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn file_then_flags() {
        let path = scratch_dir().join("budget.toml");
        fs::write(
            &path,
            "data_file = \"ledger/data.txt\"\nlog_level = \"debug\"\ncurrency_symbol = \"€\"\n",
        )
        .unwrap();

        let args = Args {
            config: Some(path.display().to_string()),
            data_file: None,
            log_level: Some("warn".to_string()),
        };
        let settings = load_from(args, env_with(&[])).unwrap();

        assert_eq!(settings.data_file, PathBuf::from("ledger/data.txt"));
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn environment_sits_between_file_and_flags() {
        let path = scratch_dir().join("budget.toml");
        fs::write(&path, "data_file = \"from_file.txt\"\ncurrency_symbol = \"€\"\n").unwrap();

        let args = Args {
            config: Some(path.display().to_string()),
            data_file: Some(PathBuf::from("from_flag.txt")),
            log_level: None,
        };
        let env = env_with(&[
            ("BUDGET_DATA_FILE", "from_env.txt"),
            ("BUDGET_CURRENCY_SYMBOL", "£"),
            ("OTHER_LOG_LEVEL", "trace"),
        ]);
        let settings = load_from(args, env).unwrap();

        assert_eq!(settings.data_file, PathBuf::from("from_flag.txt"));
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.log_level, "info");
    }
}
