//! Configuration loading and data directory resolution

use std::path::PathBuf;

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `tutors.json` plus the two collection files
    pub data_dir: PathBuf,
    /// HTTP bind address
    pub bind: String,
}

const ENV_DATA_DIR: &str = "TUTORBOARD_DATA_DIR";
const ENV_BIND: &str = "TUTORBOARD_BIND";
const CONFIG_FILE: &str = "tutorboard.toml";
const DEFAULT_BIND: &str = "127.0.0.1:5780";

impl Config {
    /// Resolve configuration following the priority order:
    /// 1. Command-line argument (highest priority)
    /// 2. Environment variable
    /// 3. `tutorboard.toml` in the working directory
    /// 4. Compiled default (fallback)
    pub fn resolve(cli_data_dir: Option<&str>, cli_bind: Option<&str>) -> Self {
        let file = load_config_file();
        Self {
            data_dir: resolve_data_dir(cli_data_dir, file.as_ref()),
            bind: resolve_bind(cli_bind, file.as_ref()),
        }
    }

    /// Path of the roster document inside the data directory.
    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join("tutors.json")
    }
}

fn resolve_data_dir(cli_arg: Option<&str>, file: Option<&toml::Value>) -> PathBuf {
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }
    if let Ok(path) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(path);
    }
    if let Some(path) = file
        .and_then(|config| config.get("data_dir"))
        .and_then(|v| v.as_str())
    {
        return PathBuf::from(path);
    }
    PathBuf::from("./data")
}

fn resolve_bind(cli_arg: Option<&str>, file: Option<&toml::Value>) -> String {
    if let Some(bind) = cli_arg {
        return bind.to_string();
    }
    if let Ok(bind) = std::env::var(ENV_BIND) {
        return bind;
    }
    if let Some(bind) = file
        .and_then(|config| config.get("bind"))
        .and_then(|v| v.as_str())
    {
        return bind.to_string();
    }
    DEFAULT_BIND.to_string()
}

/// Best-effort read of the optional TOML config file.
fn load_config_file() -> Option<toml::Value> {
    let content = std::fs::read_to_string(CONFIG_FILE).ok()?;
    match toml::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring malformed {}: {}", CONFIG_FILE, e);
            None
        }
    }
}
