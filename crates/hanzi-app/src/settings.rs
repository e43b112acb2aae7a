use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use hanzi_config::Config;

/// Picked up from the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "hanzi.json";

/// Load config from file (explicit path, else ./hanzi.json if present), env overrides on top
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => load_config_file(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                load_config_file(default)
            } else {
                tracing::debug!("No config file, using defaults");
                Ok(Config::new())
            }
        }
    }
}

fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let config: Config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(config.with_overrides(|key| env::var(key).ok()))
}
