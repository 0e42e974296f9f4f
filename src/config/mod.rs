mod types;

pub use types::{Config, ConfigError};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable pointing at a config file
pub const ENV_CONFIG_PATH: &str = "TEXRENAME_CONFIG";

const CONFIG_DIR_NAME: &str = "texrename";
const CONFIG_FILE_NAME: &str = "config.json";

/// Load a configuration from a JSON file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = ?path, "Loading config");

    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Default config location in the user's config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the configuration for this run.
///
/// An explicit path must load; the user config file is only used if present;
/// otherwise the built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => load_config(&path),
        _ => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}
