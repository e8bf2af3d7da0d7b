use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::errors::ConfigError;
use super::model::ShellConfig;

const APP_DIR: &str = "chatshell";
const CONFIG_FILE: &str = "config.json";

/// How the file on disk was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    /// Nothing saved yet; defaults apply until the first write.
    Missing,
    /// The file exists but does not hold a [`ShellConfig`].
    Invalid(String),
}

/// JSON file that backs the shell configuration.
#[derive(Debug, Clone)]
pub(crate) struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// File under `$HOME/.config`, or under the temp dir without `HOME`.
    pub(crate) fn locate() -> Self {
        let base = std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .unwrap_or_else(std::env::temp_dir);

        Self {
            path: base.join(APP_DIR).join(CONFIG_FILE),
        }
    }

    /// Read the configuration with its width normalized. A missing or
    /// malformed file yields defaults; other IO failures are errors.
    pub(crate) fn load(
        &self,
    ) -> Result<(ShellConfig, ConfigLoadStatus), ConfigError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok((ShellConfig::default(), ConfigLoadStatus::Missing));
            },
            Err(err) => return Err(err.into()),
        };

        let loaded = match serde_json::from_slice::<ShellConfig>(&bytes) {
            Ok(config) => (config.normalized(), ConfigLoadStatus::Loaded),
            Err(err) => (
                ShellConfig::default(),
                ConfigLoadStatus::Invalid(err.to_string()),
            ),
        };
        Ok(loaded)
    }

    /// Replace the file through a sibling staging file, so a reader sees
    /// either the old or the new configuration.
    pub(crate) fn save(&self, config: &ShellConfig) -> Result<(), ConfigError> {
        let payload = serde_json::to_vec_pretty(config)?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, payload)?;
        fs::rename(&staging, &self.path)?;

        Ok(())
    }
}
