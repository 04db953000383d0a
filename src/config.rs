use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Contents of `pressroom.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PressroomConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Fixture file replacing the built-in seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Directory with the built front end, served for non-API paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<String>,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub seed: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl ServerSettings {
    /// Merge explicit overrides (usually CLI flags) over the config file,
    /// falling back to the defaults.
    pub fn resolve(
        config: Option<&PressroomConfig>,
        host: Option<String>,
        port: Option<u16>,
        seed: Option<PathBuf>,
        static_dir: Option<PathBuf>,
    ) -> Self {
        let file = config.cloned().unwrap_or_default();
        Self {
            host: host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            seed: seed.or(file.seed.map(PathBuf::from)),
            static_dir: static_dir.or(file.static_dir.map(PathBuf::from)),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("pressroom.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<PressroomConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: PressroomConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &PressroomConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
