use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/helpmirror/config.toml`.
///
/// Every path and tunable the pipeline uses lives here; the stage functions
/// take these values as parameters and hardcode nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// JSON manifest describing the pages to mirror.
    pub source_manifest_path: PathBuf,
    /// Directory for downloaded HTML artifacts.
    pub download_dir: PathBuf,
    /// Directory for extracted plain-text artifacts.
    pub text_dir: PathBuf,
    /// Directory the rewritten manifest is written into.
    pub rewritten_manifest_dir: PathBuf,
    /// Hosting root the rewritten `detailUrl`s point at.
    pub rewrite_base_url: String,
    /// Per-request timeout in seconds (validator probes; fetch connect phase).
    pub request_timeout_secs: u64,
    /// Pause between validation probes in milliseconds.
    pub validation_pause_ms: u64,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            source_manifest_path: PathBuf::from("HelpContent.json"),
            download_dir: PathBuf::from("downloaded_pages"),
            text_dir: PathBuf::from("extracted_body_txt"),
            rewritten_manifest_dir: PathBuf::from("rewritten_manifest"),
            rewrite_base_url: "https://example.com/help/".to_string(),
            request_timeout_secs: 15,
            validation_pause_ms: 250,
        }
    }
}

impl MirrorConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validation_pause(&self) -> Duration {
        Duration::from_millis(self.validation_pause_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("helpmirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MirrorConfig = toml::from_str(&data)?;
    Ok(cfg)
}
