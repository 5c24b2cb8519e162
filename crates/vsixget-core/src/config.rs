use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default marketplace host the pasted URLs point at.
const DEFAULT_MARKETPLACE_HOST: &str = "https://marketplace.visualstudio.com";

/// Default CORS-bypass fetch proxy; the page URL is appended percent-encoded.
const DEFAULT_PROXY_BASE: &str = "https://api.allorigins.win/get?url=";

/// Global configuration loaded from `~/.config/vsixget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VsixgetConfig {
    /// Marketplace host used for page and gallery URLs.
    pub marketplace_host: String,
    /// Proxy base URL; the target page URL is appended percent-encoded.
    pub proxy_base: String,
    /// Default directory packages are saved into (None = current directory).
    #[serde(default)]
    pub download_dir: Option<String>,
    /// Seconds the "Copied" acknowledgment stays visible in interactive mode.
    #[serde(default = "default_copy_ack_secs")]
    pub copy_ack_secs: u64,
}

fn default_copy_ack_secs() -> u64 {
    2
}

impl Default for VsixgetConfig {
    fn default() -> Self {
        Self {
            marketplace_host: DEFAULT_MARKETPLACE_HOST.to_string(),
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
            download_dir: None,
            copy_ack_secs: default_copy_ack_secs(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vsixget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VsixgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VsixgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VsixgetConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = VsixgetConfig::default();
        assert_eq!(cfg.marketplace_host, DEFAULT_MARKETPLACE_HOST);
        assert_eq!(cfg.proxy_base, DEFAULT_PROXY_BASE);
        assert!(cfg.download_dir.is_none());
        assert_eq!(cfg.copy_ack_secs, 2);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = VsixgetConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: VsixgetConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.marketplace_host, cfg.marketplace_host);
        assert_eq!(parsed.proxy_base, cfg.proxy_base);
        assert_eq!(parsed.copy_ack_secs, cfg.copy_ack_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            marketplace_host = "https://mirror.example"
            proxy_base = "https://proxy.example/get?url="
            download_dir = "/data/vsix"
            copy_ack_secs = 5
        "#;
        let cfg: VsixgetConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.marketplace_host, "https://mirror.example");
        assert_eq!(cfg.download_dir.as_deref(), Some("/data/vsix"));
        assert_eq!(cfg.copy_ack_secs, 5);
    }

    #[test]
    fn config_toml_optional_fields_default() {
        let toml = r#"
            marketplace_host = "https://mirror.example"
            proxy_base = "https://proxy.example/get?url="
        "#;
        let cfg: VsixgetConfig = toml::from_str(toml).unwrap();
        assert!(cfg.download_dir.is_none());
        assert_eq!(cfg.copy_ack_secs, 2);
    }
}
