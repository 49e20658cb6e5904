//! Application configuration loaded from JSON.

use crate::embed::EmbedRequest;
use crate::page::PageConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The embed placed on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    pub src: String,
    pub hide_top_px: i32,
    pub hide_bottom_px: i32,
    pub height: i32,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            src: "https://sinergi.elpeef.com/".to_string(),
            hide_top_px: 5,
            hide_bottom_px: -110,
            height: 800,
        }
    }
}

impl EmbedSettings {
    pub fn to_request(&self) -> Result<EmbedRequest> {
        EmbedRequest::new(self.src.clone(), self.hide_top_px, self.hide_bottom_px, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address to listen on, `host:port`
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:8501".to_string(),
        }
    }
}

/// Top-level configuration. Every field has a default, so `{}` is a valid file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub page: PageConfig,
    pub embed: EmbedSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let cfg = Self::from_json(&data)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        log::info!("loaded configuration from {}", path.display());
        Ok(cfg)
    }

    /// Check the embed target is an absolute http(s) URL and the geometry is
    /// renderable.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.embed.src)
            .map_err(|e| Error::ConfigError(format!("embed.src {:?}: {}", self.embed.src, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::ConfigError(format!(
                "embed.src must be http or https, got {}",
                parsed.scheme()
            )));
        }
        self.embed.to_request()?;
        if self.page.title.trim().is_empty() {
            log::warn!("page title is empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Layout;

    #[test]
    fn defaults_match_landing_page() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.embed.src, "https://sinergi.elpeef.com/");
        assert_eq!(cfg.embed.to_request().unwrap().container_height(), 695);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = AppConfig::from_json(r#"{"embed": {"hide_top_px": 100}, "page": {"layout": "centered"}}"#).unwrap();
        assert_eq!(cfg.embed.hide_top_px, 100);
        assert_eq!(cfg.embed.height, 800);
        assert_eq!(cfg.page.layout, Layout::Centered);
        assert_eq!(cfg.page.title, "SINERGI");
        assert_eq!(cfg.server.listen, "127.0.0.1:8501");
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(Error::ConfigError(_))));
    }

    #[test]
    fn validate_rejects_relative_and_non_http_urls() {
        let mut cfg = AppConfig::default();
        cfg.embed.src = "/relative".to_string();
        assert!(cfg.validate().is_err());
        cfg.embed.src = "javascript:alert(1)".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_geometry() {
        let mut cfg = AppConfig::default();
        cfg.embed.height = 100;
        cfg.embed.hide_top_px = 0;
        cfg.embed.hide_bottom_px = -200;
        assert!(matches!(cfg.validate(), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            AppConfig::from_file("/nonexistent/sinergi.json"),
            Err(Error::Io(_))
        ));
    }
}
