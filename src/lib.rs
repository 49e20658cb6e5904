//! SINERGI landing page
//!
//! Renders a single page: a static sidebar describing the platform and a
//! responsive iframe that embeds the hosted SINERGI application, cropped to a
//! chosen vertical band. On narrow screens the iframe is replaced by a notice
//! asking the visitor to switch to a laptop or desktop.
//!
//! # Example
//!
//! ```
//! use sinergi::{Page, PageConfig, Sidebar};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut page = Page::new(PageConfig::default(), Sidebar::sinergi());
//! page.embed_iframe("https://sinergi.elpeef.com/", 5, -110, 800)?;
//! let html = page.render();
//! assert!(html.contains("height:695px;"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod embed;
pub mod markup;
pub mod page;
pub mod responsive;
pub mod sidebar;

// HTTP listener for the rendered page
#[cfg(feature = "server")]
pub mod server;

pub use config::AppConfig;
pub use embed::{render, EmbedFragment, EmbedRequest};
pub use page::{Layout, Page, PageConfig, Theme};
pub use responsive::{Presentation, Visibility};
pub use sidebar::Sidebar;

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Build the landing page described by `config`: configured shell, SINERGI
/// sidebar, one embed.
pub fn landing_page(config: &AppConfig) -> Result<Page> {
    let mut page = Page::new(config.page.clone(), Sidebar::sinergi());
    let embed = &config.embed;
    page.embed_iframe(&embed.src, embed.hide_top_px, embed.hide_bottom_px, embed.height)?;
    log::info!(
        "landing page ready: {} embedded at {}px (+{} / {})",
        embed.src,
        embed.height,
        embed.hide_top_px,
        embed.hide_bottom_px
    );
    Ok(page)
}
