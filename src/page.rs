//! Page shell: document head, sidebar and the main content blocks.

use crate::embed::{self, EmbedFragment, EmbedRequest};
use crate::markup::{escape_attr, escape_text};
use crate::sidebar::Sidebar;
use crate::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// Width of the main area when the layout is `Centered`.
pub const CENTERED_MAX_WIDTH_PX: u32 = 736;

/// Width policy for the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Main area spans the whole viewport next to the sidebar
    Wide,
    /// Main area is capped at `CENTERED_MAX_WIDTH_PX` and centred
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn palette(self) -> (&'static str, &'static str, &'static str) {
        // (page background, sidebar background, text)
        match self {
            Theme::Dark => ("#0e1117", "#262730", "#fafafa"),
            Theme::Light => ("#ffffff", "#f0f2f6", "#31333f"),
        }
    }
}

/// Page-wide settings, fixed for the lifetime of a `Page`.
///
/// # Examples
///
/// ```
/// let cfg = sinergi::PageConfig::default();
/// assert_eq!(cfg.title, "SINERGI");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document title
    pub title: String,
    /// Single glyph used as the favicon
    pub icon: String,
    pub layout: Layout,
    pub theme: Theme,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "SINERGI".to_string(),
            icon: "🗃".to_string(),
            layout: Layout::Wide,
            theme: Theme::Dark,
        }
    }
}

impl PageConfig {
    /// Favicon as an SVG data URI drawing the icon glyph.
    pub fn favicon_href(&self) -> String {
        let svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\"><text y=\".9em\" font-size=\"90\">{}</text></svg>",
            escape_text(&self.icon)
        );
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
    }
}

/// A landing page under construction. Blocks are appended at the insertion
/// point (the end of the main area) in call order.
#[derive(Debug, Clone)]
pub struct Page {
    config: PageConfig,
    sidebar: Sidebar,
    blocks: Vec<EmbedFragment>,
}

impl Page {
    pub fn new(config: PageConfig, sidebar: Sidebar) -> Self {
        log::debug!("page configured: title={:?} layout={:?}", config.title, config.layout);
        Self {
            config,
            sidebar,
            blocks: Vec::new(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Embed `src` at the insertion point, cropping `hide_top_px` off the top
    /// and showing `height` pixels. The host box reserves
    /// `height + hide_top_px + hide_bottom_px` pixels.
    pub fn embed_iframe(&mut self, src: &str, hide_top_px: i32, hide_bottom_px: i32, height: i32) -> Result<()> {
        let req = EmbedRequest::new(src, hide_top_px, hide_bottom_px, height)?;
        self.push_fragment(embed::render(&req));
        Ok(())
    }

    pub fn push_fragment(&mut self, fragment: EmbedFragment) {
        self.blocks.push(fragment);
    }

    /// Number of blocks in the main area.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Assemble the full HTML document.
    pub fn render(&self) -> String {
        let (bg, sidebar_bg, fg) = self.config.theme.palette();
        let main_width = match self.config.layout {
            Layout::Wide => "none".to_string(),
            Layout::Centered => format!("{}px", CENTERED_MAX_WIDTH_PX),
        };

        let mut doc = String::with_capacity(8192);
        doc.push_str("<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n");
        doc.push_str("<meta charset=\"utf-8\">\n");
        doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        doc.push_str(&format!("<title>{}</title>\n", escape_text(&self.config.title)));
        doc.push_str(&format!(
            "<link rel=\"icon\" href=\"{}\">\n",
            escape_attr(&self.config.favicon_href())
        ));
        doc.push_str(&format!(
            r#"<style>
    body {{ margin: 0; display: flex; min-height: 100vh; background: {bg}; color: {fg}; font-family: "Source Sans Pro", sans-serif; }}
    a {{ color: #4da3ff; }}
    .sidebar {{ flex: 0 0 21rem; box-sizing: border-box; padding: 2rem 1.5rem; background: {sidebar_bg}; overflow-y: auto; }}
    .sidebar-image {{ width: 100%; }}
    .main {{ flex: 1 1 auto; box-sizing: border-box; padding: 3rem 1rem; max-width: {main_width}; margin: 0 auto; }}
    .embed-host {{ overflow: hidden; }}
    @media (max-width: 768px) {{
        body {{ flex-direction: column; }}
        .sidebar {{ flex-basis: auto; }}
    }}
</style>
"#,
            bg = bg,
            fg = fg,
            sidebar_bg = sidebar_bg,
            main_width = main_width,
        ));
        doc.push_str("</head>\n<body>\n");
        doc.push_str(&self.sidebar.render_html());
        doc.push_str(&format!(
            "<main class=\"main layout-{}\">\n",
            match self.config.layout {
                Layout::Wide => "wide",
                Layout::Centered => "centered",
            }
        ));
        for block in &self.blocks {
            doc.push_str(&format!(
                "<div class=\"embed-host\" style=\"height:{}px;\">\n",
                block.container_height
            ));
            doc.push_str(&block.html);
            doc.push_str("</div>\n");
        }
        doc.push_str("</main>\n</body>\n</html>\n");
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_default_config() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.icon, "🗃");
        assert_eq!(cfg.layout, Layout::Wide);
        assert_eq!(cfg.theme, Theme::Dark);
    }

    #[test]
    fn favicon_is_base64_svg() {
        let href = PageConfig::default().favicon_href();
        let payload = href.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let svg = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
        assert!(svg.contains("🗃"));
    }

    #[test]
    fn embed_host_reserves_container_height() {
        let mut page = Page::new(PageConfig::default(), Sidebar::sinergi());
        page.embed_iframe("https://sinergi.elpeef.com/", 5, -110, 800).unwrap();
        assert_eq!(page.len(), 1);
        let html = page.render();
        assert!(html.contains("<div class=\"embed-host\" style=\"height:695px;\">"));
        assert!(html.contains("<title>SINERGI</title>"));
    }

    #[test]
    fn config_is_kept_for_page_lifetime() {
        let cfg = PageConfig {
            theme: Theme::Light,
            ..Default::default()
        };
        let page = Page::new(cfg.clone(), Sidebar::default());
        assert_eq!(page.config(), &cfg);
        assert!(page.render().contains("background: #ffffff;"));
    }

    #[test]
    fn invalid_embed_leaves_page_untouched() {
        let mut page = Page::new(PageConfig::default(), Sidebar::sinergi());
        assert!(page.embed_iframe("https://example.com/", 0, -200, 100).is_err());
        assert!(page.is_empty());
    }

    #[test]
    fn centered_layout_caps_main_width() {
        let cfg = PageConfig {
            layout: Layout::Centered,
            ..Default::default()
        };
        let html = Page::new(cfg, Sidebar::sinergi()).render();
        assert!(html.contains("max-width: 736px;"));
        assert!(html.contains("layout-centered"));
    }

    #[test]
    fn title_is_escaped() {
        let cfg = PageConfig {
            title: "<b>x</b>".to_string(),
            ..Default::default()
        };
        let html = Page::new(cfg, Sidebar::sinergi()).render();
        assert!(html.contains("<title>&lt;b&gt;x&lt;/b&gt;</title>"));
    }
}
