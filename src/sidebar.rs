//! Static sidebar: a header image followed by markdown sections.

use crate::markup::escape_attr;
use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

const SINERGI_IMAGE: &str = "https://i.imgur.com/pwYe3ox.png";
const SINERGI_ABOUT: &str = include_str!("content/about.md");

/// Sidebar content. Sections are markdown, rendered in order below the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    pub image_url: String,
    pub sections: Vec<String>,
}

impl Sidebar {
    /// The SINERGI about / vision / sponsorship panel.
    pub fn sinergi() -> Self {
        Self {
            image_url: SINERGI_IMAGE.to_string(),
            sections: vec!["📘 **About**".to_string(), SINERGI_ABOUT.to_string()],
        }
    }

    pub fn render_html(&self) -> String {
        let mut out = String::from("<aside class=\"sidebar\">\n");
        if !self.image_url.is_empty() {
            out.push_str(&format!(
                "<img class=\"sidebar-image\" src=\"{}\" alt=\"\">\n",
                escape_attr(&self.image_url)
            ));
        }
        for section in &self.sections {
            out.push_str("<div class=\"sidebar-section\">\n");
            out.push_str(&render_markdown(section));
            out.push_str("</div>\n");
        }
        out.push_str("</aside>\n");
        out
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::sinergi()
    }
}

/// Render markdown to HTML; every link opens in a new tab.
pub fn render_markdown(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(md, options).map(|event| match event {
        Event::Start(Tag::Link { dest_url, title, .. }) => {
            let title_attr = if title.is_empty() {
                String::new()
            } else {
                format!(" title=\"{}\"", escape_attr(&title))
            };
            Event::InlineHtml(
                format!(
                    "<a href=\"{}\"{} target=\"_blank\" rel=\"noopener noreferrer\">",
                    escape_attr(&dest_url),
                    title_attr
                )
                .into(),
            )
        }
        Event::End(TagEnd::Link) => Event::InlineHtml("</a>".into()),
        // Raw HTML in sidebar copy is shown as text.
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}
