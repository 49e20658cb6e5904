//! Responsive iframe embed.
//!
//! An embed shows a vertical band of another page. The iframe is rendered
//! taller than its clipping container and shifted up by `hide_top_px`, so the
//! container's `overflow:hidden` crops the top of the target page. The host
//! surface reserves `height + hide_top_px + hide_bottom_px` pixels, which
//! crops (or, for a negative `hide_bottom_px`, pads) the bottom.
//!
//! Below the viewport breakpoint the iframe is hidden and a notice asking the
//! user to switch to a larger screen is shown instead.

use crate::markup::escape_attr;
use crate::responsive::{BREAKPOINT_PX, DESKTOP_MIN_WIDTH_PX};
use crate::{Error, Result};

/// Pixels cropped from the top when the caller does not say otherwise.
pub const DEFAULT_HIDE_TOP_PX: i32 = 100;
/// Pixels cropped from the bottom when the caller does not say otherwise.
pub const DEFAULT_HIDE_BOTTOM_PX: i32 = 0;
/// Visible embed height when the caller does not say otherwise.
pub const DEFAULT_HEIGHT: i32 = 800;

/// First line of the notice shown in place of the iframe on narrow viewports.
pub const MOBILE_NOTICE: &str = "📱 Tampilan ini tidak tersedia di perangkat seluler.";
/// Second line of the mobile notice.
pub const MOBILE_HINT: &str = "Silakan buka lewat laptop atau desktop untuk pengalaman penuh 💻";

/// Parameters of one embed render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
    url: String,
    hide_top_px: i32,
    hide_bottom_px: i32,
    height: i32,
    container_height: i32,
    top_offset: i32,
}

impl EmbedRequest {
    /// Build a request, rejecting geometry that leaves nothing to show.
    ///
    /// `url` is not validated here; it is escaped when interpolated.
    /// `hide_bottom_px` may be negative, which adds room below the embed
    /// instead of cropping.
    pub fn new(url: impl Into<String>, hide_top_px: i32, hide_bottom_px: i32, height: i32) -> Result<Self> {
        if height <= 0 {
            return Err(Error::InvalidGeometry(format!(
                "visible height must be positive, got {}",
                height
            )));
        }
        let container = height as i64 + hide_top_px as i64 + hide_bottom_px as i64;
        let container_height = i32::try_from(container)
            .ok()
            .filter(|c| *c >= 0)
            .ok_or_else(|| {
                Error::InvalidGeometry(format!(
                    "container height {} + {} + {} = {} is out of range",
                    height, hide_top_px, hide_bottom_px, container
                ))
            })?;
        let top_offset = hide_top_px.checked_neg().ok_or_else(|| {
            Error::InvalidGeometry(format!("top offset -({}) is out of range", hide_top_px))
        })?;
        Ok(Self {
            url: url.into(),
            hide_top_px,
            hide_bottom_px,
            height,
            container_height,
            top_offset,
        })
    }

    /// Request with the default crop: 100px off the top, 800px visible.
    pub fn with_defaults(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            hide_top_px: DEFAULT_HIDE_TOP_PX,
            hide_bottom_px: DEFAULT_HIDE_BOTTOM_PX,
            height: DEFAULT_HEIGHT,
            container_height: DEFAULT_HEIGHT + DEFAULT_HIDE_TOP_PX + DEFAULT_HIDE_BOTTOM_PX,
            top_offset: -DEFAULT_HIDE_TOP_PX,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn hide_top_px(&self) -> i32 {
        self.hide_top_px
    }

    pub fn hide_bottom_px(&self) -> i32 {
        self.hide_bottom_px
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Vertical space the host must reserve; also the iframe's own height.
    pub fn container_height(&self) -> i32 {
        self.container_height
    }

    /// Iframe `top` offset, `-hide_top_px`.
    pub fn top_offset(&self) -> i32 {
        self.top_offset
    }
}

/// Markup produced for one embed plus the space the host must reserve for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFragment {
    pub html: String,
    pub container_height: i32,
}

/// Render the style block, desktop container and mobile fallback.
///
/// Output depends only on the request, so identical requests yield
/// byte-identical markup.
pub fn render(req: &EmbedRequest) -> EmbedFragment {
    let container_height = req.container_height();
    let mut html = String::with_capacity(2048);
    html.push_str(&stylesheet());
    html.push_str(&format!(
        r#"
<!-- Desktop view -->
<div class="hide-on-mobile" style="height:{height}px; overflow:hidden; position:relative;">
    <iframe src="{src}"
            style="width:100%; height:{container}px; border:none; position:relative; top:{top}px;">
    </iframe>
</div>
"#,
        height = req.height(),
        src = escape_attr(req.url()),
        container = container_height,
        top = req.top_offset(),
    ));
    html.push_str(&format!(
        r#"
<!-- Mobile fallback -->
<div class="show-on-mobile">
    {}<br>
    {}
</div>
"#,
        MOBILE_NOTICE, MOBILE_HINT
    ));

    log::debug!(
        "rendered embed for {} (visible {}px, container {}px, offset {}px)",
        req.url(),
        req.height(),
        container_height,
        req.top_offset()
    );

    EmbedFragment {
        html,
        container_height,
    }
}

fn stylesheet() -> String {
    format!(
        r#"<style>
    @media (max-width: {bp}px) {{
        .hide-on-mobile {{
            display: none !important;
        }}
        .show-on-mobile {{
            display: block !important;
            padding: 24px 12px;
            background: #ffecec;
            color: #d10000;
            font-weight: bold;
            text-align: center;
            border-radius: 12px;
            font-size: 1.2em;
            margin-top: 24px;
            animation: fadeIn 0.6s ease-in-out;
            box-shadow: 0 4px 12px rgba(0,0,0,0.2);
        }}
    }}
    @media (min-width: {desk}px) {{
        .show-on-mobile {{
            display: none !important;
        }}
    }}
    @keyframes fadeIn {{
        from {{ opacity: 0; transform: translateY(12px); }}
        to {{ opacity: 1; transform: translateY(0); }}
    }}
</style>
"#,
        bp = BREAKPOINT_PX,
        desk = DESKTOP_MIN_WIDTH_PX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_height_sums_geometry() {
        let req = EmbedRequest::new("https://example.com/", 5, -110, 800).unwrap();
        assert_eq!(req.container_height(), 695);
        assert_eq!(EmbedRequest::with_defaults("https://example.com/").container_height(), 900);
    }

    #[test]
    fn rejects_non_positive_height() {
        assert!(matches!(
            EmbedRequest::new("https://example.com/", 0, 0, 0),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(EmbedRequest::new("https://example.com/", 0, 0, -5).is_err());
    }

    #[test]
    fn rejects_negative_container() {
        let err = EmbedRequest::new("https://example.com/", 0, -200, 100).unwrap_err();
        assert!(err.to_string().contains("-100"));
    }

    #[test]
    fn overflowing_intermediate_sum_stays_exact() {
        let req = EmbedRequest::new("https://example.com/", 1, -10, i32::MAX).unwrap();
        assert_eq!(req.container_height(), i32::MAX - 9);
        let frag = render(&req);
        assert!(frag.html.contains(&format!("height:{}px;", i32::MAX - 9)));
        assert!(frag.html.contains("top:-1px;"));
    }

    #[test]
    fn rejects_unnegatable_hide_top() {
        // i32::MIN + i32::MAX + 1 == 0 fits, but -i32::MIN does not.
        assert!(matches!(
            EmbedRequest::new("https://example.com/", i32::MIN, i32::MAX, 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn rejects_container_above_i32() {
        assert!(EmbedRequest::new("https://example.com/", 1, 0, i32::MAX).is_err());
    }

    #[test]
    fn zero_container_is_allowed() {
        let req = EmbedRequest::new("https://example.com/", 0, -100, 100).unwrap();
        assert_eq!(render(&req).container_height, 0);
    }

    #[test]
    fn render_places_geometry_in_styles() {
        let req = EmbedRequest::new("https://example.com/", 5, -110, 800).unwrap();
        let frag = render(&req);
        assert_eq!(frag.container_height, 695);
        assert!(frag.html.contains("style=\"height:800px; overflow:hidden; position:relative;\""));
        assert!(frag.html.contains("height:695px;"));
        assert!(frag.html.contains("top:-5px;"));
        assert!(frag.html.contains("src=\"https://example.com/\""));
    }

    #[test]
    fn negative_hide_top_offsets_downwards() {
        let req = EmbedRequest::new("https://example.com/", -20, 0, 400).unwrap();
        assert!(render(&req).html.contains("top:20px;"));
    }

    #[test]
    fn render_is_deterministic() {
        let req = EmbedRequest::with_defaults("https://example.com/");
        assert_eq!(render(&req), render(&req.clone()));
    }

    #[test]
    fn stylesheet_uses_single_breakpoint() {
        let css = stylesheet();
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains("@media (min-width: 769px)"));
        assert!(css.contains("animation: fadeIn 0.6s ease-in-out;"));
    }
}
