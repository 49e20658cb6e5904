//! Viewport evaluation for the embed's media queries.

use crate::Viewport;

/// Widest viewport that still gets the mobile presentation.
pub const BREAKPOINT_PX: u32 = 768;
/// Narrowest viewport that gets the desktop presentation.
pub const DESKTOP_MIN_WIDTH_PX: u32 = BREAKPOINT_PX + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Desktop,
    Mobile,
}

/// Which of the two embed blocks end up displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub desktop_container: bool,
    pub mobile_fallback: bool,
}

impl Presentation {
    /// Mirror of `(max-width: 768px)` / `(min-width: 769px)`.
    pub fn for_viewport(viewport: Viewport) -> Self {
        if viewport.width <= BREAKPOINT_PX {
            Presentation::Mobile
        } else {
            Presentation::Desktop
        }
    }

    pub fn visibility(self) -> Visibility {
        match self {
            Presentation::Desktop => Visibility {
                desktop_container: true,
                mobile_fallback: false,
            },
            Presentation::Mobile => Visibility {
                desktop_container: false,
                mobile_fallback: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(width: u32) -> Visibility {
        Presentation::for_viewport(Viewport { width, height: 900 }).visibility()
    }

    #[test]
    fn breakpoint_edges() {
        assert_eq!(Presentation::for_viewport(Viewport { width: 768, height: 1 }), Presentation::Mobile);
        assert_eq!(Presentation::for_viewport(Viewport { width: 769, height: 1 }), Presentation::Desktop);
    }

    #[test]
    fn exactly_one_block_is_shown() {
        for w in [320, 768, 769, 1280, 1920] {
            let v = at(w);
            assert_ne!(v.desktop_container, v.mobile_fallback, "width {}", w);
        }
        assert!(at(375).mobile_fallback);
        assert!(at(1280).desktop_container);
    }
}
