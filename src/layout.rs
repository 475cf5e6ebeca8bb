//! Responsive scaling of the fixed-size design canvas.

/// Design canvas the artwork is laid out on (MacBook Pro 14" frame).
pub const CANVAS_WIDTH: f64 = 1512.0;
pub const CANVAS_HEIGHT: f64 = 982.0;

/// Viewports narrower than this use the mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Width of the canvas slice that has to fit a phone screen.
pub const MOBILE_FIT_WIDTH: f64 = 610.0;

/// Extra upward nudge applied to the canvas on mobile, in canvas units.
const MOBILE_LIFT: f64 = 25.0;
/// Distance of the desktop title from the canvas top.
const DESKTOP_TITLE_TOP: f64 = 113.0;
const DESKTOP_TITLE_SIZE: f64 = 192.0;
const DESKTOP_TITLE_TRACKING: f64 = -3.84;
const MOBILE_TITLE_SIZE: f64 = 80.0;
const MOBILE_TITLE_TRACKING: f64 = -1.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    pub scale: f64,
    pub is_mobile: bool,
}

impl LayoutState {
    pub fn recompute(width: f64, height: f64) -> Self {
        let is_mobile = width < MOBILE_BREAKPOINT;
        let scale = if is_mobile {
            width / MOBILE_FIT_WIDTH
        } else {
            (width / CANVAS_WIDTH).min(height / CANVAS_HEIGHT)
        };
        Self { scale, is_mobile }
    }

    /// CSS transform for the centred canvas container.
    pub fn canvas_transform(&self) -> String {
        if self.is_mobile {
            format!(
                "translate(-50%, -50%) scale({}) translateY(-{MOBILE_LIFT}px)",
                self.scale
            )
        } else {
            format!("translate(-50%, -50%) scale({})", self.scale)
        }
    }

    /// Title style for text rendered outside the scaled canvas, so that it
    /// blends against the background video instead of the canvas.
    pub fn title(&self) -> TitleLayout {
        let half_canvas = CANVAS_HEIGHT / 2.0;
        if self.is_mobile {
            let offset = half_canvas * self.scale + MOBILE_LIFT * self.scale - 40.0;
            TitleLayout {
                top: format!("calc(50% - {offset}px)"),
                font_size: MOBILE_TITLE_SIZE,
                letter_spacing: MOBILE_TITLE_TRACKING,
                line_height: "78px",
                white_space: "normal",
                max_width: Some("85vw"),
            }
        } else {
            let offset = (half_canvas - DESKTOP_TITLE_TOP) * self.scale;
            TitleLayout {
                top: format!("calc(50% - {offset}px)"),
                font_size: DESKTOP_TITLE_SIZE * self.scale,
                letter_spacing: DESKTOP_TITLE_TRACKING * self.scale,
                line_height: "normal",
                white_space: "nowrap",
                max_width: None,
            }
        }
    }

    pub fn footer(&self) -> FooterLayout {
        if self.is_mobile {
            FooterLayout {
                padding: "28px 0",
                font_size: 16.0,
                direction: "column",
                justify: "center",
                gap: 16.0,
                link_gap: 16.0,
            }
        } else {
            FooterLayout {
                padding: "40px 60px",
                font_size: 24.0,
                direction: "row",
                justify: "space-between",
                gap: 0.0,
                link_gap: 24.0,
            }
        }
    }

    /// Blend-mode layers render incorrectly on mobile Safari, so they are
    /// dropped there.
    pub fn shows_blend_layers(&self) -> bool {
        !self.is_mobile
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::recompute(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleLayout {
    pub top: String,
    pub font_size: f64,
    pub letter_spacing: f64,
    pub line_height: &'static str,
    pub white_space: &'static str,
    pub max_width: Option<&'static str>,
}

impl TitleLayout {
    pub fn style(&self, opacity: f64) -> String {
        let mut style = format!(
            "top: {}; font-size: {}px; letter-spacing: {}px; line-height: {}; white-space: {}; opacity: {opacity};",
            self.top, self.font_size, self.letter_spacing, self.line_height, self.white_space,
        );
        if let Some(max_width) = self.max_width {
            style.push_str(&format!(" max-width: {max_width}; overflow: visible;"));
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterLayout {
    pub padding: &'static str,
    pub font_size: f64,
    pub direction: &'static str,
    pub justify: &'static str,
    pub gap: f64,
    pub link_gap: f64,
}

/// Current browser viewport size, or the canvas size off the web.
#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> (f64, f64) {
    let Some(win) = web_sys::window() else {
        return (CANVAS_WIDTH, CANVAS_HEIGHT);
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64());
    let height = win.inner_height().ok().and_then(|v| v.as_f64());
    (width.unwrap_or(CANVAS_WIDTH), height.unwrap_or(CANVAS_HEIGHT))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> (f64, f64) {
    (CANVAS_WIDTH, CANVAS_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_design_viewport_is_unit_scale() {
        let layout = LayoutState::recompute(1512.0, 982.0);
        assert!(!layout.is_mobile);
        assert_eq!(layout.scale, 1.0);
        assert_eq!(LayoutState::default(), layout);
    }

    #[test]
    fn test_phone_viewport_scales_by_width() {
        let layout = LayoutState::recompute(600.0, 900.0);
        assert!(layout.is_mobile);
        assert!(approx(layout.scale, 0.9836));

        // Height never matters below the breakpoint.
        assert_eq!(LayoutState::recompute(600.0, 100.0), layout);
    }

    #[test]
    fn test_wide_viewport_is_height_bound() {
        let layout = LayoutState::recompute(2000.0, 1000.0);
        assert!(!layout.is_mobile);
        assert!(approx(layout.scale, 1000.0 / 982.0));
        assert!(approx(layout.scale, 1.0183));
    }

    #[test]
    fn test_breakpoint_boundary() {
        assert!(LayoutState::recompute(767.9, 982.0).is_mobile);
        let at_breakpoint = LayoutState::recompute(768.0, 982.0);
        assert!(!at_breakpoint.is_mobile);
        assert_eq!(at_breakpoint.scale, 768.0 / 1512.0);
    }

    #[test]
    fn test_desktop_scale_is_min_of_axes() {
        for &(w, h) in &[(800.0, 300.0), (1024.0, 2000.0), (3000.0, 982.0), (768.0, 10.0)] {
            let layout = LayoutState::recompute(w, h);
            assert!(!layout.is_mobile);
            assert_eq!(layout.scale, (w / 1512.0).min(h / 982.0));
        }
    }

    #[test]
    fn test_canvas_transform_lifts_on_mobile() {
        let desktop = LayoutState::recompute(1512.0, 982.0);
        assert_eq!(desktop.canvas_transform(), "translate(-50%, -50%) scale(1)");

        let mobile = LayoutState::recompute(305.0, 600.0);
        assert_eq!(
            mobile.canvas_transform(),
            "translate(-50%, -50%) scale(0.5) translateY(-25px)"
        );
    }

    #[test]
    fn test_title_offsets() {
        let desktop = LayoutState::recompute(1512.0, 982.0).title();
        assert_eq!(desktop.top, "calc(50% - 378px)");
        assert_eq!(desktop.font_size, 192.0);
        assert_eq!(desktop.max_width, None);

        let mobile = LayoutState::recompute(610.0, 900.0).title();
        assert_eq!(mobile.top, "calc(50% - 476px)");
        assert_eq!(mobile.font_size, 80.0);
        assert!(mobile.style(1.0).contains("max-width: 85vw"));
    }

    #[test]
    fn test_footer_switches_direction() {
        assert_eq!(LayoutState::recompute(400.0, 800.0).footer().direction, "column");
        assert_eq!(LayoutState::recompute(1400.0, 800.0).footer().font_size, 24.0);
        assert!(!LayoutState::recompute(400.0, 800.0).shows_blend_layers());
    }
}
