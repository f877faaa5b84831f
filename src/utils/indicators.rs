//! Status indicator badges with warning dots.
//!
//! The original dashboard used icon bitmaps for seatbelt, check-engine,
//! battery, headlights and airbag. Here each indicator is a drawn badge:
//! a circled abbreviation that brightens when active, plus a blinking
//! red dot at its corner while the vehicle is in a warning state.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_text_mut};
use rusttype::{Font, Scale};

use super::gauge::draw_filled_circle;

/// Badge circle radius.
const BADGE_RADIUS: i32 = 15;
/// Warning dot radius.
const DOT_RADIUS: f32 = 5.0;

/// The five dashboard indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Seatbelt,
    Engine,
    Battery,
    Lights,
    Airbag,
}

impl IndicatorKind {
    /// All indicators in dashboard order.
    pub const ALL: [IndicatorKind; 5] = [
        IndicatorKind::Seatbelt,
        IndicatorKind::Engine,
        IndicatorKind::Battery,
        IndicatorKind::Lights,
        IndicatorKind::Airbag,
    ];

    /// Abbreviation drawn inside the badge.
    pub fn short_label(&self) -> &'static str {
        match self {
            IndicatorKind::Seatbelt => "BLT",
            IndicatorKind::Engine => "ENG",
            IndicatorKind::Battery => "BAT",
            IndicatorKind::Lights => "LGT",
            IndicatorKind::Airbag => "AIR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Seatbelt => "seatbelt",
            IndicatorKind::Engine => "engine",
            IndicatorKind::Battery => "battery",
            IndicatorKind::Lights => "lights",
            IndicatorKind::Airbag => "airbag",
        }
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Scale a color toward black, keeping alpha.
fn dim(color: Rgba<u8>, factor: f32) -> Rgba<u8> {
    Rgba([
        (color[0] as f32 * factor) as u8,
        (color[1] as f32 * factor) as u8,
        (color[2] as f32 * factor) as u8,
        color[3],
    ])
}

/// Whether the warning dot is lit this frame.
///
/// The dot toggles every frame while the warning is active, matching the
/// original blink behavior.
pub fn warning_dot_visible(warning_active: bool, blink_phase: u64) -> bool {
    warning_active && blink_phase % 2 == 0
}

/// Draw one indicator badge at (x, y), its top-left anchor.
pub fn draw_indicator(
    img: &mut RgbaImage,
    font: &Font,
    kind: IndicatorKind,
    x: i32,
    y: i32,
    active: bool,
    warning_lit: bool,
    badge_color: Rgba<u8>,
    dot_color: Rgba<u8>,
) {
    // Inactive badges are dimmed, like the half-brightness icons
    let color = if active { badge_color } else { dim(badge_color, 0.45) };

    let cx = x + BADGE_RADIUS;
    let cy = y + BADGE_RADIUS;
    draw_hollow_circle_mut(img, (cx, cy), BADGE_RADIUS, color);

    let label = kind.short_label();
    let scale = Scale::uniform(12.0);
    let text_x = cx - (label.len() as f32 * scale.x * 0.3) as i32;
    draw_text_mut(img, color, text_x.max(0), cy - 6, scale, font, label);

    if warning_lit {
        draw_filled_circle(img, x + 35, y + 5, DOT_RADIUS, dot_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_indicators_have_unique_labels() {
        let labels: Vec<_> = IndicatorKind::ALL.iter().map(|k| k.short_label()).collect();
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn test_warning_dot_blinks() {
        assert!(warning_dot_visible(true, 0));
        assert!(!warning_dot_visible(true, 1));
        assert!(warning_dot_visible(true, 2));
    }

    #[test]
    fn test_warning_dot_off_when_inactive() {
        assert!(!warning_dot_visible(false, 0));
        assert!(!warning_dot_visible(false, 1));
    }

    #[test]
    fn test_dim_keeps_alpha() {
        let dimmed = dim(Rgba([200, 100, 50, 255]), 0.5);
        assert_eq!(dimmed, Rgba([100, 50, 25, 255]));
    }
}
