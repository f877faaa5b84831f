//! Vertical level bar rendering (fuel and coolant temperature).
//!
//! A bordered column whose fill rises with the value and changes color
//! at the low/medium thresholds.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};

use crate::config::BarPalette;
use crate::storage::StoredBarConfig;

use super::gauge::draw_text_centered;

/// Fill zone thresholds on the 0-100 scale.
const LOW_THRESHOLD: f32 = 20.0;
const MEDIUM_THRESHOLD: f32 = 50.0;
/// Gap between the border and the fill.
const FILL_INSET: i32 = 5;

/// Configuration for one level bar.
#[derive(Debug, Clone)]
pub struct LevelBarConfig {
    /// Top-left corner X.
    pub x: i32,
    /// Top-left corner Y.
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Label drawn below the bar.
    pub label: String,
    pub palette: BarPalette,
    /// Border and label color.
    pub outline_color: Rgba<u8>,
}

impl LevelBarConfig {
    pub fn new(x: i32, y: i32, label: &str, palette: BarPalette, outline_color: Rgba<u8>) -> Self {
        Self {
            x,
            y,
            width: 50,
            height: 300,
            label: label.to_string(),
            palette,
            outline_color,
        }
    }

    /// Apply stored overrides.
    pub fn apply_stored(&mut self, stored: &StoredBarConfig) {
        if let Some(width) = stored.width {
            self.width = width;
        }
        if let Some(height) = stored.height {
            self.height = height;
        }
        if let Some(ref label) = stored.label {
            self.label = label.clone();
        }
    }
}

/// Pick the fill color for a value.
pub fn fill_color(palette: &BarPalette, value: f32) -> Rgba<u8> {
    if value < LOW_THRESHOLD {
        palette.low
    } else if value < MEDIUM_THRESHOLD {
        palette.medium
    } else {
        palette.normal
    }
}

/// Height in pixels of the fill for a value (0-100).
pub fn fill_height(config: &LevelBarConfig, value: f32) -> u32 {
    let usable = config.height.saturating_sub(2 * FILL_INSET as u32);
    let fraction = (value / 100.0).clamp(0.0, 1.0);
    (fraction * usable as f32).round() as u32
}

/// Draw the bar for the given value.
pub fn draw_level_bar(img: &mut RgbaImage, config: &LevelBarConfig, font: &Font, value: f32) {
    // 2px border
    for inset in 0..2 {
        let rect = Rect::at(config.x + inset, config.y + inset).of_size(
            config.width.saturating_sub(2 * inset as u32).max(1),
            config.height.saturating_sub(2 * inset as u32).max(1),
        );
        draw_hollow_rect_mut(img, rect, config.outline_color);
    }

    // Fill rises from the bottom
    let fill_h = fill_height(config, value);
    if fill_h > 0 {
        let fill_w = config.width.saturating_sub(2 * FILL_INSET as u32).max(1);
        let fill_y = config.y + config.height as i32 - FILL_INSET - fill_h as i32;
        let rect = Rect::at(config.x + FILL_INSET, fill_y).of_size(fill_w, fill_h);
        draw_filled_rect_mut(img, rect, fill_color(&config.palette, value));
    }

    // Label below the bar
    draw_text_centered(
        img,
        config.outline_color,
        config.x + config.width as i32 / 2,
        config.y + config.height as i32 + 12,
        Scale::uniform(20.0),
        font,
        &config.label,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FUEL_PALETTE, TEMP_PALETTE, Theme};

    fn test_bar() -> LevelBarConfig {
        LevelBarConfig::new(100, 300, "FUEL", FUEL_PALETTE, Theme::CLASSIC.outline)
    }

    #[test]
    fn test_fill_color_zones() {
        assert_eq!(fill_color(&FUEL_PALETTE, 10.0), FUEL_PALETTE.low);
        assert_eq!(fill_color(&FUEL_PALETTE, 19.9), FUEL_PALETTE.low);
        assert_eq!(fill_color(&FUEL_PALETTE, 20.0), FUEL_PALETTE.medium);
        assert_eq!(fill_color(&FUEL_PALETTE, 49.9), FUEL_PALETTE.medium);
        assert_eq!(fill_color(&FUEL_PALETTE, 50.0), FUEL_PALETTE.normal);
        assert_eq!(fill_color(&FUEL_PALETTE, 100.0), FUEL_PALETTE.normal);
    }

    #[test]
    fn test_temp_palette_is_distinct() {
        assert_ne!(fill_color(&TEMP_PALETTE, 80.0), fill_color(&FUEL_PALETTE, 80.0));
    }

    #[test]
    fn test_fill_height_extremes() {
        let bar = test_bar();
        assert_eq!(fill_height(&bar, 0.0), 0);
        assert_eq!(fill_height(&bar, 100.0), 290);
        assert_eq!(fill_height(&bar, 50.0), 145);
        // Clamped outside the scale
        assert_eq!(fill_height(&bar, 150.0), 290);
        assert_eq!(fill_height(&bar, -5.0), 0);
    }

    #[test]
    fn test_draw_does_not_panic_on_small_canvas() {
        let mut img = RgbaImage::from_pixel(10, 10, image::Rgba([0, 0, 0, 255]));
        let bar = test_bar();
        let font = match crate::utils::dashboard_image::load_font() {
            Some(f) => f,
            None => return, // no system fonts in this environment
        };
        draw_level_bar(&mut img, &bar, &font, 50.0);
    }
}
