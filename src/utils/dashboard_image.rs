//! Dashboard frame generator.
//!
//! Composes the full 1200x800 dashboard: speedometer, tachometer, fuel and
//! temperature bars, indicator badges, clock box and gear readout.

use image::RgbaImage;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use rusttype::{Font, Scale};
use std::path::Path;

use crate::config::{FUEL_PALETTE, GaugeKind, TEMP_PALETTE, Theme};
use crate::storage::AppConfig;
use crate::vehicle::VehicleState;

use super::gauge::{GaugeConfig, draw_gauge, draw_text_centered};
use super::indicators::{IndicatorKind, draw_indicator, warning_dot_visible};
use super::level_bar::{LevelBarConfig, draw_level_bar};

/// Canvas dimensions
pub const DASHBOARD_WIDTH: u32 = 1200;
pub const DASHBOARD_HEIGHT: u32 = 800;

/// Single-dial canvas size
pub const GAUGE_SIZE: u32 = 400;

/// Indicator row anchor and spacing
const INDICATOR_Y: i32 = 50;
const INDICATOR_X0: i32 = 100;
const INDICATOR_SPACING: i32 = 50;

/// Try to load a font from common system paths
pub fn load_font() -> Option<Font<'static>> {
    let font_paths = [
        "C:\\Windows\\Fonts\\arialbd.ttf",  // Arial Bold
        "C:\\Windows\\Fonts\\segoeuib.ttf", // Segoe UI Bold
        "C:\\Windows\\Fonts\\arial.ttf",
        "C:\\Windows\\Fonts\\segoeui.ttf",
        "C:\\Windows\\Fonts\\consola.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ];

    for path in font_paths {
        if Path::new(path).exists() {
            if let Ok(data) = std::fs::read(path) {
                if let Some(font) = Font::try_from_vec(data) {
                    return Some(font);
                }
            }
        }
    }
    None
}

/// Placement of every dashboard element.
#[derive(Debug, Clone)]
pub struct DashboardLayout {
    pub speedometer: GaugeConfig,
    pub tachometer: GaugeConfig,
    pub fuel_bar: LevelBarConfig,
    pub temp_bar: LevelBarConfig,
}

impl DashboardLayout {
    /// Default geometry: dials side by side, bars at the edges.
    pub fn new(theme: &Theme) -> Self {
        Self {
            speedometer: GaugeConfig::for_kind(GaugeKind::Speedometer, 400, 400, 150.0, theme),
            tachometer: GaugeConfig::for_kind(GaugeKind::Tachometer, 800, 400, 150.0, theme),
            fuel_bar: LevelBarConfig::new(100, 300, "FUEL", FUEL_PALETTE, theme.outline),
            temp_bar: LevelBarConfig::new(1050, 300, "TEMP", TEMP_PALETTE, theme.outline),
        }
    }

    /// Default geometry with stored overrides applied.
    pub fn from_app_config(config: &AppConfig, theme: &Theme) -> Self {
        let mut layout = Self::new(theme);

        if let Some(stored) = config.gauges.get("speedometer") {
            layout.speedometer =
                GaugeConfig::from_stored(stored, GaugeKind::Speedometer, 400, 400, theme);
        }
        if let Some(stored) = config.gauges.get("tachometer") {
            layout.tachometer =
                GaugeConfig::from_stored(stored, GaugeKind::Tachometer, 800, 400, theme);
        }
        if let Some(stored) = config.bars.get("fuel") {
            layout.fuel_bar.apply_stored(stored);
        }
        if let Some(stored) = config.bars.get("temp") {
            layout.temp_bar.apply_stored(stored);
        }

        layout
    }
}

/// Generate a complete dashboard frame.
///
/// `active` lists the lit indicator badges; `blink_phase` advances once per
/// frame and drives the warning dot blink. `clock` is pre-formatted so frame
/// content stays deterministic for a given input.
///
/// Returns `None` when no usable font is installed.
pub fn generate_dashboard_image(
    state: &VehicleState,
    active: &[IndicatorKind],
    blink_phase: u64,
    clock: Option<&str>,
    theme: &Theme,
    layout: Option<&DashboardLayout>,
) -> Option<RgbaImage> {
    let font = load_font()?;

    let default_layout = DashboardLayout::new(theme);
    let layout = layout.unwrap_or(&default_layout);

    let mut img = RgbaImage::from_pixel(DASHBOARD_WIDTH, DASHBOARD_HEIGHT, theme.background);

    // Dials
    draw_gauge(&mut img, &layout.speedometer, &font, state.speed);
    draw_gauge(&mut img, &layout.tachometer, &font, state.rpm);

    // Level bars
    draw_level_bar(&mut img, &layout.fuel_bar, &font, state.fuel);
    draw_level_bar(&mut img, &layout.temp_bar, &font, state.temperature);

    // Indicator row
    let warning_lit = warning_dot_visible(state.warning_active(), blink_phase);
    for (i, kind) in IndicatorKind::ALL.iter().enumerate() {
        let x = INDICATOR_X0 + i as i32 * INDICATOR_SPACING;
        draw_indicator(
            &mut img,
            &font,
            *kind,
            x,
            INDICATOR_Y,
            active.contains(kind),
            warning_lit,
            theme.dial,
            theme.warning_dot,
        );
    }

    // Clock box, top-right
    if let Some(clock_text) = clock {
        let box_rect = Rect::at(990, 20).of_size(190, 48);
        draw_hollow_rect_mut(&mut img, box_rect, theme.outline);
        draw_hollow_rect_mut(
            &mut img,
            Rect::at(991, 21).of_size(188, 46),
            theme.outline,
        );
        draw_text_centered(
            &mut img,
            theme.text,
            1085,
            32,
            Scale::uniform(26.0),
            &font,
            clock_text,
        );
    }

    // Gear readout between the dials
    let gear_text = format!("GEAR {}", state.gear);
    draw_text_centered(
        &mut img,
        theme.text,
        600,
        420,
        Scale::uniform(26.0),
        &font,
        &gear_text,
    );

    Some(img)
}

/// Generate a single dial on its own square canvas.
pub fn generate_gauge_image(kind: GaugeKind, value: f32, theme: &Theme) -> Option<RgbaImage> {
    let font = load_font()?;

    let mut img = RgbaImage::from_pixel(GAUGE_SIZE, GAUGE_SIZE, theme.background);
    let center = (GAUGE_SIZE / 2) as i32;
    let config = GaugeConfig::for_kind(kind, center, center, 150.0, theme);
    draw_gauge(&mut img, &config, &font, value);

    Some(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_geometry() {
        let layout = DashboardLayout::new(&Theme::CLASSIC);
        assert_eq!(layout.speedometer.center_x, 400);
        assert_eq!(layout.tachometer.center_x, 800);
        assert_eq!(layout.fuel_bar.x, 100);
        assert_eq!(layout.temp_bar.x, 1050);
    }

    #[test]
    fn test_layout_applies_stored_gauge_override() {
        let mut config = AppConfig::default();
        config.gauges.insert(
            "speedometer".to_string(),
            crate::storage::StoredGaugeConfig {
                max_value: Some(240.0),
                ..Default::default()
            },
        );
        let layout = DashboardLayout::from_app_config(&config, &Theme::CLASSIC);
        assert_eq!(layout.speedometer.max_value, 240.0);
        // Untouched dial keeps its preset
        assert_eq!(layout.tachometer.max_value, 8000.0);
    }

    #[test]
    fn test_generate_dashboard_image() {
        let state = VehicleState {
            speed: 120.0,
            rpm: 4500.0,
            ..Default::default()
        };
        let img = match generate_dashboard_image(
            &state,
            &[IndicatorKind::Seatbelt],
            0,
            Some("12:00:00 PM"),
            &Theme::CLASSIC,
            None,
        ) {
            Some(img) => img,
            None => return, // no system fonts in this environment
        };
        assert_eq!(img.dimensions(), (DASHBOARD_WIDTH, DASHBOARD_HEIGHT));
    }

    #[test]
    fn test_generate_gauge_image_size() {
        if let Some(img) = generate_gauge_image(GaugeKind::Tachometer, 3000.0, &Theme::NIGHT) {
            assert_eq!(img.dimensions(), (GAUGE_SIZE, GAUGE_SIZE));
        }
    }
}
