//! Radial dial rendering.
//!
//! Renders a speedometer-style dial: a 270-degree arc with numeric markers,
//! a needle pointing at the current value, and a danger backdrop that lights
//! up past the threshold.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{Font, Scale};
use std::f32::consts::PI;

use crate::config::{GaugeKind, Theme};
use crate::storage::StoredGaugeConfig;

/// Needle tip stops short of the markers.
const NEEDLE_INSET: f32 = 40.0;
/// Numeric markers sit inside the arc.
const MARKER_INSET: f32 = 20.0;
/// Danger backdrop extends past the arc.
const BACKDROP_MARGIN: f32 = 10.0;

/// Configuration for one dial.
#[derive(Debug, Clone)]
pub struct GaugeConfig {
    /// Center X coordinate on the canvas.
    pub center_x: i32,
    /// Center Y coordinate on the canvas.
    pub center_y: i32,
    /// Radius of the arc.
    pub radius: f32,
    /// Angle of the zero value, degrees counter-clockwise from the +x axis.
    pub start_angle_deg: f32,
    /// Angle of the full-scale value.
    pub end_angle_deg: f32,
    /// Full-scale value.
    pub max_value: f32,
    /// Value at which the danger backdrop lights up.
    pub danger_threshold: f32,
    /// Main label below the hub.
    pub label: String,
    /// Unit label below the main label.
    pub units: String,
    /// Number of marker intervals around the arc.
    pub marker_divisions: u32,
    /// Arc, marker and hub color.
    pub dial_color: Rgba<u8>,
    pub needle_color: Rgba<u8>,
    pub danger_fill: Rgba<u8>,
    pub text_color: Rgba<u8>,
}

impl GaugeConfig {
    /// Build a dial from its built-in spec, placed at the given center.
    pub fn for_kind(kind: GaugeKind, center_x: i32, center_y: i32, radius: f32, theme: &Theme) -> Self {
        let spec = kind.spec();
        Self {
            center_x,
            center_y,
            radius,
            // Zero at lower-left, full scale at lower-right
            start_angle_deg: 225.0,
            end_angle_deg: -45.0,
            max_value: spec.max_value,
            danger_threshold: spec.danger_threshold,
            label: spec.label.to_string(),
            units: spec.units.to_string(),
            marker_divisions: 8,
            dial_color: theme.dial,
            needle_color: theme.needle,
            danger_fill: theme.danger_fill,
            text_color: theme.text,
        }
    }

    /// Apply stored overrides on top of the built-in spec.
    pub fn from_stored(
        stored: &StoredGaugeConfig,
        kind: GaugeKind,
        center_x: i32,
        center_y: i32,
        theme: &Theme,
    ) -> Self {
        let mut config = Self::for_kind(kind, center_x, center_y, 150.0, theme);
        if let Some(radius) = stored.radius {
            config.radius = radius;
        }
        if let Some(start) = stored.start_angle_deg {
            config.start_angle_deg = start;
        }
        if let Some(end) = stored.end_angle_deg {
            config.end_angle_deg = end;
        }
        // Non-positive scales would make the value mapping divide by zero
        if let Some(max) = stored.max_value.filter(|m| *m > 0.0) {
            config.max_value = max;
        }
        if let Some(danger) = stored.danger_threshold {
            config.danger_threshold = danger;
        }
        if let Some(divisions) = stored.marker_divisions {
            config.marker_divisions = divisions.max(1);
        }
        if let Some(ref label) = stored.label {
            config.label = label.clone();
        }
        if let Some(ref units) = stored.units {
            config.units = units.clone();
        }
        config
    }

    /// Total swept angle in degrees (positive, clockwise on screen).
    pub fn sweep_deg(&self) -> f32 {
        (self.start_angle_deg - self.end_angle_deg).rem_euclid(360.0)
    }
}

/// Convert degrees to radians.
fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Map a value onto its dial angle, clamped to the scale.
pub fn value_to_angle(config: &GaugeConfig, value: f32) -> f32 {
    let normalized = (value / config.max_value).clamp(0.0, 1.0);
    config.start_angle_deg - normalized * config.sweep_deg()
}

/// Point at `angle_deg` and distance `radius` from the dial center.
///
/// Screen y grows downward, so the y component is negated.
pub(crate) fn angle_point(config: &GaugeConfig, angle_deg: f32, radius: f32) -> (f32, f32) {
    let rad = deg_to_rad(angle_deg);
    (
        config.center_x as f32 + radius * rad.cos(),
        config.center_y as f32 - radius * rad.sin(),
    )
}

/// Whether the screen offset (dx, dy) falls inside the dial sweep.
fn in_sweep(config: &GaugeConfig, dx: f32, dy: f32) -> bool {
    // atan2 with negated dy converts back to math convention
    let angle_deg = (-dy).atan2(dx) * 180.0 / PI;
    let from_start = (config.start_angle_deg - angle_deg).rem_euclid(360.0);
    from_start <= config.sweep_deg()
}

/// Blend a color onto the image at the specified position with alpha blending.
pub(crate) fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    if x >= img.width() || y >= img.height() {
        return;
    }

    let bg = img.get_pixel_mut(x, y);
    let alpha = color[3] as f32 / 255.0;

    // Source OVER destination
    for i in 0..3 {
        bg[i] = (color[i] as f32 * alpha + bg[i] as f32 * (1.0 - alpha)) as u8;
    }
    bg[3] = (color[3] as f32 + bg[3] as f32 * (1.0 - alpha)).min(255.0) as u8;
}

/// Draw a filled circle with a 1px anti-aliased edge.
pub(crate) fn draw_filled_circle(
    img: &mut RgbaImage,
    cx: i32,
    cy: i32,
    radius: f32,
    color: Rgba<u8>,
) {
    let r_ceil = radius.ceil() as i32 + 1;

    for dy in -r_ceil..=r_ceil {
        for dx in -r_ceil..=r_ceil {
            let px = cx + dx;
            let py = cy + dy;
            if px < 0 || py < 0 {
                continue;
            }

            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist < radius - 1.0 {
                blend_pixel(img, px as u32, py as u32, color);
            } else if dist < radius + 0.5 {
                let aa_alpha = ((radius + 0.5) - dist).clamp(0.0, 1.0);
                let mut pixel_color = color;
                pixel_color[3] = (color[3] as f32 * aa_alpha) as u8;
                blend_pixel(img, px as u32, py as u32, pixel_color);
            }
        }
    }
}

/// Fill the pie sector behind the dial with the danger color.
fn draw_danger_backdrop(img: &mut RgbaImage, config: &GaugeConfig) {
    let outer = config.radius + BACKDROP_MARGIN;
    let r_ceil = outer.ceil() as i32 + 1;

    for dy in -r_ceil..=r_ceil {
        for dx in -r_ceil..=r_ceil {
            let px = config.center_x + dx;
            let py = config.center_y + dy;
            if px < 0 || py < 0 {
                continue;
            }

            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist > outer + 0.5 {
                continue;
            }
            if !in_sweep(config, dx as f32, dy as f32) {
                continue;
            }

            let aa_alpha = if dist > outer - 0.5 {
                ((outer + 0.5) - dist).clamp(0.0, 1.0)
            } else {
                1.0
            };
            let mut color = config.danger_fill;
            color[3] = (color[3] as f32 * aa_alpha) as u8;
            blend_pixel(img, px as u32, py as u32, color);
        }
    }
}

/// Draw the main arc ring with a ~3px stroke.
fn draw_dial_arc(img: &mut RgbaImage, config: &GaugeConfig) {
    let half_stroke = 1.5;
    let inner = config.radius - half_stroke;
    let outer = config.radius + half_stroke;
    let r_ceil = (outer + 1.0).ceil() as i32;

    for dy in -r_ceil..=r_ceil {
        for dx in -r_ceil..=r_ceil {
            let px = config.center_x + dx;
            let py = config.center_y + dy;
            if px < 0 || py < 0 {
                continue;
            }

            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist < inner - 0.5 || dist > outer + 0.5 {
                continue;
            }
            if !in_sweep(config, dx as f32, dy as f32) {
                continue;
            }

            // Fade at both radial edges
            let mut alpha_factor: f32 = 1.0;
            if dist < inner + 0.5 {
                alpha_factor = alpha_factor.min(dist - (inner - 0.5));
            }
            if dist > outer - 0.5 {
                alpha_factor = alpha_factor.min((outer + 0.5) - dist);
            }
            let alpha_factor = alpha_factor.clamp(0.0, 1.0);

            let mut color = config.dial_color;
            color[3] = (color[3] as f32 * alpha_factor) as u8;
            blend_pixel(img, px as u32, py as u32, color);
        }
    }
}

/// Rough width estimate for centering, good enough for dial text.
fn estimate_width(text: &str, scale: f32) -> i32 {
    (text.len() as f32 * scale * 0.5) as i32
}

/// Draw text horizontally centered on `cx`.
pub(crate) fn draw_text_centered(
    img: &mut RgbaImage,
    color: Rgba<u8>,
    cx: i32,
    y: i32,
    scale: Scale,
    font: &Font,
    text: &str,
) {
    let x = cx - estimate_width(text, scale.x) / 2;
    draw_text_mut(img, color, x.max(0), y.max(0), scale, font, text);
}

/// Draw numeric markers around the arc.
fn draw_markers(img: &mut RgbaImage, config: &GaugeConfig, font: &Font) {
    let scale = Scale::uniform(16.0);
    let step = config.max_value / config.marker_divisions as f32;

    for i in 0..=config.marker_divisions {
        let value = step * i as f32;
        let angle = value_to_angle(config, value);
        let (mx, my) = angle_point(config, angle, config.radius - MARKER_INSET);

        let text = format!("{}", value.round() as i64);
        // Offset to center the glyph box on the marker point
        let x = mx as i32 - estimate_width(&text, scale.x) / 2;
        let y = my as i32 - 8;
        draw_text_mut(img, config.dial_color, x.max(0), y.max(0), scale, font, &text);
    }
}

/// Draw the needle and its hub.
fn draw_needle(img: &mut RgbaImage, config: &GaugeConfig, value: f32) {
    let angle = value_to_angle(config, value);
    let (tip_x, tip_y) = angle_point(config, angle, config.radius - NEEDLE_INSET);

    let cx = config.center_x as f32;
    let cy = config.center_y as f32;
    let len = ((tip_x - cx).powi(2) + (tip_y - cy).powi(2)).sqrt();

    // Stamp small discs along the segment for a ~3px stroke
    let steps = (len * 2.0).ceil() as i32;
    for i in 0..=steps {
        let t = i as f32 / steps.max(1) as f32;
        let x = cx + (tip_x - cx) * t;
        let y = cy + (tip_y - cy) * t;
        draw_filled_circle(img, x.round() as i32, y.round() as i32, 1.5, config.needle_color);
    }

    // Hub
    draw_filled_circle(img, config.center_x, config.center_y, 6.0, config.dial_color);
}

/// Draw the complete dial for the given value.
pub fn draw_gauge(img: &mut RgbaImage, config: &GaugeConfig, font: &Font, value: f32) {
    if value >= config.danger_threshold {
        draw_danger_backdrop(img, config);
    }

    draw_dial_arc(img, config);
    draw_markers(img, config, font);
    draw_needle(img, config, value);

    let cx = config.center_x;
    let cy = config.center_y;
    let half_radius = (config.radius / 2.0) as i32;

    // Current value, large, just below the hub
    let value_text = format!("{}", value.round() as i64);
    draw_text_centered(
        img,
        config.text_color,
        cx,
        cy + 40,
        Scale::uniform(38.0),
        font,
        &value_text,
    );

    // Label and units near the bottom of the dial
    draw_text_centered(
        img,
        config.text_color,
        cx,
        cy + half_radius + 20,
        Scale::uniform(22.0),
        font,
        &config.label,
    );
    draw_text_centered(
        img,
        config.text_color,
        cx,
        cy + half_radius + 45,
        Scale::uniform(16.0),
        font,
        &config.units,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> GaugeConfig {
        GaugeConfig::for_kind(GaugeKind::Speedometer, 200, 200, 150.0, &Theme::CLASSIC)
    }

    #[test]
    fn test_sweep_is_270_degrees() {
        let config = test_config();
        assert!((config.sweep_deg() - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_value_to_angle_endpoints() {
        let config = test_config();
        assert!((value_to_angle(&config, 0.0) - 225.0).abs() < 1e-4);
        assert!((value_to_angle(&config, 200.0) - (-45.0)).abs() < 1e-4);
        // Mid-scale points straight up
        assert!((value_to_angle(&config, 100.0) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_from_stored_rejects_non_positive_max_value() {
        let stored = StoredGaugeConfig {
            max_value: Some(0.0),
            ..Default::default()
        };
        let config =
            GaugeConfig::from_stored(&stored, GaugeKind::Speedometer, 200, 200, &Theme::CLASSIC);
        // Preset scale survives, so the angle mapping stays finite
        assert_eq!(config.max_value, 200.0);
        assert!(value_to_angle(&config, 100.0).is_finite());

        let negative = StoredGaugeConfig {
            max_value: Some(-50.0),
            ..Default::default()
        };
        let config =
            GaugeConfig::from_stored(&negative, GaugeKind::Tachometer, 200, 200, &Theme::CLASSIC);
        assert_eq!(config.max_value, 8000.0);
    }

    #[test]
    fn test_from_stored_applies_valid_max_value() {
        let stored = StoredGaugeConfig {
            max_value: Some(240.0),
            ..Default::default()
        };
        let config =
            GaugeConfig::from_stored(&stored, GaugeKind::Speedometer, 200, 200, &Theme::CLASSIC);
        assert_eq!(config.max_value, 240.0);
    }

    #[test]
    fn test_value_to_angle_clamps() {
        let config = test_config();
        assert_eq!(value_to_angle(&config, -10.0), value_to_angle(&config, 0.0));
        assert_eq!(
            value_to_angle(&config, 500.0),
            value_to_angle(&config, 200.0)
        );
    }

    #[test]
    fn test_angle_point_flips_y() {
        let config = test_config();
        // 90 degrees points straight up on screen
        let (x, y) = angle_point(&config, 90.0, 100.0);
        assert!((x - 200.0).abs() < 1e-3);
        assert!((y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_in_sweep_wraps_across_atan2_cut() {
        let config = test_config();
        // Straight up: inside
        assert!(in_sweep(&config, 0.0, -1.0));
        // Lower-left diagonal (225 degrees): boundary, inside
        assert!(in_sweep(&config, -1.0, 1.0));
        // Straight down: the 90-degree gap below the dial
        assert!(!in_sweep(&config, 0.0, 1.0));
    }

    #[test]
    fn test_draw_needle_stays_in_bounds() {
        let mut img = RgbaImage::from_pixel(400, 400, Rgba([0, 0, 0, 255]));
        let config = test_config();
        // Must not panic at either end of the scale
        draw_needle(&mut img, &config, 0.0);
        draw_needle(&mut img, &config, 200.0);
    }

    #[test]
    fn test_danger_backdrop_fills_sector() {
        let mut img = RgbaImage::from_pixel(400, 400, Rgba([0, 0, 0, 255]));
        let config = test_config();
        draw_danger_backdrop(&mut img, &config);

        // Above the hub, inside the sweep: painted
        assert_eq!(img.get_pixel(200, 100)[0], config.danger_fill[0]);
        // Straight below the hub, outside the sweep: untouched
        assert_eq!(img.get_pixel(200, 280)[0], 0);
    }
}
