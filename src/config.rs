//! Built-in dashboard presets.
//!
//! Provides the compiled gauge specifications, color themes, and the
//! vehicle simulation constants. Stored overrides live in `storage`.

use image::Rgba;

// =============================================================================
// Gauge Specifications
// =============================================================================

/// Which dial of the dashboard a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeKind {
    Speedometer,
    Tachometer,
}

impl GaugeKind {
    /// Get the built-in specification for this dial.
    pub fn spec(&self) -> &'static GaugeSpec {
        match self {
            GaugeKind::Speedometer => &SPEEDOMETER,
            GaugeKind::Tachometer => &TACHOMETER,
        }
    }
}

impl std::fmt::Display for GaugeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GaugeKind::Speedometer => write!(f, "speedometer"),
            GaugeKind::Tachometer => write!(f, "tachometer"),
        }
    }
}

/// Fixed characteristics of a dial.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    /// Full-scale value.
    pub max_value: f32,
    /// Value at which the danger backdrop lights up.
    pub danger_threshold: f32,
    /// Main label below the hub.
    pub label: &'static str,
    /// Unit label below the main label.
    pub units: &'static str,
}

/// Speedometer: 0-200 km/h, danger zone from 160 (80% of scale).
pub const SPEEDOMETER: GaugeSpec = GaugeSpec {
    max_value: 200.0,
    danger_threshold: 160.0,
    label: "SPEED",
    units: "km/h",
};

/// Tachometer: 0-8000 RPM, danger zone from 6400 (80% of scale).
pub const TACHOMETER: GaugeSpec = GaugeSpec {
    max_value: 8000.0,
    danger_threshold: 6400.0,
    label: "ENGINE",
    units: "RPM",
};

// =============================================================================
// Themes
// =============================================================================

/// Color theme applied to the whole dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Rgba<u8>,
    /// Dial arc, markers, labels.
    pub dial: Rgba<u8>,
    pub needle: Rgba<u8>,
    /// Backdrop fill behind a dial past its danger threshold.
    pub danger_fill: Rgba<u8>,
    pub text: Rgba<u8>,
    /// Bar borders and the clock box.
    pub outline: Rgba<u8>,
    pub warning_dot: Rgba<u8>,
}

impl Theme {
    /// Black background with white dials and a red needle.
    pub const CLASSIC: Self = Self {
        background: Rgba([0, 0, 0, 255]),
        dial: Rgba([255, 255, 255, 255]),
        needle: Rgba([255, 0, 0, 255]),
        danger_fill: Rgba([80, 0, 0, 255]),
        text: Rgba([255, 255, 255, 255]),
        outline: Rgba([255, 255, 255, 255]),
        warning_dot: Rgba([255, 0, 0, 255]),
    };

    /// Dimmed amber variant for low-light use.
    pub const NIGHT: Self = Self {
        background: Rgba([0, 0, 0, 255]),
        dial: Rgba([200, 140, 40, 255]),
        needle: Rgba([220, 60, 30, 255]),
        danger_fill: Rgba([60, 10, 0, 255]),
        text: Rgba([200, 140, 40, 255]),
        outline: Rgba([150, 105, 30, 255]),
        warning_dot: Rgba([220, 60, 30, 255]),
    };
}

impl Theme {
    /// Build a theme from stored hex colors, falling back to CLASSIC
    /// for any field that fails to parse.
    pub fn from_stored(colors: &crate::storage::ThemeColors) -> Self {
        fn color(hex: &str, fallback: Rgba<u8>) -> Rgba<u8> {
            match crate::utils::parsing::parse_hex_color(hex) {
                Ok((r, g, b)) => Rgba([r, g, b, 255]),
                Err(_) => fallback,
            }
        }

        let base = Self::CLASSIC;
        Self {
            background: color(&colors.background, base.background),
            dial: color(&colors.dial, base.dial),
            needle: color(&colors.needle, base.needle),
            danger_fill: color(&colors.danger_fill, base.danger_fill),
            text: color(&colors.text, base.text),
            outline: color(&colors.outline, base.outline),
            warning_dot: color(&colors.warning_dot, base.warning_dot),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::CLASSIC
    }
}

// =============================================================================
// Level Bar Palettes
// =============================================================================

/// Fill colors of a level bar by zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPalette {
    pub normal: Rgba<u8>,
    pub medium: Rgba<u8>,
    pub low: Rgba<u8>,
}

/// Fuel bar: green / yellow / red.
pub const FUEL_PALETTE: BarPalette = BarPalette {
    normal: Rgba([0, 255, 0, 255]),
    medium: Rgba([255, 255, 0, 255]),
    low: Rgba([255, 0, 0, 255]),
};

/// Coolant temperature bar: cyan / orange / red.
pub const TEMP_PALETTE: BarPalette = BarPalette {
    normal: Rgba([0, 255, 255, 255]),
    medium: Rgba([255, 165, 0, 255]),
    low: Rgba([255, 0, 0, 255]),
};

// =============================================================================
// Simulation Constants
// =============================================================================

/// Vehicle physics per simulation tick (one tick = 50 ms).
pub mod simulation {
    pub const TICK_MS: u64 = 50;

    pub const MAX_SPEED: f32 = 200.0;
    pub const MAX_RPM: f32 = 8000.0;
    pub const MAX_TEMP: f32 = 100.0;
    /// Coolant never cools below idle temperature.
    pub const IDLE_TEMP: f32 = 50.0;

    pub const ACCEL_SPEED_DELTA: f32 = 2.0;
    pub const ACCEL_RPM_DELTA: f32 = 200.0;
    pub const ACCEL_TEMP_DELTA: f32 = 0.5;
    pub const FUEL_BURN_DELTA: f32 = 0.1;

    pub const COAST_SPEED_DELTA: f32 = 1.0;
    pub const COAST_RPM_DELTA: f32 = 100.0;
    pub const COAST_TEMP_DELTA: f32 = 0.2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_thresholds_at_80_percent() {
        assert_eq!(SPEEDOMETER.danger_threshold, SPEEDOMETER.max_value * 0.8);
        assert_eq!(TACHOMETER.danger_threshold, TACHOMETER.max_value * 0.8);
    }

    #[test]
    fn test_kind_spec_lookup() {
        assert_eq!(GaugeKind::Speedometer.spec().label, "SPEED");
        assert_eq!(GaugeKind::Tachometer.spec().units, "RPM");
    }
}
