//! Parsing utilities for CLI arguments and configuration values.
//!
//! This module provides reusable parsing functions for common input formats
//! used throughout the application.

use crate::config::GaugeKind;
use crate::error::{DashboardError, Result};
use crate::utils::indicators::IndicatorKind;

// =============================================================================
// Color Parsing
// =============================================================================

/// Parse a hex color string into RGB components.
///
/// Accepts formats: `#RRGGBB` or `RRGGBB`
///
/// # Example
/// ```
/// use car_dashboard::utils::parsing::parse_hex_color;
///
/// let (r, g, b) = parse_hex_color("#FF5500").unwrap();
/// assert_eq!(r, 255);
/// assert_eq!(g, 85);
/// assert_eq!(b, 0);
/// ```
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(DashboardError::InvalidInput(format!(
            "Invalid color hex: {}",
            hex
        )));
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    Ok((r, g, b))
}

// =============================================================================
// Gauge Kind Parsing
// =============================================================================

/// Parse a dial name into a GaugeKind.
///
/// Accepts "speed"/"speedometer" and "rpm"/"tachometer"/"tacho".
pub fn parse_gauge_kind(name: &str) -> Result<GaugeKind> {
    match name.to_lowercase().as_str() {
        "speed" | "speedometer" => Ok(GaugeKind::Speedometer),
        "rpm" | "tacho" | "tachometer" => Ok(GaugeKind::Tachometer),
        _ => Err(DashboardError::InvalidInput(format!(
            "Unknown gauge '{}'. Use: speed or rpm",
            name
        ))),
    }
}

// =============================================================================
// Indicator Parsing
// =============================================================================

/// Parse a single indicator name.
pub fn parse_indicator(name: &str) -> Result<IndicatorKind> {
    match name.to_lowercase().as_str() {
        "seatbelt" | "belt" => Ok(IndicatorKind::Seatbelt),
        "engine" => Ok(IndicatorKind::Engine),
        "battery" => Ok(IndicatorKind::Battery),
        "lights" => Ok(IndicatorKind::Lights),
        "airbag" => Ok(IndicatorKind::Airbag),
        _ => Err(DashboardError::InvalidInput(format!(
            "Unknown indicator '{}'. Use: seatbelt, engine, battery, lights, airbag",
            name
        ))),
    }
}

/// Parse a comma-separated indicator list (e.g. "seatbelt,engine").
///
/// An empty string yields an empty list.
pub fn parse_indicator_list(list: &str) -> Result<Vec<IndicatorKind>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_indicator)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_with_hash() {
        let (r, g, b) = parse_hex_color("#FF0000").unwrap();
        assert_eq!((r, g, b), (255, 0, 0));
    }

    #[test]
    fn test_parse_hex_color_without_hash() {
        let (r, g, b) = parse_hex_color("00FF00").unwrap();
        assert_eq!((r, g, b), (0, 255, 0));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("FFF").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_parse_gauge_kind() {
        assert_eq!(parse_gauge_kind("speed").unwrap(), GaugeKind::Speedometer);
        assert_eq!(
            parse_gauge_kind("Speedometer").unwrap(),
            GaugeKind::Speedometer
        );
        assert_eq!(parse_gauge_kind("RPM").unwrap(), GaugeKind::Tachometer);
        assert!(parse_gauge_kind("boost").is_err());
    }

    #[test]
    fn test_parse_indicator_list() {
        let list = parse_indicator_list("seatbelt, engine,airbag").unwrap();
        assert_eq!(
            list,
            vec![
                IndicatorKind::Seatbelt,
                IndicatorKind::Engine,
                IndicatorKind::Airbag
            ]
        );
    }

    #[test]
    fn test_parse_indicator_list_empty() {
        assert!(parse_indicator_list("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_indicator_list_invalid() {
        assert!(parse_indicator_list("seatbelt,flux").is_err());
    }
}
