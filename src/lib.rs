//! Car Dashboard Library
//!
//! Renders speedometer-style car dashboard frames as PNG images.
//!
//! # Features
//!
//! - Radial dials (speedometer, tachometer) with danger zones
//! - Fuel and coolant temperature level bars
//! - Status indicator badges with blinking warning dots
//! - Throttle-driven vehicle simulation for frame sequences
//!
//! # Example
//!
//! ```no_run
//! use car_dashboard::config::Theme;
//! use car_dashboard::utils::dashboard_image::generate_dashboard_image;
//! use car_dashboard::utils::indicators::IndicatorKind;
//! use car_dashboard::vehicle::VehicleState;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = VehicleState {
//!         speed: 120.0,
//!         rpm: 4500.0,
//!         ..Default::default()
//!     };
//!
//!     let img = generate_dashboard_image(
//!         &state,
//!         &[IndicatorKind::Seatbelt],
//!         0,
//!         Some("10:30:00 AM"),
//!         &Theme::CLASSIC,
//!         None,
//!     )
//!     .ok_or("no usable font found")?;
//!
//!     img.save("dashboard.png")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod storage;
pub mod utils;
pub mod vehicle;

// Re-exports for convenience
pub use config::{GaugeKind, Theme};
pub use error::{DashboardError, Result};
pub use vehicle::VehicleState;

// Re-exports for rendering
pub use utils::dashboard_image::{DashboardLayout, generate_dashboard_image, generate_gauge_image};
pub use utils::gauge::GaugeConfig;
pub use utils::indicators::IndicatorKind;
