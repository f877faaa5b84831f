pub mod dashboard_image;
pub mod gauge;
pub mod indicators;
pub mod level_bar;
pub mod parsing;

// Re-export commonly used items
pub use dashboard_image::{generate_dashboard_image, generate_gauge_image};
pub use indicators::IndicatorKind;
