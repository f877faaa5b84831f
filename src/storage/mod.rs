//! Configuration and theme persistence module.
//!
//! Handles saving and loading dashboard settings to/from disk.
//! Includes theme book management and config persistence.

pub mod defaults;
pub mod profiles;
pub mod types;

// Re-export commonly used items
pub use defaults::{ensure_defaults_exist, get_theme, get_themes_path, set_active_theme};
pub use profiles::*;
pub use types::*;
