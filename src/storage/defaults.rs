//! Management of the local theme book (themes.json).
//!
//! Acts as the local "database" of theme definitions the renderer can
//! resolve by id.

use super::profiles::get_config_dir;
use super::types::{ThemeBook, ThemeColors, ThemeEntry};
use crate::error::{DashboardError, Result};
use std::path::PathBuf;

const THEMES_FILE: &str = "themes.json";

/// Get the path to the themes.json file.
pub fn get_themes_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(THEMES_FILE))
}

/// Load the theme book from disk.
pub fn load_themes() -> Result<ThemeBook> {
    let path = get_themes_path()?;

    if !path.exists() {
        return Err(DashboardError::InvalidProfile(
            "Themes file not found".into(),
        ));
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to read themes: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to parse themes: {}", e)))
}

/// Save the theme book to disk.
pub fn save_themes(book: &ThemeBook) -> Result<()> {
    let path = get_themes_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let content = serde_json::to_string_pretty(book)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to serialize themes: {}", e)))?;

    std::fs::write(&path, content)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to write themes: {}", e)))?;

    Ok(())
}

/// Ensure themes.json exists, creating it with the built-in themes if missing.
pub fn ensure_defaults_exist() -> Result<()> {
    let path = get_themes_path()?;
    if path.exists() {
        return Ok(());
    }

    let book = ThemeBook {
        active_theme_id: Some("classic".into()),
        themes: vec![builtin_classic(), builtin_night()],
    };

    save_themes(&book)?;
    println!("Created default themes at: {}", path.display());

    Ok(())
}

/// Get a theme entry by id. Case-insensitive search.
pub fn get_theme(id: &str) -> Result<ThemeEntry> {
    ensure_defaults_exist()?;

    let book = load_themes()?;
    let search = id.to_lowercase();

    book.themes
        .into_iter()
        .find(|t| t.id.to_lowercase() == search)
        .ok_or_else(|| DashboardError::InvalidProfile(format!("Theme '{}' not found", id)))
}

/// Mark a theme as active in the theme book.
pub fn set_active_theme(id: &str) -> Result<()> {
    ensure_defaults_exist()?;

    let mut book = load_themes()?;
    let search = id.to_lowercase();

    if !book.themes.iter().any(|t| t.id.to_lowercase() == search) {
        return Err(DashboardError::InvalidProfile(format!(
            "Theme '{}' not found",
            id
        )));
    }

    book.active_theme_id = Some(search);
    save_themes(&book)
}

fn builtin_classic() -> ThemeEntry {
    ThemeEntry {
        id: "classic".into(),
        name: Some("Classic".into()),
        colors: ThemeColors {
            background: "000000".into(),
            dial: "FFFFFF".into(),
            needle: "FF0000".into(),
            danger_fill: "500000".into(),
            text: "FFFFFF".into(),
            outline: "FFFFFF".into(),
            warning_dot: "FF0000".into(),
        },
    }
}

fn builtin_night() -> ThemeEntry {
    ThemeEntry {
        id: "night".into(),
        name: Some("Night".into()),
        colors: ThemeColors {
            background: "000000".into(),
            dial: "C88C28".into(),
            needle: "DC3C1E".into(),
            danger_fill: "3C0A00".into(),
            text: "C88C28".into(),
            outline: "96691E".into(),
            warning_dot: "DC3C1E".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    #[test]
    fn test_builtin_classic_matches_compiled_theme() {
        let entry = builtin_classic();
        let theme = Theme::from_stored(&entry.colors);
        assert_eq!(theme, Theme::CLASSIC);
    }

    #[test]
    fn test_builtin_night_matches_compiled_theme() {
        let entry = builtin_night();
        let theme = Theme::from_stored(&entry.colors);
        assert_eq!(theme, Theme::NIGHT);
    }

    #[test]
    fn test_theme_book_roundtrip() {
        let book = ThemeBook {
            active_theme_id: Some("classic".into()),
            themes: vec![builtin_classic(), builtin_night()],
        };
        let json = serde_json::to_string(&book).unwrap();
        let parsed: ThemeBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.themes.len(), 2);
        assert_eq!(parsed.active_theme_id.as_deref(), Some("classic"));
        assert_eq!(parsed.themes[1].colors.dial, "C88C28");
    }
}
