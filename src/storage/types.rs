use serde::{Deserialize, Serialize};

/// Theme collection persisted as themes.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeBook {
    pub active_theme_id: Option<String>,
    pub themes: Vec<ThemeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeEntry {
    pub id: String,
    pub name: Option<String>,
    pub colors: ThemeColors,
}

/// Hex color strings ("RRGGBB" or "#RRGGBB").
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub background: String,
    pub dial: String,
    pub needle: String,
    pub danger_fill: String,
    pub text: String,
    pub outline: String,
    pub warning_dot: String,
}
