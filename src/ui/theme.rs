use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub muted: String,
    pub glyph: String,
    pub card_bg: String,
    pub accent: String,
    pub selection_bg: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub celebrate_bg: String,
    pub celebrate_fg: String,
    pub error: String,
    pub warning: String,
}

impl Theme {
    /// User themes in `<config_dir>/hanzi-hero/themes/` shadow bundled ones.
    pub fn load(name: &str) -> Option<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("hanzi-hero")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => tracing::warn!(
                        path = %user_theme_path.display(),
                        "ignoring unparsable theme: {err}"
                    ),
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("chalkboard").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1f2a24".to_string(),
            fg: "#e8efe9".to_string(),
            muted: "#8a9a8f".to_string(),
            glyph: "#fdf6e3".to_string(),
            card_bg: "#2b3a31".to_string(),
            accent: "#f4c95d".to_string(),
            selection_bg: "#3d5244".to_string(),
            border: "#4a5e51".to_string(),
            border_focused: "#f4c95d".to_string(),
            header_bg: "#2b3a31".to_string(),
            header_fg: "#e8efe9".to_string(),
            bar_filled: "#7fc8a9".to_string(),
            bar_empty: "#2b3a31".to_string(),
            celebrate_bg: "#e0f7fa".to_string(),
            celebrate_fg: "#00695c".to_string(),
            error: "#ef6f6c".to_string(),
            warning: "#f4c95d".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn muted(&self) -> Color { Self::parse_color(&self.muted) }
    pub fn glyph(&self) -> Color { Self::parse_color(&self.glyph) }
    pub fn card_bg(&self) -> Color { Self::parse_color(&self.card_bg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn selection_bg(&self) -> Color { Self::parse_color(&self.selection_bg) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn celebrate_bg(&self) -> Color { Self::parse_color(&self.celebrate_bg) }
    pub fn celebrate_fg(&self) -> Color { Self::parse_color(&self.celebrate_fg) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
}
