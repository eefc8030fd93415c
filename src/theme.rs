//! Theme-dependent field derivation
//!
//! Selecting a theme overwrites a fixed subset of appearance fields. The
//! derivation reads nothing but the theme and the brand color, so the owner
//! of the configuration calls [`resolve`] again whenever either changes and
//! applies the returned patch.
//!
//! Message bubble colors are not part of the patch: once set they are left
//! alone by theme switches.

use crate::config::{Theme, WidgetConfiguration};

/// Dark theme surface color
pub const DARK_BACKGROUND: &str = "#1F2428";
/// Light theme surface color
pub const LIGHT_BACKGROUND: &str = "#FFFFFF";

/// Fields overwritten by a theme switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePatch {
    pub theme: Theme,
    pub background_color: String,
    pub text_color: String,
    pub header_color: String,
    pub footer_color: String,
    pub title_text_color: String,
    pub end_chat_text_color: String,
    pub assistant_description_text_color: String,
}

impl ThemePatch {
    /// Write every patched field into `config`
    pub fn apply(&self, config: &mut WidgetConfiguration) {
        config.theme = self.theme;
        config.background_color = self.background_color.clone();
        config.text_color = self.text_color.clone();
        config.header_color = self.header_color.clone();
        config.footer_color = self.footer_color.clone();
        config.title_text_color = self.title_text_color.clone();
        config.end_chat_text_color = self.end_chat_text_color.clone();
        config.assistant_description_text_color = self.assistant_description_text_color.clone();
    }
}

/// Derive the fields a theme owns from the theme and brand color
pub fn resolve(theme: Theme, brand_color: &str) -> ThemePatch {
    match theme {
        Theme::Dark => ThemePatch {
            theme,
            background_color: DARK_BACKGROUND.to_string(),
            text_color: "#FFFFFF".to_string(),
            header_color: brand_color.to_string(),
            footer_color: brand_color.to_string(),
            title_text_color: "#FFFFFF".to_string(),
            end_chat_text_color: "#FFFFFF".to_string(),
            assistant_description_text_color: "#FFFFFF".to_string(),
        },
        Theme::Light => ThemePatch {
            theme,
            background_color: LIGHT_BACKGROUND.to_string(),
            text_color: "#1F2428".to_string(),
            header_color: brand_color.to_string(),
            // empty keeps the widget's own footer
            footer_color: String::new(),
            title_text_color: "#1F2428".to_string(),
            end_chat_text_color: "#000000".to_string(),
            assistant_description_text_color: "#000000".to_string(),
        },
    }
}

/// Compute the patch for switching `config` to `theme`
pub fn apply_theme(theme: Theme, config: &WidgetConfiguration) -> ThemePatch {
    resolve(theme, &config.brand_color)
}
