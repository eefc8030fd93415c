//! Preset table and registry

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::WidgetConfiguration;

/// Errors that can occur during preset operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Duplicate preset definition
    #[error("duplicate preset definition: {name}")]
    Duplicate { name: String },

    /// Error reading a preset file
    #[error("error reading preset file: {0}")]
    Io(#[from] std::io::Error),

    /// Preset file is not valid TOML
    #[error("error parsing preset TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A partial configuration applied atomically
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Preset {
    pub background_color: String,
    pub text_color: String,
    pub brand_color: String,
    pub font_family: String,
}

impl Preset {
    /// Overwrite the fields this preset owns and re-derive the header color
    pub fn apply_to(&self, config: &mut WidgetConfiguration) {
        config.background_color = self.background_color.clone();
        config.text_color = self.text_color.clone();
        config.brand_color = self.brand_color.clone();
        config.font_family = self.font_family.clone();
        config.header_color = self.brand_color.clone();
    }
}

/// Built-in presets as `(name, background, text, brand, font)`
pub const BUILTIN_PRESETS: &[(&str, &str, &str, &str, &str)] = &[
    ("Default", "#1F2428", "#FFFFFF", "#4375F5", "sans-serif"),
    ("Red", "#FFEBEE", "#B71C1C", "#F44336", "Arial, sans-serif"),
    ("Blue", "#E3F2FD", "#0D47A1", "#2196F3", "Helvetica, sans-serif"),
    ("Green", "#E8F5E9", "#1B5E20", "#4CAF50", "Verdana, sans-serif"),
    ("Yellow", "#FFFDE7", "#F57F17", "#FFEB3B", "Georgia, serif"),
];

/// TOML structure for preset files
#[derive(Deserialize)]
struct TomlPresets {
    #[serde(default)]
    presets: toml::Table,
}

/// Registry of named presets, kept in definition order
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    order: Vec<String>,
    presets: HashMap<String, Preset>,
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            order: Vec::new(),
            presets: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in presets
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (name, background, text, brand, font) in BUILTIN_PRESETS {
            registry.order.push(name.to_string());
            registry.presets.insert(
                name.to_string(),
                Preset {
                    background_color: background.to_string(),
                    text_color: text.to_string(),
                    brand_color: brand.to_string(),
                    font_family: font.to_string(),
                },
            );
        }
        registry
    }

    /// Register a preset under a new name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        preset: Preset,
    ) -> Result<(), TemplateError> {
        let name = name.into();
        if self.presets.contains_key(&name) {
            return Err(TemplateError::Duplicate { name });
        }
        self.order.push(name.clone());
        self.presets.insert(name, preset);
        Ok(())
    }

    /// Add presets from a TOML document of `[presets.<name>]` tables
    pub fn extend_from_str(&mut self, content: &str) -> Result<(), TemplateError> {
        let parsed: TomlPresets = toml::from_str(content)?;

        // Validate the whole document before touching the registry
        let mut staged: Vec<(String, Preset)> = Vec::with_capacity(parsed.presets.len());
        for (name, value) in parsed.presets {
            if self.presets.contains_key(&name) || staged.iter().any(|(n, _)| *n == name) {
                return Err(TemplateError::Duplicate { name });
            }
            staged.push((name, value.try_into::<Preset>()?));
        }

        for (name, preset) in staged {
            self.order.push(name.clone());
            self.presets.insert(name, preset);
        }
        Ok(())
    }

    /// Add presets from a TOML file
    pub fn extend_from_file(&mut self, path: &Path) -> Result<(), TemplateError> {
        let content = std::fs::read_to_string(path)?;
        self.extend_from_str(&content)
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    /// Check if a preset exists
    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Preset names in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Apply the named preset to `config`
    ///
    /// Unknown names leave `config` untouched and return `false`.
    pub fn apply(&self, name: &str, config: &mut WidgetConfiguration) -> bool {
        match self.get(name) {
            Some(preset) => {
                preset.apply_to(config);
                config.selected_template = name.to_string();
                true
            }
            None => {
                tracing::debug!(preset = name, "unknown preset ignored");
                false
            }
        }
    }
}

/// Apply one of the built-in presets to `config`
pub fn apply_template(name: &str, config: &mut WidgetConfiguration) -> bool {
    TemplateRegistry::builtin().apply(name, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_names_in_order() {
        let registry = TemplateRegistry::builtin();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["Default", "Red", "Blue", "Green", "Yellow"]);
    }

    #[test]
    fn test_apply_red_overwrites_prior_state() {
        let mut config = WidgetConfiguration {
            background_color: "#123456".to_string(),
            brand_color: "#654321".to_string(),
            header_color: "#ABCDEF".to_string(),
            ..Default::default()
        };

        assert!(apply_template("Red", &mut config));
        assert_eq!(config.background_color, "#FFEBEE");
        assert_eq!(config.text_color, "#B71C1C");
        assert_eq!(config.brand_color, "#F44336");
        assert_eq!(config.header_color, "#F44336");
        assert_eq!(config.font_family, "Arial, sans-serif");
        assert_eq!(config.selected_template, "Red");
    }

    #[test]
    fn test_apply_leaves_unowned_fields() {
        let mut config = WidgetConfiguration::default();
        config.user_message_bg_color = "#010101".to_string();
        apply_template("Green", &mut config);
        assert_eq!(config.user_message_bg_color, "#010101");
        assert_eq!(config.launcher_color, "#4375F5");
    }

    #[test]
    fn test_unknown_preset_is_noop() {
        let mut config = WidgetConfiguration::default();
        let before = config.clone();
        assert!(!apply_template("Purple", &mut config));
        assert_eq!(config, before);
    }

    #[test]
    fn test_extend_from_str() {
        let mut registry = TemplateRegistry::builtin();
        registry
            .extend_from_str(
                r##"
[presets.Midnight]
background_color = "#000022"
text_color = "#EEEEFF"
brand_color = "#3344AA"
font_family = "Georgia, serif"
"##,
            )
            .unwrap();

        assert!(registry.contains("Midnight"));
        assert_eq!(registry.names().last(), Some("Midnight"));

        let mut config = WidgetConfiguration::default();
        assert!(registry.apply("Midnight", &mut config));
        assert_eq!(config.header_color, "#3344AA");
    }

    #[test]
    fn test_extend_rejects_duplicate() {
        let mut registry = TemplateRegistry::builtin();
        let result = registry.extend_from_str(
            r##"
[presets.Red]
background_color = "#000000"
text_color = "#FFFFFF"
brand_color = "#FF0000"
font_family = "sans-serif"
"##,
        );
        assert!(matches!(result, Err(TemplateError::Duplicate { .. })));
    }

    #[test]
    fn test_extend_keeps_document_order() {
        let mut registry = TemplateRegistry::empty();
        registry
            .extend_from_str(
                r##"
[presets.Zeta]
background_color = "#000000"
text_color = "#FFFFFF"
brand_color = "#FF0000"
font_family = "sans-serif"

[presets.Alpha]
background_color = "#FFFFFF"
text_color = "#000000"
brand_color = "#00FF00"
font_family = "serif"
"##,
            )
            .unwrap();

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_failed_extend_leaves_registry_unchanged() {
        let mut registry = TemplateRegistry::builtin();
        let result = registry.extend_from_str(
            r##"
[presets.Aaa]
background_color = "#000000"
text_color = "#FFFFFF"
brand_color = "#FF0000"
font_family = "sans-serif"

[presets.Red]
background_color = "#000000"
text_color = "#FFFFFF"
brand_color = "#FF0000"
font_family = "sans-serif"
"##,
        );

        assert!(matches!(result, Err(TemplateError::Duplicate { name }) if name == "Red"));
        assert!(!registry.contains("Aaa"));
        assert_eq!(registry.names().count(), BUILTIN_PRESETS.len());
    }

    #[test]
    fn test_malformed_preset_leaves_registry_unchanged() {
        let mut registry = TemplateRegistry::empty();
        let result = registry.extend_from_str(
            r##"
[presets.Good]
background_color = "#000000"
text_color = "#FFFFFF"
brand_color = "#FF0000"
font_family = "sans-serif"

[presets.Half]
brand_color = "#FF0000"
"##,
        );

        assert!(matches!(result, Err(TemplateError::Parse(_))));
        assert!(!registry.contains("Good"));
    }

    #[test]
    fn test_extend_rejects_incomplete_preset() {
        let mut registry = TemplateRegistry::empty();
        let result = registry.extend_from_str(
            r##"
[presets.Half]
brand_color = "#FF0000"
"##,
        );
        assert!(matches!(result, Err(TemplateError::Parse(_))));
    }
}
