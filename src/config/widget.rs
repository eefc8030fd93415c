//! Field definitions and defaults for the widget configuration

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Logo shown when the user has not supplied one
pub const DEFAULT_ASSISTANT_LOGO: &str = "https://i.postimg.cc/Bn95VC86/Styleflow-VF.png";

/// Range accepted by the chat width control
pub const CHAT_WIDTH_RANGE: RangeInclusive<u32> = 300..=380;

/// Range accepted by the launcher size control
pub const LAUNCHER_SIZE_RANGE: RangeInclusive<u32> = 30..=100;

/// Color scheme of the widget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("Light"),
            Theme::Dark => f.write_str("Dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Where the widget renders in the host page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedMode {
    /// Floating launcher and chat window
    #[default]
    Overlay,
    /// Rendered inline into a mount element in the host document
    Embedded,
}

/// All user-adjustable appearance and behavior settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfiguration {
    // Appearance
    pub background_color: String,
    pub text_color: String,
    pub brand_color: String,
    pub font_family: String,
    pub header_color: String,
    /// Empty means the widget's own footer color
    pub footer_color: String,
    pub title_text_color: String,
    pub end_chat_text_color: String,
    pub assistant_description_text_color: String,

    pub theme: Theme,

    // Message styles
    pub user_message_bg_color: String,
    pub user_message_text_color: String,
    pub assistant_message_bg_color: String,
    pub assistant_message_text_color: String,

    // Launcher
    pub launcher_color: String,
    pub launcher_size: u32,
    /// Empty means no background image
    pub launcher_image: String,
    pub launcher_offset: Option<u32>,

    // Layout
    pub embed_mode: EmbedMode,
    pub chat_width: u32,
    pub auto_open: bool,

    // Assistant identity
    pub assistant_name: String,
    pub assistant_description: String,
    pub assistant_logo: String,
    /// Overrides `assistant_logo` for the avatar when non-empty
    pub assistant_avatar_image: String,
    pub project_id: String,

    pub user_input_placeholder_text: String,
    pub proactive_messages: Vec<String>,
    pub selected_template: String,
}

impl Default for WidgetConfiguration {
    fn default() -> Self {
        let brand = "#4375F5".to_string();
        Self {
            background_color: "#FFFFFF".to_string(),
            text_color: "#1F2428".to_string(),
            header_color: brand.clone(),
            brand_color: brand,
            font_family: "sans-serif".to_string(),
            footer_color: String::new(),
            title_text_color: "#1F2428".to_string(),
            end_chat_text_color: "#000000".to_string(),
            assistant_description_text_color: "#000000".to_string(),
            theme: Theme::Light,
            user_message_bg_color: "#E0F7FA".to_string(),
            user_message_text_color: "#006064".to_string(),
            assistant_message_bg_color: "#FFF3E0".to_string(),
            assistant_message_text_color: "#E65100".to_string(),
            launcher_color: "#4375F5".to_string(),
            launcher_size: 60,
            launcher_image: String::new(),
            launcher_offset: None,
            embed_mode: EmbedMode::Overlay,
            chat_width: 380,
            auto_open: true,
            assistant_name: "Assistant".to_string(),
            assistant_description: "How can I assist you today?".to_string(),
            assistant_logo: DEFAULT_ASSISTANT_LOGO.to_string(),
            assistant_avatar_image: String::new(),
            project_id: "66fa5d8dd6785bb2984c7cfb".to_string(),
            user_input_placeholder_text: "Message...".to_string(),
            proactive_messages: Vec::new(),
            selected_template: "Default".to_string(),
        }
    }
}

impl WidgetConfiguration {
    /// Create a configuration with the editor's starting values
    pub fn new() -> Self {
        Self::default()
    }

    /// Image shown as the assistant avatar
    pub fn avatar_image(&self) -> &str {
        if self.assistant_avatar_image.is_empty() {
            &self.assistant_logo
        } else {
            &self.assistant_avatar_image
        }
    }

    /// Image announced to the widget runtime as the assistant logo
    pub fn logo_or_default(&self) -> &str {
        if self.assistant_logo.is_empty() {
            DEFAULT_ASSISTANT_LOGO
        } else {
            &self.assistant_logo
        }
    }

    /// Clamp slider-controlled values into the ranges their controls allow
    ///
    /// The stylesheet compiler accepts any integer; this is meant for input
    /// that did not come through the editor controls (files, CLI). Color and
    /// font values also lose any `;`, `{` or `}` here, since the compiler
    /// writes them into declarations verbatim.
    pub fn clamped(mut self) -> Self {
        let width = clamp_to(self.chat_width, &CHAT_WIDTH_RANGE);
        if width != self.chat_width {
            tracing::warn!(requested = self.chat_width, clamped = width, "chat_width out of range");
            self.chat_width = width;
        }

        let size = clamp_to(self.launcher_size, &LAUNCHER_SIZE_RANGE);
        if size != self.launcher_size {
            tracing::warn!(
                requested = self.launcher_size,
                clamped = size,
                "launcher_size out of range"
            );
            self.launcher_size = size;
        }

        for (field, value) in [
            ("background_color", &mut self.background_color),
            ("text_color", &mut self.text_color),
            ("brand_color", &mut self.brand_color),
            ("font_family", &mut self.font_family),
            ("header_color", &mut self.header_color),
            ("footer_color", &mut self.footer_color),
            ("title_text_color", &mut self.title_text_color),
            ("end_chat_text_color", &mut self.end_chat_text_color),
            ("assistant_description_text_color", &mut self.assistant_description_text_color),
            ("user_message_bg_color", &mut self.user_message_bg_color),
            ("user_message_text_color", &mut self.user_message_text_color),
            ("assistant_message_bg_color", &mut self.assistant_message_bg_color),
            ("assistant_message_text_color", &mut self.assistant_message_text_color),
            ("launcher_color", &mut self.launcher_color),
        ] {
            strip_css_delimiters(field, value);
        }
        self
    }

    /// Append a proactive message, ignoring blank input
    pub fn push_proactive_message(&mut self, message: &str) -> bool {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.proactive_messages.push(trimmed.to_string());
        true
    }

    /// Remove the proactive message at `index`, if present
    pub fn remove_proactive_message(&mut self, index: usize) -> Option<String> {
        (index < self.proactive_messages.len()).then(|| self.proactive_messages.remove(index))
    }
}

fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Characters that would end a declaration or block when written verbatim
const CSS_DELIMITERS: [char; 3] = [';', '{', '}'];

fn strip_css_delimiters(field: &str, value: &mut String) {
    if value.contains(&CSS_DELIMITERS[..]) {
        tracing::warn!(field, value = value.as_str(), "stripped CSS delimiters");
        value.retain(|c| !CSS_DELIMITERS.contains(&c));
    }
}
