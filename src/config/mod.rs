//! The widget configuration record
//!
//! `WidgetConfiguration` is the single source of truth handed to every
//! compiler stage. It is loaded from TOML by the CLI and mutated in place by
//! presets and themes.

mod load;
mod widget;

pub use load::ConfigError;
pub use widget::{
    EmbedMode, Theme, WidgetConfiguration, CHAT_WIDTH_RANGE, DEFAULT_ASSISTANT_LOGO,
    LAUNCHER_SIZE_RANGE,
};
