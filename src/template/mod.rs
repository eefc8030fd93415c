//! Preset color schemes
//!
//! A preset is a named fragment of a configuration (background, text, brand
//! and font) that is applied in one step. The built-in table mirrors the
//! editor's preset dropdown; additional presets can be loaded from TOML.
//!
//! # Example
//!
//! ```rust
//! use widget_styler::{apply_template, WidgetConfiguration};
//!
//! let mut config = WidgetConfiguration::default();
//! assert!(apply_template("Red", &mut config));
//! assert_eq!(config.header_color, "#F44336");
//! ```

mod registry;

pub use registry::{apply_template, Preset, TemplateError, TemplateRegistry, BUILTIN_PRESETS};
