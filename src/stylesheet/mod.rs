//! Stylesheet compiler
//!
//! Maps a [`WidgetConfiguration`] to the CSS injected into the chat widget.
//! Compilation is pure and recomputed on every call; two calls with the same
//! configuration yield identical text.
//!
//! # Example
//!
//! ```rust
//! use widget_styler::{compile, WidgetConfiguration};
//!
//! let css = compile(&WidgetConfiguration::default()).unwrap();
//! assert!(css.contains("--brand-color: #4375F5;"));
//! ```

mod builder;
pub mod config;
mod placeholder;
mod rules;

pub use builder::{CssBuilder, CssRule, Declaration, RuleBlock};
pub use config::CssConfig;
pub use placeholder::{decode_placeholder, encode_placeholder, placeholder_svg_url};

use thiserror::Error;

use crate::color::ColorError;
use crate::config::WidgetConfiguration;

use rules::BrandShades;

/// Errors that can occur while compiling a stylesheet
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The brand color could not be used for derived shades
    #[error("invalid brand color: {0}")]
    BrandColor(#[from] ColorError),
}

/// The ordered rule blocks making up the stylesheet
pub fn stylesheet_blocks(
    config: &WidgetConfiguration,
    css: &CssConfig,
) -> Result<Vec<RuleBlock>, StylesheetError> {
    let shades = BrandShades::from_brand(&config.brand_color)?;

    Ok(vec![
        rules::tokens(config, &shades, css),
        rules::launcher(config, css),
        rules::chat(config, css),
        rules::scrollbar(&shades),
        rules::messages(css),
        rules::buttons(config, css),
        rules::placeholder(config, css),
    ])
}

/// Compile a configuration to CSS with default output settings
pub fn compile(config: &WidgetConfiguration) -> Result<String, StylesheetError> {
    compile_with(config, &CssConfig::default())
}

/// Compile a configuration to CSS
pub fn compile_with(
    config: &WidgetConfiguration,
    css: &CssConfig,
) -> Result<String, StylesheetError> {
    let mut builder = CssBuilder::new(css.clone());
    builder.extend(stylesheet_blocks(config, css)?);
    Ok(builder.build())
}
