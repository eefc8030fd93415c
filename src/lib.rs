//! Widget Styler - compile chat widget settings into deployable artifacts
//!
//! This library turns a [`WidgetConfiguration`] into the CSS injected into
//! an embedded chat widget, a cache-busted `data:` URI carrying that CSS, and
//! an integration script a host site can paste into its pages.
//!
//! # Example
//!
//! ```rust
//! use widget_styler::{build_artifacts, WidgetConfiguration};
//!
//! let artifacts = build_artifacts(&WidgetConfiguration::default()).unwrap();
//! assert!(artifacts.css.contains("--brand-color"));
//! assert!(artifacts.stylesheet_reference.starts_with("data:text/css;base64,"));
//! assert!(artifacts.snippet.contains("<script"));
//! ```

pub mod color;
pub mod config;
pub mod encoder;
pub mod preview;
pub mod snippet;
pub mod stylesheet;
pub mod template;
pub mod theme;

pub use color::{lighten, to_rgba, ColorError};
pub use config::{ConfigError, EmbedMode, Theme, WidgetConfiguration};
pub use encoder::{decode, encode, EncodeError};
pub use preview::{load_preview, ChatWidget, LoaderError, PreviewStatus};
pub use snippet::{render_snippet, LoadOptions};
pub use stylesheet::{compile, compile_with, CssConfig, StylesheetError};
pub use template::{apply_template, TemplateRegistry};
pub use theme::{apply_theme, ThemePatch};

use thiserror::Error;

/// Errors that can occur while building artifacts
#[derive(Debug, Error)]
pub enum BuildError {
    /// Error during stylesheet compilation
    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),
}

/// Everything a site owner needs to install the styled widget
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Compiled stylesheet
    pub css: String,
    /// `data:` URI of the stylesheet, as loaded by the live preview
    pub stylesheet_reference: String,
    /// Integration `<script>` block
    pub snippet: String,
}

/// Build all artifacts with default CSS output settings
pub fn build_artifacts(config: &WidgetConfiguration) -> Result<Artifacts, BuildError> {
    build_artifacts_with(config, &CssConfig::default())
}

/// Build all artifacts with custom CSS output settings
///
/// The snippet embeds its own freshly compiled and encoded stylesheet, so it
/// is self-contained even if the preview reference is discarded.
pub fn build_artifacts_with(
    config: &WidgetConfiguration,
    css_config: &CssConfig,
) -> Result<Artifacts, BuildError> {
    let css = compile_with(config, css_config)?;
    let stylesheet_reference = encode(&css);

    let snippet_reference = encode(&compile_with(config, css_config)?);
    let snippet = render_snippet(config, &snippet_reference);

    Ok(Artifacts {
        css,
        stylesheet_reference,
        snippet,
    })
}
