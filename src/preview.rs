//! Live preview loading
//!
//! The chat widget is a third-party runtime living in the host page. It is
//! modelled as the [`ChatWidget`] capability so the load sequence can be
//! driven (and tested) without a browser. Failures on that side are logged
//! and swallowed: the editor keeps working and the next refresh tries again.

use thiserror::Error;

use crate::config::{EmbedMode, WidgetConfiguration};
use crate::snippet::{LoadOptions, ProactiveMessage, MOUNT_ELEMENT_ID, WIDGET_BUNDLE_URL};
use crate::{encoder, stylesheet, BuildError};

/// Errors reported by the widget runtime
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The loader script could not be fetched or evaluated
    #[error("widget script unavailable: {0}")]
    ScriptUnavailable(String),

    /// `load` rejected
    #[error("widget load failed: {0}")]
    LoadFailed(String),
}

/// The widget runtime as seen from the editor
pub trait ChatWidget {
    /// Whether the runtime global is already present
    fn is_loaded(&self) -> bool;

    /// Insert the loader script and wait for it to evaluate
    fn inject_loader(&mut self, src: &str) -> Result<(), LoaderError>;

    /// Whether the host document has an element with this id
    fn has_element(&self, id: &str) -> bool;

    fn hide(&mut self);

    fn load(&mut self, options: &LoadOptions) -> Result<(), LoaderError>;

    fn open(&mut self);

    fn proactive_clear(&mut self);

    fn proactive_push(&mut self, messages: &[ProactiveMessage]);
}

/// Outcome of a preview refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewStatus {
    Loaded,
    /// Embedded mode without a mount element in the page
    MissingMount,
    /// The runtime reported an error; see the log
    Failed,
}

/// Compile, encode and (re)load the widget with `config`
///
/// Only compilation errors are returned. Runtime problems are logged and
/// reported through [`PreviewStatus`].
pub fn load_preview<W: ChatWidget>(
    widget: &mut W,
    config: &WidgetConfiguration,
) -> Result<(String, PreviewStatus), BuildError> {
    let css = stylesheet::compile(config)?;
    let reference = encoder::encode(&css);
    let options = LoadOptions::new(config, &reference);

    let status = run_load_sequence(widget, &options, config.auto_open);
    Ok((reference, status))
}

/// Drive the widget through the load sequence for an assembled payload
pub fn run_load_sequence<W: ChatWidget>(
    widget: &mut W,
    options: &LoadOptions,
    auto_open: bool,
) -> PreviewStatus {
    if !widget.is_loaded() {
        if let Err(e) = widget.inject_loader(WIDGET_BUNDLE_URL) {
            tracing::error!(error = %e, src = WIDGET_BUNDLE_URL, "failed to add widget script");
            return PreviewStatus::Failed;
        }
        tracing::debug!("widget script added");
    } else {
        widget.hide();
    }

    if options.render.mode == EmbedMode::Embedded {
        let target = options.render.target.as_deref().unwrap_or(MOUNT_ELEMENT_ID);
        if !widget.has_element(target) {
            tracing::error!(element = target, "no element with this id found in the document");
            return PreviewStatus::MissingMount;
        }
    }

    if let Err(e) = widget.load(options) {
        tracing::error!(error = %e, "error loading chat widget");
        return PreviewStatus::Failed;
    }

    if let Some(block) = &options.proactive {
        if block.clear {
            widget.proactive_clear();
        }
        widget.proactive_push(&block.messages);
    }

    if auto_open {
        widget.open();
        tracing::debug!("widget opened");
    }

    PreviewStatus::Loaded
}
