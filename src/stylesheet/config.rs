//! Configuration for CSS output

/// Configuration options for stylesheet output
#[derive(Debug, Clone)]
pub struct CssConfig {
    /// Selector holding the custom properties (the widget renders in a shadow root)
    pub scope_selector: String,

    /// Prefix of the widget's class names (e.g., "vfrc-" for "vfrc-launcher")
    pub class_prefix: String,

    /// Whether to format output with indentation and block comments
    pub pretty_print: bool,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            scope_selector: ":host".to_string(),
            class_prefix: "vfrc-".to_string(),
            pretty_print: true,
        }
    }
}

impl CssConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selector that receives the custom properties
    pub fn with_scope_selector(mut self, selector: impl Into<String>) -> Self {
        self.scope_selector = selector.into();
        self
    }

    /// Set the widget class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Class selector for a widget element, e.g. `.vfrc-launcher`
    pub fn class(&self, name: &str) -> String {
        format!(".{}{}", self.class_prefix, name)
    }
}
