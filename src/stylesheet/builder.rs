//! Structured CSS construction
//!
//! A stylesheet is an ordered list of [`RuleBlock`]s, each a named group of
//! [`CssRule`]s. Blocks are produced independently and serialized once by
//! [`CssBuilder`].

use super::CssConfig;

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

/// A selector with its declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: vec![],
        }
    }

    /// Add a plain declaration
    pub fn decl(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.to_string(),
            value: value.into(),
            important: false,
        });
        self
    }

    /// Add an `!important` declaration
    pub fn important(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration {
            property: property.to_string(),
            value: value.into(),
            important: true,
        });
        self
    }

    /// Value of the first declaration for `property`
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

/// A named group of rules, rendered under a comment header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    pub name: &'static str,
    pub rules: Vec<CssRule>,
}

impl RuleBlock {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: vec![],
        }
    }

    pub fn rule(mut self, rule: CssRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Find a rule by exact selector
    pub fn find(&self, selector: &str) -> Option<&CssRule> {
        self.rules.iter().find(|r| r.selector == selector)
    }
}

/// Serialize rule blocks to CSS text
pub struct CssBuilder {
    config: CssConfig,
    blocks: Vec<RuleBlock>,
}

impl CssBuilder {
    /// Create a new CSS builder
    pub fn new(config: CssConfig) -> Self {
        Self {
            config,
            blocks: vec![],
        }
    }

    pub fn push(&mut self, block: RuleBlock) {
        self.blocks.push(block);
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = RuleBlock>) {
        self.blocks.extend(blocks);
    }

    /// Render all blocks in insertion order
    pub fn build(self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if self.config.pretty_print {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("/* {} */\n", block.name));
            }
            for rule in &block.rules {
                self.write_rule(&mut out, rule);
            }
        }
        out
    }

    fn write_rule(&self, out: &mut String, rule: &CssRule) {
        if self.config.pretty_print {
            out.push_str(&rule.selector);
            out.push_str(" {\n");
            for d in &rule.declarations {
                out.push_str(&format!("    {}: {}{};\n", d.property, d.value, suffix(d)));
            }
            out.push_str("}\n");
        } else {
            out.push_str(&rule.selector);
            out.push('{');
            for d in &rule.declarations {
                out.push_str(&format!("{}:{}{};", d.property, d.value, suffix(d)));
            }
            out.push('}');
        }
    }
}

fn suffix(d: &Declaration) -> &'static str {
    if d.important {
        " !important"
    } else {
        ""
    }
}
