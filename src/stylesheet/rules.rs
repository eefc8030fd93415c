//! Rule blocks of the widget stylesheet
//!
//! Each function maps part of the configuration to one [`RuleBlock`]. Most
//! rules read from the custom properties emitted by [`tokens`], so one token
//! layer drives the whole sheet.

use crate::color::{lighten, to_rgba};
use crate::config::{Theme, WidgetConfiguration};
use crate::theme::{DARK_BACKGROUND, LIGHT_BACKGROUND};

use super::builder::{CssRule, RuleBlock};
use super::placeholder::placeholder_svg_url;
use super::{CssConfig, StylesheetError};

/// Values computed from the brand color
#[derive(Debug, Clone)]
pub struct BrandShades {
    pub hover: String,
    pub scrollbar_thumb: String,
}

impl BrandShades {
    pub fn from_brand(brand_color: &str) -> Result<Self, StylesheetError> {
        Ok(Self {
            hover: lighten(brand_color, 20)?,
            scrollbar_thumb: to_rgba(brand_color, 0.3)?,
        })
    }
}

/// Quote a URL for use in `url(...)`
fn css_url(url: &str) -> String {
    let escaped: String = url
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r'))
        .flat_map(|c| match c {
            '"' | '\\' => vec!['\\', c],
            _ => vec![c],
        })
        .collect();
    format!("url(\"{escaped}\")")
}

fn var(name: &str) -> String {
    format!("var(--{name})")
}

/// Custom properties shared by every other block
pub fn tokens(config: &WidgetConfiguration, shades: &BrandShades, css: &CssConfig) -> RuleBlock {
    let (background, gray) = match config.theme {
        Theme::Dark => (DARK_BACKGROUND, "#303030"),
        Theme::Light => (LIGHT_BACKGROUND, "#F4F4F4"),
    };
    let footer = if config.footer_color.is_empty() {
        "transparent"
    } else {
        config.footer_color.as_str()
    };

    RuleBlock::new("Design Tokens").rule(
        CssRule::new(&css.scope_selector)
            .decl("--fonts-default", &config.font_family)
            .decl("--brand-color", &config.brand_color)
            .decl("--hover-color", &shades.hover)
            .decl("--dark-background", background)
            .decl("--light-gray", gray)
            .decl("--font-color", &config.text_color)
            .decl("--user-message-bg-color", &config.user_message_bg_color)
            .decl("--user-message-text-color", &config.user_message_text_color)
            .decl("--assistant-message-bg-color", &config.assistant_message_bg_color)
            .decl("--assistant-message-text-color", &config.assistant_message_text_color)
            .decl("--chat-width", format!("{}px", config.chat_width))
            .decl("--footer-color", footer)
            .decl("--header-color", &config.header_color)
            .decl("--title-text-color", &config.title_text_color)
            .decl("--end-chat-text-color", &config.end_chat_text_color)
            .decl(
                "--assistant-description-text-color",
                &config.assistant_description_text_color,
            ),
    )
}

/// Launcher button
pub fn launcher(config: &WidgetConfiguration, css: &CssConfig) -> RuleBlock {
    let selector = css.class("launcher");
    let size = format!("{}px", config.launcher_size);

    let mut rule = CssRule::new(&selector).important("background-color", &config.launcher_color);
    if !config.launcher_image.is_empty() {
        rule = rule
            .important("background-image", css_url(&config.launcher_image))
            .decl("background-size", "cover");
    }
    rule = rule.important("width", &size).important("height", size);
    if let Some(offset) = config.launcher_offset {
        let offset = format!("{offset}px");
        rule = rule.important("right", &offset).important("bottom", offset);
    }

    RuleBlock::new("Launcher")
        .rule(rule)
        .rule(
            CssRule::new(format!("{selector}:hover"))
                .important("background-color", var("hover-color")),
        )
}

/// Chat window, header, footer and assistant info
pub fn chat(config: &WidgetConfiguration, css: &CssConfig) -> RuleBlock {
    let footer = css.class("footer");
    RuleBlock::new("Chat")
        .rule(
            CssRule::new(css.class("chat"))
                .important("background-color", &config.background_color)
                .important("font-family", var("fonts-default"))
                .important("width", var("chat-width")),
        )
        .rule(CssRule::new(css.class("widget--chat")).important("max-height", "100%"))
        .rule(CssRule::new(css.class("header")).important("background-color", var("header-color")))
        .rule(CssRule::new(&footer).important("background-color", var("footer-color")))
        .rule(
            CssRule::new(css.class("assistant-info--title"))
                .important("color", var("title-text-color")),
        )
        .rule(
            CssRule::new(css.class("assistant-info--description"))
                .important("color", var("assistant-description-text-color")),
        )
        .rule(
            CssRule::new(css.class("assistant-avatar"))
                .important("background-image", css_url(config.avatar_image())),
        )
        .rule(
            CssRule::new(format!("{footer} {}", css.class("button")))
                .important("color", var("end-chat-text-color")),
        )
        .rule(
            CssRule::new(format!("{}::placeholder", css.class("input")))
                .important("color", var("font-color")),
        )
}

/// Scrollbar tinted with the brand color
pub fn scrollbar(shades: &BrandShades) -> RuleBlock {
    RuleBlock::new("Scrollbar")
        .rule(
            CssRule::new("::-webkit-scrollbar")
                .important("border-left", format!("1px solid {}", var("brand-color"))),
        )
        .rule(
            CssRule::new("::-webkit-scrollbar-thumb")
                .important("background-color", &shades.scrollbar_thumb),
        )
}

/// User and assistant message bubbles
pub fn messages(css: &CssConfig) -> RuleBlock {
    let message = css.class("message");
    RuleBlock::new("Messages")
        .rule(
            CssRule::new(format!("{} {message}", css.class("user-response")))
                .important("background-color", var("user-message-bg-color"))
                .important("color", var("user-message-text-color")),
        )
        .rule(
            CssRule::new(format!("{} {message}", css.class("system-response")))
                .important("background-color", var("assistant-message-bg-color"))
                .important("color", var("assistant-message-text-color")),
        )
}

/// Secondary (choice) and primary (footer) buttons
///
/// The secondary button differs structurally between themes: outlined on
/// dark surfaces, filled on light ones.
pub fn buttons(config: &WidgetConfiguration, css: &CssConfig) -> RuleBlock {
    let secondary = css.class("button--secondary");
    let primary = format!("{} button{}", css.class("footer"), css.class("button"));

    let block = match config.theme {
        Theme::Dark => RuleBlock::new("Buttons")
            .rule(
                CssRule::new(&secondary)
                    .important("background-color", "transparent")
                    .important("color", var("font-color"))
                    .important("border", format!("1px solid {}", var("brand-color"))),
            )
            .rule(
                CssRule::new(format!("{secondary}:hover"))
                    .important("background-color", var("light-gray"))
                    .important("border", format!("2px solid {}", var("hover-color"))),
            ),
        Theme::Light => RuleBlock::new("Buttons")
            .rule(
                CssRule::new(&secondary)
                    .important("background-color", var("light-gray"))
                    .important("color", var("font-color"))
                    .important("border-color", var("brand-color")),
            )
            .rule(
                CssRule::new(format!("{secondary}:hover"))
                    .important("font-weight", "700")
                    .important("border-color", var("brand-color"))
                    .important("border-width", "2px"),
            ),
    };

    block
        .rule(
            CssRule::new(&primary)
                .important("position", "relative")
                .important("background-color", var("brand-color")),
        )
        .rule(
            CssRule::new(format!("{primary}::after"))
                .important("position", "absolute")
                .important("display", "flex")
                .important("align-items", "center")
                .important("justify-content", "center")
                .important("inset", "0")
                .important("color", var("font-color")),
        )
}

/// Hide the native placeholder and paint the configured text instead
pub fn placeholder(config: &WidgetConfiguration, css: &CssConfig) -> RuleBlock {
    let textarea = format!("{} textarea", css.class("chat-input"));
    let image = placeholder_svg_url(&config.user_input_placeholder_text);

    RuleBlock::new("Input Placeholder")
        .rule(CssRule::new(&textarea).decl("background-image", "none"))
        .rule(CssRule::new(format!("{textarea}::-moz-placeholder")).decl("color", "transparent"))
        .rule(CssRule::new(format!("{textarea}::placeholder")).decl("color", "transparent"))
        .rule(
            CssRule::new(format!("{textarea}:-moz-placeholder-shown"))
                .decl("background-image", &image)
                .decl("background-repeat", "no-repeat"),
        )
        .rule(
            CssRule::new(format!("{textarea}:placeholder-shown"))
                .decl("background-image", image)
                .decl("background-repeat", "no-repeat"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shades() -> BrandShades {
        BrandShades::from_brand("#4375F5").unwrap()
    }

    #[test]
    fn test_brand_shades() {
        let s = shades();
        assert_eq!(s.hover, "#76a8ff");
        assert_eq!(s.scrollbar_thumb, "rgba(67, 117, 245, 0.3)");
    }

    #[test]
    fn test_tokens_theme_conditioned() {
        let css = CssConfig::default();
        let mut config = WidgetConfiguration::default();
        let light = tokens(&config, &shades(), &css);
        assert_eq!(light.rules[0].value_of("--dark-background"), Some("#FFFFFF"));
        assert_eq!(light.rules[0].value_of("--light-gray"), Some("#F4F4F4"));

        config.theme = Theme::Dark;
        let dark = tokens(&config, &shades(), &css);
        assert_eq!(dark.rules[0].value_of("--dark-background"), Some("#1F2428"));
        assert_eq!(dark.rules[0].value_of("--light-gray"), Some("#303030"));
    }

    #[test]
    fn test_empty_footer_token_is_transparent() {
        let config = WidgetConfiguration::default();
        let block = tokens(&config, &shades(), &CssConfig::default());
        assert_eq!(block.rules[0].value_of("--footer-color"), Some("transparent"));
    }

    #[test]
    fn test_launcher_without_image() {
        let block = launcher(&WidgetConfiguration::default(), &CssConfig::default());
        let rule = block.find(".vfrc-launcher").unwrap();
        assert_eq!(rule.value_of("background-image"), None);
        assert_eq!(rule.value_of("width"), Some("60px"));
        assert_eq!(rule.value_of("right"), None);
        assert!(block.find(".vfrc-launcher:hover").is_some());
    }

    #[test]
    fn test_launcher_with_image_and_offset() {
        let config = WidgetConfiguration {
            launcher_image: "https://example.com/l.png".to_string(),
            launcher_offset: Some(24),
            ..Default::default()
        };
        let block = launcher(&config, &CssConfig::default());
        let rule = block.find(".vfrc-launcher").unwrap();
        assert_eq!(
            rule.value_of("background-image"),
            Some("url(\"https://example.com/l.png\")")
        );
        assert_eq!(rule.value_of("bottom"), Some("24px"));
    }

    #[test]
    fn test_css_url_escapes_quotes() {
        assert_eq!(css_url("a\"b\\c\nd"), "url(\"a\\\"b\\\\cd\")");
    }

    #[test]
    fn test_avatar_uses_override() {
        let config = WidgetConfiguration {
            assistant_avatar_image: "https://example.com/avatar.png".to_string(),
            ..Default::default()
        };
        let block = chat(&config, &CssConfig::default());
        let rule = block.find(".vfrc-assistant-avatar").unwrap();
        assert_eq!(
            rule.value_of("background-image"),
            Some("url(\"https://example.com/avatar.png\")")
        );
    }

    #[test]
    fn test_buttons_branch_on_theme() {
        let css = CssConfig::default();
        let light = buttons(&WidgetConfiguration::default(), &css);
        let dark = buttons(
            &WidgetConfiguration {
                theme: Theme::Dark,
                ..Default::default()
            },
            &css,
        );

        let light_rule = light.find(".vfrc-button--secondary").unwrap();
        let dark_rule = dark.find(".vfrc-button--secondary").unwrap();
        assert_eq!(light_rule.value_of("border"), None);
        assert_eq!(light_rule.value_of("border-color"), Some("var(--brand-color)"));
        assert_eq!(dark_rule.value_of("border"), Some("1px solid var(--brand-color)"));
        assert_eq!(dark_rule.value_of("background-color"), Some("transparent"));
    }

    #[test]
    fn test_placeholder_block() {
        let config = WidgetConfiguration {
            user_input_placeholder_text: "Type <here>".to_string(),
            ..Default::default()
        };
        let block = placeholder(&config, &CssConfig::default());
        let shown = block
            .find(".vfrc-chat-input textarea:placeholder-shown")
            .unwrap();
        let image = shown.value_of("background-image").unwrap();
        assert!(image.contains("Type%20%3Chere%3E"));
        assert!(!image.contains("<here>"));
    }
}
