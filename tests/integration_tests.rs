//! Integration tests for the configuration-to-artifact pipeline

use pretty_assertions::assert_eq;

use widget_styler::snippet::MOUNT_ELEMENT_ID;
use widget_styler::stylesheet::{decode_placeholder, encode_placeholder};
use widget_styler::{
    apply_template, apply_theme, build_artifacts, compile, decode, encode, render_snippet,
    EmbedMode, Theme, WidgetConfiguration,
};

type Mutation = (&'static str, fn(&mut WidgetConfiguration));

fn m(field: &'static str, mutate: fn(&mut WidgetConfiguration)) -> Mutation {
    (field, mutate)
}

/// Every field with a visual effect, paired with an edit of only that field
fn visual_mutations() -> Vec<Mutation> {
    vec![
        m("background_color", |c| c.background_color = "#101010".into()),
        m("text_color", |c| c.text_color = "#202020".into()),
        m("brand_color", |c| c.brand_color = "#303030".into()),
        m("font_family", |c| c.font_family = "Georgia, serif".into()),
        m("header_color", |c| c.header_color = "#404040".into()),
        m("footer_color", |c| c.footer_color = "#505050".into()),
        m("title_text_color", |c| c.title_text_color = "#606060".into()),
        m("end_chat_text_color", |c| c.end_chat_text_color = "#707070".into()),
        m("assistant_description_text_color", |c| {
            c.assistant_description_text_color = "#808080".into()
        }),
        m("theme", |c| c.theme = Theme::Dark),
        m("user_message_bg_color", |c| c.user_message_bg_color = "#111111".into()),
        m("user_message_text_color", |c| c.user_message_text_color = "#222222".into()),
        m("assistant_message_bg_color", |c| c.assistant_message_bg_color = "#333333".into()),
        m("assistant_message_text_color", |c| {
            c.assistant_message_text_color = "#444444".into()
        }),
        m("launcher_color", |c| c.launcher_color = "#555555".into()),
        m("launcher_size", |c| c.launcher_size = 72),
        m("launcher_image", |c| c.launcher_image = "https://example.com/l.png".into()),
        m("launcher_offset", |c| c.launcher_offset = Some(30)),
        m("chat_width", |c| c.chat_width = 333),
        m("assistant_logo", |c| c.assistant_logo = "https://example.com/logo.png".into()),
        m("assistant_avatar_image", |c| {
            c.assistant_avatar_image = "https://example.com/avatar.png".into()
        }),
        m("user_input_placeholder_text", |c| {
            c.user_input_placeholder_text = "Ask away".into()
        }),
    ]
}

#[test]
fn test_every_visual_field_changes_css() {
    let base = WidgetConfiguration::default();
    let base_css = compile(&base).unwrap();

    for (field, mutate) in visual_mutations() {
        let mut changed = base.clone();
        mutate(&mut changed);
        assert_ne!(
            compile(&changed).unwrap(),
            base_css,
            "changing {field} did not change the stylesheet"
        );
    }
}

#[test]
fn test_compile_is_deterministic_across_configs() {
    for (_, mutate) in visual_mutations() {
        let mut config = WidgetConfiguration::default();
        mutate(&mut config);
        assert_eq!(compile(&config).unwrap(), compile(&config).unwrap());
    }
}

#[test]
fn test_light_to_dark_scenario() {
    let mut config = WidgetConfiguration {
        theme: Theme::Light,
        brand_color: "#4375F5".to_string(),
        background_color: "#FFFFFF".to_string(),
        ..Default::default()
    };
    apply_theme(Theme::Dark, &config).apply(&mut config);

    assert_eq!(config.background_color, "#1F2428");
    let css = compile(&config).unwrap();
    assert!(css.contains("--header-color: #4375F5;"));
    assert!(css.contains("--footer-color: #4375F5;"));
    assert!(css.contains("--dark-background: #1F2428;"));
}

#[test]
fn test_red_preset_scenario() {
    let mut config = WidgetConfiguration::default();
    apply_theme(Theme::Dark, &config).apply(&mut config);
    config.header_color = "#000000".to_string();

    assert!(apply_template("Red", &mut config));
    assert_eq!(config.background_color, "#FFEBEE");
    assert_eq!(config.brand_color, "#F44336");
    assert_eq!(config.header_color, "#F44336");
}

#[test]
fn test_embedded_snippet_scenario() {
    let config = WidgetConfiguration {
        embed_mode: EmbedMode::Embedded,
        auto_open: false,
        ..Default::default()
    };
    let artifacts = build_artifacts(&config).unwrap();

    assert!(artifacts.snippet.contains(MOUNT_ELEMENT_ID));
    assert!(artifacts.snippet.contains("mode: 'embedded'"));
    assert!(!artifacts.snippet.contains(".open()"));
}

#[test]
fn test_proactive_scenarios() {
    let empty = build_artifacts(&WidgetConfiguration::default()).unwrap();
    assert!(!empty.css.contains("proactive"));
    assert!(!empty.snippet.contains("proactive"));

    let config = WidgetConfiguration {
        proactive_messages: vec!["Hi".to_string(), "Need help?".to_string()],
        ..Default::default()
    };
    let artifacts = build_artifacts(&config).unwrap();
    assert!(artifacts.snippet.contains(
        r#"messages: [{"type":"text","payload":{"message":"Hi"}},{"type":"text","payload":{"message":"Need help?"}}]"#
    ));
}

#[test]
fn test_encoder_uniqueness() {
    let css = compile(&WidgetConfiguration::default()).unwrap();
    let a = encode(&css);
    let b = encode(&css);

    assert_ne!(a, b);
    assert_eq!(decode(&a).unwrap().css, css);
    assert_eq!(decode(&b).unwrap().css, css);
}

#[test]
fn test_placeholder_roundtrip_through_css() {
    let text = "Frag mich <etwas> & \"mehr\" – 100% 💬";
    let config = WidgetConfiguration {
        user_input_placeholder_text: text.to_string(),
        ..Default::default()
    };
    let css = compile(&config).unwrap();
    let encoded = encode_placeholder(text);

    assert!(css.contains(&format!(">{encoded}</text>")));
    assert_eq!(decode_placeholder(&encoded).unwrap(), text);

    // the encoded stylesheet carries the non-ASCII text intact
    let reference = encode(&css);
    assert_eq!(decode(&reference).unwrap().css, css);
}

#[test]
fn test_snippet_reference_is_caller_supplied() {
    let config = WidgetConfiguration::default();
    let snippet = render_snippet(&config, "data:text/css;base64,AAAA#42");
    assert!(snippet.contains(r#"stylesheet: "data:text/css;base64,AAAA#42""#));
}

#[test]
fn test_config_file_pipeline() {
    let config = WidgetConfiguration::from_str(
        r##"
brand_color = "#2196F3"
theme = "Dark"
chat_width = 5000
assistant_name = "Helper"
"##,
    )
    .unwrap()
    .clamped();

    assert_eq!(config.chat_width, 380);
    let artifacts = build_artifacts(&config).unwrap();
    assert!(artifacts.css.contains("--brand-color: #2196F3;"));
    assert!(artifacts.snippet.contains(r#"title: "Helper""#));
}
