//! Integration script generation
//!
//! Renders the `<script>` block a site owner pastes into their page. The
//! script repeats the preview's load sequence: hide any running widget,
//! insert the loader, then call `load` with the same [`LoadOptions`].
//!
//! Every user-controlled value is written as a JSON string literal with
//! `<`, `>` and `&` escaped, so neither quotes nor a stray `</script>` can
//! break out of the block.

mod options;

pub use options::{
    AssistantInfo, LoadOptions, MessagePayload, ProactiveBlock, ProactiveMessage, RenderTarget,
    Verify, MOUNT_ELEMENT_ID, RUNTIME_URL, VERSION_ID, WIDGET_BUNDLE_URL,
};

use serde::Serialize;

use crate::config::{EmbedMode, WidgetConfiguration};

/// Serialize a value as a JavaScript literal that is also safe inside HTML
pub fn js_literal<T: Serialize + ?Sized>(value: &T) -> String {
    let json = serde_json::to_string(value).unwrap_or_else(|_| "null".to_string());
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Render the integration script for `config`
pub fn render_snippet(config: &WidgetConfiguration, stylesheet_reference: &str) -> String {
    render_options(&LoadOptions::new(config, stylesheet_reference), config.auto_open)
}

/// Render the integration script for an assembled payload
pub fn render_options(options: &LoadOptions, auto_open: bool) -> String {
    let render = match (&options.render.mode, &options.render.target) {
        (EmbedMode::Embedded, Some(target)) => format!(
            "
          render: {{
            mode: 'embedded',
            target: document.getElementById({})
          }},",
            js_literal(target)
        ),
        _ => "
          render: {
            mode: 'overlay'
          },"
        .to_string(),
    };

    let proactive = match &options.proactive {
        Some(block) => format!(
            "
          proactive: {{
            clear: {},
            messages: {}
          }},",
            block.clear,
            js_literal(&block.messages)
        ),
        None => String::new(),
    };

    let open = if auto_open {
        "
          window.voiceflow.chat.open();
        "
    } else {
        ""
    };

    format!(
        r#"<script type="text/javascript">
  (function(d, t) {{
      if (window.voiceflow && window.voiceflow.chat) {{
          window.voiceflow.chat.hide();
      }}
      var v = d.createElement(t), s = d.getElementsByTagName(t)[0];
      v.onload = function() {{
        window.voiceflow.chat.load({{
          verify: {{ projectID: {project} }},
          url: {url},
          versionID: {version},
          assistant: {{
            title: {title},
            description: {description},
            image: {image},
            stylesheet: {stylesheet}
          }},{render}{proactive}
        }}).then(function() {{{open}}});
      }};
      v.src = {src};
      v.type = "text/javascript";
      s.parentNode.insertBefore(v, s);
  }})(document, 'script');
</script>
"#,
        project = js_literal(&options.verify.project_id),
        url = js_literal(&options.url),
        version = js_literal(&options.version_id),
        title = js_literal(&options.assistant.title),
        description = js_literal(&options.assistant.description),
        image = js_literal(&options.assistant.image),
        stylesheet = js_literal(&options.assistant.stylesheet),
        src = js_literal(WIDGET_BUNDLE_URL),
    )
}

/// Markup the host page needs in embedded mode, if any
pub fn mount_point_markup(config: &WidgetConfiguration) -> Option<String> {
    match config.embed_mode {
        EmbedMode::Embedded => Some(format!(r#"<div id="{MOUNT_ELEMENT_ID}"></div>"#)),
        EmbedMode::Overlay => None,
    }
}
