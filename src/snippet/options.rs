//! The options object passed to the widget's `load` entry point
//!
//! Both the live preview and the generated integration script build their
//! payload from [`LoadOptions`], so the two always agree on its shape.

use serde::Serialize;

use crate::config::{EmbedMode, WidgetConfiguration};

/// Dialog runtime the widget talks to
pub const RUNTIME_URL: &str = "https://general-runtime.voiceflow.com";
/// Published version of the assistant
pub const VERSION_ID: &str = "production";
/// Widget loader script
pub const WIDGET_BUNDLE_URL: &str = "https://cdn.voiceflow.com/widget/bundle.mjs";
/// Element the widget mounts into in embedded mode
pub const MOUNT_ELEMENT_ID: &str = "voiceflow-chat-frame";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verify {
    #[serde(rename = "projectID")]
    pub project_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantInfo {
    pub title: String,
    pub description: String,
    pub image: String,
    pub stylesheet: String,
}

/// Where the widget renders; `target` names the mount element in embedded mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTarget {
    pub mode: EmbedMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub message: String,
}

/// A message pushed to the visitor before they type anything
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProactiveMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: MessagePayload,
}

impl ProactiveMessage {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            payload: MessagePayload {
                message: message.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProactiveBlock {
    pub clear: bool,
    pub messages: Vec<ProactiveMessage>,
}

/// Everything `window.voiceflow.chat.load` receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadOptions {
    pub verify: Verify,
    pub url: String,
    #[serde(rename = "versionID")]
    pub version_id: String,
    pub assistant: AssistantInfo,
    pub render: RenderTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proactive: Option<ProactiveBlock>,
}

impl LoadOptions {
    /// Assemble the payload for `config` using an already encoded stylesheet
    pub fn new(config: &WidgetConfiguration, stylesheet_reference: &str) -> Self {
        let render = match config.embed_mode {
            EmbedMode::Overlay => RenderTarget {
                mode: EmbedMode::Overlay,
                target: None,
            },
            EmbedMode::Embedded => RenderTarget {
                mode: EmbedMode::Embedded,
                target: Some(MOUNT_ELEMENT_ID.to_string()),
            },
        };

        let proactive = (!config.proactive_messages.is_empty()).then(|| ProactiveBlock {
            clear: true,
            messages: config
                .proactive_messages
                .iter()
                .map(ProactiveMessage::text)
                .collect(),
        });

        Self {
            verify: Verify {
                project_id: config.project_id.clone(),
            },
            url: RUNTIME_URL.to_string(),
            version_id: VERSION_ID.to_string(),
            assistant: AssistantInfo {
                title: config.assistant_name.clone(),
                description: config.assistant_description.clone(),
                image: config.logo_or_default().to_string(),
                stylesheet: stylesheet_reference.to_string(),
            },
            render,
            proactive,
        }
    }
}
