//! # Wire Format
//!
//! Typed output side of the rich-message document. Every struct serializes
//! its own `type` tag, so a [`FlexBox`] reads the same whether it is a
//! section or a child element.

use crate::style::{AspectRatio, BoxLayout, ButtonStyle, PanelSize, TextSize};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlexDocument {
    Bubble(Bubble),
    Carousel(Carousel),
}

impl FlexDocument {
    pub fn to_value(&self) -> Value {
        // Derived serializers over string-keyed structs cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn bubbles(&self) -> &[Bubble] {
        match self {
            FlexDocument::Bubble(bubble) => std::slice::from_ref(bubble),
            FlexDocument::Carousel(carousel) => &carousel.contents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "carousel")]
pub struct Carousel {
    pub contents: Vec<Bubble>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "bubble", rename_all = "camelCase")]
pub struct Bubble {
    pub size: PanelSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<FlexBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FlexBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlexElement {
    Box(FlexBox),
    Text(FlexText),
    Image(FlexImage),
    Button(FlexButton),
    Separator(FlexSeparator),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "box", rename_all = "camelCase")]
pub struct FlexBox {
    pub layout: BoxLayout,
    pub contents: Vec<FlexElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_all: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl FlexBox {
    pub fn new(layout: BoxLayout, contents: Vec<FlexElement>) -> Self {
        Self {
            layout,
            contents,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "text", rename_all = "camelCase")]
pub struct FlexText {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "image", rename_all = "camelCase")]
pub struct FlexImage {
    pub url: String,
    pub size: String,
    pub aspect_ratio: AspectRatio,
    pub aspect_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<FlexAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "button", rename_all = "camelCase")]
pub struct FlexButton {
    pub action: FlexAction,
    pub style: ButtonStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub height: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type", rename = "separator")]
pub struct FlexSeparator {}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FlexAction {
    Uri {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        uri: String,
    },
    Message {
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        text: String,
    },
}
