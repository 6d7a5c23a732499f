//! # Editor Blocks
//!
//! The flat, editor-facing unit of a panel. A block is one of five variants;
//! nesting from the wire format never survives into this model.

use crate::action::Action;
use crate::ids::IdGenerator;
use crate::style::{AspectRatio, ButtonStyle, TextSize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Title,
    Text,
    Image,
    Button,
    Separator,
}

impl BlockType {
    pub const ALL: &'static [BlockType] = &[
        BlockType::Title,
        BlockType::Text,
        BlockType::Image,
        BlockType::Button,
        BlockType::Separator,
    ];
}

/// Large bold heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleProps {
    pub text: String,
    #[serde(default = "default_title_size")]
    pub size: TextSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextProps {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TextSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub wrap: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub url: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    pub label: String,
    #[serde(default)]
    pub style: ButtonStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub action: Action,
}

/// Block payload, tagged by block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockProps {
    Title(TitleProps),
    Text(TextProps),
    Image(ImageProps),
    Button(ButtonProps),
    Separator,
}

fn default_title_size() -> TextSize {
    TextSize::Xl
}

impl BlockProps {
    /// Payload for a freshly added block of `block_type`
    pub fn default_for(block_type: BlockType, theme_color: &str) -> Self {
        match block_type {
            BlockType::Title => BlockProps::Title(TitleProps {
                text: "タイトル".to_string(),
                size: default_title_size(),
                color: None,
            }),
            BlockType::Text => BlockProps::Text(TextProps {
                text: "テキスト".to_string(),
                size: None,
                color: None,
                wrap: true,
            }),
            BlockType::Image => BlockProps::Image(ImageProps {
                url: String::new(),
                aspect_ratio: AspectRatio::default(),
                action: None,
            }),
            BlockType::Button => BlockProps::Button(ButtonProps {
                label: "ボタン".to_string(),
                style: ButtonStyle::Primary,
                color: Some(theme_color.to_string()),
                action: Action::default(),
            }),
            BlockType::Separator => BlockProps::Separator,
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockProps::Title(_) => BlockType::Title,
            BlockProps::Text(_) => BlockType::Text,
            BlockProps::Image(_) => BlockType::Image,
            BlockProps::Button(_) => BlockType::Button,
            BlockProps::Separator => BlockType::Separator,
        }
    }

    /// Plain text block with wrapping on and no overrides
    pub fn text(text: impl Into<String>) -> Self {
        BlockProps::Text(TextProps {
            text: text.into(),
            size: None,
            color: None,
            wrap: true,
        })
    }

    pub fn title(text: impl Into<String>) -> Self {
        BlockProps::Title(TitleProps {
            text: text.into(),
            size: default_title_size(),
            color: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorBlock {
    pub id: String,
    pub props: BlockProps,
}

impl EditorBlock {
    pub fn new(props: BlockProps, ids: &mut dyn IdGenerator) -> Self {
        Self {
            id: ids.next_id(),
            props,
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.props.block_type()
    }
}

/// Copy of `block` under a fresh id
pub fn duplicate_block(block: &EditorBlock, ids: &mut dyn IdGenerator) -> EditorBlock {
    EditorBlock::new(block.props.clone(), ids)
}
