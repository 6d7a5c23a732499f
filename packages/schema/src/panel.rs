//! # Panels
//!
//! A panel is the editor-facing form of one bubble: display settings plus an
//! ordered list of blocks. Block order is the only vertical order a compiled
//! bubble gets.

use crate::block::{duplicate_block, EditorBlock};
use crate::ids::IdGenerator;
use crate::style::PanelSize;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";
pub const DEFAULT_THEME_COLOR: &str = "#06C755";

/// Text color forced onto header text so it reads on the theme fill
pub const HEADER_TEXT_COLOR: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSettings {
    pub background_color: String,
    pub theme_color: String,
    #[serde(default)]
    pub size: PanelSize,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            size: PanelSize::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub id: String,
    pub settings: PanelSettings,
    pub blocks: Vec<EditorBlock>,
}

impl Panel {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Position of the block with `block_id`
    pub fn block_index(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == block_id)
    }

    pub fn block(&self, block_id: &str) -> Option<&EditorBlock> {
        self.blocks.iter().find(|block| block.id == block_id)
    }
}

/// Panel with default settings and no blocks
pub fn create_empty_panel(theme_color: Option<&str>, ids: &mut dyn IdGenerator) -> Panel {
    let mut settings = PanelSettings::default();
    if let Some(theme_color) = theme_color {
        settings.theme_color = theme_color.to_string();
    }

    Panel {
        id: ids.next_id(),
        settings,
        blocks: Vec::new(),
    }
}

/// Deep copy with a fresh id for the panel and every block
pub fn duplicate_panel(panel: &Panel, ids: &mut dyn IdGenerator) -> Panel {
    Panel {
        id: ids.next_id(),
        settings: panel.settings.clone(),
        blocks: panel
            .blocks
            .iter()
            .map(|block| duplicate_block(block, ids))
            .collect(),
    }
}
