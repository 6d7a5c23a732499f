//! # Panel Mutations
//!
//! Intent-preserving edits on the panel list.
//!
//! ## Semantics
//!
//! - Every mutation is validated before anything changes, so a failed
//!   mutation leaves the panels untouched
//! - Panels and blocks are addressed by id; moves are addressed by position
//! - Insert positions past the end clamp to an append
//! - The last remaining panel cannot be removed
//! - New panels and blocks get ids from the caller's generator

use flexcraft_schema::{
    create_empty_panel, duplicate_block, duplicate_panel, BlockProps, BlockType, EditorBlock,
    IdGenerator, Panel, PanelSettings,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic edits on a panel list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Add a block with its default payload; appends when `index` is `None`
    AddBlock {
        panel_id: String,
        block_type: BlockType,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Replace a block's payload (same variant only)
    UpdateBlock {
        panel_id: String,
        block_id: String,
        props: BlockProps,
    },

    RemoveBlock {
        panel_id: String,
        block_id: String,
    },

    /// Copy a block under a fresh id, right after the original
    DuplicateBlock {
        panel_id: String,
        block_id: String,
    },

    MoveBlock {
        panel_id: String,
        from: usize,
        to: usize,
    },

    /// Add an empty panel; appends when `index` is `None`
    AddPanel {
        #[serde(default)]
        index: Option<usize>,
        #[serde(default)]
        theme_color: Option<String>,
    },

    UpdatePanelSettings {
        panel_id: String,
        settings: PanelSettings,
    },

    /// Deep copy of a panel under fresh ids, right after the original
    DuplicatePanel {
        panel_id: String,
    },

    RemovePanel {
        panel_id: String,
    },

    MovePanel {
        from: usize,
        to: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Panel not found: {0}")]
    PanelNotFound(String),

    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot change block {block_id} from {expected:?} to {found:?}")]
    BlockTypeMismatch {
        block_id: String,
        expected: BlockType,
        found: BlockType,
    },

    #[error("Cannot remove the last panel")]
    LastPanel,
}

impl Mutation {
    /// Validate, then apply. Returns the id of the panel or block the
    /// mutation created, if any.
    pub fn apply(
        &self,
        panels: &mut Vec<Panel>,
        ids: &mut dyn IdGenerator,
    ) -> Result<Option<String>, MutationError> {
        self.validate(panels)?;

        match self {
            Mutation::AddBlock {
                panel_id,
                block_type,
                index,
            } => {
                let panel = find_panel_mut(panels, panel_id)?;
                let props = BlockProps::default_for(*block_type, &panel.settings.theme_color);
                let block = EditorBlock::new(props, ids);
                let id = block.id.clone();
                let at = index.unwrap_or(panel.blocks.len()).min(panel.blocks.len());
                panel.blocks.insert(at, block);
                Ok(Some(id))
            }

            Mutation::UpdateBlock {
                panel_id,
                block_id,
                props,
            } => {
                let panel = find_panel_mut(panels, panel_id)?;
                let at = block_position(panel, block_id)?;
                panel.blocks[at].props = props.clone();
                Ok(None)
            }

            Mutation::RemoveBlock { panel_id, block_id } => {
                let panel = find_panel_mut(panels, panel_id)?;
                let at = block_position(panel, block_id)?;
                panel.blocks.remove(at);
                Ok(None)
            }

            Mutation::DuplicateBlock { panel_id, block_id } => {
                let panel = find_panel_mut(panels, panel_id)?;
                let at = block_position(panel, block_id)?;
                let copy = duplicate_block(&panel.blocks[at], ids);
                let id = copy.id.clone();
                panel.blocks.insert(at + 1, copy);
                Ok(Some(id))
            }

            Mutation::MoveBlock { panel_id, from, to } => {
                let panel = find_panel_mut(panels, panel_id)?;
                move_item(&mut panel.blocks, *from, *to);
                Ok(None)
            }

            Mutation::AddPanel { index, theme_color } => {
                let panel = create_empty_panel(theme_color.as_deref(), ids);
                let id = panel.id.clone();
                let at = index.unwrap_or(panels.len()).min(panels.len());
                panels.insert(at, panel);
                Ok(Some(id))
            }

            Mutation::UpdatePanelSettings { panel_id, settings } => {
                find_panel_mut(panels, panel_id)?.settings = settings.clone();
                Ok(None)
            }

            Mutation::DuplicatePanel { panel_id } => {
                let at = panel_position(panels, panel_id)?;
                let copy = duplicate_panel(&panels[at], ids);
                let id = copy.id.clone();
                panels.insert(at + 1, copy);
                Ok(Some(id))
            }

            Mutation::RemovePanel { panel_id } => {
                let at = panel_position(panels, panel_id)?;
                panels.remove(at);
                Ok(None)
            }

            Mutation::MovePanel { from, to } => {
                move_item(panels, *from, *to);
                Ok(None)
            }
        }
    }

    /// Validate without applying
    pub fn validate(&self, panels: &[Panel]) -> Result<(), MutationError> {
        match self {
            Mutation::AddBlock { panel_id, .. } => {
                find_panel(panels, panel_id)?;
                Ok(())
            }

            Mutation::UpdateBlock {
                panel_id,
                block_id,
                props,
            } => {
                let panel = find_panel(panels, panel_id)?;
                let block = &panel.blocks[block_position(panel, block_id)?];
                if block.block_type() != props.block_type() {
                    return Err(MutationError::BlockTypeMismatch {
                        block_id: block_id.clone(),
                        expected: block.block_type(),
                        found: props.block_type(),
                    });
                }
                Ok(())
            }

            Mutation::RemoveBlock { panel_id, block_id }
            | Mutation::DuplicateBlock { panel_id, block_id } => {
                let panel = find_panel(panels, panel_id)?;
                block_position(panel, block_id)?;
                Ok(())
            }

            Mutation::MoveBlock { panel_id, from, to } => {
                let panel = find_panel(panels, panel_id)?;
                check_index(*from, panel.blocks.len())?;
                check_index(*to, panel.blocks.len())
            }

            Mutation::AddPanel { .. } => Ok(()),

            Mutation::UpdatePanelSettings { panel_id, .. }
            | Mutation::DuplicatePanel { panel_id } => {
                find_panel(panels, panel_id)?;
                Ok(())
            }

            Mutation::RemovePanel { panel_id } => {
                find_panel(panels, panel_id)?;
                if panels.len() <= 1 {
                    return Err(MutationError::LastPanel);
                }
                Ok(())
            }

            Mutation::MovePanel { from, to } => {
                check_index(*from, panels.len())?;
                check_index(*to, panels.len())
            }
        }
    }

    /// Short human-readable label for history entries
    pub fn description(&self) -> String {
        match self {
            Mutation::AddBlock { block_type, .. } => format!("Add {:?} block", block_type),
            Mutation::UpdateBlock { block_id, .. } => format!("Edit block {}", block_id),
            Mutation::RemoveBlock { block_id, .. } => format!("Remove block {}", block_id),
            Mutation::DuplicateBlock { block_id, .. } => format!("Duplicate block {}", block_id),
            Mutation::MoveBlock { from, to, .. } => format!("Move block {} → {}", from, to),
            Mutation::AddPanel { .. } => "Add panel".to_string(),
            Mutation::UpdatePanelSettings { panel_id, .. } => {
                format!("Edit settings of panel {}", panel_id)
            }
            Mutation::DuplicatePanel { panel_id } => format!("Duplicate panel {}", panel_id),
            Mutation::RemovePanel { panel_id } => format!("Remove panel {}", panel_id),
            Mutation::MovePanel { from, to } => format!("Move panel {} → {}", from, to),
        }
    }
}

fn find_panel<'a>(panels: &'a [Panel], panel_id: &str) -> Result<&'a Panel, MutationError> {
    panels
        .iter()
        .find(|panel| panel.id == panel_id)
        .ok_or_else(|| MutationError::PanelNotFound(panel_id.to_string()))
}

fn find_panel_mut<'a>(
    panels: &'a mut [Panel],
    panel_id: &str,
) -> Result<&'a mut Panel, MutationError> {
    panels
        .iter_mut()
        .find(|panel| panel.id == panel_id)
        .ok_or_else(|| MutationError::PanelNotFound(panel_id.to_string()))
}

fn panel_position(panels: &[Panel], panel_id: &str) -> Result<usize, MutationError> {
    panels
        .iter()
        .position(|panel| panel.id == panel_id)
        .ok_or_else(|| MutationError::PanelNotFound(panel_id.to_string()))
}

fn block_position(panel: &Panel, block_id: &str) -> Result<usize, MutationError> {
    panel
        .block_index(block_id)
        .ok_or_else(|| MutationError::BlockNotFound(block_id.to_string()))
}

fn check_index(index: usize, len: usize) -> Result<(), MutationError> {
    if index < len {
        Ok(())
    } else {
        Err(MutationError::IndexOutOfRange { index, len })
    }
}

/// Remove at `from`, insert at `to`; both already validated
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from != to {
        let item = items.remove(from);
        items.insert(to, item);
    }
}
