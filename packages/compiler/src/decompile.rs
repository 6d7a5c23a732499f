//! # Decompile
//!
//! Nested document → flat panels.
//!
//! Sections are walked in `header`, `hero`, `body`, `footer` order and every
//! element lands in one block list. Boxes disappear, except that a bullet
//! and its label collapse into a single text block. Input is read leniently:
//! unknown elements become text blocks and malformed fields fall back to
//! defaults, so this never fails.

use crate::bullet;
use flexcraft_schema::{
    Action, AspectRatio, BlockProps, BoxLayout, ButtonProps, ButtonStyle, EditorBlock,
    IdGenerator, ImageProps, Panel, PanelSettings, PanelSize, TextProps, TextSize, TimestampIds,
    TitleProps, DEFAULT_BACKGROUND_COLOR, DEFAULT_THEME_COLOR,
};
use flexcraft_tree::Node;
use tracing::{debug, instrument, warn};

/// Boxes nested deeper than this are dropped
pub const MAX_BOX_DEPTH: usize = 32;

const SECTIONS: [&str; 4] = ["header", "hero", "body", "footer"];

/// Decompile with process-default ids
pub fn decompile(document: &Node) -> Vec<Panel> {
    decompile_with(document, &mut TimestampIds)
}

/// Decompile a bubble, carousel or message envelope into panels
#[instrument(skip_all, fields(root = document.get_str("type").unwrap_or("?")))]
pub fn decompile_with(document: &Node, ids: &mut dyn IdGenerator) -> Vec<Panel> {
    let root = unwrap_envelope(document);

    let panels: Vec<Panel> = match root.get_str("type") {
        Some("carousel") => root
            .get("contents")
            .and_then(Node::as_array)
            .unwrap_or_default()
            .iter()
            .filter(|member| {
                let is_bubble = member.as_object().is_some();
                if !is_bubble {
                    warn!(member = %member, "Skipping carousel member that is not an object");
                }
                is_bubble
            })
            .map(|bubble| decompile_bubble(bubble, ids))
            .collect(),
        _ if root.as_object().is_some() => vec![decompile_bubble(root, ids)],
        _ => {
            warn!("Document root is not an object - nothing to decompile");
            Vec::new()
        }
    };

    debug!(panels = panels.len(), "Decompiled document");
    panels
}

/// `{"type": "flex", "contents": ...}` message wrapper → its contents
fn unwrap_envelope(document: &Node) -> &Node {
    match (document.get_str("type"), document.get("contents")) {
        (Some("flex"), Some(contents)) => contents,
        _ => document,
    }
}

fn decompile_bubble(bubble: &Node, ids: &mut dyn IdGenerator) -> Panel {
    let id = ids.next_id();
    let mut walker = Walker {
        ids,
        blocks: Vec::new(),
        in_header: false,
    };

    for section in SECTIONS {
        if let Some(element) = bubble.get(section) {
            walker.in_header = section == "header";
            walker.element(element, 0);
        }
    }

    let blocks = walker.blocks;
    let settings = derive_settings(bubble, &blocks);

    Panel {
        id,
        settings,
        blocks,
    }
}

fn derive_settings(bubble: &Node, blocks: &[EditorBlock]) -> PanelSettings {
    let section_background = |section: &str| {
        bubble
            .get(section)
            .and_then(|node| node.get_str("backgroundColor"))
            .or_else(|| {
                bubble
                    .get("styles")
                    .and_then(|styles| styles.get(section))
                    .and_then(|style| style.get_str("backgroundColor"))
            })
    };

    let first_button_color = || {
        blocks.iter().find_map(|block| match &block.props {
            BlockProps::Button(button) => button.color.as_deref(),
            _ => None,
        })
    };

    PanelSettings {
        background_color: section_background("body")
            .unwrap_or(DEFAULT_BACKGROUND_COLOR)
            .to_string(),
        theme_color: section_background("header")
            .or_else(first_button_color)
            .unwrap_or(DEFAULT_THEME_COLOR)
            .to_string(),
        size: bubble
            .get_str("size")
            .and_then(PanelSize::parse)
            .unwrap_or_default(),
    }
}

struct Walker<'a> {
    ids: &'a mut dyn IdGenerator,
    blocks: Vec<EditorBlock>,
    in_header: bool,
}

impl Walker<'_> {
    fn push(&mut self, props: BlockProps) {
        let block = EditorBlock::new(props, self.ids);
        self.blocks.push(block);
    }

    fn element(&mut self, node: &Node, depth: usize) {
        match node.get_str("type") {
            Some("box") => self.boxed(node, depth),
            Some("text") => {
                let props = self.text(node);
                self.push(props);
            }
            Some("image") => self.push(BlockProps::Image(image(node))),
            Some("button") => self.push(BlockProps::Button(button(node))),
            Some("separator") => self.push(BlockProps::Separator),
            Some("spacer") | Some("filler") => {}
            other => {
                debug!(element_type = ?other, "Unknown element - keeping as text");
                let props = TextProps {
                    text: node.get_str("text").unwrap_or_default().to_string(),
                    size: None,
                    color: None,
                    wrap: true,
                };
                self.push(BlockProps::Text(props));
            }
        }
    }

    fn boxed(&mut self, node: &Node, depth: usize) {
        if depth >= MAX_BOX_DEPTH {
            warn!(depth, "Box nesting too deep - dropping subtree");
            return;
        }

        let contents = node
            .get("contents")
            .and_then(Node::as_array)
            .unwrap_or_default();
        let layout = node.get_str("layout").and_then(BoxLayout::parse);

        if layout.is_some_and(BoxLayout::is_inline) {
            if let [first, second] = contents {
                if let Some(props) = self.bullet_pair(first, second) {
                    self.push(props);
                    return;
                }
            }
        }

        let mut i = 0;
        while i < contents.len() {
            if layout == Some(BoxLayout::Vertical) {
                if let Some(next) = contents.get(i + 1) {
                    if let Some(props) = self.bullet_pair(&contents[i], next) {
                        self.push(props);
                        i += 2;
                        continue;
                    }
                }
            }

            self.element(&contents[i], depth + 1);
            i += 1;
        }
    }

    /// Two text elements reading as bullet + label, merged into one text block
    fn bullet_pair(&self, first: &Node, second: &Node) -> Option<BlockProps> {
        if first.get_str("type") != Some("text") || second.get_str("type") != Some("text") {
            return None;
        }

        let glyph = element_text(first);
        let label = element_text(second);
        if !bullet::is_bullet(&glyph) || !bullet::is_label(&label) {
            return None;
        }

        Some(BlockProps::Text(TextProps {
            text: bullet::join(&glyph, &label),
            size: second.get_str("size").and_then(TextSize::parse),
            color: self.color(second),
            wrap: second.get("wrap").and_then(Node::as_bool).unwrap_or(false),
        }))
    }

    fn text(&self, node: &Node) -> BlockProps {
        let text = element_text(node);
        let size = node.get_str("size").and_then(TextSize::parse);
        let bold = node.get_str("weight") == Some("bold");

        match size {
            Some(size) if bold && size.is_large() => BlockProps::Title(TitleProps {
                text,
                size,
                color: self.color(node),
            }),
            _ => BlockProps::Text(TextProps {
                text,
                size,
                color: self.color(node),
                wrap: node.get("wrap").and_then(Node::as_bool).unwrap_or(false),
            }),
        }
    }

    /// Header text is recolored on compile, so its color is never an override
    fn color(&self, node: &Node) -> Option<String> {
        if self.in_header {
            return None;
        }
        node.get_str("color").map(str::to_string)
    }
}

/// `text`, or the concatenated span texts when only spans are given
fn element_text(node: &Node) -> String {
    if let Some(text) = node.get_str("text") {
        return text.to_string();
    }

    node.get("contents")
        .and_then(Node::as_array)
        .unwrap_or_default()
        .iter()
        .filter_map(|span| span.get_str("text"))
        .collect()
}

fn image(node: &Node) -> ImageProps {
    ImageProps {
        url: node.get_str("url").unwrap_or_default().to_string(),
        aspect_ratio: node
            .get_str("aspectRatio")
            .and_then(AspectRatio::parse)
            .unwrap_or_default(),
        action: node.get("action").and_then(action),
    }
}

fn button(node: &Node) -> ButtonProps {
    let action_node = node.get("action");

    ButtonProps {
        label: action_node
            .and_then(|action| action.get_str("label"))
            .unwrap_or_default()
            .to_string(),
        style: node
            .get_str("style")
            .and_then(ButtonStyle::parse)
            .unwrap_or_default(),
        color: node.get_str("color").map(str::to_string),
        action: action_node
            .and_then(action)
            .map(Action::into_unlabeled)
            .unwrap_or_default(),
    }
}

/// `uri` → URL action; `message` and `postback` → message action
fn action(node: &Node) -> Option<Action> {
    let label = node.get_str("label").map(str::to_string);
    let field = |key: &str| node.get_str(key).unwrap_or_default().to_string();

    match node.get_str("type")? {
        "uri" => Some(Action::Uri {
            uri: field("uri"),
            label,
        }),
        "message" => Some(Action::Message {
            text: field("text"),
            label,
        }),
        "postback" => Some(Action::Message {
            text: node
                .get_str("displayText")
                .or_else(|| node.get_str("data"))
                .unwrap_or_default()
                .to_string(),
            label,
        }),
        other => {
            debug!(action_type = other, "Unsupported action type - dropping");
            None
        }
    }
}
