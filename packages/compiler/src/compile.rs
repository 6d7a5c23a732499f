//! # Compile
//!
//! Flat panels → nested document.
//!
//! Panels keep no section membership, so every compile re-derives it from
//! block order:
//!
//! ```text
//! [title, text, text, image, button]
//!  └─ header ─┘ └─── body ───┘ └ footer
//! ```
//!
//! Changing [`partition`] changes the saved output of every existing
//! document. Treat the routing rules as a versioned contract.

use crate::bullet;
use flexcraft_schema::{
    Action, BlockProps, BoxLayout, Bubble, Carousel, EditorBlock, FlexAction, FlexBox,
    FlexButton, FlexDocument, FlexElement, FlexImage, FlexSeparator, FlexText, Panel,
    PanelSettings, TextProps, TitleProps, DEFAULT_BACKGROUND_COLOR, HEADER_TEXT_COLOR,
};
use flexcraft_tree::Node;
use tracing::{debug, instrument};

/// Most blocks the header takes before routing moves on
const HEADER_CAPACITY: usize = 2;

const HEADER_PADDING: &str = "20px";
const BODY_SPACING: &str = "md";
const FOOTER_SPACING: &str = "sm";

/// Blocks of one panel routed to their sections
#[derive(Debug, Default, PartialEq)]
pub struct Sections<'a> {
    pub header: Vec<&'a EditorBlock>,
    pub body: Vec<&'a EditorBlock>,
    pub footer: Vec<&'a EditorBlock>,
}

/// Compile panels: none → one empty bubble, one → bubble, more → carousel
#[instrument(skip_all, fields(panels = panels.len()))]
pub fn compile(panels: &[Panel]) -> FlexDocument {
    match panels {
        [] => FlexDocument::Bubble(compile_bubble(&PanelSettings::default(), &[])),
        [panel] => FlexDocument::Bubble(compile_panel(panel)),
        _ => FlexDocument::Carousel(Carousel {
            contents: panels.iter().map(compile_panel).collect(),
        }),
    }
}

/// [`compile`] as a tree ready for path edits
pub fn compile_to_node(panels: &[Panel]) -> Node {
    Node::from(compile(panels).to_value())
}

pub fn compile_panel(panel: &Panel) -> Bubble {
    debug!(panel_id = %panel.id, blocks = panel.blocks.len(), "Compiling panel");
    compile_bubble(&panel.settings, &panel.blocks)
}

fn compile_bubble(settings: &PanelSettings, blocks: &[EditorBlock]) -> Bubble {
    let sections = partition(blocks);

    let header = section(&sections.header, true).map(|contents| FlexBox {
        background_color: Some(settings.theme_color.clone()),
        padding_all: Some(HEADER_PADDING.to_string()),
        ..FlexBox::new(BoxLayout::Vertical, contents)
    });

    let body = section(&sections.body, false).map(|contents| {
        let custom_background = !settings
            .background_color
            .eq_ignore_ascii_case(DEFAULT_BACKGROUND_COLOR);
        FlexBox {
            spacing: Some(BODY_SPACING.to_string()),
            background_color: custom_background.then(|| settings.background_color.clone()),
            ..FlexBox::new(BoxLayout::Vertical, contents)
        }
    });

    let footer = section(&sections.footer, false).map(|contents| FlexBox {
        spacing: Some(FOOTER_SPACING.to_string()),
        ..FlexBox::new(BoxLayout::Vertical, contents)
    });

    Bubble {
        size: settings.size,
        header,
        body,
        footer,
    }
}

/// Route blocks by position and type.
///
/// Starting at the first block, titles and one text following a title go
/// to the header until a block of any other kind appears or the header
/// holds [`HEADER_CAPACITY`] blocks. Buttons always go to the footer;
/// everything else goes to the body.
pub fn partition(blocks: &[EditorBlock]) -> Sections<'_> {
    let mut sections = Sections::default();
    let mut in_header = true;
    let mut seen_title = false;
    let mut header_text_taken = false;

    for block in blocks {
        if in_header && sections.header.len() < HEADER_CAPACITY {
            match &block.props {
                BlockProps::Title(_) => {
                    seen_title = true;
                    sections.header.push(block);
                    continue;
                }
                BlockProps::Text(_) if seen_title && !header_text_taken => {
                    header_text_taken = true;
                    sections.header.push(block);
                    continue;
                }
                _ => {}
            }
        }
        in_header = false;

        match &block.props {
            BlockProps::Button(_) => sections.footer.push(block),
            _ => sections.body.push(block),
        }
    }

    sections
}

/// `None` for an empty section so it is omitted rather than emitted empty
fn section(blocks: &[&EditorBlock], in_header: bool) -> Option<Vec<FlexElement>> {
    if blocks.is_empty() {
        return None;
    }
    Some(
        blocks
            .iter()
            .map(|block| isolate_glyph(block, element(block, in_header)))
            .collect(),
    )
}

/// A bare bullet glyph sits in its own box, so it cannot pair with the
/// next text when decompiled again
fn isolate_glyph(block: &EditorBlock, element: FlexElement) -> FlexElement {
    match &block.props {
        BlockProps::Title(TitleProps { text, .. }) | BlockProps::Text(TextProps { text, .. })
            if bullet::is_bullet(text) =>
        {
            FlexElement::Box(FlexBox::new(BoxLayout::Horizontal, vec![element]))
        }
        _ => element,
    }
}

fn element(block: &EditorBlock, in_header: bool) -> FlexElement {
    let color = |color: &Option<String>| {
        if in_header {
            Some(HEADER_TEXT_COLOR.to_string())
        } else {
            color.clone()
        }
    };

    match &block.props {
        BlockProps::Title(title) => FlexElement::Text(FlexText {
            text: title.text.clone(),
            size: Some(title.size),
            weight: Some("bold".to_string()),
            color: color(&title.color),
            wrap: Some(true),
            flex: None,
        }),
        BlockProps::Text(text) => match bullet::split(&text.text) {
            Some((glyph, rest)) => bullet_box(glyph, rest, text, color(&text.color)),
            None => FlexElement::Text(FlexText {
                text: text.text.clone(),
                size: text.size,
                color: color(&text.color),
                wrap: text.wrap.then_some(true),
                ..FlexText::default()
            }),
        },
        BlockProps::Image(image) => FlexElement::Image(FlexImage {
            url: image.url.clone(),
            size: "full".to_string(),
            aspect_ratio: image.aspect_ratio,
            aspect_mode: "cover".to_string(),
            action: image.action.as_ref().map(|action| flex_action(action, action.label())),
        }),
        BlockProps::Button(button) => FlexElement::Button(FlexButton {
            action: flex_action(&button.action, Some(&button.label)),
            style: button.style,
            color: button.color.clone(),
            height: "sm".to_string(),
        }),
        BlockProps::Separator => FlexElement::Separator(FlexSeparator {}),
    }
}

/// `"● label"` → horizontal box of the bullet and its label
fn bullet_box(glyph: &str, rest: &str, text: &TextProps, color: Option<String>) -> FlexElement {
    let bullet = FlexText {
        text: glyph.to_string(),
        size: text.size,
        color: color.clone(),
        flex: Some(0),
        ..FlexText::default()
    };
    let label = FlexText {
        text: rest.to_string(),
        size: text.size,
        color,
        wrap: text.wrap.then_some(true),
        flex: Some(1),
        ..FlexText::default()
    };

    FlexElement::Box(FlexBox {
        spacing: Some("sm".to_string()),
        ..FlexBox::new(
            BoxLayout::Horizontal,
            vec![FlexElement::Text(bullet), FlexElement::Text(label)],
        )
    })
}

fn flex_action(action: &Action, label: Option<&str>) -> FlexAction {
    let label = label.map(str::to_string);
    match action {
        Action::Uri { uri, .. } => FlexAction::Uri {
            label,
            uri: uri.clone(),
        },
        Action::Message { text, .. } => FlexAction::Message {
            label,
            text: text.clone(),
        },
    }
}
