//! # Flexcraft Schema
//!
//! Data model shared by the compiler and the editor:
//!
//! - **Blocks**: the five editable variants (title, text, image, button,
//!   separator) and their default payloads
//! - **Panels**: one bubble's settings plus its ordered blocks
//! - **Actions**: open a URL or send a message
//! - **Enumerations**: text sizes, button styles, panel sizes, aspect ratios
//! - **Wire format**: typed bubble/carousel output
//! - **Ids**: injectable id generation
//!
//! Nothing here has behavior beyond construction.

mod action;
mod block;
mod flex;
mod ids;
mod panel;
mod style;

pub use action::Action;
pub use block::{
    duplicate_block, BlockProps, BlockType, ButtonProps, EditorBlock, ImageProps, TextProps,
    TitleProps,
};
pub use flex::{
    Bubble, Carousel, FlexAction, FlexBox, FlexButton, FlexDocument, FlexElement, FlexImage,
    FlexSeparator, FlexText,
};
pub use ids::{generate_block_id, IdGenerator, SequentialIds, TimestampIds};
pub use panel::{
    create_empty_panel, duplicate_panel, Panel, PanelSettings, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_THEME_COLOR, HEADER_TEXT_COLOR,
};
pub use style::{AspectRatio, BoxLayout, ButtonStyle, PanelSize, TextSize};
