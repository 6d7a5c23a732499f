//! Bullet + label pairs.
//!
//! The wire format spells a bulleted line as two text elements in a row;
//! the editor keeps it as one text block `"<bullet> <label>"`.

/// Glyphs recognized as list bullets. `⚫︎` includes its variation selector.
pub const BULLET_GLYPHS: &[&str] = &[
    "●", "・", "▶", "★", "◆", "■", "□", "◇", "▷", "►", "☆", "✓", "✔", "⚫︎", "○", "◎", "▪",
    "▸", "•",
];

pub fn is_bullet(text: &str) -> bool {
    let text = text.trim();
    BULLET_GLYPHS.iter().any(|glyph| *glyph == text)
}

/// `true` when a label has something to show besides whitespace
pub fn is_label(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Editor text for a bullet followed by its label
pub fn join(bullet: &str, label: &str) -> String {
    format!("{} {}", bullet.trim(), label)
}

/// Split `"<glyph> <rest>"` into glyph and rest. Exactly one glyph, one space.
pub fn split(text: &str) -> Option<(&'static str, &str)> {
    BULLET_GLYPHS.iter().find_map(|glyph| {
        let rest = text.strip_prefix(glyph)?.strip_prefix(' ')?;
        is_label(rest).then_some((*glyph, rest))
    })
}
