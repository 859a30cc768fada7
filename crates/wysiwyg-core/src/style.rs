//! Inline-style and block-type tags.
//!
//! Style tags identify *what kind* of formatting an annotation represents.
//! A tag is either a well-known constant (bold, italic, …) or a free-form
//! string, so hosts can introduce custom styles without touching this crate.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── InlineStyle ───────────────────────────────────────────────────────────

/// A character-range-scoped formatting attribute, toggled independently of
/// block structure.
///
/// Wire names follow the raw content format (`"BOLD"`, `"ITALIC"`, …);
/// unrecognized names round-trip through [`InlineStyle::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    /// A host-defined style name.
    Custom(String),
}

impl InlineStyle {
    /// The wire name of this style.
    pub fn as_str(&self) -> &str {
        match self {
            InlineStyle::Bold => "BOLD",
            InlineStyle::Italic => "ITALIC",
            InlineStyle::Underline => "UNDERLINE",
            InlineStyle::Strikethrough => "STRIKETHROUGH",
            InlineStyle::Code => "CODE",
            InlineStyle::Custom(name) => name,
        }
    }

    /// Parse a wire name. Unknown names become [`InlineStyle::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "BOLD" => InlineStyle::Bold,
            "ITALIC" => InlineStyle::Italic,
            "UNDERLINE" => InlineStyle::Underline,
            "STRIKETHROUGH" => InlineStyle::Strikethrough,
            "CODE" => InlineStyle::Code,
            other => InlineStyle::Custom(other.to_string()),
        }
    }
}

impl From<&str> for InlineStyle {
    fn from(name: &str) -> Self {
        InlineStyle::from_name(name)
    }
}
impl From<String> for InlineStyle {
    fn from(name: String) -> Self {
        InlineStyle::from_name(&name)
    }
}
impl From<InlineStyle> for String {
    fn from(style: InlineStyle) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BlockType ─────────────────────────────────────────────────────────────

/// A structural classification of a paragraph-level unit, toggled
/// independently of inline styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum BlockType {
    #[default]
    Unstyled,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    Blockquote,
    UnorderedListItem,
    OrderedListItem,
    CodeBlock,
    /// A host-defined block type name.
    Custom(String),
}

impl BlockType {
    /// The wire name of this block type.
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::HeaderThree => "header-three",
            BlockType::Blockquote => "blockquote",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::CodeBlock => "code-block",
            BlockType::Custom(name) => name,
        }
    }

    /// Parse a wire name. Unknown names become [`BlockType::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "unstyled" => BlockType::Unstyled,
            "header-one" => BlockType::HeaderOne,
            "header-two" => BlockType::HeaderTwo,
            "header-three" => BlockType::HeaderThree,
            "blockquote" => BlockType::Blockquote,
            "unordered-list-item" => BlockType::UnorderedListItem,
            "ordered-list-item" => BlockType::OrderedListItem,
            "code-block" => BlockType::CodeBlock,
            other => BlockType::Custom(other.to_string()),
        }
    }
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        BlockType::from_name(name)
    }
}
impl From<String> for BlockType {
    fn from(name: String) -> Self {
        BlockType::from_name(&name)
    }
}
impl From<BlockType> for String {
    fn from(block_type: BlockType) -> Self {
        block_type.as_str().to_string()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── StyleSet ──────────────────────────────────────────────────────────────

/// An ordered set of inline styles — the per-character formatting metadata
/// and the "active styles" value reported for a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet(BTreeSet<InlineStyle>);

impl StyleSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any sequence of styles.
    pub fn of(styles: impl IntoIterator<Item = InlineStyle>) -> Self {
        StyleSet(styles.into_iter().collect())
    }

    pub fn contains(&self, style: &InlineStyle) -> bool {
        self.0.contains(style)
    }

    pub fn insert(&mut self, style: InlineStyle) {
        self.0.insert(style);
    }

    pub fn remove(&mut self, style: &InlineStyle) {
        self.0.remove(style);
    }

    /// Flip membership of `style`.
    pub fn toggle(&mut self, style: InlineStyle) {
        if !self.0.remove(&style) {
            self.0.insert(style);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate styles in their canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &InlineStyle> {
        self.0.iter()
    }
}

impl FromIterator<InlineStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = InlineStyle>>(iter: I) -> Self {
        StyleSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a InlineStyle;
    type IntoIter = std::collections::btree_set::Iter<'a, InlineStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_style_names_round_trip() {
        for style in [
            InlineStyle::Bold,
            InlineStyle::Italic,
            InlineStyle::Underline,
            InlineStyle::Strikethrough,
            InlineStyle::Code,
        ] {
            assert_eq!(InlineStyle::from_name(style.as_str()), style);
        }
        assert_eq!(
            InlineStyle::from_name("HIGHLIGHT"),
            InlineStyle::Custom("HIGHLIGHT".to_string())
        );
    }

    #[test]
    fn block_type_names_round_trip() {
        for block_type in [
            BlockType::Unstyled,
            BlockType::HeaderOne,
            BlockType::Blockquote,
            BlockType::UnorderedListItem,
            BlockType::CodeBlock,
        ] {
            assert_eq!(BlockType::from_name(block_type.as_str()), block_type);
        }
    }

    #[test]
    fn style_set_toggle_flips_membership() {
        let mut set = StyleSet::new();
        set.toggle(InlineStyle::Bold);
        assert!(set.contains(&InlineStyle::Bold));
        set.toggle(InlineStyle::Bold);
        assert!(!set.contains(&InlineStyle::Bold));
        assert!(set.is_empty());
    }

    #[test]
    fn style_set_serializes_as_wire_names() {
        let json = serde_json::to_string(&InlineStyle::Bold).unwrap();
        assert_eq!(json, "\"BOLD\"");
        let back: InlineStyle = serde_json::from_str("\"ITALIC\"").unwrap();
        assert_eq!(back, InlineStyle::Italic);
    }
}
