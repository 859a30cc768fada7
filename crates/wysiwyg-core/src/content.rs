//! Document content: blocks of styled text.
//!
//! A [`ContentState`] is an ordered, never-empty list of [`ContentBlock`]s.
//! Each block carries its text plus one [`StyleSet`] per character, so style
//! ranges are maximal runs computed at the serialization boundary rather
//! than stored ranges that could drift out of sync with edits.
//!
//! All offsets are Unicode scalar value indices (`char` positions), never
//! byte offsets.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::style::{BlockType, InlineStyle, StyleSet};

// ── BlockKey ──────────────────────────────────────────────────────────────

static NEXT_BLOCK_KEY: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier of a content block, unique within a process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockKey(String);

impl BlockKey {
    /// Generate a fresh key from the process-wide counter.
    pub fn generate() -> Self {
        let n = NEXT_BLOCK_KEY.fetch_add(1, Ordering::Relaxed);
        BlockKey(to_base36(n))
    }

    /// Adopt an externally supplied key (e.g. from deserialized content).
    pub fn new(key: impl Into<String>) -> Self {
        BlockKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockKey {
    fn from(key: &str) -> Self {
        BlockKey::new(key)
    }
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    // Pad to the familiar five-character width.
    while out.len() < 5 {
        out.push(b'0');
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

// ── ContentBlock ──────────────────────────────────────────────────────────

/// One paragraph-level unit of content.
///
/// Invariant: `styles.len() == text.chars().count()`. Every mutator below
/// preserves it; constructing a block through anything but these methods is
/// impossible outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    key: BlockKey,
    text: String,
    block_type: BlockType,
    depth: u8,
    styles: Vec<StyleSet>,
}

impl ContentBlock {
    /// An empty block of the given type.
    pub fn empty(block_type: BlockType) -> Self {
        ContentBlock {
            key: BlockKey::generate(),
            text: String::new(),
            block_type,
            depth: 0,
            styles: Vec::new(),
        }
    }

    /// An unstyled block holding `text` (which must not contain `'\n'`).
    pub fn unstyled(text: &str) -> Self {
        let styles = vec![StyleSet::new(); text.chars().count()];
        ContentBlock {
            key: BlockKey::generate(),
            text: text.to_string(),
            block_type: BlockType::Unstyled,
            depth: 0,
            styles,
        }
    }

    /// Assemble a block from validated parts. The caller guarantees the
    /// per-character invariant; the boundary codec does so by construction.
    pub(crate) fn from_parts(
        key: BlockKey,
        text: String,
        block_type: BlockType,
        depth: u8,
        styles: Vec<StyleSet>,
    ) -> Self {
        debug_assert_eq!(styles.len(), text.chars().count());
        ContentBlock {
            key,
            text,
            block_type,
            depth,
            styles,
        }
    }

    pub fn key(&self) -> &BlockKey {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn block_type(&self) -> &BlockType {
        &self.block_type
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Number of characters (not bytes) in this block.
    pub fn char_len(&self) -> usize {
        self.styles.len()
    }

    /// Per-character style metadata, one entry per character.
    pub fn styles(&self) -> &[StyleSet] {
        &self.styles
    }

    /// The style set at a character offset, if in bounds.
    pub fn style_at(&self, offset: usize) -> Option<&StyleSet> {
        self.styles.get(offset)
    }

    /// Whether every character in `start..end` carries `style`. Offsets
    /// beyond the block are clamped.
    pub fn range_has_style(&self, start: usize, end: usize, style: &InlineStyle) -> bool {
        let end = end.min(self.styles.len());
        let start = start.min(end);
        self.styles[start..end].iter().all(|set| set.contains(style))
    }

    // ── Mutators (crate-internal; states are replaced wholesale) ──────────

    pub(crate) fn set_block_type(&mut self, block_type: BlockType) {
        self.block_type = block_type;
    }

    pub(crate) fn apply_style(&mut self, start: usize, end: usize, style: &InlineStyle) {
        let end = end.min(self.styles.len());
        let start = start.min(end);
        for set in &mut self.styles[start..end] {
            set.insert(style.clone());
        }
    }

    pub(crate) fn remove_style(&mut self, start: usize, end: usize, style: &InlineStyle) {
        let end = end.min(self.styles.len());
        let start = start.min(end);
        for set in &mut self.styles[start..end] {
            set.remove(style);
        }
    }

    /// Insert `text` (newline-free) at a character offset, giving every
    /// inserted character the style set `style`. Offsets beyond the block
    /// end append.
    pub(crate) fn insert_chars(&mut self, offset: usize, text: &str, style: &StyleSet) {
        let offset = offset.min(self.styles.len());
        let byte = char_to_byte(&self.text, offset);
        self.text.insert_str(byte, text);
        let count = text.chars().count();
        self.styles
            .splice(offset..offset, std::iter::repeat(style.clone()).take(count));
    }

    /// Delete the characters in `start..end`.
    pub(crate) fn delete_chars(&mut self, start: usize, end: usize) {
        let end = end.min(self.styles.len());
        if start >= end {
            return;
        }
        let byte_start = char_to_byte(&self.text, start);
        let byte_end = char_to_byte(&self.text, end);
        self.text.replace_range(byte_start..byte_end, "");
        self.styles.drain(start..end);
    }

    /// Split this block at a character offset; the tail becomes a new block
    /// with a fresh key and the same type and depth.
    pub(crate) fn split_off(&mut self, offset: usize) -> ContentBlock {
        let byte = char_to_byte(&self.text, offset);
        let tail_text = self.text.split_off(byte);
        let tail_styles = self.styles.split_off(offset.min(self.styles.len()));
        ContentBlock {
            key: BlockKey::generate(),
            text: tail_text,
            block_type: self.block_type.clone(),
            depth: self.depth,
            styles: tail_styles,
        }
    }

    /// Append another block's content to this one (block merge on delete).
    pub(crate) fn append(&mut self, other: ContentBlock) {
        self.text.push_str(&other.text);
        self.styles.extend(other.styles);
    }
}

/// Byte index of the `char_idx`-th character of `text` (or `text.len()`).
fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

// ── ContentState ──────────────────────────────────────────────────────────

/// The full document content: an ordered, never-empty list of blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentState {
    blocks: Vec<ContentBlock>,
}

impl ContentState {
    /// A single empty unstyled block.
    pub fn new_empty() -> Self {
        ContentState {
            blocks: vec![ContentBlock::empty(BlockType::Unstyled)],
        }
    }

    /// Wrap plain text: each line becomes one unstyled block.
    pub fn from_text(text: &str) -> Self {
        let blocks: Vec<ContentBlock> = text.split('\n').map(ContentBlock::unstyled).collect();
        ContentState { blocks }
    }

    /// Assemble from validated blocks; empty input degrades to the empty
    /// state so the never-empty invariant holds unconditionally.
    pub(crate) fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        if blocks.is_empty() {
            ContentState::new_empty()
        } else {
            ContentState { blocks }
        }
    }

    /// Concatenation of all block texts, joined with `'\n'`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(block.text());
        }
        out
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn first_block(&self) -> &ContentBlock {
        &self.blocks[0]
    }

    pub fn last_block(&self) -> &ContentBlock {
        &self.blocks[self.blocks.len() - 1]
    }

    /// Look up a block by key.
    pub fn block(&self, key: &BlockKey) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.key() == key)
    }

    /// Position of a block in document order.
    pub fn index_of(&self, key: &BlockKey) -> Option<usize> {
        self.blocks.iter().position(|b| b.key() == key)
    }

    pub(crate) fn block_at_mut(&mut self, index: usize) -> &mut ContentBlock {
        &mut self.blocks[index]
    }

    pub(crate) fn insert_block(&mut self, index: usize, block: ContentBlock) {
        self.blocks.insert(index, block);
    }

    pub(crate) fn remove_block(&mut self, index: usize) -> ContentBlock {
        self.blocks.remove(index)
    }
}

impl Default for ContentState {
    fn default() -> Self {
        ContentState::new_empty()
    }
}
