//! Selection state: an anchor/focus pair over block-relative offsets.
//!
//! Anchor and focus are stored in the order the user made the selection, so
//! a backwards drag keeps its direction. Code that edits content works with
//! the document-ordered [`ResolvedSelection`] instead.

use crate::content::{BlockKey, ContentState};

// ── SelectionState ────────────────────────────────────────────────────────

/// Where the cursor (or selected range) sits, in block/offset coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub anchor_key: BlockKey,
    pub anchor_offset: usize,
    pub focus_key: BlockKey,
    pub focus_offset: usize,
    pub has_focus: bool,
}

impl SelectionState {
    /// A collapsed selection (caret) at one point.
    pub fn collapsed(key: BlockKey, offset: usize) -> Self {
        SelectionState {
            anchor_key: key.clone(),
            anchor_offset: offset,
            focus_key: key,
            focus_offset: offset,
            has_focus: false,
        }
    }

    /// A range from anchor to focus (either direction).
    pub fn range(
        anchor_key: BlockKey,
        anchor_offset: usize,
        focus_key: BlockKey,
        focus_offset: usize,
    ) -> Self {
        SelectionState {
            anchor_key,
            anchor_offset,
            focus_key,
            focus_offset,
            has_focus: false,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor_key == self.focus_key && self.anchor_offset == self.focus_offset
    }

    pub fn with_focus(mut self, has_focus: bool) -> Self {
        self.has_focus = has_focus;
        self
    }

    /// Resolve block keys to document-ordered indices, clamping offsets to
    /// their block lengths. Returns `None` when either end refers to a
    /// block the content no longer has.
    pub fn resolve(&self, content: &ContentState) -> Option<ResolvedSelection> {
        let anchor_block = content.index_of(&self.anchor_key)?;
        let focus_block = content.index_of(&self.focus_key)?;
        let anchor = (
            anchor_block,
            self.anchor_offset.min(content.blocks()[anchor_block].char_len()),
        );
        let focus = (
            focus_block,
            self.focus_offset.min(content.blocks()[focus_block].char_len()),
        );
        let (start, end) = if focus < anchor {
            (focus, anchor)
        } else {
            (anchor, focus)
        };
        Some(ResolvedSelection {
            start_block: start.0,
            start_offset: start.1,
            end_block: end.0,
            end_offset: end.1,
        })
    }
}

// ── ResolvedSelection ─────────────────────────────────────────────────────

/// A selection with both ends resolved to block indices and put in document
/// order (`start <= end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSelection {
    pub start_block: usize,
    pub start_offset: usize,
    pub end_block: usize,
    pub end_offset: usize,
}

impl ResolvedSelection {
    pub fn is_collapsed(&self) -> bool {
        self.start_block == self.end_block && self.start_offset == self.end_offset
    }

    /// The character range this selection covers within one block.
    pub fn range_in_block(&self, block_index: usize, block_len: usize) -> Option<(usize, usize)> {
        if block_index < self.start_block || block_index > self.end_block {
            return None;
        }
        let start = if block_index == self.start_block {
            self.start_offset
        } else {
            0
        };
        let end = if block_index == self.end_block {
            self.end_offset
        } else {
            block_len
        };
        Some((start, end))
    }
}
