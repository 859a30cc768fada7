//! Rich-text state transformations.
//!
//! Every function takes an [`EditorState`] snapshot and returns a new one;
//! the input is never touched. A selection that no longer resolves against
//! the content (stale block keys) makes the operation a no-op rather than
//! an error — the host simply keeps its current state.

use crate::content::ContentState;
use crate::editor_state::EditorState;
use crate::key::KeyCommand;
use crate::selection::{ResolvedSelection, SelectionState};
use crate::style::{BlockType, InlineStyle};

// ── Inline styles ─────────────────────────────────────────────────────────

/// Toggle an inline style at the current selection.
///
/// At a collapsed caret the style flips in the pending override set and
/// takes effect on the next insertion. Over a range, the decision follows
/// the active style set: if it already contains the style, the style is
/// removed from the whole range, otherwise it is applied to the whole
/// range. Toggling twice therefore restores the active-style set at the
/// same selection.
pub fn toggle_inline_style(state: &EditorState, style: InlineStyle) -> EditorState {
    let Some(resolved) = state.selection().resolve(state.content()) else {
        return state.clone();
    };
    if resolved.is_collapsed() {
        let mut set = state.current_inline_style();
        set.toggle(style);
        return state.with_inline_style_override(set);
    }

    let removing = state.current_inline_style().contains(&style);
    let mut content = state.content().clone();
    for index in resolved.start_block..=resolved.end_block {
        let len = content.blocks()[index].char_len();
        let Some((start, end)) = resolved.range_in_block(index, len) else {
            continue;
        };
        let block = content.block_at_mut(index);
        if removing {
            block.remove_style(start, end, &style);
        } else {
            block.apply_style(start, end, &style);
        }
    }
    state.with_content(content, state.selection().clone())
}

// ── Block types ───────────────────────────────────────────────────────────

/// Toggle the block type of every block touched by the selection: blocks
/// switch to `block_type`, or back to [`BlockType::Unstyled`] when the
/// block at the selection start already has it.
pub fn toggle_block_type(state: &EditorState, block_type: BlockType) -> EditorState {
    let Some(resolved) = state.selection().resolve(state.content()) else {
        return state.clone();
    };
    let target = if state.content().blocks()[resolved.start_block].block_type() == &block_type {
        BlockType::Unstyled
    } else {
        block_type
    };
    let mut content = state.content().clone();
    for index in resolved.start_block..=resolved.end_block {
        content.block_at_mut(index).set_block_type(target.clone());
    }
    state.with_content(content, state.selection().clone())
}

// ── Text input ────────────────────────────────────────────────────────────

/// Insert text at the selection, replacing any selected range first. Every
/// inserted character gets the active style set (so a pending override is
/// consumed here). `'\n'` characters split blocks.
pub fn insert_text(state: &EditorState, text: &str) -> EditorState {
    let Some(resolved) = state.selection().resolve(state.content()) else {
        return state.clone();
    };
    let style = state.current_inline_style();
    let mut content = state.content().clone();
    let (mut block_idx, mut offset) = collapse_range(&mut content, resolved);

    let mut segments = text.split('\n');
    if let Some(first) = segments.next() {
        content.block_at_mut(block_idx).insert_chars(offset, first, &style);
        offset += first.chars().count();
    }
    for segment in segments {
        let tail = content.block_at_mut(block_idx).split_off(offset);
        content.insert_block(block_idx + 1, tail);
        block_idx += 1;
        content.block_at_mut(block_idx).insert_chars(0, segment, &style);
        offset = segment.chars().count();
    }

    let selection = collapsed_at(&content, block_idx, offset);
    state.with_content(content, selection)
}

// ── Key commands ──────────────────────────────────────────────────────────

/// Apply an engine-default key command. Returns `None` when the command is
/// not one this engine handles (or is a no-op at the current position), so
/// the caller can report "not handled".
pub fn handle_key_command(state: &EditorState, command: &KeyCommand) -> Option<EditorState> {
    match command {
        KeyCommand::Bold => Some(toggle_inline_style(state, InlineStyle::Bold)),
        KeyCommand::Italic => Some(toggle_inline_style(state, InlineStyle::Italic)),
        KeyCommand::Underline => Some(toggle_inline_style(state, InlineStyle::Underline)),
        KeyCommand::InsertChars(chars) => Some(insert_text(state, chars)),
        KeyCommand::Backspace => backspace(state),
        KeyCommand::Delete => delete_forward(state),
        KeyCommand::SplitBlock => split_block(state),
        KeyCommand::Custom(_) => None,
    }
}

fn backspace(state: &EditorState) -> Option<EditorState> {
    let resolved = state.selection().resolve(state.content())?;
    let mut content = state.content().clone();

    let (block_idx, offset) = if !resolved.is_collapsed() {
        collapse_range(&mut content, resolved)
    } else if resolved.start_offset > 0 {
        let offset = resolved.start_offset;
        content
            .block_at_mut(resolved.start_block)
            .delete_chars(offset - 1, offset);
        (resolved.start_block, offset - 1)
    } else if resolved.start_block > 0 {
        // Caret at block start: merge into the previous block.
        let prev = resolved.start_block - 1;
        let prev_len = content.blocks()[prev].char_len();
        let current = content.remove_block(resolved.start_block);
        content.block_at_mut(prev).append(current);
        (prev, prev_len)
    } else {
        // Start of document — nothing to delete.
        return None;
    };

    let selection = collapsed_at(&content, block_idx, offset);
    Some(state.with_content(content, selection))
}

fn delete_forward(state: &EditorState) -> Option<EditorState> {
    let resolved = state.selection().resolve(state.content())?;
    let mut content = state.content().clone();

    let (block_idx, offset) = if !resolved.is_collapsed() {
        collapse_range(&mut content, resolved)
    } else {
        let len = content.blocks()[resolved.start_block].char_len();
        if resolved.start_offset < len {
            content
                .block_at_mut(resolved.start_block)
                .delete_chars(resolved.start_offset, resolved.start_offset + 1);
            (resolved.start_block, resolved.start_offset)
        } else if resolved.start_block + 1 < content.block_count() {
            // Caret at block end: pull the next block up.
            let next = content.remove_block(resolved.start_block + 1);
            content.block_at_mut(resolved.start_block).append(next);
            (resolved.start_block, resolved.start_offset)
        } else {
            // End of document — nothing to delete.
            return None;
        }
    };

    let selection = collapsed_at(&content, block_idx, offset);
    Some(state.with_content(content, selection))
}

fn split_block(state: &EditorState) -> Option<EditorState> {
    let resolved = state.selection().resolve(state.content())?;
    let mut content = state.content().clone();
    let (block_idx, offset) = collapse_range(&mut content, resolved);

    let tail = content.block_at_mut(block_idx).split_off(offset);
    content.insert_block(block_idx + 1, tail);

    let selection = collapsed_at(&content, block_idx + 1, 0);
    Some(state.with_content(content, selection))
}

// ── Helpers ───────────────────────────────────────────────────────────────

/// Delete the selected range (if any) and return the collapse point.
fn collapse_range(content: &mut ContentState, resolved: ResolvedSelection) -> (usize, usize) {
    if resolved.is_collapsed() {
        return (resolved.start_block, resolved.start_offset);
    }
    if resolved.start_block == resolved.end_block {
        content
            .block_at_mut(resolved.start_block)
            .delete_chars(resolved.start_offset, resolved.end_offset);
    } else {
        // Trim the boundary blocks, drop the middle ones, merge the ends.
        let start_len = content.blocks()[resolved.start_block].char_len();
        content
            .block_at_mut(resolved.start_block)
            .delete_chars(resolved.start_offset, start_len);
        content
            .block_at_mut(resolved.end_block)
            .delete_chars(0, resolved.end_offset);
        for index in (resolved.start_block + 1..resolved.end_block).rev() {
            content.remove_block(index);
        }
        let tail = content.remove_block(resolved.start_block + 1);
        content.block_at_mut(resolved.start_block).append(tail);
    }
    (resolved.start_block, resolved.start_offset)
}

fn collapsed_at(content: &ContentState, block_idx: usize, offset: usize) -> SelectionState {
    SelectionState::collapsed(content.blocks()[block_idx].key().clone(), offset)
}
