//! Immutable editor-state snapshots.
//!
//! An [`EditorState`] bundles document content, selection, and the pending
//! inline-style override into one value. It is never mutated in place:
//! every operation in [`crate::rich_utils`] returns a new snapshot, and the
//! previous one stays valid. Hosts replace their state wholesale on each
//! change.

use crate::content::ContentState;
use crate::selection::SelectionState;
use crate::style::StyleSet;

// ── EditorState ───────────────────────────────────────────────────────────

/// One immutable snapshot of the editor: content + selection + the style
/// override applied to the next insertion at a collapsed cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    content: ContentState,
    selection: SelectionState,
    inline_style_override: Option<StyleSet>,
}

impl EditorState {
    /// An empty document with the caret at its start.
    pub fn create_empty() -> Self {
        EditorState::create_with_content(ContentState::new_empty())
    }

    /// Wrap existing content; the caret starts collapsed at the beginning
    /// of the first block.
    pub fn create_with_content(content: ContentState) -> Self {
        let selection = SelectionState::collapsed(content.first_block().key().clone(), 0);
        EditorState {
            content,
            selection,
            inline_style_override: None,
        }
    }

    pub fn content(&self) -> &ContentState {
        &self.content
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The pending override set, if a style was toggled at a collapsed
    /// cursor and nothing has been typed yet.
    pub fn inline_style_override(&self) -> Option<&StyleSet> {
        self.inline_style_override.as_ref()
    }

    /// Convenience passthrough to [`ContentState::plain_text`].
    pub fn plain_text(&self) -> String {
        self.content.plain_text()
    }

    /// The active style set at the current selection: the override when one
    /// is pending, else the style of the character before a collapsed caret
    /// (falling back to the character at the block start), else the style at
    /// the start of a ranged selection.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(set) = &self.inline_style_override {
            return set.clone();
        }
        let Some(resolved) = self.selection.resolve(&self.content) else {
            return StyleSet::new();
        };
        let block = &self.content.blocks()[resolved.start_block];
        let at = if resolved.is_collapsed() && resolved.start_offset > 0 {
            resolved.start_offset - 1
        } else {
            resolved.start_offset
        };
        block.style_at(at).cloned().unwrap_or_default()
    }

    // ── Derived snapshots ─────────────────────────────────────────────────

    /// New snapshot with a moved selection. Moving the selection abandons
    /// any pending style override.
    pub fn with_selection(&self, selection: SelectionState) -> Self {
        EditorState {
            content: self.content.clone(),
            selection,
            inline_style_override: None,
        }
    }

    /// New snapshot with replaced content and selection.
    pub fn with_content(&self, content: ContentState, selection: SelectionState) -> Self {
        EditorState {
            content,
            selection,
            inline_style_override: None,
        }
    }

    /// New snapshot with a pending style override at the same selection.
    pub fn with_inline_style_override(&self, set: StyleSet) -> Self {
        EditorState {
            content: self.content.clone(),
            selection: self.selection.clone(),
            inline_style_override: Some(set),
        }
    }

    /// New snapshot with the focus flag flipped; content and any pending
    /// override are untouched.
    pub fn with_focus(&self, has_focus: bool) -> Self {
        EditorState {
            content: self.content.clone(),
            selection: self.selection.clone().with_focus(has_focus),
            inline_style_override: self.inline_style_override.clone(),
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::create_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::InlineStyle;

    #[test]
    fn empty_state_has_one_empty_block() {
        let state = EditorState::create_empty();
        assert_eq!(state.content().block_count(), 1);
        assert_eq!(state.plain_text(), "");
        assert!(state.current_inline_style().is_empty());
    }

    #[test]
    fn caret_starts_at_first_block() {
        let state = EditorState::create_with_content(ContentState::from_text("a\nb"));
        let selection = state.selection();
        assert!(selection.is_collapsed());
        assert_eq!(&selection.anchor_key, state.content().first_block().key());
        assert_eq!(selection.anchor_offset, 0);
    }

    #[test]
    fn override_wins_over_character_styles() {
        let state = EditorState::create_empty()
            .with_inline_style_override(StyleSet::of([InlineStyle::Bold]));
        assert!(state
            .current_inline_style()
            .contains(&InlineStyle::Bold));
    }

    #[test]
    fn moving_selection_drops_override() {
        let state = EditorState::create_with_content(ContentState::from_text("ab"))
            .with_inline_style_override(StyleSet::of([InlineStyle::Italic]));
        let key = state.content().first_block().key().clone();
        let moved = state.with_selection(SelectionState::collapsed(key, 1));
        assert!(moved.inline_style_override().is_none());
    }
}
