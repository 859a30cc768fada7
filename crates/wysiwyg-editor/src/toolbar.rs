//! Toolbar view-model and renderer seam.
//!
//! Rendering is a pure function from [`ToolbarProps`] to a [`ToolbarView`];
//! the host draws the buttons however it likes and feeds presses back as
//! [`ToolbarAction`]s through [`crate::Editor::dispatch`]. Supplying a
//! custom [`ToolbarRenderer`] replaces the default bar without touching
//! state logic — the props contract is identical for both.

use wysiwyg_core::{BlockType, EditorState, InlineStyle};

// ── Contract types ────────────────────────────────────────────────────────

/// An action a toolbar control can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    ToggleInlineStyle(InlineStyle),
    ToggleBlockType(BlockType),
}

/// What a toolbar renderer gets to work with.
#[derive(Debug, Clone, Copy)]
pub struct ToolbarProps<'a> {
    pub editor_state: &'a EditorState,
}

/// One rendered control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub action: ToolbarAction,
    pub label: String,
    pub shortcut: Option<String>,
    /// Whether the control should show as active for the current selection.
    pub active: bool,
}

/// The rendered toolbar: an ordered list of controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolbarView {
    pub buttons: Vec<ToolbarButton>,
}

impl ToolbarView {
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Find the control bound to an action, if the renderer emitted one.
    pub fn button_for(&self, action: &ToolbarAction) -> Option<&ToolbarButton> {
        self.buttons.iter().find(|b| &b.action == action)
    }
}

// ── Renderer seam ─────────────────────────────────────────────────────────

/// Strategy seam for toolbar rendering. Any closure from props to view
/// qualifies via the blanket impl.
pub trait ToolbarRenderer {
    fn render(&self, props: &ToolbarProps<'_>) -> ToolbarView;
}

impl<F> ToolbarRenderer for F
where
    F: Fn(&ToolbarProps<'_>) -> ToolbarView,
{
    fn render(&self, props: &ToolbarProps<'_>) -> ToolbarView {
        self(props)
    }
}

// ── Default toolbar ───────────────────────────────────────────────────────

/// The built-in toolbar: bold, italic, underline. Block-type controls are
/// deliberately absent — the action stays available to custom renderers
/// through the same contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultToolbar;

impl DefaultToolbar {
    const BUTTONS: [(InlineStyle, &'static str, &'static str); 3] = [
        (InlineStyle::Bold, "Bold", "Ctrl+B"),
        (InlineStyle::Italic, "Italic", "Ctrl+I"),
        (InlineStyle::Underline, "Underline", "Ctrl+U"),
    ];
}

impl ToolbarRenderer for DefaultToolbar {
    fn render(&self, props: &ToolbarProps<'_>) -> ToolbarView {
        let current = props.editor_state.current_inline_style();
        let buttons = Self::BUTTONS
            .iter()
            .map(|(style, label, shortcut)| ToolbarButton {
                active: current.contains(style),
                action: ToolbarAction::ToggleInlineStyle(style.clone()),
                label: (*label).to_string(),
                shortcut: Some((*shortcut).to_string()),
            })
            .collect();
        ToolbarView { buttons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wysiwyg_core::rich_utils::toggle_inline_style;

    #[test]
    fn default_toolbar_has_three_inline_controls() {
        let state = EditorState::create_empty();
        let view = DefaultToolbar.render(&ToolbarProps { editor_state: &state });
        assert_eq!(view.buttons.len(), 3);
        assert!(view.buttons.iter().all(|b| !b.active));
        assert!(view.buttons.iter().all(|b| matches!(
            b.action,
            ToolbarAction::ToggleInlineStyle(_)
        )));
    }

    #[test]
    fn active_flag_follows_the_current_style() {
        let state = toggle_inline_style(&EditorState::create_empty(), InlineStyle::Bold);
        let view = DefaultToolbar.render(&ToolbarProps { editor_state: &state });
        let bold = view
            .button_for(&ToolbarAction::ToggleInlineStyle(InlineStyle::Bold))
            .unwrap();
        assert!(bold.active);
        let italic = view
            .button_for(&ToolbarAction::ToggleInlineStyle(InlineStyle::Italic))
            .unwrap();
        assert!(!italic.active);
    }

    #[test]
    fn closures_are_renderers() {
        let renderer = |props: &ToolbarProps<'_>| ToolbarView {
            buttons: vec![ToolbarButton {
                action: ToolbarAction::ToggleBlockType(BlockType::Blockquote),
                label: "Quote".to_string(),
                shortcut: None,
                active: props.editor_state.content().first_block().block_type()
                    == &BlockType::Blockquote,
            }],
        };
        let state = EditorState::create_empty();
        let view = renderer.render(&ToolbarProps { editor_state: &state });
        assert_eq!(view.buttons[0].label, "Quote");
        assert!(!view.buttons[0].active);
    }
}
