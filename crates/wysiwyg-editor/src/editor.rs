//! The editor component: state ownership, input routing, toolbar wiring.
//!
//! `Editor` owns exactly one question — *who holds the authoritative
//! [`EditorState`]* — and routes every mutation through one change path.
//! In controlled mode the host owns the state: each change is forwarded to
//! the host's handler and nothing is stored here; the host pushes its
//! value back with [`Editor::sync_value`]. In uncontrolled mode the editor
//! stores its own state, optionally seeded from a default value.
//!
//! The mode is fixed when the editor is built and cannot change over its
//! lifetime; switching between controlled and uncontrolled mid-flight is
//! unsupported and unrepresentable in this API.

use tracing::warn;

use wysiwyg_core::rich_utils;
use wysiwyg_core::{BlockType, EditorState, InlineStyle, KeyCommand, KeyEvent};

use crate::commands::{key_binding, Handled};
use crate::toolbar::{DefaultToolbar, ToolbarAction, ToolbarProps, ToolbarRenderer, ToolbarView};

/// Handler invoked with every new state in controlled mode.
pub type ChangeHandler = Box<dyn FnMut(EditorState)>;
/// Handler invoked on focus/blur transitions.
pub type FocusHandler = Box<dyn FnMut()>;

const DEFAULT_PLACEHOLDER: &str = "Start typing...";

// ── Mode ──────────────────────────────────────────────────────────────────

enum Mode {
    /// The host owns the state; `value` is whatever it last supplied.
    Controlled {
        value: EditorState,
        on_change: ChangeHandler,
    },
    /// The editor owns the state.
    Uncontrolled { state: EditorState },
}

// ── Editor ────────────────────────────────────────────────────────────────

/// A headless WYSIWYG editor component.
///
/// Build one with [`Editor::builder`]; supply **both** a `value` and an
/// `on_change` handler for controlled mode, or (optionally) a
/// `default_value` for uncontrolled mode. A `value` without a handler, or
/// a handler without a `value`, leaves the editor uncontrolled.
pub struct Editor {
    mode: Mode,
    placeholder: String,
    read_only: bool,
    toolbar_visible: bool,
    toolbar_renderer: Option<Box<dyn ToolbarRenderer>>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
}

impl Editor {
    pub fn builder() -> EditorBuilder {
        EditorBuilder::default()
    }

    /// Whether the host owns the authoritative state.
    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, Mode::Controlled { .. })
    }

    /// The authoritative state for the current mode: the host-supplied
    /// value (controlled) or the internal state (uncontrolled).
    pub fn state(&self) -> &EditorState {
        match &self.mode {
            Mode::Controlled { value, .. } => value,
            Mode::Uncontrolled { state } => state,
        }
    }

    /// Controlled hosts push their authoritative value here after handling
    /// a change. Ignored (with a diagnostic) in uncontrolled mode.
    pub fn sync_value(&mut self, value: EditorState) {
        match &mut self.mode {
            Mode::Controlled { value: slot, .. } => *slot = value,
            Mode::Uncontrolled { .. } => {
                warn!("sync_value called on an uncontrolled editor; ignored");
            }
        }
    }

    /// Route a new state through the single change path: forward it in
    /// controlled mode, store it in uncontrolled mode.
    fn apply_change(&mut self, new_state: EditorState) {
        match &mut self.mode {
            Mode::Controlled { on_change, .. } => on_change(new_state),
            Mode::Uncontrolled { state } => *state = new_state,
        }
    }

    // ── Input ─────────────────────────────────────────────────────────────

    /// Feed one key event through the chord table and command handlers.
    /// Returns [`Handled::Handled`] when the event produced a new state, so
    /// the host knows to suppress its default behavior.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> Handled {
        if self.read_only {
            return Handled::NotHandled;
        }
        match key_binding(event) {
            Some(command) => self.handle_key_command(&command),
            None => Handled::NotHandled,
        }
    }

    /// Apply a resolved command: the formatting commands become
    /// inline-style toggles, everything else is delegated to the engine's
    /// generic handler. Unrecognized commands are reported as not handled
    /// and change nothing.
    pub fn handle_key_command(&mut self, command: &KeyCommand) -> Handled {
        if self.read_only {
            return Handled::NotHandled;
        }
        match command {
            KeyCommand::Bold => {
                self.toggle_inline_style(InlineStyle::Bold);
                Handled::Handled
            }
            KeyCommand::Italic => {
                self.toggle_inline_style(InlineStyle::Italic);
                Handled::Handled
            }
            KeyCommand::Underline => {
                self.toggle_inline_style(InlineStyle::Underline);
                Handled::Handled
            }
            other => match rich_utils::handle_key_command(self.state(), other) {
                Some(new_state) => {
                    self.apply_change(new_state);
                    Handled::Handled
                }
                None => Handled::NotHandled,
            },
        }
    }

    /// Insert text at the current selection (the typing path, minus the
    /// per-character key events).
    pub fn type_text(&mut self, text: &str) {
        if self.read_only {
            return;
        }
        let new_state = rich_utils::insert_text(self.state(), text);
        self.apply_change(new_state);
    }

    /// Move the selection (host pointer/keyboard navigation). Selection is
    /// not an edit, so this works in read-only mode too.
    pub fn set_selection(&mut self, selection: wysiwyg_core::SelectionState) {
        let new_state = self.state().with_selection(selection);
        self.apply_change(new_state);
    }

    // ── Formatting ────────────────────────────────────────────────────────

    pub fn toggle_inline_style(&mut self, style: InlineStyle) {
        if self.read_only {
            return;
        }
        let new_state = rich_utils::toggle_inline_style(self.state(), style);
        self.apply_change(new_state);
    }

    pub fn toggle_block_type(&mut self, block_type: BlockType) {
        if self.read_only {
            return;
        }
        let new_state = rich_utils::toggle_block_type(self.state(), block_type);
        self.apply_change(new_state);
    }

    /// Dispatch a toolbar press.
    pub fn dispatch(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::ToggleInlineStyle(style) => self.toggle_inline_style(style),
            ToolbarAction::ToggleBlockType(block_type) => self.toggle_block_type(block_type),
        }
    }

    // ── Toolbar ───────────────────────────────────────────────────────────

    /// Render the toolbar for the current state: `None` when hidden, else
    /// the view from the custom renderer or the default bar.
    pub fn toolbar(&self) -> Option<ToolbarView> {
        if !self.toolbar_visible {
            return None;
        }
        let props = ToolbarProps {
            editor_state: self.state(),
        };
        let view = match &self.toolbar_renderer {
            Some(renderer) => renderer.render(&props),
            None => DefaultToolbar.render(&props),
        };
        Some(view)
    }

    // ── Focus ─────────────────────────────────────────────────────────────

    pub fn focus(&mut self) {
        let new_state = self.state().with_focus(true);
        self.apply_change(new_state);
        if let Some(handler) = &mut self.on_focus {
            handler();
        }
    }

    pub fn blur(&mut self) {
        let new_state = self.state().with_focus(false);
        self.apply_change(new_state);
        if let Some(handler) = &mut self.on_blur {
            handler();
        }
    }

    // ── Config accessors ──────────────────────────────────────────────────

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Hosts show the placeholder while the document is empty.
    pub fn placeholder_visible(&self) -> bool {
        crate::content::is_empty(self.state())
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn toolbar_visible(&self) -> bool {
        self.toolbar_visible
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("controlled", &self.is_controlled())
            .field("read_only", &self.read_only)
            .field("toolbar_visible", &self.toolbar_visible)
            .field("blocks", &self.state().content().block_count())
            .finish()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────

/// Configuration for [`Editor`]. All fields optional; the defaults give an
/// empty uncontrolled editor with the standard toolbar.
#[derive(Default)]
pub struct EditorBuilder {
    value: Option<EditorState>,
    on_change: Option<ChangeHandler>,
    default_value: Option<EditorState>,
    placeholder: Option<String>,
    read_only: bool,
    toolbar_hidden: bool,
    toolbar_renderer: Option<Box<dyn ToolbarRenderer>>,
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
}

impl EditorBuilder {
    /// Externally owned state (controlled mode, together with
    /// [`EditorBuilder::on_change`]).
    pub fn value(mut self, value: EditorState) -> Self {
        self.value = Some(value);
        self
    }

    /// Change handler for controlled mode.
    pub fn on_change(mut self, handler: impl FnMut(EditorState) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Seed state for uncontrolled mode.
    pub fn default_value(mut self, value: EditorState) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn toolbar_visible(mut self, visible: bool) -> Self {
        self.toolbar_hidden = !visible;
        self
    }

    /// Replace the default toolbar with a custom renderer.
    pub fn toolbar_renderer(mut self, renderer: impl ToolbarRenderer + 'static) -> Self {
        self.toolbar_renderer = Some(Box::new(renderer));
        self
    }

    pub fn on_focus(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }

    /// Fix the mode and build. Controlled requires both `value` and
    /// `on_change`; any other combination is uncontrolled and a lone
    /// `value` or handler is ignored.
    pub fn build(self) -> Editor {
        let mode = match (self.value, self.on_change) {
            (Some(value), Some(on_change)) => Mode::Controlled { value, on_change },
            _ => Mode::Uncontrolled {
                state: self.default_value.unwrap_or_default(),
            },
        };
        Editor {
            mode,
            placeholder: self
                .placeholder
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            read_only: self.read_only,
            toolbar_visible: !self.toolbar_hidden,
            toolbar_renderer: self.toolbar_renderer,
            on_focus: self.on_focus,
            on_blur: self.on_blur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let editor = Editor::builder().build();
        assert!(!editor.is_controlled());
        assert_eq!(editor.placeholder(), "Start typing...");
        assert!(!editor.read_only());
        assert!(editor.toolbar_visible());
        assert!(editor.placeholder_visible());
    }

    #[test]
    fn lone_value_without_handler_stays_uncontrolled() {
        let editor = Editor::builder()
            .value(EditorState::create_empty())
            .build();
        assert!(!editor.is_controlled());
    }

    #[test]
    fn read_only_drops_editing_input() {
        let mut editor = Editor::builder().read_only(true).build();
        let handled = editor.handle_key_event(&KeyEvent::char('x'));
        assert!(!handled.is_handled());
        editor.type_text("nope");
        editor.toggle_inline_style(InlineStyle::Bold);
        assert_eq!(editor.state().plain_text(), "");
        assert!(editor.state().inline_style_override().is_none());
    }

    #[test]
    fn toolbar_hidden_renders_nothing() {
        let editor = Editor::builder().toolbar_visible(false).build();
        assert!(editor.toolbar().is_none());
    }
}
