#![forbid(unsafe_code)]

//! wysiwyg-editor — a headless WYSIWYG editor component.
//!
//! A thin wrapper over the [`wysiwyg_core`] engine that decides exactly
//! four things:
//!
//! - whether editor state is owned by the host (controlled) or held
//!   internally (uncontrolled) — [`Editor`];
//! - how keyboard chords and toolbar presses become named formatting
//!   commands — [`commands`];
//! - what the toolbar looks like, with full replacement via a renderer
//!   seam — [`toolbar`];
//! - how content crosses the load/save boundary — [`content`] and the
//!   demo [`persistence`] backend.
//!
//! All text-editing semantics (selection, style ranges, key commands)
//! live in the engine; states pass through here as opaque values.
//!
//! ```
//! use wysiwyg_editor::{content, Editor};
//!
//! let mut editor = Editor::builder().build();
//! editor.type_text("Hello world");
//! assert_eq!(content::plain_text(editor.state()), "Hello world");
//! ```

pub mod commands;
pub mod content;
pub mod editor;
pub mod persistence;
pub mod toolbar;

pub use commands::{key_binding, Handled};
pub use editor::{ChangeHandler, Editor, EditorBuilder, FocusHandler};
pub use persistence::{FakeBackend, PersistenceError, SerialGate, Ticket};
pub use toolbar::{
    DefaultToolbar, ToolbarAction, ToolbarButton, ToolbarProps, ToolbarRenderer, ToolbarView,
};

pub use wysiwyg_core::{
    BlockType, EditorState, InlineStyle, Key, KeyCommand, KeyEvent, Modifiers, RawContent,
    RawContentError, SelectionState, StyleSet,
};
