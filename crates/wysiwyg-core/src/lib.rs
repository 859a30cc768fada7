#![forbid(unsafe_code)]

//! wysiwyg-core — the rich-text engine boundary.
//!
//! Provides immutable [`EditorState`] snapshots over block-structured
//! styled text, the state transformations in [`rich_utils`], the
//! platform-independent key model, and the serializable [`RawContent`]
//! boundary form.
//!
//! The crate is deliberately headless and small: no undo/redo, no layout,
//! no rendering. Consumers treat [`EditorState`] as an opaque value —
//! every edit produces a new snapshot and the previous one stays valid.

pub mod content;
pub mod editor_state;
pub mod key;
pub mod raw;
pub mod rich_utils;
pub mod selection;
pub mod style;

pub use content::{BlockKey, ContentBlock, ContentState};
pub use editor_state::EditorState;
pub use key::{default_key_binding, Key, KeyCommand, KeyEvent, Modifiers};
pub use raw::{RawBlock, RawContent, RawContentError, RawEntityRange, RawStyleRange};
pub use selection::{ResolvedSelection, SelectionState};
pub use style::{BlockType, InlineStyle, StyleSet};
