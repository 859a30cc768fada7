//! Content adapter: conversions between editor states, plain text, and the
//! raw serializable form.
//!
//! Everything here is stateless. The lenient decoders ([`from_raw`],
//! [`from_raw_json`]) never raise: malformed input degrades to the empty
//! state with a diagnostic, per the load-boundary contract. Callers that
//! need the cause use the `try_` forms.

use tracing::error;

use wysiwyg_core::raw;
use wysiwyg_core::{ContentState, EditorState, RawContent, RawContentError};

/// Wrap plain text as editor state; each line becomes an unstyled block.
pub fn from_text(text: &str) -> EditorState {
    EditorState::create_with_content(ContentState::from_text(text))
}

/// The concatenation of all block texts.
pub fn plain_text(state: &EditorState) -> String {
    state.plain_text()
}

/// Serialize the document for transport or storage.
pub fn to_raw(state: &EditorState) -> RawContent {
    raw::to_raw(state.content())
}

/// Strict decode of a raw document.
pub fn try_from_raw(raw: &RawContent) -> Result<EditorState, RawContentError> {
    Ok(EditorState::create_with_content(raw::from_raw(raw)?))
}

/// Lenient decode: malformed content yields the empty state and an error
/// diagnostic instead of propagating.
pub fn from_raw(raw: &RawContent) -> EditorState {
    match try_from_raw(raw) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "failed to decode raw content; falling back to empty state");
            EditorState::create_empty()
        }
    }
}

/// Strict decode of raw-document JSON text.
pub fn try_from_raw_json(json: &str) -> Result<EditorState, RawContentError> {
    try_from_raw(&RawContent::from_json(json)?)
}

/// Lenient decode of JSON text, with the same fail-safe as [`from_raw`].
pub fn from_raw_json(json: &str) -> EditorState {
    match try_from_raw_json(json) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "failed to parse raw content JSON; falling back to empty state");
            EditorState::create_empty()
        }
    }
}

/// Whether the document holds nothing but whitespace.
pub fn is_empty(state: &EditorState) -> bool {
    state.plain_text().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips_through_editor_state() {
        for text in ["", "Hello", "line one\nline two", "  spaced  "] {
            assert_eq!(plain_text(&from_text(text)), text);
        }
    }

    #[test]
    fn malformed_raw_fails_safe_to_empty() {
        let raw = RawContent {
            blocks: Vec::new(),
            entity_map: Default::default(),
        };
        let state = from_raw(&raw);
        assert!(is_empty(&state));
    }

    #[test]
    fn malformed_json_fails_safe_to_empty() {
        let state = from_raw_json("not json at all");
        assert!(is_empty(&state));
        let state = from_raw_json("{\"blocks\": {\"oops\": true}}");
        assert!(is_empty(&state));
    }

    #[test]
    fn whitespace_only_content_is_empty() {
        assert!(is_empty(&from_text("   \n\t  ")));
        assert!(!is_empty(&from_text("  x  ")));
    }
}
