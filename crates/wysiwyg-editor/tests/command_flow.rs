//! Keyboard input through the command mapper to the engine and back.

use wysiwyg_editor::{
    content, Editor, InlineStyle, Key, KeyCommand, KeyEvent, SelectionState,
};

fn type_str(editor: &mut Editor, text: &str) {
    for c in text.chars() {
        let handled = editor.handle_key_event(&KeyEvent::char(c));
        assert!(handled.is_handled());
    }
}

#[test]
fn typing_through_key_events_builds_text() {
    let mut editor = Editor::builder().build();
    type_str(&mut editor, "hi there");
    assert_eq!(editor.state().plain_text(), "hi there");
}

#[test]
fn bold_chord_then_typing_styles_the_typed_text() {
    let mut editor = Editor::builder().build();
    assert!(editor.handle_key_event(&KeyEvent::command('b')).is_handled());
    type_str(&mut editor, "hi");

    let raw = content::to_raw(editor.state());
    let ranges = &raw.blocks[0].inline_style_ranges;
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].offset, 0);
    assert_eq!(ranges[0].length, 2);
    assert_eq!(ranges[0].style, InlineStyle::Bold);
}

#[test]
fn chord_over_selection_toggles_the_range() {
    let seed = content::from_text("make me bold");
    let key = seed.content().first_block().key().clone();
    let mut editor = Editor::builder().default_value(seed).build();
    editor.set_selection(SelectionState::range(key.clone(), 8, key, 12));

    editor.handle_key_event(&KeyEvent::command('b'));
    assert!(editor
        .state()
        .content()
        .first_block()
        .range_has_style(8, 12, &InlineStyle::Bold));

    // Toggling again restores the original active-style set.
    editor.handle_key_event(&KeyEvent::command('b'));
    assert!(editor.state().current_inline_style().is_empty());
}

#[test]
fn enter_splits_and_backspace_rejoins() {
    let mut editor = Editor::builder().build();
    type_str(&mut editor, "one");
    editor.handle_key_event(&KeyEvent::new(Key::Enter));
    assert_eq!(editor.state().content().block_count(), 2);
    editor.handle_key_event(&KeyEvent::new(Key::Backspace));
    assert_eq!(editor.state().plain_text(), "one");
}

#[test]
fn unbound_chord_is_not_handled_and_changes_nothing() {
    let mut editor = Editor::builder()
        .default_value(content::from_text("stable"))
        .build();
    let before = editor.state().clone();

    assert!(!editor.handle_key_event(&KeyEvent::command('k')).is_handled());
    assert!(!editor.handle_key_event(&KeyEvent::new(Key::Escape)).is_handled());
    assert_eq!(editor.state(), &before);
}

#[test]
fn unrecognized_command_reports_not_handled_without_error() {
    let mut editor = Editor::builder()
        .default_value(content::from_text("stable"))
        .build();
    let command = KeyCommand::Custom("delete-word-forward".to_string());
    assert!(!editor.handle_key_command(&command).is_handled());
    assert_eq!(editor.state().plain_text(), "stable");
}

#[test]
fn backspace_at_document_start_is_not_handled() {
    let mut editor = Editor::builder()
        .default_value(content::from_text("text"))
        .build();
    assert!(!editor.handle_key_event(&KeyEvent::new(Key::Backspace)).is_handled());
}

#[test]
fn named_command_strings_resolve_like_the_chords() {
    let mut editor = Editor::builder().build();
    let handled = editor.handle_key_command(&KeyCommand::from_name("bold"));
    assert!(handled.is_handled());
    editor.type_text("x");
    assert!(editor
        .state()
        .content()
        .first_block()
        .range_has_style(0, 1, &InlineStyle::Bold));
}
