//! Toolbar contract: default bar, custom renderers, action dispatch.

use wysiwyg_editor::{
    content, BlockType, Editor, InlineStyle, ToolbarAction, ToolbarButton, ToolbarProps,
    ToolbarView,
};

#[test]
fn default_toolbar_reflects_active_styles_after_dispatch() {
    let mut editor = Editor::builder().build();

    let view = editor.toolbar().expect("toolbar visible by default");
    let bold_action = ToolbarAction::ToggleInlineStyle(InlineStyle::Bold);
    assert!(!view.button_for(&bold_action).unwrap().active);

    // Press the bold button, as a host would.
    editor.dispatch(bold_action.clone());
    let view = editor.toolbar().unwrap();
    assert!(view.button_for(&bold_action).unwrap().active);

    // Press again: back to inactive.
    editor.dispatch(bold_action.clone());
    let view = editor.toolbar().unwrap();
    assert!(!view.button_for(&bold_action).unwrap().active);
}

#[test]
fn default_toolbar_has_no_block_type_controls() {
    let editor = Editor::builder().build();
    let view = editor.toolbar().unwrap();
    assert!(view
        .buttons
        .iter()
        .all(|b| matches!(b.action, ToolbarAction::ToggleInlineStyle(_))));
}

#[test]
fn block_type_dispatch_works_even_without_a_button() {
    let mut editor = Editor::builder()
        .default_value(content::from_text("heading"))
        .build();
    editor.dispatch(ToolbarAction::ToggleBlockType(BlockType::HeaderOne));
    assert_eq!(
        editor.state().content().first_block().block_type(),
        &BlockType::HeaderOne
    );
}

#[test]
fn custom_renderer_replaces_the_default_bar() {
    let renderer = |props: &ToolbarProps<'_>| {
        let quote_active =
            props.editor_state.content().first_block().block_type() == &BlockType::Blockquote;
        ToolbarView {
            buttons: vec![
                ToolbarButton {
                    action: ToolbarAction::ToggleInlineStyle(InlineStyle::Bold),
                    label: "B".to_string(),
                    shortcut: Some("Ctrl+B".to_string()),
                    active: props
                        .editor_state
                        .current_inline_style()
                        .contains(&InlineStyle::Bold),
                },
                ToolbarButton {
                    action: ToolbarAction::ToggleBlockType(BlockType::Blockquote),
                    label: "Quote".to_string(),
                    shortcut: None,
                    active: quote_active,
                },
            ],
        }
    };

    let mut editor = Editor::builder()
        .default_value(content::from_text("quote me"))
        .toolbar_renderer(renderer)
        .build();

    let view = editor.toolbar().unwrap();
    assert_eq!(view.buttons.len(), 2);
    assert_eq!(view.buttons[1].label, "Quote");

    // The custom block-type button drives the same dispatch path.
    editor.dispatch(view.buttons[1].action.clone());
    let view = editor.toolbar().unwrap();
    assert!(view.buttons[1].active);
}

#[test]
fn hidden_toolbar_renders_nothing_but_dispatch_still_works() {
    let mut editor = Editor::builder().toolbar_visible(false).build();
    assert!(editor.toolbar().is_none());
    editor.dispatch(ToolbarAction::ToggleInlineStyle(InlineStyle::Italic));
    editor.type_text("i");
    assert!(editor
        .state()
        .content()
        .first_block()
        .range_has_style(0, 1, &InlineStyle::Italic));
}
