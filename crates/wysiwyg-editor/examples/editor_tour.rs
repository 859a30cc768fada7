//! A tour of the editor component: uncontrolled and controlled modes, a
//! custom toolbar, and the simulated load/save loop.
//!
//! Run with `cargo run --example editor_tour`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::info;

use wysiwyg_editor::{
    content, BlockType, Editor, EditorState, FakeBackend, InlineStyle, KeyEvent, SelectionState,
    ToolbarAction, ToolbarButton, ToolbarProps, ToolbarView,
};

fn print_toolbar(editor: &Editor) {
    if let Some(view) = editor.toolbar() {
        let line: Vec<String> = view
            .buttons
            .iter()
            .map(|b| {
                if b.active {
                    format!("[{}]", b.label)
                } else {
                    format!(" {} ", b.label)
                }
            })
            .collect();
        info!(toolbar = %line.join(" "), "toolbar");
    }
}

fn basic_uncontrolled() {
    info!("— basic uncontrolled editor —");
    let mut editor = Editor::builder()
        .default_value(content::from_text("Hello"))
        .build();

    // Select the whole word and bold it from the keyboard.
    let key = editor.state().content().first_block().key().clone();
    editor.set_selection(SelectionState::range(key.clone(), 0, key, 5));
    editor.handle_key_event(&KeyEvent::command('b'));

    print_toolbar(&editor);
    info!(text = %editor.state().plain_text(), "content");
}

fn controlled_owner() {
    info!("— controlled editor, host owns the state —");
    let owned: Rc<RefCell<EditorState>> = Rc::new(RefCell::new(content::from_text("draft")));
    let sink = Rc::clone(&owned);

    let mut editor = Editor::builder()
        .value(owned.borrow().clone())
        .on_change(move |state| *sink.borrow_mut() = state)
        .build();

    editor.type_text("> ");
    // The host decides when its value flows back in.
    editor.sync_value(owned.borrow().clone());
    info!(text = %editor.state().plain_text(), "host-owned content");
}

fn custom_toolbar() {
    info!("— custom toolbar renderer —");
    let renderer = |props: &ToolbarProps<'_>| ToolbarView {
        buttons: vec![
            ToolbarButton {
                action: ToolbarAction::ToggleInlineStyle(InlineStyle::Bold),
                label: "strong".to_string(),
                shortcut: Some("Ctrl+B".to_string()),
                active: props
                    .editor_state
                    .current_inline_style()
                    .contains(&InlineStyle::Bold),
            },
            ToolbarButton {
                action: ToolbarAction::ToggleBlockType(BlockType::HeaderOne),
                label: "H1".to_string(),
                shortcut: None,
                active: props.editor_state.content().first_block().block_type()
                    == &BlockType::HeaderOne,
            },
        ],
    };

    let mut editor = Editor::builder()
        .default_value(content::from_text("Title"))
        .toolbar_renderer(renderer)
        .build();
    editor.dispatch(ToolbarAction::ToggleBlockType(BlockType::HeaderOne));
    print_toolbar(&editor);
}

async fn load_and_save() {
    info!("— simulated load/save —");
    let backend = FakeBackend::new(Duration::from_millis(300), Duration::from_millis(200));

    let raw = match backend.load_latest().await {
        Ok(raw) => raw,
        Err(err) => {
            info!(%err, "load failed");
            return;
        }
    };
    let mut editor = Editor::builder().default_value(content::from_raw(&raw)).build();
    info!(text = %editor.state().plain_text(), "loaded");

    editor.type_text("PS: edited after load. ");
    match backend.save_latest(&content::to_raw(editor.state())).await {
        Ok(()) => info!("saved"),
        Err(err) => info!(%err, "save failed"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    basic_uncontrolled();
    controlled_owner();
    custom_toolbar();
    load_and_save().await;
}
