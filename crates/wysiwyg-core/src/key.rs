//! Platform-independent key representation and engine key commands.
//!
//! Hosts translate their input layer (terminal, GUI toolkit, test driver)
//! into [`KeyEvent`]s; the engine only ever sees this representation.

use std::fmt;

// ── Key / Modifiers / KeyEvent ────────────────────────────────────────────

/// A platform-independent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character (already shifted: `'B'` for Shift+b).
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

/// Modifier flags for a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const META: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    /// Whether the platform command modifier is held (Ctrl on most
    /// platforms, Cmd on macOS — either one counts here).
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A single key press delivered to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        KeyEvent {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// A plain printable character press.
    pub fn char(c: char) -> Self {
        KeyEvent::new(Key::Char(c))
    }

    /// A character press with the command modifier held.
    pub fn command(c: char) -> Self {
        KeyEvent {
            key: Key::Char(c),
            modifiers: Modifiers::CTRL,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

// ── KeyCommand ────────────────────────────────────────────────────────────

/// A named command resolved from a key event.
///
/// The formatting commands (`Bold`, `Italic`, `Underline`) are produced by
/// the editor's own chord table; the rest come out of
/// [`default_key_binding`]. Unknown host-defined commands round-trip through
/// [`KeyCommand::Custom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Bold,
    Italic,
    Underline,
    Backspace,
    Delete,
    SplitBlock,
    /// Insert the given printable characters at the selection.
    InsertChars(String),
    /// A command this engine does not know.
    Custom(String),
}

impl KeyCommand {
    /// The wire name of this command, where one exists. `InsertChars` has no
    /// name of its own.
    pub fn name(&self) -> Option<&str> {
        match self {
            KeyCommand::Bold => Some("bold"),
            KeyCommand::Italic => Some("italic"),
            KeyCommand::Underline => Some("underline"),
            KeyCommand::Backspace => Some("backspace"),
            KeyCommand::Delete => Some("delete"),
            KeyCommand::SplitBlock => Some("split-block"),
            KeyCommand::InsertChars(_) => None,
            KeyCommand::Custom(name) => Some(name),
        }
    }

    /// Parse a wire name. Unknown names become [`KeyCommand::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "bold" => KeyCommand::Bold,
            "italic" => KeyCommand::Italic,
            "underline" => KeyCommand::Underline,
            "backspace" => KeyCommand::Backspace,
            "delete" => KeyCommand::Delete,
            "split-block" => KeyCommand::SplitBlock,
            other => KeyCommand::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for KeyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCommand::InsertChars(chars) => write!(f, "insert-chars({chars})"),
            other => f.write_str(other.name().unwrap_or("unknown")),
        }
    }
}

// ── Default binding ───────────────────────────────────────────────────────

/// The engine's fallback chord table: editing keys map to their commands,
/// plain printable input maps to [`KeyCommand::InsertChars`], everything
/// else is unbound.
pub fn default_key_binding(event: &KeyEvent) -> Option<KeyCommand> {
    if event.modifiers.ctrl || event.modifiers.meta || event.modifiers.alt {
        return None;
    }
    match event.key {
        Key::Backspace => Some(KeyCommand::Backspace),
        Key::Delete => Some(KeyCommand::Delete),
        Key::Enter => Some(KeyCommand::SplitBlock),
        Key::Char(c) => Some(KeyCommand::InsertChars(c.to_string())),
        _ => None,
    }
}
