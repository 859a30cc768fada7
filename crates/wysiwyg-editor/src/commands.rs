//! Keyboard chord → command mapping.
//!
//! The editor's own chord table covers the three formatting shortcuts;
//! everything else falls through to the engine's default binding. The
//! [`Handled`] signal tells the host input layer whether to suppress its
//! default behavior for the event.

use wysiwyg_core::{default_key_binding, Key, KeyCommand, KeyEvent};

// ── Handled ───────────────────────────────────────────────────────────────

/// Whether the editor consumed an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Handled,
    NotHandled,
}

impl Handled {
    pub fn is_handled(&self) -> bool {
        matches!(self, Handled::Handled)
    }
}

// ── Chord table ───────────────────────────────────────────────────────────

/// Resolve a key event to a command.
///
/// With the command modifier held, `b`/`i`/`u` map to the fixed formatting
/// commands. Every other combination falls through to
/// [`default_key_binding`]; an unbound chord resolves to `None`.
pub fn key_binding(event: &KeyEvent) -> Option<KeyCommand> {
    if event.modifiers.command() && !event.modifiers.alt {
        if let Key::Char(c) = event.key {
            match c.to_ascii_lowercase() {
                'b' => return Some(KeyCommand::Bold),
                'i' => return Some(KeyCommand::Italic),
                'u' => return Some(KeyCommand::Underline),
                _ => {}
            }
        }
    }
    default_key_binding(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wysiwyg_core::Modifiers;

    #[test]
    fn command_chords_map_to_formatting_commands() {
        assert_eq!(key_binding(&KeyEvent::command('b')), Some(KeyCommand::Bold));
        assert_eq!(key_binding(&KeyEvent::command('i')), Some(KeyCommand::Italic));
        assert_eq!(key_binding(&KeyEvent::command('u')), Some(KeyCommand::Underline));
    }

    #[test]
    fn meta_counts_as_the_command_modifier() {
        let event = KeyEvent::char('b').with_modifiers(Modifiers::META);
        assert_eq!(key_binding(&event), Some(KeyCommand::Bold));
    }

    #[test]
    fn shifted_chord_still_resolves() {
        let event = KeyEvent::char('B').with_modifiers(Modifiers {
            ctrl: true,
            shift: true,
            ..Modifiers::NONE
        });
        assert_eq!(key_binding(&event), Some(KeyCommand::Bold));
    }

    #[test]
    fn unknown_chord_falls_through_to_default_binding() {
        // Ctrl+K is bound by neither table.
        assert_eq!(key_binding(&KeyEvent::command('k')), None);
        // Plain typing resolves through the engine default.
        assert_eq!(
            key_binding(&KeyEvent::char('b')),
            Some(KeyCommand::InsertChars("b".to_string()))
        );
    }
}
