// src/controllers/keyboard.rs
//
// Key events as seen by the input. Printable characters arrive
// separately through `InputController::insert_char`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Modifiers that turn Enter into a line break in multi-line mode.
    pub fn inserts_line_break(&self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    handled: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self::with_modifiers(key, Modifiers::NONE)
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            handled: false,
        }
    }

    /// Called by a caller-supplied key handler to skip the input's own
    /// handling of this event.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_break_modifiers() {
        assert!(!Modifiers::NONE.inserts_line_break());
        assert!(Modifiers::shift().inserts_line_break());
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        assert!(ctrl.inserts_line_break());
        let alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        assert!(!alt.inserts_line_break());
    }

    #[test]
    fn test_mark_handled() {
        let mut event = KeyEvent::new(Key::Enter);
        assert!(!event.is_handled());
        event.mark_handled();
        assert!(event.is_handled());
    }
}
