/// Logical address of a cell, as tagged by the rendering layer.
///
/// This is the descriptor carried by the two inbound notifications
/// (cell keydown and cell focus-received).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub row_key: String,
    pub column_key: String,
}

impl CellRef {
    pub fn new(row_key: impl Into<String>, column_key: impl Into<String>) -> Self {
        Self {
            row_key: row_key.into(),
            column_key: column_key.into(),
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Keyboard input delivered to a cell.
///
/// Carries the handled flag: marking an input handled is the sole
/// cancellation mechanism, and every handler checks it before mutating
/// any state so re-entrant dispatch stays idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub modifiers: Modifiers,
    handled: bool,
}

impl KeyInput {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers,
            handled: false,
        }
    }

    /// Whether an upstream handler already consumed this input.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark the input consumed so default handling (scrolling etc.)
    /// is suppressed. Handled keys are consumed exactly once.
    pub fn consume(&mut self) {
        self.handled = true;
    }
}

/// Focus-received notification state, same handled contract as [`KeyInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusInput {
    handled: bool,
}

impl FocusInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self { handled: true }
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn consume(&mut self) {
        self.handled = true;
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Char('\0'), // Placeholder for unsupported keys
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::KeyEvent> for KeyInput {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        KeyInput::new(event.code.into(), event.modifiers.into())
    }
}
