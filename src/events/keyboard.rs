use std::fmt;

/// Клавиша в платформенно-независимом виде
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
    /// Цифра основного ряда или цифрового блока
    Digit { value: u8, keypad: bool },
    /// Любая другая клавиша (сырой код платформы)
    Other(i32),
}

impl Key {
    pub fn digit(value: u8) -> Self {
        Self::Digit { value, keypad: false }
    }

    pub fn keypad(value: u8) -> Self {
        Self::Digit { value, keypad: true }
    }

    /// Значение цифры независимо от того, откуда она нажата
    pub fn digit_value(&self) -> Option<u8> {
        match self {
            Key::Digit { value, .. } => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => write!(f, "escape"),
            Key::Space => write!(f, "space"),
            Key::Digit { value, keypad: false } => write!(f, "{}", value),
            Key::Digit { value, keypad: true } => write!(f, "kp{}", value),
            Key::Other(code) => write!(f, "KEY_{}", code),
        }
    }
}

/// Событие ввода, которое интересует цикл управления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Сигнал завершения от оконной системы
    Quit,
    KeyDown(Key),
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Quit => write!(f, "quit"),
            InputEvent::KeyDown(key) => write!(f, "keydown({})", key),
        }
    }
}
