use crate::events::{InputEvent, Key};
use crate::quadrants::Quadrant;

/// Что событие означает для контроллера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Terminate,
    ResetAll,
    Activate(Quadrant),
}

impl Command {
    /// Привязки: Esc/закрытие окна - выход, пробел - сброс,
    /// 1-4 (основной ряд или цифровой блок) - включить квадрант
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        match event {
            InputEvent::Quit => Some(Command::Terminate),
            InputEvent::KeyDown(Key::Escape) => Some(Command::Terminate),
            InputEvent::KeyDown(Key::Space) => Some(Command::ResetAll),
            InputEvent::KeyDown(key) => key
                .digit_value()
                .and_then(Quadrant::from_number)
                .map(Command::Activate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_from_both_rows_activate() {
        for quadrant in Quadrant::ALL {
            let n = quadrant.number();
            assert_eq!(
                Command::from_event(&InputEvent::KeyDown(Key::digit(n))),
                Some(Command::Activate(quadrant))
            );
            assert_eq!(
                Command::from_event(&InputEvent::KeyDown(Key::keypad(n))),
                Some(Command::Activate(quadrant))
            );
        }
    }

    #[test]
    fn test_control_bindings() {
        assert_eq!(Command::from_event(&InputEvent::Quit), Some(Command::Terminate));
        assert_eq!(
            Command::from_event(&InputEvent::KeyDown(Key::Escape)),
            Some(Command::Terminate)
        );
        assert_eq!(
            Command::from_event(&InputEvent::KeyDown(Key::Space)),
            Some(Command::ResetAll)
        );
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(Command::from_event(&InputEvent::KeyDown(Key::digit(0))), None);
        assert_eq!(Command::from_event(&InputEvent::KeyDown(Key::keypad(5))), None);
        assert_eq!(Command::from_event(&InputEvent::KeyDown(Key::Other(97))), None);
    }
}
