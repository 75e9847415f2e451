use crate::events::{InputEvent, Key};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Преобразование событий SDL2 в платформенно-независимые события
/// Отвечает только за трансляцию типов, решения принимает контроллер
pub struct SdlToKey;

impl SdlToKey {
    /// Получить клавишу из sdl2::keyboard::Keycode
    pub fn translate(keycode: Keycode) -> Key {
        match keycode {
            Keycode::Escape => Key::Escape,
            Keycode::Space => Key::Space,

            // Цифровые клавиши (основной ряд)
            Keycode::Num0 => Key::digit(0),
            Keycode::Num1 => Key::digit(1),
            Keycode::Num2 => Key::digit(2),
            Keycode::Num3 => Key::digit(3),
            Keycode::Num4 => Key::digit(4),
            Keycode::Num5 => Key::digit(5),
            Keycode::Num6 => Key::digit(6),
            Keycode::Num7 => Key::digit(7),
            Keycode::Num8 => Key::digit(8),
            Keycode::Num9 => Key::digit(9),

            // Цифровой блок
            Keycode::Kp0 => Key::keypad(0),
            Keycode::Kp1 => Key::keypad(1),
            Keycode::Kp2 => Key::keypad(2),
            Keycode::Kp3 => Key::keypad(3),
            Keycode::Kp4 => Key::keypad(4),
            Keycode::Kp5 => Key::keypad(5),
            Keycode::Kp6 => Key::keypad(6),
            Keycode::Kp7 => Key::keypad(7),
            Keycode::Kp8 => Key::keypad(8),
            Keycode::Kp9 => Key::keypad(9),

            other => Key::Other(other as i32),
        }
    }

    /// Событие SDL, интересное циклу, или None
    pub fn translate_event(event: &Event) -> Option<InputEvent> {
        match event {
            Event::Quit { .. } => Some(InputEvent::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => Some(InputEvent::KeyDown(Self::translate(*keycode))),
            _ => None,
        }
    }
}
