use crate::error::Result;
use crate::events::{InputEvent, Key};
use crate::quad_error;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Маппинг текстовых имён клавиш в события (для сценариев dry-run)
pub struct KeyNameToKey;

// Статическая карта имён
static KEY_NAME_TO_EVENT: Lazy<HashMap<&'static str, InputEvent>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Цифровые клавиши (верхний ряд и цифровой блок)
    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    const KEYPAD: [&str; 10] = ["kp0", "kp1", "kp2", "kp3", "kp4", "kp5", "kp6", "kp7", "kp8", "kp9"];
    for value in 0..10u8 {
        map.insert(DIGITS[value as usize], InputEvent::KeyDown(Key::digit(value)));
        map.insert(KEYPAD[value as usize], InputEvent::KeyDown(Key::keypad(value)));
    }

    // Специальные клавиши
    map.insert("space", InputEvent::KeyDown(Key::Space));
    map.insert("escape", InputEvent::KeyDown(Key::Escape));
    map.insert("esc", InputEvent::KeyDown(Key::Escape));

    // Сигнал завершения от оконной системы
    map.insert("quit", InputEvent::Quit);

    map
});

impl KeyNameToKey {
    /// Получить событие по имени клавиши (регистронезависимо)
    pub fn lookup(name: &str) -> Option<InputEvent> {
        KEY_NAME_TO_EVENT
            .get(name.trim().to_lowercase().as_str())
            .copied()
    }

    /// Разобрать сценарий вида "1, 2 space,3,esc"
    pub fn parse_script(script: &str) -> Result<Vec<InputEvent>> {
        script
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .map(|name| {
                Self::lookup(name).ok_or_else(|| quad_error!(invalid_key, "'{}' в сценарии", name))
            })
            .collect()
    }
}
