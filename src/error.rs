use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadError {
    #[error("Ошибка инициализации SDL: {0}")]
    Init(String),

    #[error("Не удалось получить текущий режим дисплея: {0}")]
    DisplayQuery(String),

    #[error("Не удалось создать окно: {0}")]
    WindowCreation(String),

    #[error("Не удалось создать рендерер: {0}")]
    RendererCreation(String),

    #[error("Ошибка отрисовки: {0}")]
    Render(String),

    #[error("Неизвестная клавиша: {0}")]
    InvalidKey(String),

    #[error("Платформа недоступна: {0}")]
    Unavailable(String),
}

impl QuadError {
    /// Ошибки инициализации фатальны, ошибки кадра - нет
    pub fn is_fatal(&self) -> bool {
        !matches!(self, QuadError::Render(_))
    }
}

pub type Result<T> = std::result::Result<T, QuadError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! quad_error {
    (init, $($arg:tt)*) => {
        $crate::error::QuadError::Init(format!($($arg)*))
    };
    (display_query, $($arg:tt)*) => {
        $crate::error::QuadError::DisplayQuery(format!($($arg)*))
    };
    (window, $($arg:tt)*) => {
        $crate::error::QuadError::WindowCreation(format!($($arg)*))
    };
    (renderer, $($arg:tt)*) => {
        $crate::error::QuadError::RendererCreation(format!($($arg)*))
    };
    (render, $($arg:tt)*) => {
        $crate::error::QuadError::Render(format!($($arg)*))
    };
    (invalid_key, $($arg:tt)*) => {
        $crate::error::QuadError::InvalidKey(format!($($arg)*))
    };
    (unavailable, $($arg:tt)*) => {
        $crate::error::QuadError::Unavailable(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_error_messages_carry_platform_string() {
        let err = quad_error!(window, "SDL_CreateWindow: {}", "No available video device");
        assert_eq!(
            err.to_string(),
            "Не удалось создать окно: SDL_CreateWindow: No available video device"
        );
    }

    #[test]
    fn test_only_render_errors_are_non_fatal() {
        assert!(!quad_error!(render, "fill_rect").is_fatal());
        assert!(quad_error!(init, "SDL_Init").is_fatal());
        assert!(quad_error!(display_query, "mode").is_fatal());
        assert!(quad_error!(renderer, "vsync").is_fatal());
    }
}
