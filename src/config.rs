use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Максимальный размер поверхности по любой оси
pub const MAX_SURFACE_DIMENSION: u32 = 16384;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Индекс дисплея, чей текущий режим задаёт размер поверхности
    pub index: i32,
    /// 0 = ширина текущего дисплея
    pub width: u32,
    /// 0 = высота текущего дисплея
    pub height: u32,
    pub title: String,
    pub fullscreen: bool,
    pub hide_cursor: bool,
    pub vsync: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub variant: String,
    pub top_left: Option<[u8; 3]>,
    pub top_right: Option<[u8; 3]>,
    pub bottom_left: Option<[u8; 3]>,
    pub bottom_right: Option<[u8; 3]>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
            filter: String::new(),
        }
    }
}

impl LoggingConfig {
    /// Директива EnvFilter: общий уровень плюс необязательные уточнения по target.
    /// Уровень не дублируется в `quads=...`, иначе он перекрыл бы logging.level.
    pub fn directive(&self) -> String {
        let filter = self.filter.trim();
        if filter.is_empty() {
            self.level.clone()
        } else {
            format!("{},{}", self.level, filter)
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            index: 0,
            width: 0,
            height: 0,
            title: "4-Quadrant Clicker".to_string(),
            fullscreen: true,
            hide_cursor: true,
            vsync: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        // Отсутствующий файл не ошибка: остаются значения по умолчанию
        let figment = Figment::new()
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("QUADS_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "pretty" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        // Валидация настроек дисплея
        if self.display.index < 0 {
            anyhow::bail!("display.index не может быть отрицательным: {}", self.display.index);
        }

        if self.display.width > MAX_SURFACE_DIMENSION || self.display.height > MAX_SURFACE_DIMENSION {
            anyhow::bail!(
                "Размер поверхности {}x{} превышает максимум {}",
                self.display.width,
                self.display.height,
                MAX_SURFACE_DIMENSION
            );
        }

        if self.display.title.trim().is_empty() {
            anyhow::bail!("display.title не может быть пустым");
        }

        // Валидация палитры
        match self.palette.variant.as_str() {
            "classic" | "green" => {}
            _ => anyhow::bail!("Неверный вариант палитры: {}", self.palette.variant),
        }

        Ok(())
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            variant: "classic".to_string(),
            top_left: None,
            top_right: None,
            bottom_left: None,
            bottom_right: None,
        }
    }
}
