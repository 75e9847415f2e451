use crate::config::{Config, DisplayConfig};
use crate::error::Result;
use crate::events::InputEvent;
use crate::quad_error;
use crate::quadrants::SurfaceSize;
use crate::services::frame::Frame;
use smallvec::SmallVec;

/// Пачка событий за одну итерацию цикла (обычно 0-2 события)
pub type EventBatch = SmallVec<[InputEvent; 8]>;

/// Размер поверхности dry-run, если в конфигурации не задан явный
pub const DRY_RUN_SURFACE: SurfaceSize = SurfaceSize {
    width: 1920,
    height: 1080,
};

/// Trait for drawing surfaces that can run in different modes
pub trait DisplayTrait {
    /// Human-readable backend name for logs
    fn name(&self) -> &'static str;

    /// Size of the surface, fixed for the whole run
    fn surface_size(&self) -> SurfaceSize;

    /// Drain all pending events without blocking
    fn poll_events(&mut self) -> EventBatch;

    /// Clear, fill the four quadrants and present. May block until vsync.
    fn draw_frame(&mut self, frame: &Frame) -> Result<()>;
}

/// Factory function to create an appropriate display based on the dry_run flag
pub fn create_display(
    config: &Config,
    dry_run: bool,
    script: Vec<InputEvent>,
) -> Result<Box<dyn DisplayTrait>> {
    if dry_run {
        let size = resolve_surface_size(
            &config.display,
            DRY_RUN_SURFACE.width as i32,
            DRY_RUN_SURFACE.height as i32,
        )?;
        return Ok(Box::new(super::dry_run::DryRunDisplay::new(size, script)));
    }

    #[cfg(feature = "sdl")]
    {
        Ok(Box::new(super::sdl_display::SdlDisplay::new(&config.display)?))
    }

    #[cfg(not(feature = "sdl"))]
    {
        Err(quad_error!(
            unavailable,
            "сборка без feature \"sdl\", доступен только --dry-run"
        ))
    }
}

/// Итоговый размер поверхности: явный размер по оси или размер дисплея
pub fn resolve_surface_size(
    config: &DisplayConfig,
    display_width: i32,
    display_height: i32,
) -> Result<SurfaceSize> {
    let width = pick_dimension(config.width, display_width, "ширина")?;
    let height = pick_dimension(config.height, display_height, "высота")?;
    Ok(SurfaceSize::new(width, height))
}

fn pick_dimension(configured: u32, reported: i32, axis: &str) -> Result<u32> {
    if configured > 0 {
        return Ok(configured);
    }
    u32::try_from(reported)
        .ok()
        .filter(|value| *value > 0)
        .ok_or_else(|| quad_error!(display_query, "дисплей сообщил некорректную {}: {}", axis, reported))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadError;

    #[test]
    fn test_display_size_used_without_override() {
        let config = DisplayConfig::default();
        let size = resolve_surface_size(&config, 2560, 1440).unwrap();
        assert_eq!(size, SurfaceSize::new(2560, 1440));
    }

    #[test]
    fn test_override_is_applied_per_axis() {
        let config = DisplayConfig {
            width: 800,
            ..DisplayConfig::default()
        };
        let size = resolve_surface_size(&config, 2560, 1440).unwrap();
        assert_eq!(size, SurfaceSize::new(800, 1440));
    }

    #[test]
    fn test_bogus_display_mode_is_an_error() {
        let config = DisplayConfig::default();
        let err = resolve_surface_size(&config, 0, 1080).unwrap_err();
        assert!(matches!(err, QuadError::DisplayQuery(_)));

        // Явный размер делает ответ дисплея неважным
        let config = DisplayConfig {
            width: 640,
            height: 480,
            ..DisplayConfig::default()
        };
        assert_eq!(
            resolve_surface_size(&config, -1, -1).unwrap(),
            SurfaceSize::new(640, 480)
        );
    }

    #[test]
    fn test_dry_run_factory_uses_default_surface() {
        let config = Config::default();
        let display = create_display(&config, true, Vec::new()).unwrap();

        assert_eq!(display.name(), "dry-run");
        assert_eq!(display.surface_size(), DRY_RUN_SURFACE);
    }
}
