use crate::config::DisplayConfig;
use crate::error::Result;
use crate::mappings::SdlToKey;
use crate::quad_error;
use crate::quadrants::{QuadRect, Rgb, SurfaceSize};
use crate::services::frame::Frame;
use sdl2::mouse::MouseUtil;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;
use sdl2::{EventPump, Sdl, VideoSubsystem};
use tracing::{debug, info, warn};

use super::r#trait::{resolve_surface_size, DisplayTrait, EventBatch};

/// Полноэкранное окно SDL2 с аппаратным рендерером.
///
/// Порядок полей задаёт порядок освобождения: рендерер и окно,
/// затем курсор, затем подсистема SDL.
pub struct SdlDisplay {
    canvas: WindowCanvas,
    cursor: Option<CursorGuard>,
    event_pump: EventPump,
    size: SurfaceSize,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl SdlDisplay {
    pub fn new(config: &DisplayConfig) -> Result<Self> {
        info!("Инициализация SdlDisplay");

        let sdl = sdl2::init().map_err(|e| quad_error!(init, "SDL_Init: {}", e))?;
        let video = sdl
            .video()
            .map_err(|e| quad_error!(init, "SDL_INIT_VIDEO: {}", e))?;

        // Без этого полноэкранное окно сворачивается и мигает при потере фокуса
        if !sdl2::hint::set("SDL_VIDEO_MINIMIZE_ON_FOCUS_LOSS", "0") {
            debug!("Подсказка SDL_VIDEO_MINIMIZE_ON_FOCUS_LOSS не принята");
        }

        let mode = video
            .current_display_mode(config.index)
            .map_err(|e| quad_error!(display_query, "SDL_GetCurrentDisplayMode: {}", e))?;
        info!(
            "Дисплей #{}: {}x{} @ {} Гц",
            config.index, mode.w, mode.h, mode.refresh_rate
        );

        let size = resolve_surface_size(config, mode.w, mode.h)?;

        let mut builder = video.window(&config.title, size.width, size.height);
        if config.fullscreen {
            builder.fullscreen_desktop();
        } else {
            builder.position_centered();
        }
        let window = builder
            .build()
            .map_err(|e| quad_error!(window, "SDL_CreateWindow: {}", e))?;

        let cursor = config.hide_cursor.then(|| CursorGuard::hide(sdl.mouse()));

        let mut canvas_builder = window.into_canvas().accelerated();
        if config.vsync {
            canvas_builder = canvas_builder.present_vsync();
        } else {
            warn!("vsync выключен - цикл отрисовки не будет ждать обновления экрана");
        }
        let canvas = canvas_builder
            .build()
            .map_err(|e| quad_error!(renderer, "SDL_CreateRenderer: {}", e))?;

        let event_pump = sdl
            .event_pump()
            .map_err(|e| quad_error!(init, "SDL event pump: {}", e))?;

        info!("Окно \"{}\" создано, поверхность {}", config.title, size);

        Ok(Self {
            canvas,
            cursor,
            event_pump,
            size,
            _video: video,
            _sdl: sdl,
        })
    }
}

impl DisplayTrait for SdlDisplay {
    fn name(&self) -> &'static str {
        "sdl2"
    }

    fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    fn poll_events(&mut self) -> EventBatch {
        self.event_pump
            .poll_iter()
            .filter_map(|event| SdlToKey::translate_event(&event))
            .collect()
    }

    fn draw_frame(&mut self, frame: &Frame) -> Result<()> {
        self.canvas.set_draw_color(to_color(frame.background));
        self.canvas.clear();

        let mut result = Ok(());
        for fill in &frame.fills {
            // SDL растягивает нулевой размер до 1 пикселя
            if fill.rect.is_empty() {
                continue;
            }
            self.canvas.set_draw_color(to_color(fill.color));
            if let Err(e) = self.canvas.fill_rect(to_rect(fill.rect)) {
                result = Err(quad_error!(render, "SDL_RenderFillRect {}: {}", fill.quadrant, e));
            }
        }

        // Блокируется до vsync
        self.canvas.present();
        result
    }
}

impl Drop for SdlDisplay {
    fn drop(&mut self) {
        info!(
            "Освобождение рендерера и окна{}",
            if self.cursor.is_some() { ", восстановление курсора" } else { "" }
        );
    }
}

/// Прячет курсор на время жизни, возвращает его в Drop
struct CursorGuard {
    mouse: MouseUtil,
}

impl CursorGuard {
    fn hide(mouse: MouseUtil) -> Self {
        mouse.show_cursor(false);
        Self { mouse }
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        self.mouse.show_cursor(true);
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::RGB(rgb.r, rgb.g, rgb.b)
}

// Размеры ограничены MAX_SURFACE_DIMENSION, в i32 помещаются
fn to_rect(rect: QuadRect) -> Rect {
    Rect::new(rect.x as i32, rect.y as i32, rect.width, rect.height)
}
