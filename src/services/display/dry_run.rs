use crate::error::Result;
use crate::events::InputEvent;
use crate::quadrants::SurfaceSize;
use crate::services::frame::Frame;
use crate::trace_if_enabled;
use smallvec::smallvec;
use std::collections::VecDeque;
use tracing::{debug, info};

use super::r#trait::{DisplayTrait, EventBatch};

/// Безоконный дисплей: события берутся из сценария, кадры только логируются
pub struct DryRunDisplay {
    size: SurfaceSize,
    script: VecDeque<InputEvent>,
    last_frame: Option<Frame>,
    frames_drawn: u64,
}

impl DryRunDisplay {
    pub fn new(size: SurfaceSize, script: Vec<InputEvent>) -> Self {
        info!(
            "Инициализация DryRunDisplay {} ({} событий в сценарии)",
            size,
            script.len()
        );
        Self {
            size,
            script: script.into(),
            last_frame: None,
            frames_drawn: 0,
        }
    }

    #[cfg(test)]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    #[cfg(test)]
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl DisplayTrait for DryRunDisplay {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    // Одно событие сценария на кадр, после сценария эмулируем закрытие окна
    fn poll_events(&mut self) -> EventBatch {
        match self.script.pop_front() {
            Some(event) => {
                debug!("Dry-run: эмулируем событие {}", event);
                smallvec![event]
            }
            None => {
                debug!("Dry-run: сценарий исчерпан, эмулируем закрытие окна");
                smallvec![InputEvent::Quit]
            }
        }
    }

    fn draw_frame(&mut self, frame: &Frame) -> Result<()> {
        self.frames_drawn += 1;
        trace_if_enabled!("Dry-run кадр #{}: {}", self.frames_drawn, frame);

        if self.last_frame.as_ref() != Some(frame) {
            debug!("Dry-run: кадр изменился: {}", frame);
        }
        self.last_frame = Some(*frame);

        Ok(())
    }
}

impl Drop for DryRunDisplay {
    fn drop(&mut self) {
        info!("DryRunDisplay закрыт, отрисовано кадров: {}", self.frames_drawn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Key;
    use crate::quadrants::{QuadrantColorMap, QuadrantState};

    #[test]
    fn test_script_is_replayed_one_event_per_poll() {
        let script = vec![
            InputEvent::KeyDown(Key::digit(1)),
            InputEvent::KeyDown(Key::Space),
        ];
        let mut display = DryRunDisplay::new(SurfaceSize::new(10, 10), script);

        assert_eq!(display.poll_events().as_slice(), &[InputEvent::KeyDown(Key::digit(1))]);
        assert_eq!(display.poll_events().as_slice(), &[InputEvent::KeyDown(Key::Space)]);
        assert_eq!(display.poll_events().as_slice(), &[InputEvent::Quit]);
        assert_eq!(display.poll_events().as_slice(), &[InputEvent::Quit]);
    }

    #[test]
    fn test_frames_are_recorded() {
        let mut display = DryRunDisplay::new(SurfaceSize::new(10, 10), Vec::new());
        let frame = Frame::compose(
            &QuadrantState::new(),
            &QuadrantColorMap::classic(),
            display.surface_size(),
        );

        display.draw_frame(&frame).unwrap();
        display.draw_frame(&frame).unwrap();

        assert_eq!(display.frames_drawn(), 2);
        assert_eq!(display.last_frame(), Some(&frame));
    }
}
