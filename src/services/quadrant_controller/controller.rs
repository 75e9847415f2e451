use crate::error::Result;
use crate::events::InputEvent;
use crate::quadrants::{QuadrantColorMap, QuadrantState, SurfaceSize};
use crate::services::display::DisplayTrait;
use crate::services::frame::Frame;
use crate::trace_if_enabled;
use tracing::{debug, info, warn};

use super::key_bindings::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Конечное состояние
    Terminating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_rendered: u64,
    pub final_state: QuadrantState,
}

/// Единственный владелец состояния квадрантов
pub struct QuadrantController {
    state: QuadrantState,
    palette: QuadrantColorMap,
    run_state: RunState,
    frames_rendered: u64,
}

impl QuadrantController {
    pub fn new(palette: QuadrantColorMap) -> Self {
        info!("Палитра: {}", palette);
        Self {
            state: QuadrantState::new(),
            palette,
            run_state: RunState::Running,
            frames_rendered: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &QuadrantState {
        &self.state
    }

    #[cfg(test)]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> RunState {
        if self.run_state == RunState::Terminating {
            return self.run_state;
        }

        match Command::from_event(event) {
            Some(Command::Terminate) => {
                info!("Получен сигнал завершения: {}", event);
                self.run_state = RunState::Terminating;
            }
            Some(Command::ResetAll) => {
                self.state.reset();
                debug!("Все квадранты сброшены");
            }
            Some(Command::Activate(quadrant)) => {
                self.state.activate(quadrant);
                debug!("Квадрант {} активен, состояние {}", quadrant, self.state);
            }
            None => {
                trace_if_enabled!("Событие {} не привязано, пропускаем", event);
            }
        }

        self.run_state
    }

    pub fn compose_frame(&self, size: SurfaceSize) -> Frame {
        Frame::compose(&self.state, &self.palette, size)
    }

    /// Основной цикл: опрос событий, обновление состояния, кадр.
    /// Единственная точка ожидания - `draw_frame` (vsync).
    pub fn run(&mut self, display: &mut dyn DisplayTrait) -> Result<RunSummary> {
        let size = display.surface_size();
        // Имя `display` внутри макросов tracing занято tracing::field::display
        let backend = display.name();
        info!("Цикл отрисовки запущен: дисплей {}, поверхность {}", backend, size);

        while self.run_state == RunState::Running {
            for event in display.poll_events() {
                if self.handle_event(&event) == RunState::Terminating {
                    break;
                }
            }

            if self.run_state == RunState::Terminating {
                break;
            }

            let frame = self.compose_frame(size);
            match display.draw_frame(&frame) {
                Ok(()) => {}
                Err(e) if !e.is_fatal() => {
                    warn!("Кадр #{} отрисован с ошибкой: {}", self.frames_rendered + 1, e);
                }
                Err(e) => return Err(e),
            }
            self.frames_rendered += 1;
        }

        info!("Цикл отрисовки завершён, кадров: {}", self.frames_rendered);

        Ok(RunSummary {
            frames_rendered: self.frames_rendered,
            final_state: self.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadError;
    use crate::events::Key;
    use crate::quadrants::{Quadrant, Rgb};
    use crate::services::display::{DryRunDisplay, EventBatch};
    use smallvec::smallvec;

    fn press(value: u8) -> InputEvent {
        InputEvent::KeyDown(Key::digit(value))
    }

    fn space() -> InputEvent {
        InputEvent::KeyDown(Key::Space)
    }

    #[test]
    fn test_space_resets_after_any_history() {
        let histories: Vec<Vec<InputEvent>> = vec![
            vec![],
            vec![press(1)],
            vec![press(1), press(2), press(3), press(4)],
            vec![InputEvent::KeyDown(Key::keypad(4)), space(), press(2)],
        ];

        for history in histories {
            let mut controller = QuadrantController::new(QuadrantColorMap::classic());
            for event in &history {
                controller.handle_event(event);
            }
            controller.handle_event(&space());
            assert!(controller.state().is_all_inactive(), "история {:?}", history);
        }
    }

    #[test]
    fn test_digit_sets_flag_regardless_of_prior_value() {
        let mut controller = QuadrantController::new(QuadrantColorMap::classic());
        controller.handle_event(&press(2));
        controller.handle_event(&press(2));
        controller.handle_event(&InputEvent::KeyDown(Key::keypad(2)));

        assert!(controller.state().is_active(Quadrant::TopRight));
        assert_eq!(controller.state().active_quadrants().count(), 1);
    }

    #[test]
    fn test_last_digit_after_space_wins() {
        let mut controller = QuadrantController::new(QuadrantColorMap::classic());
        for event in [press(1), press(2), space(), press(3)] {
            assert_eq!(controller.handle_event(&event), RunState::Running);
        }

        let active: Vec<Quadrant> = controller.state().active_quadrants().collect();
        assert_eq!(active, vec![Quadrant::BottomLeft]);
    }

    #[test]
    fn test_escape_and_quit_are_terminal() {
        let mut controller = QuadrantController::new(QuadrantColorMap::classic());
        assert_eq!(
            controller.handle_event(&InputEvent::KeyDown(Key::Escape)),
            RunState::Terminating
        );
        // Из конечного состояния выхода нет, события игнорируются
        assert_eq!(controller.handle_event(&press(1)), RunState::Terminating);
        assert!(controller.state().is_all_inactive());

        let mut controller = QuadrantController::new(QuadrantColorMap::classic());
        assert_eq!(controller.handle_event(&InputEvent::Quit), RunState::Terminating);
        assert_eq!(controller.run_state(), RunState::Terminating);
    }

    #[test]
    fn test_run_with_scripted_display() {
        let script = vec![press(1), press(2), space(), press(3)];
        let mut display = DryRunDisplay::new(SurfaceSize::new(1920, 1080), script);
        let mut controller = QuadrantController::new(QuadrantColorMap::classic());

        let summary = controller.run(&mut display).unwrap();

        assert_eq!(summary.frames_rendered, 4);
        assert_eq!(display.frames_drawn(), 4);
        let frame = display.last_frame().unwrap();
        assert_eq!(frame.fills[0].color, Rgb::BLACK);
        assert_eq!(frame.fills[1].color, Rgb::BLACK);
        assert_eq!(frame.fills[2].color, Rgb::BLUE);
        assert_eq!(frame.fills[3].color, Rgb::BLACK);
        assert_eq!(
            summary.final_state.active_quadrants().collect::<Vec<_>>(),
            vec![Quadrant::BottomLeft]
        );
    }

    #[test]
    fn test_escape_stops_loop_within_one_iteration() {
        let script = vec![press(4), InputEvent::KeyDown(Key::Escape), press(1), press(2)];
        let mut display = DryRunDisplay::new(SurfaceSize::new(8, 8), script);
        let mut controller = QuadrantController::new(QuadrantColorMap::all_green());

        let summary = controller.run(&mut display).unwrap();

        assert_eq!(summary.frames_rendered, 1);
        assert!(summary.final_state.is_active(Quadrant::BottomRight));
        assert!(!summary.final_state.is_active(Quadrant::TopLeft));
    }

    #[test]
    fn test_idle_frames_are_black() {
        let script = vec![InputEvent::KeyDown(Key::Other(97)); 3];
        let mut display = DryRunDisplay::new(SurfaceSize::new(640, 480), script);
        let mut controller = QuadrantController::new(QuadrantColorMap::classic());

        let summary = controller.run(&mut display).unwrap();

        assert_eq!(summary.frames_rendered, 3);
        assert!(display.last_frame().unwrap().is_blank());
    }

    /// Дисплей, у которого каждая отрисовка заканчивается заданной ошибкой
    struct FailingDisplay {
        polls: u32,
        fatal: bool,
    }

    impl DisplayTrait for FailingDisplay {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn surface_size(&self) -> SurfaceSize {
            SurfaceSize::new(2, 2)
        }

        fn poll_events(&mut self) -> EventBatch {
            self.polls += 1;
            if self.polls > 2 {
                smallvec![InputEvent::Quit]
            } else {
                EventBatch::new()
            }
        }

        fn draw_frame(&mut self, _frame: &Frame) -> Result<()> {
            if self.fatal {
                Err(QuadError::Unavailable("surface lost".to_string()))
            } else {
                Err(QuadError::Render("fill_rect".to_string()))
            }
        }
    }

    #[test]
    fn test_render_errors_do_not_stop_loop() {
        let mut display = FailingDisplay { polls: 0, fatal: false };
        let mut controller = QuadrantController::new(QuadrantColorMap::classic());

        let summary = controller.run(&mut display).unwrap();
        assert_eq!(summary.frames_rendered, 2);
    }

    #[test]
    fn test_fatal_display_errors_propagate() {
        let mut display = FailingDisplay { polls: 0, fatal: true };
        let mut controller = QuadrantController::new(QuadrantColorMap::classic());

        assert!(controller.run(&mut display).is_err());
    }
}
