//! Квадранты экрана и их состояние активности.
//!
//! Модуль не знает ни о платформе, ни о клавишах: только четыре флага,
//! палитра и геометрия разбиения поверхности.

pub mod layout;
pub mod palette;

pub use layout::{QuadRect, SurfaceSize};
pub use palette::{QuadrantColorMap, Rgb};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Все квадранты в порядке Q1..Q4
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomLeft => 2,
            Quadrant::BottomRight => 3,
        }
    }

    /// Квадрант по номеру клавиши 1..=4
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=4 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn is_right(self) -> bool {
        matches!(self, Quadrant::TopRight | Quadrant::BottomRight)
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, Quadrant::BottomLeft | Quadrant::BottomRight)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        };
        write!(f, "Q{} ({})", self.number(), name)
    }
}

/// Флаги активности четырёх квадрантов. При старте все неактивны.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadrantState {
    active: [bool; 4],
}

impl QuadrantState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Только включает флаг, выключает его лишь `reset`
    pub fn activate(&mut self, quadrant: Quadrant) {
        self.active[quadrant.index()] = true;
    }

    pub fn reset(&mut self) {
        self.active = [false; 4];
    }

    pub fn is_active(&self, quadrant: Quadrant) -> bool {
        self.active[quadrant.index()]
    }

    pub fn active_quadrants(&self) -> impl Iterator<Item = Quadrant> + '_ {
        Quadrant::ALL.into_iter().filter(|q| self.is_active(*q))
    }

    pub fn is_all_inactive(&self) -> bool {
        !self.active.iter().any(|a| *a)
    }
}

impl fmt::Display for QuadrantState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: Vec<String> = Quadrant::ALL
            .iter()
            .map(|q| format!("Q{}={}", q.number(), if self.is_active(*q) { "on" } else { "off" }))
            .collect();
        write!(f, "[{}]", flags.join(" "))
    }
}
