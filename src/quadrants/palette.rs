use super::Quadrant;
use crate::config::PaletteConfig;
use anyhow::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Цвет активного квадранта. Неизменяема на всё время работы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantColorMap {
    colors: [Rgb; 4],
}

impl QuadrantColorMap {
    /// Красный / белый / синий / зелёный
    pub fn classic() -> Self {
        Self {
            colors: [Rgb::RED, Rgb::WHITE, Rgb::BLUE, Rgb::GREEN],
        }
    }

    pub fn all_green() -> Self {
        Self {
            colors: [Rgb::GREEN; 4],
        }
    }

    pub fn with_color(mut self, quadrant: Quadrant, color: Rgb) -> Self {
        self.colors[quadrant.index()] = color;
        self
    }

    pub fn color_for(&self, quadrant: Quadrant) -> Rgb {
        self.colors[quadrant.index()]
    }

    pub fn from_config(config: &PaletteConfig) -> Result<Self> {
        let base = match config.variant.as_str() {
            "classic" => Self::classic(),
            "green" => Self::all_green(),
            other => anyhow::bail!("Неверный вариант палитры: {}", other),
        };

        let overrides = [
            (Quadrant::TopLeft, config.top_left),
            (Quadrant::TopRight, config.top_right),
            (Quadrant::BottomLeft, config.bottom_left),
            (Quadrant::BottomRight, config.bottom_right),
        ];

        Ok(overrides
            .into_iter()
            .fold(base, |map, (quadrant, color)| match color {
                Some(rgb) => map.with_color(quadrant, rgb.into()),
                None => map,
            }))
    }
}

impl fmt::Display for QuadrantColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors: Vec<String> = Quadrant::ALL
            .iter()
            .map(|q| format!("Q{}={}", q.number(), self.color_for(*q)))
            .collect();
        write!(f, "{}", colors.join(" "))
    }
}
