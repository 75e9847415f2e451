use crate::quadrants::layout::partition;
use crate::quadrants::{Quadrant, QuadRect, QuadrantColorMap, QuadrantState, Rgb, SurfaceSize};
use std::fmt;

/// Заливка одного квадранта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fill {
    pub quadrant: Quadrant,
    pub rect: QuadRect,
    pub color: Rgb,
}

/// Полное описание кадра: фон и четыре заливки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub size: SurfaceSize,
    pub background: Rgb,
    pub fills: [Fill; 4],
}

impl Frame {
    /// Чистая функция состояния, палитры и размера поверхности
    pub fn compose(state: &QuadrantState, palette: &QuadrantColorMap, size: SurfaceSize) -> Self {
        let fills = partition(size).map(|(quadrant, rect)| Fill {
            quadrant,
            rect,
            color: if state.is_active(quadrant) {
                palette.color_for(quadrant)
            } else {
                Rgb::BLACK
            },
        });

        Self {
            size,
            background: Rgb::BLACK,
            fills,
        }
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.fills.iter().all(|fill| fill.color == self.background)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bg={}", self.size, self.background)?;
        for fill in &self.fills {
            write!(f, " Q{}{}={}", fill.quadrant.number(), fill.rect, fill.color)?;
        }
        Ok(())
    }
}
