use super::Quadrant;
use std::fmt;

/// Размер поверхности рисования в пикселях
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> u32 {
        self.width / 2
    }

    pub fn half_height(&self) -> u32 {
        self.height / 2
    }
}

impl fmt::Display for SurfaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl QuadRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[cfg(test)]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[cfg(test)]
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

impl fmt::Display for QuadRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.x, self.y, self.width, self.height)
    }
}

/// Прямоугольник квадранта. Остаток от деления пополам уходит
/// правой и нижней половинам.
pub fn quadrant_rect(quadrant: Quadrant, size: SurfaceSize) -> QuadRect {
    let half_w = size.half_width();
    let half_h = size.half_height();

    let (x, width) = if quadrant.is_right() {
        (half_w, size.width - half_w)
    } else {
        (0, half_w)
    };
    let (y, height) = if quadrant.is_bottom() {
        (half_h, size.height - half_h)
    } else {
        (0, half_h)
    };

    QuadRect::new(x, y, width, height)
}

/// Разбиение поверхности на четыре квадранта в порядке Q1..Q4
pub fn partition(size: SurfaceSize) -> [(Quadrant, QuadRect); 4] {
    Quadrant::ALL.map(|q| (q, quadrant_rect(q, size)))
}
