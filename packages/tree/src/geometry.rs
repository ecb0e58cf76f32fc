use serde::{Deserialize, Serialize};

/// Point in page pixel space (or relative to a parent's origin)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn delta_to(self, other: Position) -> Position {
        Position::new(other.x - self.x, other.y - self.y)
    }
}

/// Axis-aligned bounding box as reported by the recognizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bbox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Bbox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.x0, self.y0)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Translate all four edges without resizing
    pub fn offset(&self, delta: Position) -> Bbox {
        Bbox {
            x0: self.x0 + delta.x,
            y0: self.y0 + delta.y,
            x1: self.x1 + delta.x,
            y1: self.y1 + delta.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_keeps_size() {
        let bbox = Bbox::new(10.0, 20.0, 110.0, 70.0);
        let moved = bbox.offset(Position::new(-5.0, 15.0));

        assert_eq!(moved, Bbox::new(5.0, 35.0, 105.0, 85.0));
        assert_eq!(moved.width(), bbox.width());
        assert_eq!(moved.height(), bbox.height());
    }

    #[test]
    fn test_delta_to() {
        let from = Position::new(3.0, 4.0);
        assert_eq!(from.delta_to(Position::new(10.0, 2.0)), Position::new(7.0, -2.0));
    }
}
