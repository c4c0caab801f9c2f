use super::geometry::Position;
use super::palette::Color;

/// A point in rendering space (board position scaled by cell size and
/// shifted by the buffer offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A filled, axis-aligned rectangle ready to be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub min: Point,
    pub max: Point,
    pub color: Color,
}

impl Shape {
    /// The square a board position occupies, mapped into rendering space
    pub fn cell(position: Position, cell_size: f64, buffer: f64, color: Color) -> Self {
        let x = buffer + position.x * cell_size;
        let y = buffer + position.y * cell_size;
        Self {
            min: Point { x, y },
            max: Point {
                x: x + cell_size,
                y: y + cell_size,
            },
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_mapping() {
        let shape = Shape::cell(Position::new(2.0, 3.5), 10.0, 4.0, Color::RED);
        assert_eq!(shape.min, Point { x: 24.0, y: 39.0 });
        assert_eq!(shape.max, Point { x: 34.0, y: 49.0 });
        assert_eq!(shape.color, Color::RED);
    }
}
