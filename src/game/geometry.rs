use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A position on the board, in grid-cell units.
///
/// A position names the lower-left corner of the cell-sized square it
/// occupies. Fractional values mean the square is part way between cells.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move position `distance` cells in a direction
    pub fn advanced(&self, direction: Direction, distance: f64) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }

    /// Snap both coordinates to the nearest whole cell
    pub fn rounded(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
        }
    }

    /// The corner of the cell this position falls in
    pub fn floored(&self) -> Self {
        Self {
            x: self.x.floor(),
            y: self.y.floor(),
        }
    }

    /// The whole cell this position falls in
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }

    /// True if both coordinates are within `epsilon` of each other
    pub fn approx_eq(&self, other: Position, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

/// Axis-aligned bounds of the board, in grid-cell units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Edges {
    /// Build edges, swapping sides given in the wrong order so that
    /// `left <= right` and `bottom <= top`.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left: left.min(right),
            right: left.max(right),
            bottom: bottom.min(top),
            top: bottom.max(top),
        }
    }

    /// Edges of a `width` x `height` board anchored at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    /// Returns the same edges with sides in order
    pub fn normalized(&self) -> Self {
        Self::new(self.left, self.right, self.bottom, self.top)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// True if at least one whole cell fits on each axis
    pub fn holds_a_cell(&self) -> bool {
        self.width() >= 1.0 && self.height() >= 1.0
    }

    /// The whole cell nearest the middle of the board
    pub fn center(&self) -> Position {
        Position::new(
            (self.left + self.width() / 2.0).floor(),
            (self.bottom + self.height() / 2.0).floor(),
        )
    }

    /// True if the whole square anchored at `position` lies on the board.
    ///
    /// The upper bounds keep a one-cell margin because a position is the
    /// lower-left corner of its square.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.left
            && position.x <= self.right - 1.0
            && position.y >= self.bottom
            && position.y <= self.top - 1.0
    }

    /// Range of whole-cell x coordinates that fit on the board
    pub fn cell_columns(&self) -> std::ops::Range<i64> {
        self.left.ceil() as i64..(self.right.floor() as i64)
    }

    /// Range of whole-cell y coordinates that fit on the board
    pub fn cell_rows(&self) -> std::ops::Range<i64> {
        self.bottom.ceil() as i64..(self.top.floor() as i64)
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::sized(20.0, 20.0)
    }
}
