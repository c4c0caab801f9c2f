use std::collections::VecDeque;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::geometry::{Edges, Position};
use super::palette::Color;
use super::shape::Shape;

/// Places the items a snake eats and reports where they are.
pub trait Tracker: Send {
    /// Is there an item in the cell `position` falls in
    fn at(&self, position: Position) -> bool;

    /// Move the item somewhere not covered by `body`
    fn reset(&mut self, body: &VecDeque<Position>);

    fn paint(&self) -> Vec<Shape>;
}

/// A tracker with nothing to eat.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracker;

impl Tracker for NoopTracker {
    fn at(&self, _position: Position) -> bool {
        false
    }

    fn reset(&mut self, _body: &VecDeque<Position>) {}

    fn paint(&self) -> Vec<Shape> {
        Vec::new()
    }
}

/// Upper bound on placement attempts per cell on the board
const ATTEMPTS_PER_CELL: usize = 16;

/// Keeps a single item on the board, moved to a random free cell each
/// time it is eaten.
pub struct SingleTracker {
    rng: StdRng,
    location: Position,
    drawing: Vec<Shape>,
    edges: Edges,
    cell_size: f64,
    buffer: f64,
    color: Color,
}

impl SingleTracker {
    pub fn new(edges: Edges, cell_size: f64, buffer: f64, color: Color) -> Self {
        Self::with_rng(StdRng::from_entropy(), edges, cell_size, buffer, color)
    }

    /// Tracker with a reproducible placement sequence
    pub fn with_seed(seed: u64, edges: Edges, cell_size: f64, buffer: f64, color: Color) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), edges, cell_size, buffer, color)
    }

    fn with_rng(rng: StdRng, edges: Edges, cell_size: f64, buffer: f64, color: Color) -> Self {
        let mut tracker = Self {
            rng,
            location: Position::default(),
            drawing: Vec::new(),
            edges: edges.normalized(),
            cell_size,
            buffer,
            color,
        };
        tracker.reset(&VecDeque::new());
        tracker
    }

    pub fn location(&self) -> Position {
        self.location
    }

    fn random_cell(&mut self) -> Position {
        let columns = self.edges.cell_columns();
        let rows = self.edges.cell_rows();
        let x = if columns.is_empty() {
            columns.start
        } else {
            self.rng.gen_range(columns)
        };
        let y = if rows.is_empty() {
            rows.start
        } else {
            self.rng.gen_range(rows)
        };
        Position::new(x as f64, y as f64)
    }

    fn find_new_location(&mut self, body: &VecDeque<Position>) -> Option<Position> {
        let cells = self.edges.cell_columns().count() * self.edges.cell_rows().count();
        let attempts = cells.max(1) * ATTEMPTS_PER_CELL;

        (0..attempts)
            .map(|_| self.random_cell())
            .find(|candidate| !body.iter().any(|segment| segment.cell() == candidate.cell()))
    }

    fn update_drawing(&mut self) {
        self.drawing = vec![Shape::cell(
            self.location,
            self.cell_size,
            self.buffer,
            self.color,
        )];
    }
}

impl Tracker for SingleTracker {
    fn at(&self, position: Position) -> bool {
        position.cell() == self.location.cell()
    }

    fn reset(&mut self, body: &VecDeque<Position>) {
        match self.find_new_location(body) {
            Some(location) => self.location = location,
            None => warn!("no free cell found for the next item, leaving it in place"),
        }
        self.update_drawing();
    }

    fn paint(&self) -> Vec<Shape> {
        self.drawing.clone()
    }
}
