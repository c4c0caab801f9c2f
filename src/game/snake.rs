use std::collections::VecDeque;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::config::SnakeConfig;
use super::direction::Direction;
use super::geometry::Position;
use super::shape::Shape;
use super::tracker::{NoopTracker, Tracker};

/// How close two positions must be, in cells, to count as the same spot
/// when testing the head against the body.
pub const COLLISION_EPSILON: f64 = 0.3;

/// Segments nearest the head that are never tested for self-collision
pub const MIN_HEAD_EXCLUSION: usize = 3;

/// Identifies a snake among the players of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnakeId(pub u8);

/// Type of collision that ended a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// What a single tick did to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No direction yet, nothing moved
    Idle,
    /// The head advanced; `ate` is set when it reached an item
    Moved { ate: bool },
    /// The life ended and the snake was reset
    Died(CollisionType),
    /// The snake was stopped and ignores ticks
    Stopped,
}

/// A snake moving continuously over the board.
///
/// The body holds positions from head (front) to tail (back) and is never
/// empty. Each tick pushes a new head and usually drops the tail; while the
/// growth counter is positive the tail is kept instead, so the body lengthens
/// one segment per tick.
pub struct Snake {
    id: SnakeId,
    config: SnakeConfig,
    body: VecDeque<Position>,
    curr_direction: Option<Direction>,
    next_direction: Option<Direction>,
    growth: u32,
    score: u32,
    tracker: Box<dyn Tracker>,
    /// Cell of the corner where the last turn committed
    turned_at: Option<(i64, i64)>,
    stopped: bool,
}

impl Snake {
    /// A snake with nothing to eat
    pub fn new(id: SnakeId, config: SnakeConfig) -> Self {
        Self::with_tracker(id, config, NoopTracker)
    }

    pub fn with_tracker<T: Tracker + 'static>(id: SnakeId, config: SnakeConfig, tracker: T) -> Self {
        let mut snake = Self {
            id,
            config: config.validated(),
            body: VecDeque::new(),
            curr_direction: None,
            next_direction: None,
            growth: 0,
            score: 0,
            tracker: Box::new(tracker),
            turned_at: None,
            stopped: false,
        };
        snake.reset();
        snake.tracker.reset(&snake.body);
        snake
    }

    pub fn id(&self) -> SnakeId {
        self.id
    }

    /// The competing snake, if this is a two-player game
    pub fn rival(&self) -> Option<SnakeId> {
        self.config.rival
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn head(&self) -> Position {
        // The body always holds the starting position after a reset
        self.body.front().copied().unwrap_or_else(|| self.config.start())
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Ticks left during which the tail is kept
    pub fn growth(&self) -> u32 {
        self.growth
    }

    pub fn current_direction(&self) -> Option<Direction> {
        self.curr_direction
    }

    /// The buffered turn waiting for a cell boundary
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    pub fn tracker(&self) -> &dyn Tracker {
        self.tracker.as_ref()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Buffer a turn. A reversal of the current direction is dropped; a later
    /// call before the turn commits replaces the earlier one.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.stopped {
            return;
        }
        if let Some(current) = self.curr_direction {
            if current.is_opposite(direction) {
                debug!("snake {}: can't reverse from {current:?} to {direction:?}", self.id.0);
                return;
            }
        }
        self.next_direction = Some(direction);
    }

    /// Advance the simulation by one fixed step of `delta` seconds.
    pub fn tick(&mut self, _t: f64, delta: f64) -> TickOutcome {
        if self.stopped {
            return TickOutcome::Stopped;
        }

        let step = self.config.speed * delta;
        let mut candidate = match self.curr_direction {
            Some(direction) => self.head().advanced(direction, step),
            None => self.head(),
        };

        if let Some(next) = self.next_direction {
            if self.curr_direction == Some(next) {
                self.next_direction = None;
            } else if self.near_boundary(candidate) && !self.turned_near(candidate) {
                debug!("snake {}: turning {next:?} at {candidate:?}", self.id.0);
                candidate = candidate.rounded();
                self.curr_direction = Some(next);
                self.next_direction = None;
                self.turned_at = Some(candidate.cell());
            }
        }

        if !self.config.edges.contains(candidate) {
            return self.die(CollisionType::Wall);
        }

        if self.curr_direction.is_none() {
            return TickOutcome::Idle;
        }

        // TODO: test `candidate` against the rival's body once rival collision
        // has agreed rules; `rival()` only names the other snake for now.
        let window = Self::head_exclusion(step);
        if self
            .body
            .iter()
            .skip(window)
            .any(|segment| segment.approx_eq(candidate, COLLISION_EPSILON))
        {
            return self.die(CollisionType::SelfCollision);
        }

        self.body.push_front(candidate);

        let ate = self.tracker.at(candidate);
        if ate {
            self.tracker.reset(&self.body);
            self.growth += self.config.frames_to_grow;
            self.score += 1;
        }

        if self.growth > 0 {
            self.growth -= 1;
        } else {
            self.body.pop_back();
        }

        TickOutcome::Moved { ate }
    }

    /// Draw the body, cycling the configured colors from head to tail
    pub fn paint(&self) -> Vec<Shape> {
        let colors = &self.config.colors;
        self.body
            .iter()
            .zip(colors.iter().cycle())
            .map(|(segment, &color)| {
                Shape::cell(*segment, self.config.cell_size, self.config.buffer, color)
            })
            .collect()
    }

    /// Stop the snake. Later calls do nothing.
    pub fn stop(&mut self) {
        if !self.stopped {
            info!("snake {} stopped with score {}", self.id.0, self.score);
            self.stopped = true;
        }
    }

    /// Bring everything back to the beginning of a life
    pub fn reset(&mut self) {
        self.curr_direction = None;
        self.next_direction = None;
        self.turned_at = None;
        self.body.clear();
        self.body.push_front(self.config.start());
        self.growth = self.config.starting_frames;
        self.score = 0;
    }

    fn die(&mut self, cause: CollisionType) -> TickOutcome {
        info!(
            "snake {} died ({cause:?}) with score {} and length {}",
            self.id.0,
            self.score,
            self.body.len()
        );
        self.reset();
        TickOutcome::Died(cause)
    }

    /// Whether a buffered turn may commit at `candidate`.
    ///
    /// Only the axis of travel is measured while moving, since the other
    /// axis is already aligned. When idle either axis will do.
    fn near_boundary(&self, candidate: Position) -> bool {
        let distance = |coordinate: f64| {
            let cell = self.config.cell_size;
            let offset = (coordinate * cell).rem_euclid(cell);
            offset.min(cell - offset)
        };
        let threshold = self.config.threshold;

        match self.curr_direction {
            Some(direction) if direction.is_horizontal() => distance(candidate.x) < threshold,
            Some(_) => distance(candidate.y) < threshold,
            None => distance(candidate.x) < threshold || distance(candidate.y) < threshold,
        }
    }

    /// Whether `candidate` would snap back onto the corner of the last turn.
    /// Turning there again would fold the head onto the segments just laid.
    fn turned_near(&self, candidate: Position) -> bool {
        self.turned_at == Some(candidate.rounded().cell())
    }

    /// Number of segments behind the head that sit within one cell of travel
    fn head_exclusion(step: f64) -> usize {
        if step > 0.0 {
            MIN_HEAD_EXCLUSION.max((1.0 / step).ceil() as usize)
        } else {
            MIN_HEAD_EXCLUSION
        }
    }
}
