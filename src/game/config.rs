use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use super::geometry::{Edges, Position};
use super::palette::{Color, Palette};
use super::snake::SnakeId;

pub const DEFAULT_CELL_SIZE: f64 = 1.0;
/// Cells per second
pub const DEFAULT_SPEED: f64 = 10.0;
pub const DEFAULT_STARTING_FRAMES: u32 = 18;
pub const DEFAULT_FRAMES_TO_GROW: u32 = 12;
/// Default turn-commit threshold as a share of the cell size
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.2;

/// Configuration for the board and the host around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Width of the board in cells
    pub squares_wide: u16,
    /// Height of the board in cells
    pub squares_high: u16,
    /// Size of one cell in rendering units
    pub square_size: f64,
    /// Offset of the board from the rendering origin
    pub buffer: f64,
    pub show_grid: bool,
    /// Show FPS/UPS counters in the header
    pub show_counters: bool,
    /// Simulation steps per second
    pub tick_rate: u32,
    /// Upper bound on rendered frames per second
    pub max_fps: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            squares_wide: 20,
            squares_high: 20,
            square_size: DEFAULT_CELL_SIZE,
            buffer: 0.0,
            show_grid: false,
            show_counters: false,
            tick_rate: 60,
            max_fps: 60,
        }
    }
}

impl BoardConfig {
    /// Create a new configuration with custom board size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            squares_wide: width,
            squares_high: height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn edges(&self) -> Edges {
        Edges::sized(f64::from(self.squares_wide), f64::from(self.squares_high))
    }

    /// Fixed simulation period
    pub fn update_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate.max(1)))
    }

    /// Minimum wall time between rendered frames
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.max_fps.max(1)))
    }
}

/// Per-snake configuration.
///
/// Any field left at an unusable value is replaced by its default in
/// [`SnakeConfig::validated`]; nothing here is ever rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub edges: Edges,
    /// Where the snake starts each life, defaults to the board center
    pub starting_position: Option<Position>,
    pub cell_size: f64,
    /// Offset of the board from the rendering origin
    pub buffer: f64,
    /// Cycled over the body segments; a single color renders solid
    pub colors: Vec<Color>,
    /// Cells per second
    pub speed: f64,
    /// Ticks of growth granted at the start of each life
    pub starting_frames: u32,
    /// Ticks of growth granted per item eaten
    pub frames_to_grow: u32,
    /// How close to a cell boundary a buffered turn may commit, in the same
    /// units as `cell_size`
    pub threshold: f64,
    /// The competing snake in a two-player game
    pub rival: Option<SnakeId>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            edges: Edges::default(),
            starting_position: None,
            cell_size: DEFAULT_CELL_SIZE,
            buffer: 0.0,
            colors: Palette::default().colors().to_vec(),
            speed: DEFAULT_SPEED,
            starting_frames: DEFAULT_STARTING_FRAMES,
            frames_to_grow: DEFAULT_FRAMES_TO_GROW,
            threshold: DEFAULT_CELL_SIZE * DEFAULT_THRESHOLD_RATIO,
            rival: None,
        }
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl SnakeConfig {
    /// Configuration for a snake on the given board
    pub fn for_board(board: &BoardConfig) -> Self {
        let cell_size = board.square_size;
        Self {
            edges: board.edges(),
            cell_size,
            buffer: board.buffer,
            threshold: cell_size * DEFAULT_THRESHOLD_RATIO,
            ..Default::default()
        }
    }

    /// Returns the configuration with every unusable field replaced by its
    /// default.
    pub fn validated(mut self) -> Self {
        self.edges = self.edges.normalized();
        let finite_edges = [
            self.edges.left,
            self.edges.right,
            self.edges.top,
            self.edges.bottom,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite_edges || !self.edges.holds_a_cell() {
            warn!("edges {:?} cannot hold a cell, using defaults", self.edges);
            self.edges = Edges::default();
        }

        if !positive(self.cell_size) {
            warn!("cell size {} is not positive, using default", self.cell_size);
            self.cell_size = DEFAULT_CELL_SIZE;
        }

        if !self.buffer.is_finite() || self.buffer < 0.0 {
            warn!("buffer {} is negative, using 0", self.buffer);
            self.buffer = 0.0;
        }

        if self.colors.is_empty() {
            self.colors = Palette::default().colors().to_vec();
        }

        if !positive(self.speed) {
            warn!("speed {} is not positive, using default", self.speed);
            self.speed = DEFAULT_SPEED;
        }

        if self.starting_frames == 0 {
            self.starting_frames = DEFAULT_STARTING_FRAMES;
        }

        if self.frames_to_grow == 0 {
            self.frames_to_grow = DEFAULT_FRAMES_TO_GROW;
        }

        if !positive(self.threshold) {
            self.threshold = self.cell_size * DEFAULT_THRESHOLD_RATIO;
        }

        // Turns only commit near a cell boundary, so a life must begin on one
        let center = self.edges.center();
        match self.starting_position {
            Some(start) if self.edges.contains(start.floored()) => {
                let snapped = start.floored();
                if snapped != start {
                    warn!("starting position {start:?} is not on a whole cell, using {snapped:?}");
                }
                self.starting_position = Some(snapped);
            }
            Some(start) => {
                warn!("starting position {start:?} is off the board, using center");
                self.starting_position = Some(center);
            }
            None => self.starting_position = Some(center),
        }

        self
    }

    /// Where a fresh life begins. Always set once validated.
    pub fn start(&self) -> Position {
        self.starting_position
            .unwrap_or_else(|| self.edges.center())
    }
}
