//! Core snake simulation
//!
//! This module contains the simulation without any I/O or rendering
//! dependencies. Hosts drive it one fixed step at a time and draw the
//! shapes it paints.

pub mod config;
pub mod direction;
pub mod geometry;
pub mod palette;
pub mod players;
pub mod shape;
pub mod snake;
pub mod tracker;

// Re-export commonly used types
pub use config::{BoardConfig, SnakeConfig};
pub use direction::Direction;
pub use geometry::{Edges, Position};
pub use palette::{colors_for, Color, Palette};
pub use players::{Player, Players};
pub use shape::{Point, Shape};
pub use snake::{CollisionType, Snake, SnakeId, TickOutcome};
pub use tracker::{NoopTracker, SingleTracker, Tracker};
