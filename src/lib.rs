//! Timestep Snake - Snake with continuous motion on a fixed-timestep loop
//!
//! This library provides:
//! - Core simulation: snakes, direction buffering, items to eat (game module)
//! - The fixed-timestep loop and its handler trait (gameloop module)
//! - Terminal rendering and keyboard input (render, input modules)
//! - Session statistics and rate counters (metrics module)
//! - The interactive game host (modes module)

pub mod game;
pub mod gameloop;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
