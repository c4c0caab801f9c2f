pub mod human;

pub use human::{Arcade, HumanMode};
