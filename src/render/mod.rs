pub mod renderer;

pub use renderer::{Counters, Raster, Renderer, Viewport};
