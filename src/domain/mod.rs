mod cell;
mod grid;
mod patterns;
pub mod rle;

pub use cell::Cell;
pub use grid::{Grid, GridError};
pub use patterns::{Preset, presets};
pub use rle::{LoadError, LoadReport, Placement};
