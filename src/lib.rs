// Domain layer - Grid engine and RLE pattern loading
pub mod domain;

// Application layer - Actions, configuration and audio sequencing
pub mod application;

// Infrastructure layer - UI, rendering, input, sound
pub mod ui;
pub mod rendering;
pub mod input;
pub mod sound;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, LoadError, LoadReport, Placement, Preset, presets, rle};
pub use application::{Action, AudioSink, Flow, GameConfig, GameState, Menu, TileColor};
