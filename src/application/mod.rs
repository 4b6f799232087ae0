pub mod audio;
pub mod config;
mod game_state;

pub use audio::{AudioSink, NullAudio, SoundEffect};
pub use config::{Channel, GameConfig, TileColor};
pub use game_state::{Action, Flow, GameState, Menu};
