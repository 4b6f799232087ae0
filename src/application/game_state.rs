use std::path::PathBuf;

use rand::{SeedableRng, rngs::StdRng};

use super::audio::{AudioSink, SoundEffect};
use super::config::{Channel, GameConfig, TileColor};
use crate::domain::{Grid, GridError, LoadError, LoadReport, Placement, Preset, presets, rle};

/// Overlay currently shown on top of the grid. The simulation holds while one is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Menu {
    Help,
    Patterns,
    /// Tile color palette
    Customize,
    /// RGB sliders, editing `color` until confirmed
    ColorPicker { color: TileColor },
    /// Offset and clear options for the preset at `preset` in [`presets::all_presets`]
    PatternOptions { preset: usize, placement: Placement },
}

/// A discrete user request, decoded from keyboard or mouse input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePlaying,
    Clear,
    Randomize,
    NextGeneration,
    ToggleCell { x: i32, y: i32 },
    SpeedUp,
    SlowDown,
    OpenMenu(Menu),
    CloseMenu,
    SetTileColor(TileColor),
    OpenColorPicker,
    SetPickerChannel { channel: Channel, value: u8 },
    ConfirmColor,
    SelectPattern(usize),
    AdjustOffset { dx: i32, dy: i32 },
    ToggleClearBefore,
    ApplyPattern,
    Quit,
}

/// Whether the main loop should keep running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub is_playing: bool,
    pub generation: u64,
    pub frames_per_generation: u32,
    pub tile_color: TileColor,
    pub menu: Option<Menu>,
    frame_counter: u32,
    pattern_dir: PathBuf,
    rng: StdRng,
}

impl GameState {
    /// Create game state sized and colored from `config`
    pub fn new(config: &GameConfig) -> Result<Self, GridError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Same as [`GameState::new`] with a reproducible randomize sequence
    pub fn with_seed(config: &GameConfig, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Result<Self, GridError> {
        let (width, height) = config.grid_dimensions();
        Ok(Self {
            grid: Grid::new(width, height)?,
            is_playing: true,
            generation: 0,
            frames_per_generation: config.frames_per_generation.max(1),
            tile_color: config.tile_color,
            menu: None,
            frame_counter: 0,
            pattern_dir: config.pattern_dir.clone(),
            rng,
        })
    }

    /// Apply one user action, sequencing sound effects around grid changes
    pub fn apply(&mut self, action: Action, audio: &mut dyn AudioSink) -> Flow {
        log::debug!("action {:?}", action);

        match action {
            Action::TogglePlaying => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    audio.resume_music();
                } else {
                    audio.pause_music();
                }
            }
            Action::Clear => {
                self.grid.clear();
                self.generation = 0;
                self.is_playing = false;
                audio.pause_music();
                audio.play_effect(SoundEffect::Clear);
            }
            Action::Randomize => {
                self.grid.randomize_with(&mut self.rng);
                self.generation = 0;
                audio.play_effect(SoundEffect::Randomize);
            }
            Action::NextGeneration => {
                if !self.is_playing {
                    self.advance();
                    audio.play_effect(SoundEffect::NextGeneration);
                }
            }
            Action::ToggleCell { x, y } => {
                self.grid.toggle_cell(x, y);
                audio.play_effect(SoundEffect::Toggle);
            }
            Action::SpeedUp => {
                self.frames_per_generation = self.frames_per_generation.saturating_sub(1).max(1);
            }
            Action::SlowDown => {
                self.frames_per_generation = self.frames_per_generation.saturating_add(1);
            }
            Action::OpenMenu(menu) => self.menu = Some(menu),
            Action::CloseMenu => self.menu = None,
            Action::SetTileColor(color) => {
                self.tile_color = color;
                self.menu = None;
            }
            Action::OpenColorPicker => {
                self.menu = Some(Menu::ColorPicker { color: self.tile_color });
            }
            Action::SetPickerChannel { channel, value } => {
                if let Some(Menu::ColorPicker { color }) = &mut self.menu {
                    *color = color.with_channel(channel, value);
                }
            }
            Action::ConfirmColor => {
                if let Some(Menu::ColorPicker { color }) = self.menu {
                    self.tile_color = color;
                    self.menu = None;
                }
            }
            Action::SelectPattern(preset) => {
                if preset < presets::all_presets().len() {
                    self.menu = Some(Menu::PatternOptions { preset, placement: Placement::default() });
                }
            }
            Action::AdjustOffset { dx, dy } => {
                let (width, height) = self.grid.dimensions();
                if let Some(Menu::PatternOptions { placement, .. }) = &mut self.menu {
                    placement.offset_x = placement.offset_x.saturating_add(dx).clamp(0, width as i32 - 1);
                    placement.offset_y = placement.offset_y.saturating_add(dy).clamp(0, height as i32 - 1);
                }
            }
            Action::ToggleClearBefore => {
                if let Some(Menu::PatternOptions { placement, .. }) = &mut self.menu {
                    placement.clear_before = !placement.clear_before;
                }
            }
            Action::ApplyPattern => {
                if let Some(Menu::PatternOptions { preset, placement }) = self.menu.take() {
                    match presets::all_presets().get(preset) {
                        Some(preset) => {
                            if let Err(err) = self.load_preset(preset, placement) {
                                log::warn!("Could not load pattern '{}': {}", preset.name, err);
                            }
                        }
                        None => log::warn!("No pattern preset at index {}", preset),
                    }
                }
            }
            Action::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    /// Stamp a preset from the pattern directory onto the grid
    pub fn load_preset(&mut self, preset: &Preset, placement: Placement) -> Result<LoadReport, LoadError> {
        rle::load_file(&mut self.grid, preset.path_in(&self.pattern_dir), placement)
    }

    /// Update simulation by one rendered frame
    pub fn tick(&mut self) {
        if !self.is_playing || self.menu.is_some() {
            return;
        }

        self.frame_counter += 1;
        if self.frame_counter >= self.frames_per_generation {
            self.frame_counter = 0;
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.grid.step();
        self.generation += 1;
    }
}
