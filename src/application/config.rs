use std::path::PathBuf;

/// RGBA fill color for live tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// One adjustable channel of a [`TileColor`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl TileColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const YELLOW: TileColor = TileColor::rgb(255, 255, 0);
    pub const BLUE: TileColor = TileColor::rgb(0, 0, 255);
    pub const GREEN: TileColor = TileColor::rgb(0, 255, 0);
    pub const RED: TileColor = TileColor::rgb(255, 0, 0);
    pub const ORANGE: TileColor = TileColor::rgb(255, 165, 0);
    pub const WHITE: TileColor = TileColor::rgb(255, 255, 255);

    /// Palette offered by the customize menu, keys 1 to 6
    pub const PALETTE: [(&'static str, TileColor); 6] = [
        ("Yellow", TileColor::YELLOW),
        ("Blue", TileColor::BLUE),
        ("Green", TileColor::GREEN),
        ("Red", TileColor::RED),
        ("Orange", TileColor::ORANGE),
        ("White", TileColor::WHITE),
    ];

    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub const fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }
}

/// Startup configuration for the simulator window and assets
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// Edge length of one cell in pixels
    pub tile_size: u32,
    /// Rendered frames between generations while playing
    pub frames_per_generation: u32,
    pub tile_color: TileColor,
    pub pattern_dir: PathBuf,
    /// Directory holding the music and sound effect files
    pub asset_dir: PathBuf,
}

impl GameConfig {
    /// Grid size in cells: the window area divided into whole tiles
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let tile = self.tile_size.max(1);
        ((self.window_width / tile) as usize, (self.window_height / tile) as usize)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1050,
            window_height: 945,
            tile_size: 35,
            frames_per_generation: 60,
            tile_color: TileColor::YELLOW,
            pattern_dir: PathBuf::from("patterns"),
            asset_dir: PathBuf::from("assets"),
        }
    }
}
