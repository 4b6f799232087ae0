use std::path::{Path, PathBuf};

/// A preset pattern shipped as an `.rle` file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    /// File name inside the pattern directory
    pub file_name: &'static str,
}

impl Preset {
    /// Full path of the preset inside `pattern_dir`
    pub fn path_in(&self, pattern_dir: &Path) -> PathBuf {
        pattern_dir.join(self.file_name)
    }
}

/// Classic Game of Life patterns, in menu order (key 1, 2, 3...)
pub mod presets {
    use super::Preset;

    pub const GLIDER: Preset = Preset {
        name: "Glider",
        description: "Moves diagonally (period 4)",
        file_name: "glider.rle",
    };

    pub const BLINKER: Preset = Preset {
        name: "Blinker",
        description: "Oscillator (period 2)",
        file_name: "blinker.rle",
    };

    pub const GOSPER_GLIDER_GUN: Preset = Preset {
        name: "Gosper Glider Gun",
        description: "Produces gliders (period 30)",
        file_name: "gosper_glider_gun.rle",
    };

    /// Get all available presets
    pub const fn all_presets() -> &'static [Preset] {
        &[GLIDER, BLINKER, GOSPER_GLIDER_GUN]
    }
}
