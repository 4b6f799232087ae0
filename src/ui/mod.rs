mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::{Color, screen_height, screen_width};

use crate::application::{Action, Channel, TileColor};
use crate::domain::presets;

pub const PANEL_WIDTH: f32 = 460.0;
pub const PANEL_HEIGHT: f32 = 420.0;
pub const LINE_HEIGHT: f32 = 30.0;
pub const FONT_SIZE: f32 = 22.0;

/// Top-left corner of the centered menu panel
pub fn panel_origin() -> (f32, f32) {
    (
        ((screen_width() - PANEL_WIDTH) / 2.0).max(0.0),
        ((screen_height() - PANEL_HEIGHT) / 2.0).max(0.0),
    )
}

pub const HELP_LINES: &[&str] = &[
    "Hotkeys:",
    "[Space] - Play / Pause",
    "[C] - Clear grid",
    "[G] - Randomize grid",
    "[Mouse] - Toggle cell",
    "[N] - Next generation",
    "[UP] - Speed up simulation",
    "[DOWN] - Slow down simulation",
    "[P] - Show Patterns menu",
    "[H] - Show this help menu",
    "[S] - Customize simulation",
    "[ESC] - Close menu / Quit",
];

/// Lines of the preset pattern menu
pub fn pattern_lines() -> Vec<String> {
    std::iter::once("Preloaded Patterns:".to_owned())
        .chain(
            presets::all_presets()
                .iter()
                .enumerate()
                .map(|(i, preset)| format!("[{}] - {}", i + 1, preset.name)),
        )
        .collect()
}

/// Lines of the tile color menu
pub fn customize_lines() -> Vec<String> {
    std::iter::once("Customizations for tile color:".to_owned())
        .chain(
            TileColor::PALETTE
                .iter()
                .enumerate()
                .map(|(i, (name, _))| format!("[{}] - {}", i + 1, name)),
        )
        .chain(std::iter::once("[C] - Customize (choose)".to_owned()))
        .collect()
}

/// Clickable controls of the pattern options dialog with the action each one issues
pub fn pattern_dialog_buttons(origin: (f32, f32)) -> Vec<(Button, Action)> {
    let (ox, oy) = origin;
    let green = (Color::from_rgba(0, 200, 0, 255), Color::from_rgba(40, 230, 40, 255));

    vec![
        (Button::new(ox + 200.0, oy + 80.0, 20.0, 20.0, "-"), Action::AdjustOffset { dx: -1, dy: 0 }),
        (Button::new(ox + 250.0, oy + 80.0, 20.0, 20.0, "+"), Action::AdjustOffset { dx: 1, dy: 0 }),
        (Button::new(ox + 200.0, oy + 120.0, 20.0, 20.0, "-"), Action::AdjustOffset { dx: 0, dy: -1 }),
        (Button::new(ox + 250.0, oy + 120.0, 20.0, 20.0, "+"), Action::AdjustOffset { dx: 0, dy: 1 }),
        (
            Button::new(ox + 80.0, oy + 220.0, 80.0, 40.0, "Apply").with_colors(green.0, green.1),
            Action::ApplyPattern,
        ),
    ]
}

/// The clear-first checkbox of the pattern options dialog
pub fn clear_checkbox(origin: (f32, f32)) -> Button {
    Button::new(origin.0 + 50.0, origin.1 + 170.0, 20.0, 20.0, "")
        .with_colors(Color::from_rgba(60, 60, 60, 255), Color::from_rgba(90, 90, 90, 255))
}

/// One slider per RGB channel for the color picker
pub fn color_sliders(origin: (f32, f32)) -> [Slider; 3] {
    let (ox, oy) = origin;
    Channel::ALL.map(|channel| {
        let row = match channel {
            Channel::Red => 0.0,
            Channel::Green => 1.0,
            Channel::Blue => 2.0,
        };
        Slider::new(ox + 100.0, oy + 60.0 + row * 40.0, 200.0, channel)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_lines_follow_presets() {
        let lines = pattern_lines();
        assert_eq!(lines.len(), presets::all_presets().len() + 1);
        assert_eq!(lines[3], "[3] - Gosper Glider Gun");
    }

    #[test]
    fn test_customize_lines() {
        let lines = customize_lines();
        assert_eq!(lines[1], "[1] - Yellow");
        assert_eq!(lines.last().map(String::as_str), Some("[C] - Customize (choose)"));
    }

    #[test]
    fn test_dialog_controls_do_not_overlap() {
        let origin = (0.0, 0.0);
        let mut controls: Vec<Button> = pattern_dialog_buttons(origin).into_iter().map(|(b, _)| b).collect();
        controls.push(clear_checkbox(origin));

        for (i, a) in controls.iter().enumerate() {
            for b in &controls[i + 1..] {
                assert!(!a.rect().overlaps(&b.rect()), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_sliders_are_stacked() {
        let sliders = color_sliders((10.0, 20.0));
        assert_eq!(sliders.map(|s| s.y), [80.0, 120.0, 160.0]);
        assert_eq!(sliders.map(|s| s.channel), Channel::ALL);
    }
}
