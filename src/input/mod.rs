use macroquad::prelude::*;

use crate::application::{Action, Channel, GameState, Menu, TileColor};
use crate::ui;

/// Keys polled every frame
const WATCHED_KEYS: [KeyCode; 20] = [
    KeyCode::Escape,
    KeyCode::Space,
    KeyCode::Enter,
    KeyCode::C,
    KeyCode::G,
    KeyCode::N,
    KeyCode::H,
    KeyCode::P,
    KeyCode::S,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::KpEnter,
];

/// Zero-based index of a number-row key
fn digit_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Key1 => Some(0),
        KeyCode::Key2 => Some(1),
        KeyCode::Key3 => Some(2),
        KeyCode::Key4 => Some(3),
        KeyCode::Key5 => Some(4),
        KeyCode::Key6 => Some(5),
        _ => None,
    }
}

/// Map a key press to an action given the open menu
pub fn action_for_key(menu: Option<Menu>, key: KeyCode) -> Option<Action> {
    match menu {
        None => match key {
            KeyCode::Escape => Some(Action::Quit),
            KeyCode::Space => Some(Action::TogglePlaying),
            KeyCode::C => Some(Action::Clear),
            KeyCode::G => Some(Action::Randomize),
            KeyCode::N => Some(Action::NextGeneration),
            KeyCode::H => Some(Action::OpenMenu(Menu::Help)),
            KeyCode::P => Some(Action::OpenMenu(Menu::Patterns)),
            KeyCode::S => Some(Action::OpenMenu(Menu::Customize)),
            KeyCode::Up => Some(Action::SpeedUp),
            KeyCode::Down => Some(Action::SlowDown),
            _ => digit_index(key).map(Action::SelectPattern),
        },
        Some(Menu::Help) => matches!(key, KeyCode::Escape | KeyCode::H).then_some(Action::CloseMenu),
        Some(Menu::Patterns) => match key {
            KeyCode::Escape | KeyCode::P => Some(Action::CloseMenu),
            _ => digit_index(key).map(Action::SelectPattern),
        },
        Some(Menu::Customize) => match key {
            KeyCode::Escape | KeyCode::S => Some(Action::CloseMenu),
            KeyCode::C => Some(Action::OpenColorPicker),
            _ => digit_index(key)
                .and_then(|i| TileColor::PALETTE.get(i))
                .map(|&(_, color)| Action::SetTileColor(color)),
        },
        Some(Menu::ColorPicker { .. }) => match key {
            KeyCode::Escape => Some(Action::CloseMenu),
            KeyCode::Enter | KeyCode::KpEnter => Some(Action::ConfirmColor),
            _ => None,
        },
        Some(Menu::PatternOptions { .. }) => match key {
            KeyCode::Escape => Some(Action::CloseMenu),
            KeyCode::Enter | KeyCode::KpEnter => Some(Action::ApplyPattern),
            KeyCode::C => Some(Action::ToggleClearBefore),
            KeyCode::Left => Some(Action::AdjustOffset { dx: -1, dy: 0 }),
            KeyCode::Right => Some(Action::AdjustOffset { dx: 1, dy: 0 }),
            KeyCode::Up => Some(Action::AdjustOffset { dx: 0, dy: -1 }),
            KeyCode::Down => Some(Action::AdjustOffset { dx: 0, dy: 1 }),
            _ => None,
        },
    }
}

/// Grid cell under a screen position
pub fn cell_at(mouse_pos: (f32, f32), tile_size: f32) -> (i32, i32) {
    ((mouse_pos.0 / tile_size).floor() as i32, (mouse_pos.1 / tile_size).floor() as i32)
}

/// Input state carried between frames
#[derive(Default)]
pub struct InputState {
    /// Color picker slider being dragged
    active_slider: Option<Channel>,
}

impl InputState {
    /// Collect this frame's actions from keyboard and mouse
    pub fn poll(&mut self, state: &GameState, tile_size: f32) -> Vec<Action> {
        let mouse_pos = mouse_position();

        let mut actions: Vec<Action> = WATCHED_KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .filter_map(|&key| action_for_key(state.menu, key))
            .collect();

        match state.menu {
            None => {
                if is_mouse_button_pressed(MouseButton::Left) {
                    let (x, y) = cell_at(mouse_pos, tile_size);
                    actions.push(Action::ToggleCell { x, y });
                }
            }
            Some(Menu::PatternOptions { .. }) => {
                let origin = ui::panel_origin();
                actions.extend(
                    ui::pattern_dialog_buttons(origin)
                        .into_iter()
                        .filter(|(button, _)| button.is_clicked(mouse_pos))
                        .map(|(_, action)| action),
                );
                if ui::clear_checkbox(origin).is_clicked(mouse_pos) {
                    actions.push(Action::ToggleClearBefore);
                }
            }
            Some(Menu::ColorPicker { .. }) => self.drag_sliders(mouse_pos, &mut actions),
            Some(_) => {}
        }

        actions
    }

    fn drag_sliders(&mut self, mouse_pos: (f32, f32), actions: &mut Vec<Action>) {
        let sliders = ui::color_sliders(ui::panel_origin());

        if is_mouse_button_pressed(MouseButton::Left) {
            self.active_slider = sliders.iter().find(|s| s.hit(mouse_pos)).map(|s| s.channel);
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.active_slider = None;
        }

        if let Some(slider) = sliders.iter().find(|s| Some(s.channel) == self.active_slider) {
            actions.push(Action::SetPickerChannel {
                channel: slider.channel,
                value: slider.value_at(mouse_pos.0),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Placement;

    #[test]
    fn test_main_view_hotkeys() {
        assert_eq!(action_for_key(None, KeyCode::Space), Some(Action::TogglePlaying));
        assert_eq!(action_for_key(None, KeyCode::G), Some(Action::Randomize));
        assert_eq!(action_for_key(None, KeyCode::Key3), Some(Action::SelectPattern(2)));
        assert_eq!(action_for_key(None, KeyCode::Escape), Some(Action::Quit));
        assert_eq!(action_for_key(None, KeyCode::Enter), None);
    }

    #[test]
    fn test_escape_closes_menus_instead_of_quitting() {
        let menus = [
            Menu::Help,
            Menu::Patterns,
            Menu::Customize,
            Menu::ColorPicker { color: TileColor::RED },
            Menu::PatternOptions { preset: 0, placement: Placement::default() },
        ];
        for menu in menus {
            assert_eq!(action_for_key(Some(menu), KeyCode::Escape), Some(Action::CloseMenu));
        }
    }

    #[test]
    fn test_customize_palette_keys() {
        assert_eq!(
            action_for_key(Some(Menu::Customize), KeyCode::Key5),
            Some(Action::SetTileColor(TileColor::ORANGE))
        );
        assert_eq!(action_for_key(Some(Menu::Customize), KeyCode::C), Some(Action::OpenColorPicker));
    }

    #[test]
    fn test_pattern_options_keys() {
        let menu = Some(Menu::PatternOptions { preset: 1, placement: Placement::default() });
        assert_eq!(action_for_key(menu, KeyCode::Up), Some(Action::AdjustOffset { dx: 0, dy: -1 }));
        assert_eq!(action_for_key(menu, KeyCode::C), Some(Action::ToggleClearBefore));
        assert_eq!(action_for_key(menu, KeyCode::Enter), Some(Action::ApplyPattern));
        assert_eq!(action_for_key(menu, KeyCode::Space), None);
    }

    #[test]
    fn test_cell_at() {
        assert_eq!(cell_at((0.0, 0.0), 35.0), (0, 0));
        assert_eq!(cell_at((34.9, 70.0), 35.0), (0, 2));
        assert_eq!(cell_at((-1.0, 10.0), 35.0), (-1, 0));
    }
}
