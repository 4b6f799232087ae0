use macroquad::prelude::*;

use crate::application::{GameState, Menu, TileColor};
use crate::domain::{Grid, Placement, presets};
use crate::ui::{self, FONT_SIZE, LINE_HEIGHT, PANEL_HEIGHT, PANEL_WIDTH};

fn to_color(color: TileColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

/// Fill every live cell with the tile color
pub fn draw_grid(grid: &Grid, tile_size: f32, color: TileColor) {
    let fill = to_color(color);
    for (x, y) in grid.live_cells() {
        draw_rectangle(x as f32 * tile_size, y as f32 * tile_size, tile_size, tile_size, fill);
    }
}

/// White lines between tiles
pub fn draw_grid_lines(grid: &Grid, tile_size: f32) {
    let (width, height) = grid.dimensions();
    let (right, bottom) = (width as f32 * tile_size, height as f32 * tile_size);

    for x in 0..=width {
        let px = x as f32 * tile_size;
        draw_line(px, 0.0, px, bottom, 1.0, WHITE);
    }
    for y in 0..=height {
        let py = y as f32 * tile_size;
        draw_line(0.0, py, right, py, 1.0, WHITE);
    }
}

/// Play state, generation and population in the top-left corner
pub fn draw_status(state: &GameState) {
    let status = format!(
        "{} | Gen {} | Pop {} | {} frames/gen",
        if state.is_playing { "Playing" } else { "Paused" },
        state.generation,
        state.grid.population(),
        state.frames_per_generation,
    );
    let size = measure_text(&status, None, 18, 1.0);

    draw_rectangle(4.0, 4.0, size.width + 12.0, size.height + 12.0, Color::from_rgba(0, 0, 0, 180));
    draw_text(&status, 10.0, 10.0 + size.height, 18.0, WHITE);
}

fn draw_panel(origin: (f32, f32)) {
    draw_rectangle(origin.0, origin.1, PANEL_WIDTH, PANEL_HEIGHT, Color::from_rgba(40, 40, 40, 240));
    draw_rectangle_lines(origin.0, origin.1, PANEL_WIDTH, PANEL_HEIGHT, 2.0, GRAY);
}

fn draw_lines<S: AsRef<str>>(origin: (f32, f32), lines: &[S]) {
    for (i, line) in lines.iter().enumerate() {
        draw_text(line.as_ref(), origin.0 + 30.0, origin.1 + 30.0 + i as f32 * LINE_HEIGHT, FONT_SIZE, WHITE);
    }
}

/// Draw the open menu, if any, over the grid
pub fn draw_menu(state: &GameState, mouse_pos: (f32, f32)) {
    let Some(menu) = state.menu else {
        return;
    };
    let origin = ui::panel_origin();
    draw_panel(origin);

    match menu {
        Menu::Help => draw_lines(origin, ui::HELP_LINES),
        Menu::Patterns => draw_lines(origin, &ui::pattern_lines()),
        Menu::Customize => draw_lines(origin, &ui::customize_lines()),
        Menu::ColorPicker { color } => draw_color_picker(origin, color),
        Menu::PatternOptions { preset, placement } => {
            let name = presets::all_presets().get(preset).map_or("?", |p| p.name);
            draw_pattern_options(origin, name, placement, mouse_pos);
        }
    }
}

fn draw_color_picker(origin: (f32, f32), color: TileColor) {
    draw_text("Drag the sliders, [Enter] to confirm", origin.0 + 20.0, origin.1 + 30.0, FONT_SIZE, WHITE);

    for slider in ui::color_sliders(origin) {
        slider.draw(color.channel(slider.channel));
    }

    draw_rectangle(origin.0 + 130.0, origin.1 + 190.0, 140.0, 70.0, to_color(color));
}

fn draw_pattern_options(origin: (f32, f32), name: &str, placement: Placement, mouse_pos: (f32, f32)) {
    let (ox, oy) = origin;
    draw_text(&format!("Options for {}", name), ox + 20.0, oy + 35.0, FONT_SIZE, WHITE);
    draw_text(&format!("X Offset: {}", placement.offset_x), ox + 30.0, oy + 96.0, FONT_SIZE, WHITE);
    draw_text(&format!("Y Offset: {}", placement.offset_y), ox + 30.0, oy + 136.0, FONT_SIZE, WHITE);

    for (button, _) in ui::pattern_dialog_buttons(origin) {
        button.draw(mouse_pos);
    }

    let checkbox = ui::clear_checkbox(origin);
    checkbox.draw(mouse_pos);
    let rect = checkbox.rect();
    if placement.clear_before {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, GREEN);
    }
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, LIGHTGRAY);
    draw_text("Clear screen first", rect.x + 30.0, rect.y + 16.0, FONT_SIZE, WHITE);
}
