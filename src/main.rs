use macroquad::prelude::*;
use conway_life::{
    Flow, GameConfig, GameState,
    input::InputState,
    rendering,
    sound::MacroquadAudio,
};

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = GameConfig::default();
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Cannot start simulation: {}", err);
            return;
        }
    };
    let (width, height) = state.grid.dimensions();
    log::info!("Grid {}x{}, tiles of {}px", width, height, config.tile_size);

    let mut audio = MacroquadAudio::load(&config.asset_dir).await;
    audio.start_music();

    let mut input = InputState::default();
    let tile_size = config.tile_size as f32;

    'running: loop {
        for action in input.poll(&state, tile_size) {
            if state.apply(action, &mut audio) == Flow::Quit {
                break 'running;
            }
        }

        state.tick();

        clear_background(BLACK);
        rendering::draw_grid(&state.grid, tile_size, state.tile_color);
        rendering::draw_grid_lines(&state.grid, tile_size);
        rendering::draw_status(&state);
        rendering::draw_menu(&state, mouse_position());

        next_frame().await;
    }

    log::info!("Exiting after {} generations", state.generation);
}
