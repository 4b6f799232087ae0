//! macroquad-backed audio: a looping background track and one-shot effects.

use std::collections::HashMap;
use std::path::Path;

use macroquad::audio::{PlaySoundParams, Sound, load_sound, play_sound, play_sound_once, set_sound_volume};

use crate::application::audio::BACKGROUND_MUSIC;
use crate::application::{AudioSink, SoundEffect};

const MUSIC_VOLUME: f32 = 0.6;

/// Plays music and effects loaded from the asset directory.
/// Files that fail to load are skipped, leaving that sound silent.
pub struct MacroquadAudio {
    music: Option<Sound>,
    effects: HashMap<SoundEffect, Sound>,
}

async fn load_asset(path: &Path) -> Option<Sound> {
    let Some(name) = path.to_str() else {
        log::warn!("Sound path {} is not valid UTF-8", path.display());
        return None;
    };

    match load_sound(name).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            log::warn!("Could not load sound '{}': {:?}", name, err);
            None
        }
    }
}

impl MacroquadAudio {
    pub async fn load(asset_dir: &Path) -> Self {
        let music = load_asset(&asset_dir.join(BACKGROUND_MUSIC)).await;

        let mut effects = HashMap::new();
        for effect in SoundEffect::ALL {
            if let Some(sound) = load_asset(&asset_dir.join(effect.file_name())).await {
                effects.insert(effect, sound);
            }
        }
        log::info!("Loaded {} of {} sound effects", effects.len(), SoundEffect::ALL.len());

        Self { music, effects }
    }

    /// Start the background track on a loop
    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            play_sound(music, PlaySoundParams { looped: true, volume: MUSIC_VOLUME });
        }
    }
}

impl AudioSink for MacroquadAudio {
    fn play_effect(&mut self, effect: SoundEffect) {
        if let Some(sound) = self.effects.get(&effect) {
            play_sound_once(sound);
        }
    }

    // The track keeps its position while muted
    fn pause_music(&mut self) {
        if let Some(music) = &self.music {
            set_sound_volume(music, 0.0);
        }
    }

    fn resume_music(&mut self) {
        if let Some(music) = &self.music {
            set_sound_volume(music, MUSIC_VOLUME);
        }
    }
}
