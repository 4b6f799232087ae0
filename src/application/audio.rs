/// Short sounds played in response to user actions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Toggle,
    Clear,
    Randomize,
    NextGeneration,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Toggle,
        SoundEffect::Clear,
        SoundEffect::Randomize,
        SoundEffect::NextGeneration,
    ];

    /// Asset file holding this effect
    pub const fn file_name(self) -> &'static str {
        match self {
            SoundEffect::Toggle => "toggle.wav",
            SoundEffect::Clear => "clear.wav",
            SoundEffect::Randomize => "randomize.wav",
            SoundEffect::NextGeneration => "next_gen.wav",
        }
    }
}

/// Looping background track
pub const BACKGROUND_MUSIC: &str = "background.wav";

/// Receiver of audio requests issued alongside simulation actions
pub trait AudioSink {
    fn play_effect(&mut self, effect: SoundEffect);
    fn pause_music(&mut self);
    fn resume_music(&mut self);
}

/// Silent sink for headless runs
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_effect(&mut self, _effect: SoundEffect) {}
    fn pause_music(&mut self) {}
    fn resume_music(&mut self) {}
}
