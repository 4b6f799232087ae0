use macroquad::prelude::*;

use crate::application::Channel;

const TRACK_HEIGHT: f32 = 10.0;
const KNOB_WIDTH: f32 = 10.0;
const KNOB_HEIGHT: f32 = 16.0;

/// Horizontal 0-255 slider controlling one color channel
#[derive(Clone, Copy, Debug)]
pub struct Slider {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub channel: Channel,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, channel: Channel) -> Self {
        Self { x, y, width, channel }
    }

    /// Channel value for a cursor at `mouse_x`, clamped to the track
    pub fn value_at(&self, mouse_x: f32) -> u8 {
        let fraction = (mouse_x - self.x) / self.width;
        (fraction * 255.0).clamp(0.0, 255.0) as u8
    }

    /// Whether a press at `mouse_pos` grabs this slider
    pub fn hit(&self, mouse_pos: (f32, f32)) -> bool {
        let (mx, my) = mouse_pos;
        mx >= self.x - KNOB_WIDTH / 2.0
            && mx <= self.x + self.width + KNOB_WIDTH / 2.0
            && my >= self.y - (KNOB_HEIGHT - TRACK_HEIGHT) / 2.0
            && my <= self.y + TRACK_HEIGHT + (KNOB_HEIGHT - TRACK_HEIGHT) / 2.0
    }

    fn bar_color(&self) -> Color {
        match self.channel {
            Channel::Red => RED,
            Channel::Green => GREEN,
            Channel::Blue => BLUE,
        }
    }

    /// Draw track, filled portion and knob for `value`
    pub fn draw(&self, value: u8) {
        let filled = value as f32 / 255.0 * self.width;

        draw_rectangle(self.x, self.y, self.width, TRACK_HEIGHT, Color::from_rgba(80, 80, 80, 255));
        draw_rectangle(self.x, self.y, filled, TRACK_HEIGHT, self.bar_color());
        draw_rectangle(
            self.x + filled - KNOB_WIDTH / 2.0,
            self.y - (KNOB_HEIGHT - TRACK_HEIGHT) / 2.0,
            KNOB_WIDTH,
            KNOB_HEIGHT,
            WHITE,
        );
    }
}
