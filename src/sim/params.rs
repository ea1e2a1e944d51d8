use crate::{HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct Params {
    pub screen_width: f32,
    pub screen_height: f32,
    /// distance between each screen edge and the nearest wire endpoint
    pub wire_inset: f32,
    pub electron_radius: f32,
    pub electron_velocity: (f32, f32),
    /// vertical wobble around the wire, in screen units
    pub wobble_amplitude: f32,
    /// angular speed of the wobble relative to the horizontal sweep
    pub wobble_speed: f32,
    pub trail_len: usize,
    /// sweep fraction between two consecutive trail ghosts
    pub trail_spacing: f32,
    /// elapsed time between two consecutive trail ghosts
    pub trail_lag: f32,
    pub trail_alpha: f32,
    pub trail_fade: f32,
}

impl Params {
    pub fn new() -> Self {
        Params {
            screen_width: WIDTH as f32,
            screen_height: HEIGHT as f32,
            wire_inset: 100.0,
            electron_radius: 10.0,
            electron_velocity: (2.0, 1.5),
            wobble_amplitude: 20.0,
            wobble_speed: 3.0,
            trail_len: 5,
            trail_spacing: 0.05,
            trail_lag: 0.1,
            trail_alpha: 0.3,
            trail_fade: 0.05,
        }
    }

    pub fn screen_center(&self) -> (f32, f32) {
        (self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
