pub mod color;
pub mod params;
pub use params::Params;

pub mod particle;
pub use particle::{Electron, Wire};

use color::{channel, Rgba8};
use egui::{pos2, Pos2};

/// Fraction of the wire covered after `elapsed` seconds, always in `[0, 1]`.
pub fn sweep_fraction(elapsed: f32) -> f32 {
    (elapsed.sin() + 1.0) / 2.0
}

/// Electron color after `elapsed` seconds. Blue and alpha stay saturated.
pub fn electron_color(elapsed: f32) -> Rgba8 {
    Rgba8::new(
        channel(128.0 + elapsed.sin() * 127.0),
        channel(128.0 + (elapsed * 1.5).cos() * 127.0),
        255,
        255,
    )
}

/// One faded echo of the electron's recent positions.
#[derive(Clone, Copy, Debug)]
pub struct TrailGhost {
    pub position: Pos2,
    pub radius: f32,
    pub color: Rgba8,
}

/// The whole animated state: one electron on one wire, driven by elapsed time.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub params: Params,
    pub electron: Electron,
    pub wire: Wire,
    elapsed: f32,
}

impl Simulation {
    pub fn new(params: Params) -> Self {
        let electron = Electron::new(&params);
        let wire = Wire::new(&params);
        Simulation {
            params,
            electron,
            wire,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn sweep_fraction(&self) -> f32 {
        sweep_fraction(self.elapsed)
    }

    /// Adds one frame's duration to the elapsed time and recomputes the electron.
    pub fn advance(&mut self, frame_time: f32) {
        self.elapsed += frame_time;

        let t = self.sweep_fraction();
        self.electron.position = pos2(self.wire.x_at(t), self.wobble_y(self.elapsed));
        self.electron.color = electron_color(self.elapsed);
    }

    fn wobble_y(&self, elapsed: f32) -> f32 {
        self.wire.start.y + (elapsed * self.params.wobble_speed).sin() * self.params.wobble_amplitude
    }

    /// Alpha of the `i`-th trail ghost, strictly decreasing with `i`.
    pub fn trail_alpha(&self, i: usize) -> f32 {
        self.params.trail_alpha - i as f32 * self.params.trail_fade
    }

    pub fn trail(&self) -> Vec<TrailGhost> {
        let t = self.sweep_fraction();
        (0..self.params.trail_len)
            .map(|i| {
                let mut trail_t = t - i as f32 * self.params.trail_spacing;
                if trail_t < 0.0 {
                    trail_t += 1.0;
                }
                let lagged = self.elapsed - i as f32 * self.params.trail_lag;
                TrailGhost {
                    position: pos2(self.wire.x_at(trail_t), self.wobble_y(lagged)),
                    radius: self.electron.radius * 0.5,
                    color: self.electron.color.fade(self.trail_alpha(i)),
                }
            })
            .collect()
    }
}
