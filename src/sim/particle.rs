use egui::{pos2, vec2, Pos2, Vec2};

use super::color::{self, Rgba8};
use super::params::Params;

#[derive(Clone, Copy, Debug)]
pub struct Electron {
    pub position: Pos2,
    /// Initial drift vector. The trigonometric motion model never reads it.
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba8,
}

impl Electron {
    pub fn new(params: &Params) -> Self {
        let (cx, cy) = params.screen_center();
        Self {
            position: pos2(cx, cy),
            velocity: vec2(params.electron_velocity.0, params.electron_velocity.1),
            radius: params.electron_radius,
            color: color::BLUE,
        }
    }

    /// Radius of the translucent highlight drawn inside the electron.
    pub fn highlight_radius(&self) -> f32 {
        self.radius - 2.0
    }
}

/// The fixed segment the electron travels along.
#[derive(Clone, Copy, Debug)]
pub struct Wire {
    pub start: Pos2,
    pub end: Pos2,
}

impl Wire {
    pub fn new(params: &Params) -> Self {
        let (_, cy) = params.screen_center();
        Self {
            start: pos2(params.wire_inset, cy),
            end: pos2(params.screen_width - params.wire_inset, cy),
        }
    }

    /// Horizontal position `t` of the way from start to end.
    pub fn x_at(&self, t: f32) -> f32 {
        self.start.x + (self.end.x - self.start.x) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spans_the_screen_minus_inset() {
        let wire = Wire::new(&Params::new());
        assert_eq!(wire.start, pos2(100.0, 300.0));
        assert_eq!(wire.end, pos2(700.0, 300.0));
    }

    #[test]
    fn x_is_monotonic_in_t() {
        let wire = Wire::new(&Params::new());
        let mut last = f32::NEG_INFINITY;
        for i in 0..=100 {
            let x = wire.x_at(i as f32 / 100.0);
            assert!(x >= last);
            last = x;
        }
        assert_eq!(wire.x_at(0.0), wire.start.x);
        assert_eq!(wire.x_at(1.0), wire.end.x);
    }

    #[test]
    fn electron_starts_centered_and_blue() {
        let electron = Electron::new(&Params::new());
        assert_eq!(electron.position, pos2(400.0, 300.0));
        assert_eq!(electron.velocity, vec2(2.0, 1.5));
        assert_eq!(electron.color, color::BLUE);
        assert_eq!(electron.highlight_radius(), 8.0);
    }
}
