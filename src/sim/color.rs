/// An 8-bit-per-channel, non-premultiplied color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub const RAYWHITE: Rgba8 = Rgba8::new(245, 245, 245, 255);
pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
pub const GRAY: Rgba8 = Rgba8::new(130, 130, 130, 255);
pub const DARKGRAY: Rgba8 = Rgba8::new(80, 80, 80, 255);
pub const RED: Rgba8 = Rgba8::new(230, 41, 55, 255);
pub const ORANGE: Rgba8 = Rgba8::new(255, 161, 0, 255);
pub const GREEN: Rgba8 = Rgba8::new(0, 228, 48, 255);
pub const BLUE: Rgba8 = Rgba8::new(0, 121, 241, 255);

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }

    /// Same color with its alpha replaced by `alpha` (0.0 transparent, 1.0 opaque).
    pub fn fade(self, alpha: f32) -> Self {
        Rgba8 {
            a: (alpha.clamp(0.0, 1.0) * 255.0) as u8,
            ..self
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Truncates a channel value into `0..=255`.
pub fn channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_truncates_and_clamps() {
        assert_eq!(channel(128.9), 128);
        assert_eq!(channel(-3.0), 0);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(f32::NAN), 0);
    }

    #[test]
    fn fade_only_touches_alpha() {
        let faded = BLUE.fade(0.5);
        assert_eq!((faded.r, faded.g, faded.b), (BLUE.r, BLUE.g, BLUE.b));
        assert_eq!(faded.a, 127);
        assert_eq!(WHITE.fade(2.0).a, 255);
        assert_eq!(WHITE.fade(-1.0).a, 0);
    }
}
