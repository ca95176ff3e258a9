//! Ball colors
//!
//! Purely cosmetic. The only color the simulation itself assigns is the
//! "dead" color an overspeed ball is repainted with.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for shaders (alpha = 1)
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }

    /// True if no two channels are within 30 of each other and the color
    /// isn't near-white
    pub fn is_vibrant(self) -> bool {
        let (r, g, b) = (self.r as i16, self.g as i16, self.b as i16);
        let spread = (r - g).abs() > 30 && (r - b).abs() > 30 && (g - b).abs() > 30;
        let whitish = r > 200 && g > 200 && b > 200;
        spread && !whitish
    }
}

/// Color an overspeed ball is repainted with
pub const DEATH_COLOR: Rgb = Rgb::new(0, 0, 100);

/// Arena floor color used by the draw layer
pub const ARENA_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Background outside the arena (same as the death color, so dead balls
/// read as holes)
pub const BACKGROUND_COLOR: Rgb = DEATH_COLOR;

/// Pick a random vibrant color, resampling until one passes `Rgb::is_vibrant`.
///
/// Channels are drawn from 100..=255 so colors never get too dark.
pub fn generate_vibrant_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    loop {
        let candidate = Rgb::new(
            rng.random_range(100..=255),
            rng.random_range(100..=255),
            rng.random_range(100..=255),
        );
        if candidate.is_vibrant() {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generated_colors_are_vibrant() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let c = generate_vibrant_color(&mut rng);
            assert!(c.is_vibrant(), "{:?} should be vibrant", c);
            assert!(c.r >= 100 && c.g >= 100 && c.b >= 100);
        }
    }

    #[test]
    fn test_is_vibrant_rejects_grey_and_white() {
        assert!(!Rgb::new(150, 160, 170).is_vibrant());
        assert!(!Rgb::new(210, 250, 240).is_vibrant());
        assert!(Rgb::new(255, 100, 180).is_vibrant());
    }

    #[test]
    fn test_rgba_normalization() {
        let c = Rgb::new(255, 0, 51).to_rgba_f32();
        assert_eq!(c, [1.0, 0.0, 0.2, 1.0]);
    }
}
