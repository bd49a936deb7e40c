use super::constants::*;
use glam::Vec3;
use rand::Rng;

/// Split a packed `0xRRGGBB` value into unit RGB channels.
#[inline]
pub fn rgb_from_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
fn hue_channel(lo: f32, hi: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

/// HSL to RGB with the hue in turns (`0.0..1.0`, wrapped) and unit
/// saturation/lightness.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lo = 2.0 * l - hi;
    Vec3::new(
        hue_channel(lo, hi, hue + 1.0 / 3.0),
        hue_channel(lo, hi, hue),
        hue_channel(lo, hi, hue - 1.0 / 3.0),
    )
}

/// Two-tone gradient used for the initial point colors.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub low: Vec3,
    pub high: Vec3,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            low: rgb_from_hex(PALETTE_LOW_HEX),
            high: rgb_from_hex(PALETTE_HIGH_HEX),
        }
    }
}

impl Palette {
    #[inline]
    pub fn lerp(&self, t: f32) -> Vec3 {
        self.low + (self.high - self.low) * t
    }

    /// Height-biased color for a point at height `y`; `jitter01` is a unit
    /// random draw that nudges the blend by up to +/- BLEND_JITTER / 2.
    pub fn initial_color(&self, y: f32, radius: f32, jitter01: f32) -> Vec3 {
        self.lerp(blend_factor(y, radius, jitter01))
    }

    pub fn sample_initial_color<R: Rng + ?Sized>(&self, rng: &mut R, y: f32, radius: f32) -> Vec3 {
        let jitter01: f32 = rng.gen();
        self.initial_color(y, radius, jitter01)
    }
}

#[inline]
pub fn blend_factor(y: f32, radius: f32, jitter01: f32) -> f32 {
    let height = if radius > 0.0 { y / radius } else { 0.0 };
    (0.5 + 0.5 * height * HEIGHT_WEIGHT + (jitter01 - 0.5) * BLEND_JITTER).clamp(0.0, 1.0)
}

/// A random fully-saturated sparkle color.
#[inline]
pub fn sparkle_color<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    hsl_to_rgb(rng.gen::<f32>(), SPARKLE_SATURATION, SPARKLE_LIGHTNESS)
}

/// Recolor each entry of `colors` independently with probability
/// `probability`. Returns how many entries were overwritten.
pub fn jitter_pass<R: Rng + ?Sized>(rng: &mut R, colors: &mut [[f32; 3]], probability: f64) -> usize {
    let p = probability.clamp(0.0, 1.0);
    let mut recolored = 0;
    for c in colors.iter_mut() {
        if rng.gen_bool(p) {
            *c = sparkle_color(rng).to_array();
            recolored += 1;
        }
    }
    recolored
}

/// Tint hue in degrees after `elapsed_sec` seconds.
#[inline]
pub fn tint_hue_degrees(elapsed_sec: f64) -> f64 {
    (elapsed_sec * HUE_DEGREES_PER_SEC).rem_euclid(360.0)
}

/// Whole-cloud material tint after `elapsed_sec` seconds.
#[inline]
pub fn hue_tint(elapsed_sec: f64) -> Vec3 {
    let hue = tint_hue_degrees(elapsed_sec) / 360.0;
    hsl_to_rgb(hue as f32, TINT_SATURATION, TINT_LIGHTNESS)
}
