use super::constants::*;
use super::palette::{jitter_pass, Palette};
use super::sampler::sample_sphere;
use rand::Rng;

/// Startup-time device classification; picks the point budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientClass {
    Mobile,
    Desktop,
}

impl ClientClass {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t)) {
            ClientClass::Mobile
        } else {
            ClientClass::Desktop
        }
    }

    #[inline]
    pub fn point_count(self) -> usize {
        match self {
            ClientClass::Mobile => POINT_COUNT_MOBILE,
            ClientClass::Desktop => POINT_COUNT_DESKTOP,
        }
    }
}

/// Rendering parameters for one view of the cloud. Sizes are world units with
/// perspective attenuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceStyle {
    pub size: f32,
    pub opacity: f32,
    pub depth_write: bool,
}

pub const CORE_STYLE: SurfaceStyle = SurfaceStyle {
    size: 0.035,
    opacity: 0.95,
    depth_write: true,
};

// Larger, faint copy drawn over the core as a cheap glow
pub const GLOW_STYLE: SurfaceStyle = SurfaceStyle {
    size: 0.11,
    opacity: 0.15,
    depth_write: false,
};

/// Parallel position/color buffers for every point in the swarm.
///
/// Positions are fixed once sampled; colors change only through
/// [`PointCloud::sparkle`], which raises a dirty flag for the renderer.
pub struct PointCloud {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    radius: f32,
    colors_dirty: bool,
}

impl PointCloud {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32, palette: &Palette) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            let p = sample_sphere(rng, radius);
            let c = palette.sample_initial_color(rng, p.y, radius);
            positions.push(p.to_array());
            colors.push(c.to_array());
        }
        Self {
            positions,
            colors,
            radius,
            colors_dirty: false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    /// One sparkle pass over all points; returns the number recolored.
    pub fn sparkle<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64) -> usize {
        let n = jitter_pass(rng, &mut self.colors, probability);
        if n > 0 {
            self.colors_dirty = true;
        }
        n
    }

    /// Returns the color buffer if it changed since the last call.
    pub fn take_dirty_colors(&mut self) -> Option<&[[f32; 3]]> {
        if std::mem::take(&mut self.colors_dirty) {
            Some(&self.colors)
        } else {
            None
        }
    }
}
