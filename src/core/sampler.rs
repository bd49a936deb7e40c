use super::constants::RADIAL_EXPONENT;
use glam::Vec3;
use rand::Rng;

/// Map three unit draws onto a point inside a sphere of `radius`.
///
/// `u` and `v` pick a direction uniformly over the sphere surface, `w` picks
/// the radial distance as `radius * w^0.5`, which places more points near the
/// origin than a uniform-volume draw would.
#[inline]
pub fn sphere_point(u: f32, v: f32, w: f32, radius: f32) -> Vec3 {
    let theta = std::f32::consts::TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let r = radius * w.max(0.0).powf(RADIAL_EXPONENT);
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

#[inline]
pub fn sample_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let w: f32 = rng.gen();
    sphere_point(u, v, w, radius)
}
