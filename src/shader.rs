use glam::DVec3;
use std::f64::consts::PI;

/// Lambert-style shading against a single fixed directional light.
///
/// Brightness is the angle between the surface normal and the light
/// direction, normalized to [0, 1]: 0.0 faces the light, 1.0 faces directly
/// away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LambertShader {
    light_dir: DVec3,
}

impl Default for LambertShader {
    fn default() -> Self {
        Self::new(DVec3::new(-1.0, -1.0, 2.0))
    }
}

impl LambertShader {
    /// The direction is normalized once here; `brightness` relies on it.
    pub fn new(light_dir: DVec3) -> Self {
        Self {
            light_dir: light_dir.normalize_or_zero(),
        }
    }

    pub fn light_dir(&self) -> DVec3 {
        self.light_dir
    }

    /// Outward unit normal at a rotated surface point, derived from the ring
    /// point rotated by the same angles. Unit length by construction of the
    /// torus parametrization.
    pub fn surface_normal(point: DVec3, ring: DVec3, minor_radius: f64) -> DVec3 {
        (point - ring) / minor_radius
    }

    /// acos(n . light) / pi for a unit `normal`. The dot product is clamped
    /// to [-1, 1] so rounding drift in the normal can never push acos into
    /// NaN.
    pub fn brightness(&self, normal: DVec3) -> f64 {
        normal.dot(self.light_dir).clamp(-1.0, 1.0).acos() / PI
    }
}
