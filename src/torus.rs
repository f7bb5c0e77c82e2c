use glam::DVec3;
use std::f64::consts::TAU;

/// A point on the torus surface paired with the point on the central ring
/// (the radius-`major_radius` circle in the x-z plane) sharing its `u`
/// parameter. The ring point is what the shader later derives the outward
/// normal from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    pub point: DVec3,
    pub ring: DVec3,
}

/// Origin-centered torus with two independent angular discretizations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Torus {
    pub major_radius: f64,
    pub minor_radius: f64,
    pub u_steps: u32,
    pub v_steps: u32,
}

impl Default for Torus {
    fn default() -> Self {
        Self {
            major_radius: 2.0,
            minor_radius: 1.0,
            u_steps: 100,
            v_steps: 100,
        }
    }
}

impl Torus {
    pub fn new(major_radius: f64, minor_radius: f64) -> Self {
        Self {
            major_radius,
            minor_radius,
            ..Self::default()
        }
    }

    pub fn with_steps(mut self, u_steps: u32, v_steps: u32) -> Self {
        self.u_steps = u_steps;
        self.v_steps = v_steps;
        self
    }

    /// Samples the surface at step indices `u` (around the central ring) and
    /// `v` (around the tube), each covering a full revolution in
    /// `u_steps`/`v_steps` increments. Pure function of its inputs.
    pub fn sample(&self, u: u32, v: u32) -> SurfaceSample {
        let a1 = TAU * f64::from(u) / f64::from(self.u_steps);
        let a2 = TAU * f64::from(v) / f64::from(self.v_steps);
        let (sa1, ca1) = a1.sin_cos();
        let (sa2, ca2) = a2.sin_cos();
        let tube = self.major_radius + ca2 * self.minor_radius;
        SurfaceSample {
            point: DVec3::new(ca1 * tube, sa2 * self.minor_radius, sa1 * tube),
            ring: DVec3::new(ca1 * self.major_radius, 0.0, sa1 * self.major_radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Torus;

    const EPS: f64 = 1e-9;

    #[test]
    fn every_sample_sits_one_minor_radius_off_the_ring() {
        let torus = Torus::default();
        for u in 0..torus.u_steps {
            for v in 0..torus.v_steps {
                let s = torus.sample(u, v);
                let d = (s.point - s.ring).length();
                assert!(
                    (d - torus.minor_radius).abs() < EPS,
                    "u={u} v={v} distance {d}"
                );
            }
        }
    }

    #[test]
    fn ring_points_lie_on_the_major_circle() {
        let torus = Torus::new(3.5, 0.25).with_steps(64, 16);
        for u in 0..torus.u_steps {
            let s = torus.sample(u, 0);
            assert_eq!(s.ring.y, 0.0);
            assert!((s.ring.length() - torus.major_radius).abs() < EPS);
        }
    }

    #[test]
    fn sampling_is_pure() {
        let torus = Torus::default();
        assert_eq!(torus.sample(17, 42), torus.sample(17, 42));
    }

    #[test]
    fn zero_sample_is_on_the_outer_equator() {
        let torus = Torus::default();
        let s = torus.sample(0, 0);
        assert!((s.point.x - (torus.major_radius + torus.minor_radius)).abs() < EPS);
        assert!(s.point.y.abs() < EPS);
        assert!(s.point.z.abs() < EPS);
    }
}
