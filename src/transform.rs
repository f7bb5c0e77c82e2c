use glam::DVec3;

/// Rotates `p` about the x-axis by `ax` (mixing y and z), then rotates the
/// result about the y-axis by `ay` (mixing x and z).
///
/// The two elementary rotations are applied in that order; they do not
/// commute, so this is not equivalent to any single fused matrix built from
/// the swapped order.
pub fn rotate(p: DVec3, ax: f64, ay: f64) -> DVec3 {
    let (sax, cax) = ax.sin_cos();
    let q = DVec3::new(p.x, p.z * sax + p.y * cax, p.z * cax - p.y * sax);
    let (say, cay) = ay.sin_cos();
    DVec3::new(q.x * cay - q.z * say, q.y, q.x * say + q.z * cay)
}

#[cfg(test)]
mod tests {
    use super::rotate;
    use glam::DVec3;

    const EPS: f64 = 1e-12;

    #[test]
    fn zero_angles_are_identity() {
        let p = DVec3::new(1.5, -2.25, 0.75);
        let q = rotate(p, 0.0, 0.0);
        assert!((q - p).length() < EPS);
    }

    #[test]
    fn rotation_preserves_norm() {
        let points = [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(-0.3, 2.1, 0.7),
            DVec3::new(3.0, -1.0, -2.5),
        ];
        let angles = [(0.0, 0.0), (0.4, -0.9), (2.7, 5.3), (-1.1, 0.2)];
        for p in points {
            for (ax, ay) in angles {
                let q = rotate(p, ax, ay);
                assert!(
                    (q.length() - p.length()).abs() < EPS,
                    "norm changed for p={p:?} ax={ax} ay={ay}"
                );
            }
        }
    }

    #[test]
    fn composition_matches_sequential_elementary_rotations() {
        let p = DVec3::new(0.8, -1.6, 2.4);
        let (ax, ay) = (0.7, -1.3);
        let sequential = rotate(rotate(p, ax, 0.0), 0.0, ay);
        let combined = rotate(p, ax, ay);
        assert!((sequential - combined).length() < EPS);
    }

    #[test]
    fn rotation_order_is_not_commutative() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        let (ax, ay) = (0.9, 0.4);
        let xy = rotate(p, ax, ay);
        let yx = rotate(rotate(p, 0.0, ay), ax, 0.0);
        assert!((xy - yx).length() > 1e-3);
    }
}
