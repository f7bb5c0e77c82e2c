use glam::DVec3;

/// A projected sample: integer cell coordinates plus the inverse depth used
/// both for perspective scaling and as the depth-buffer comparison key.
/// Larger inverse depth means nearer to the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub row: usize,
    pub col: usize,
    pub inv_depth: f64,
}

/// Perspective projector. Inverse depth is 1/(distance + z), so cells with
/// more negative z are nearer the viewer; `aspect` corrects for terminal
/// character cells being taller than they are wide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub width: usize,
    pub height: usize,
    pub distance: f64,
    pub aspect: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            width: 80,
            height: 22,
            distance: 6.0,
            aspect: 0.5,
        }
    }
}

impl Projector {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = aspect;
        self
    }

    /// Projects a view-space point to a screen cell, or `None` when the cell
    /// falls outside the grid. No clamping or wraparound; points behind the
    /// viewer (distance + q.z <= 0) are not clipped and project incorrectly,
    /// which the default constants never produce.
    pub fn project(&self, q: DVec3) -> Option<ScreenPoint> {
        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;
        let inv_depth = 1.0 / (self.distance + q.z);
        let x = q.x * half_w * inv_depth;
        let y = q.y * self.aspect * half_w * inv_depth;
        let row = (half_h - y).round();
        let col = (x + half_w).round();
        if row < 0.0 || row >= self.height as f64 || col < 0.0 || col >= self.width as f64 {
            return None;
        }
        Some(ScreenPoint {
            row: row as usize,
            col: col as usize,
            inv_depth,
        })
    }
}
