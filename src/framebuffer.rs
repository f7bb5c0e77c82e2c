/// Character grid plus an inverse-depth grid, both rebuilt every frame.
/// Depth values start at 0.0 (infinitely far) and only grow within a frame;
/// each cell ends up holding the glyph of the nearest sample that hit it.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
    inv_depth: Vec<f64>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let n = width.saturating_mul(height);
        Self {
            width,
            height,
            glyphs: vec![' '; n],
            inv_depth: vec![0.0; n],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.glyphs.fill(' ');
        self.inv_depth.fill(0.0);
    }

    pub fn glyph(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.glyphs[row * self.width + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.glyphs.chunks(self.width.max(1))
    }

    /// Writes `glyph` at (col, row) only when `inv_depth` is strictly greater
    /// than the stored value, i.e. this sample is nearer than whatever wrote
    /// there before. Ties keep the earlier write, which together with the
    /// fixed sampling order makes frames deterministic. Out-of-bounds writes
    /// return false and touch nothing.
    pub fn try_write(&mut self, col: usize, row: usize, inv_depth: f64, glyph: char) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let i = row * self.width + col;
        if inv_depth > self.inv_depth[i] {
            self.inv_depth[i] = inv_depth;
            self.glyphs[i] = glyph;
            true
        } else {
            false
        }
    }

    pub fn hash64(&self) -> u64 {
        let mut h = 0xcbf2_9ce4_8422_2325_u64;
        h = fnv1a_u64(h, &(self.width as u64).to_le_bytes());
        h = fnv1a_u64(h, &(self.height as u64).to_le_bytes());
        for &g in &self.glyphs {
            h = fnv1a_u64(h, &(g as u32).to_le_bytes());
        }
        for &z in &self.inv_depth {
            h = fnv1a_u64(h, &z.to_bits().to_le_bytes());
        }
        h
    }
}

fn fnv1a_u64(mut h: u64, bytes: &[u8]) -> u64 {
    let prime = 0x0100_0000_01b3_u64;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(prime);
    }
    h
}
