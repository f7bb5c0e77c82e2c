/// Ordered glyph sequence, sparsest to densest, used to approximate a
/// continuous brightness scalar with discrete characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiRamp {
    bytes: Vec<u8>,
}

impl AsciiRamp {
    pub fn new(chars: &str) -> Self {
        AsciiRamp {
            bytes: chars.as_bytes().to_vec(),
        }
    }

    /// The 13-entry ramp the classic donut uses.
    pub fn donut() -> Self {
        AsciiRamp::new(".,-~:;=!*#$@@")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Maps `t` in [0, 1] to a glyph via floor(t * (len - 1)). Values outside
    /// [0, 1] are clamped first, and the index is clamped to the last entry,
    /// so t exactly 1.0 (or nudged above it by rounding) still selects the
    /// densest glyph rather than overflowing.
    pub fn map_scalar_to_char(&self, t: f64) -> char {
        if self.bytes.is_empty() {
            return ' ';
        }
        let last = self.bytes.len() - 1;
        let i = (t.clamp(0.0, 1.0) * last as f64).floor() as usize;
        self.bytes[i.min(last)] as char
    }
}

impl Default for AsciiRamp {
    fn default() -> Self {
        AsciiRamp::donut()
    }
}

#[cfg(test)]
mod tests {
    use super::AsciiRamp;

    #[test]
    fn donut_ramp_has_thirteen_glyphs() {
        assert_eq!(AsciiRamp::donut().len(), 13);
    }

    #[test]
    fn endpoints_select_first_and_last_glyphs() {
        let ramp = AsciiRamp::donut();
        assert_eq!(ramp.map_scalar_to_char(0.0), '.');
        assert_eq!(ramp.map_scalar_to_char(1.0), '@');
    }

    #[test]
    fn out_of_range_scalars_are_clamped() {
        let ramp = AsciiRamp::donut();
        assert_eq!(ramp.map_scalar_to_char(-0.5), '.');
        assert_eq!(ramp.map_scalar_to_char(1.5), '@');
        assert_eq!(ramp.map_scalar_to_char(1.0 + f64::EPSILON), '@');
    }

    #[test]
    fn index_is_floor_of_scaled_scalar() {
        let ramp = AsciiRamp::new("abcd");
        assert_eq!(ramp.map_scalar_to_char(0.0), 'a');
        assert_eq!(ramp.map_scalar_to_char(0.34), 'b');
        assert_eq!(ramp.map_scalar_to_char(0.67), 'c');
        assert_eq!(ramp.map_scalar_to_char(0.999), 'c');
        assert_eq!(ramp.map_scalar_to_char(1.0), 'd');
    }

    #[test]
    fn empty_ramp_maps_to_space() {
        let ramp = AsciiRamp::new("");
        assert!(ramp.is_empty());
        assert_eq!(ramp.map_scalar_to_char(0.5), ' ');
    }
}
