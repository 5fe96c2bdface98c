//! Unit conversion utilities.
//!
//! WordprocessingML stores lengths in twentieths of a point (twips), font sizes
//! in half-points and automatic line spacing in 240ths of a line. Everything the
//! extractor reports is expressed in points (or as a line multiple).

pub const TWIPS_PER_PT: f64 = 20.0;
pub const HALF_POINTS_PER_PT: f64 = 2.0;
pub const LINE_UNITS_PER_LINE: f64 = 240.0;

#[inline]
pub fn twips_to_pt(twips: i64) -> f64 {
    twips as f64 / TWIPS_PER_PT
}

#[inline]
pub fn half_points_to_pt(half_points: i64) -> f64 {
    half_points as f64 / HALF_POINTS_PER_PT
}

#[inline]
pub fn line_units_to_multiple(units: i64) -> f64 {
    units as f64 / LINE_UNITS_PER_LINE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(twips_to_pt(720), 36.0);
        assert_eq!(twips_to_pt(-360), -18.0);
        assert_eq!(half_points_to_pt(24), 12.0);
        assert_eq!(half_points_to_pt(21), 10.5);
        assert_eq!(line_units_to_multiple(276), 1.15);
    }
}
