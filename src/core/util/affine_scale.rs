/// Linearly rescales `value` from `[from_min, from_max]` onto `[to_min, to_max]`.
///
/// The mapping is exact at both endpoints: `from_min` maps to `to_min` and
/// `from_max` maps to `to_max`. Callers must ensure `from_min != from_max`;
/// a degenerate source range divides by zero and yields a non-finite result.
#[must_use]
pub fn affine_scale(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    to_min + (to_max - to_min) * (value - from_min) / (from_max - from_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_map_exactly() {
        assert_eq!(affine_scale(0.0, 0.0, 499.0, -2.5, 1.0), -2.5);
        assert_eq!(affine_scale(499.0, 0.0, 499.0, -2.5, 1.0), 1.0);
    }

    #[test]
    fn test_midpoint_maps_to_midpoint() {
        assert_eq!(affine_scale(50.0, 0.0, 100.0, -1.0, 1.0), 0.0);
        assert_eq!(affine_scale(5.0, 0.0, 10.0, 0.0, 255.0), 127.5);
    }

    #[test]
    fn test_descending_target_range() {
        assert_eq!(affine_scale(0.0, 0.0, 10.0, 1.0, -1.0), 1.0);
        assert_eq!(affine_scale(10.0, 0.0, 10.0, 1.0, -1.0), -1.0);
    }

    #[test]
    fn test_values_outside_source_range_extrapolate() {
        assert_eq!(affine_scale(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
        assert_eq!(affine_scale(-10.0, 0.0, 10.0, 0.0, 1.0), -1.0);
    }

    #[test]
    fn test_degenerate_source_range_is_not_finite() {
        assert!(!affine_scale(0.0, 0.0, 0.0, 0.0, 255.0).is_finite());
    }
}
