use crate::core::fractals::multibrot::algorithm::EscapeResult;
use std::f64::consts::LN_2;

/// Renormalizes an integer escape count into a continuous value.
///
/// Escaped points get `iterations + 1 - mu`, where
/// `mu = ln(ln|z| / ln 2) / ln 2` measures how far past the escape radius
/// the orbit overshot. The continuous value removes the visible banding a
/// raw integer count produces.
///
/// Points that never escaped, or whose final magnitude is at or below 1
/// (where the double logarithm is undefined), fall back to the raw count.
/// The result is always finite and non-negative.
#[must_use]
pub fn smooth_iteration_count(result: EscapeResult) -> f64 {
    let raw = f64::from(result.iterations);

    if !result.escaped {
        return raw;
    }

    let zn = result.final_z.magnitude();
    if !(zn > 1.0) {
        return raw;
    }

    let mu = (zn.ln() / LN_2).ln() / LN_2;
    let smooth = raw + 1.0 - mu;

    if smooth.is_finite() { smooth.max(0.0) } else { raw }
}
