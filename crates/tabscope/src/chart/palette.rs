//! Sequential color scale used to grade bars.

use plotters::style::RGBColor;

/// Plasma scale sampled at 0.0, 0.1, ..., 1.0.
const PLASMA: [(u8, u8, u8); 11] = [
    (13, 8, 135),
    (65, 4, 157),
    (106, 0, 168),
    (143, 13, 164),
    (177, 42, 144),
    (204, 71, 120),
    (225, 100, 98),
    (242, 132, 75),
    (252, 166, 54),
    (252, 206, 37),
    (240, 249, 33),
];

/// Map `t` in [0, 1] to a plasma color by linear interpolation between the
/// sampled stops. Out-of-range and NaN inputs clamp to the ends.
pub fn plasma(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (PLASMA.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = (lower + 1).min(PLASMA.len() - 1);
    let frac = pos - lower as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (r0, g0, b0) = PLASMA[lower];
    let (r1, g1, b1) = PLASMA[upper];

    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}
