//! Floor-based real remainder.
//!
//! The seed formulas and the map wrap-around both need a remainder whose
//! sign follows the divisor, not the dividend. `f64 % f64` truncates
//! toward zero and would leave negative inputs negative.

/// Computes `x - floor(x / m) * m`, the remainder of `x` modulo `m`.
///
/// For positive `m` the result lies in `[0, m)` regardless of the sign of
/// `x`. When rounding of the quotient pushes the raw value onto `m` (or a
/// hair below zero) it is folded back into range; if the fold itself
/// rounds out of range the result is `0.0`. Every in-range raw value is
/// returned unchanged.
///
/// # Parameters
/// - `x`: Any finite value.
/// - `m`: Positive modulus.
///
/// # Returns
/// The remainder in `[0, m)`.
///
/// # Examples
///
/// ```
/// use hsmatrix::utils::real::real_mod;
///
/// assert_eq!(real_mod(2.5, 1.0), 0.5);
/// assert_eq!(real_mod(-0.25, 1.0), 0.75);
/// ```
#[inline]
pub fn real_mod(x: f64, m: f64) -> f64 {
    let r = x - (x / m).floor() * m;
    if (0.0..m).contains(&r) {
        return r;
    }
    let folded = if r < 0.0 { r + m } else { r - m };
    if (0.0..m).contains(&folded) {
        folded
    } else {
        0.0
    }
}
