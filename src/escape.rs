// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluation of a single point.
//!
//! Every point `c` starts an orbit at `z_0 = 0` and repeatedly applies
//! `z -> z^p + c`.  If the orbit ever leaves the disc of radius 2 it
//! is going to infinity and the point is not in the set.  Two ways of
//! reporting this are supported, and they deliberately do not agree
//! on the boundary:
//!
//! * `is_bounded` steps `n - 1` times and calls a point divergent only
//!   when `|z| > 2`.  An orbit that sits exactly on the circle is
//!   bounded.
//! * `escape_count` looks at the `n` iterates `z_0 .. z_{n-1}` and
//!   counts them while `|z| < 2`.  An iterate exactly on the circle
//!   stops the count.
//!
//! Overflow is not special-cased in the arithmetic.  Floating point
//! saturates to infinity (or NaN, once `inf - inf` shows up), and a
//! non-finite magnitude counts as escaped in both variants.

use num::Complex;

/// The radius of the disc that a bounded orbit never leaves.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// One application of the recurrence, `z^p + c`.
#[inline]
pub fn step(z: Complex<f64>, c: Complex<f64>, power: u32) -> Complex<f64> {
    num::pow(z, power as usize) + c
}

/// The magnitude of `z`, or `None` if the arithmetic has overflowed.
#[inline]
fn magnitude(z: Complex<f64>) -> Option<f64> {
    let r = z.norm();
    if r.is_finite() {
        Some(r)
    } else {
        None
    }
}

/// The divergence test of the binary variant: strictly outside the
/// radius, or overflowed.
#[inline]
pub fn has_escaped(z: Complex<f64>) -> bool {
    magnitude(z).map_or(true, |r| r > ESCAPE_RADIUS)
}

/// The continuation test of the graded variant: strictly inside the
/// radius, and finite.
#[inline]
pub fn is_inside(z: Complex<f64>) -> bool {
    magnitude(z).map_or(false, |r| r < ESCAPE_RADIUS)
}

/// Runs the recurrence for `k = 1 .. iterations - 1` and reports
/// whether the orbit of `c` stayed bounded.  Stops at the first
/// escape.
pub fn is_bounded(c: Complex<f64>, iterations: u32, power: u32) -> bool {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for _ in 1..iterations {
        z = step(z, c, power);
        if has_escaped(z) {
            return false;
        }
    }
    true
}

/// Counts how many of the iterates `z_0 .. z_{iterations - 1}` of the
/// orbit of `c` stay strictly inside radius 2 before the first one
/// that does not.  The result is in `0..=iterations`.
pub fn escape_count(c: Complex<f64>, iterations: u32, power: u32) -> u32 {
    let mut z: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    let mut count = 0;
    for k in 0..iterations {
        if k > 0 {
            z = step(z, c, power);
        }
        if !is_inside(z) {
            break;
        }
        count += 1;
    }
    count
}

/// The first `terms` values of the sequence `w_0 = c`,
/// `w_i = w_{i-1}^p + c`; that is, the orbit of `c` without its
/// leading zero.  Nothing is cut off when the orbit escapes.
pub fn orbit(c: Complex<f64>, terms: usize, power: u32) -> Vec<Complex<f64>> {
    let mut sequence = Vec::with_capacity(terms);
    let mut z = c;
    for _ in 0..terms {
        sequence.push(z);
        z = step(z, c, power);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn origin_is_a_fixed_point() {
        for n in &[1, 2, 25, 500] {
            assert!(is_bounded(c(0.0, 0.0), *n, 2));
            assert_eq!(escape_count(c(0.0, 0.0), *n, 2), *n);
        }
    }

    #[test]
    fn three_escapes_on_the_first_step() {
        assert!(!is_bounded(c(3.0, 0.0), 2, 2));
        assert!(!is_bounded(c(3.0, 0.0), 25, 2));
        assert_eq!(escape_count(c(3.0, 0.0), 2, 2), 1);
        assert_eq!(escape_count(c(3.0, 0.0), 25, 2), 1);
    }

    #[test]
    fn a_single_iteration_decides_nothing() {
        assert!(is_bounded(c(3.0, 0.0), 1, 2));
        assert!(is_bounded(c(100.0, -100.0), 1, 5));
        assert_eq!(escape_count(c(3.0, 0.0), 1, 2), 1);
        assert_eq!(escape_count(c(100.0, -100.0), 1, 5), 1);
    }

    #[test]
    fn the_circle_itself_is_bounded_but_not_counted() {
        // -2 -> -2 -> 2 -> 2 -> ...: every iterate after z_0 has
        // magnitude exactly 2.
        let minus_two = c(-2.0, 0.0);
        assert!(is_bounded(minus_two, 50, 2));
        assert_eq!(escape_count(minus_two, 50, 2), 1);

        // 2 lands on the circle once, then leaves for 6.
        let two = c(2.0, 0.0);
        assert!(is_bounded(two, 2, 2));
        assert!(!is_bounded(two, 3, 2));
        assert_eq!(escape_count(two, 3, 2), 1);
    }

    #[test]
    fn period_two_orbit_stays_bounded() {
        // -1 -> 0 -> -1 -> 0 ...
        assert!(is_bounded(c(-1.0, 0.0), 100, 2));
        assert_eq!(escape_count(c(-1.0, 0.0), 100, 2), 100);
    }

    #[test]
    fn overflow_counts_as_escape() {
        // With this power the second iterate is already infinite.
        let huge = c(1.0e200, 0.0);
        assert!(has_escaped(step(huge, huge, 9)));
        assert!(!is_bounded(huge, 10, 9));
        assert_eq!(escape_count(huge, 10, 9), 1);
    }

    #[test]
    fn overflow_on_the_circle_counts_as_escape() {
        // -2 stays on the circle until the huge power blows z_2 up to
        // NaN, which no magnitude comparison would ever reject.
        let minus_two = c(-2.0, 0.0);
        let power = 1_000_000_001;
        let z1 = step(c(0.0, 0.0), minus_two, power);
        assert_eq!(z1, minus_two);
        assert!(is_bounded(minus_two, 2, power));
        assert!(has_escaped(step(z1, minus_two, power)));
        assert!(!is_bounded(minus_two, 5, power));
        assert_eq!(escape_count(minus_two, 5, power), 1);
    }

    #[test]
    fn non_finite_values_are_escaped_and_not_inside() {
        let nan = c(std::f64::NAN, 0.0);
        let inf = c(std::f64::INFINITY, std::f64::NEG_INFINITY);
        assert!(has_escaped(nan));
        assert!(has_escaped(inf));
        assert!(!is_inside(nan));
        assert!(!is_inside(inf));
    }

    #[test]
    fn higher_powers_change_the_orbit() {
        // 0.3 is outside the cusp of the classic set and drifts out
        // within a dozen steps, but under z^3 it settles near 0.34.
        assert!(!is_bounded(c(0.3, 0.0), 50, 2));
        assert!(is_bounded(c(0.3, 0.0), 50, 3));
        assert!(!is_bounded(c(-1.1, 0.0), 10, 3));
    }

    #[test]
    fn counts_never_shrink_as_the_bound_grows() {
        let points = [c(0.3, 0.5), c(-0.75, 0.1), c(0.26, 0.0), c(-1.9, 0.01)];
        for point in points.iter() {
            let mut previous = 0;
            for n in 1..60 {
                let count = escape_count(*point, n, 2);
                assert!(count >= previous);
                assert!(count <= n);
                previous = count;
            }
        }
    }

    #[test]
    fn orbit_starts_at_c() {
        let seq = orbit(c(1.0, 0.0), 4, 2);
        assert_eq!(seq, vec![c(1.0, 0.0), c(2.0, 0.0), c(5.0, 0.0), c(26.0, 0.0)]);
        assert!(orbit(c(1.0, 0.0), 0, 2).is_empty());
    }

    #[test]
    fn step_with_power_one_is_a_translation() {
        assert_eq!(step(c(1.0, 2.0), c(0.5, -1.0), 1), c(1.5, 1.0));
    }
}
