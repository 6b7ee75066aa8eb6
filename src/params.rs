// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The iteration parameters.  These are checked once, when they are
//! built, so the per-pixel loop never has to.

use std::fmt;

use crate::error::{MandelbrotError, Result};

/// The maximum number of iterations, at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Iterations(u32);

impl Iterations {
    /// Refuses zero.
    pub fn new(n: u32) -> Result<Iterations> {
        if n < 1 {
            return Err(MandelbrotError::NoIterations);
        }
        Ok(Iterations(n))
    }

    /// The bound as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Iterations {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The exponent `p` in `z -> z^p + c`, an integer of at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Power(u32);

impl Power {
    /// Refuses zero.
    pub fn new(p: u32) -> Result<Power> {
        if p < 1 {
            return Err(MandelbrotError::InvalidPower(f64::from(p)));
        }
        Ok(Power(p))
    }

    /// Accepts a real exponent only if it is a whole number in range.
    /// `2.0` is fine; `2.5` is refused instead of being quietly
    /// truncated to `2`.
    pub fn from_real(p: f64) -> Result<Power> {
        if !p.is_finite() || p.fract() != 0.0 || p < 1.0 || p > f64::from(std::u32::MAX) {
            return Err(MandelbrotError::InvalidPower(p));
        }
        Ok(Power(p as u32))
    }

    /// The exponent as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a pixel is reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// 1 if the orbit stayed bounded, 0 if it escaped.
    Binary,
    /// The number of leading iterates that stayed inside radius 2.
    Graded,
}

impl Mode {
    /// The comparison used in the image title: a binary image shows
    /// the set *at* iteration n, a graded one everything up to it.
    pub fn comparison_symbol(self) -> &'static str {
        match self {
            Mode::Binary => "=",
            Mode::Graded => "<=",
        }
    }
}
