// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the Region struct, a rectangle on the complex plane, and
//! the SamplingGrid, which lays a square lattice of evenly spaced
//! sample points over that rectangle.  Row `j` of the lattice is the
//! `j`th imaginary sample, column `i` is the `i`th real sample.

use num::Complex;

use crate::error::{MandelbrotError, Result};

/// Describes the left-lower and right-upper corners of a rectangle
/// on the complex plane, treating the real part of each value as the
/// x-component and the imaginary part as the y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    leftlower: Complex<f64>,
    rightupper: Complex<f64>,
}

impl Region {
    /// Takes the real bounds `x1 < x2` and the imaginary bounds `y1 <
    /// y2`.  Bounds that are not finite, or that describe an empty or
    /// inverted range, are refused rather than repaired.
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Result<Region> {
        if !(x1.is_finite() && x2.is_finite() && y1.is_finite() && y2.is_finite()) {
            return Err(MandelbrotError::InvalidRegion(
                "all four bounds must be finite".to_string(),
            ));
        }

        if x1 >= x2 {
            return Err(MandelbrotError::InvalidRegion(format!(
                "the left bound {} is not to the left of the right bound {}",
                x1, x2
            )));
        }

        if y1 >= y2 {
            return Err(MandelbrotError::InvalidRegion(format!(
                "the bottom bound {} is not below the top bound {}",
                y1, y2
            )));
        }

        Ok(Region {
            leftlower: Complex::new(x1, y1),
            rightupper: Complex::new(x2, y2),
        })
    }

    /// The left-lower corner, `x1 + y1·i`.
    pub fn leftlower(&self) -> Complex<f64> {
        self.leftlower
    }

    /// The right-upper corner, `x2 + y2·i`.
    pub fn rightupper(&self) -> Complex<f64> {
        self.rightupper
    }
}

/// Returns `size` evenly spaced values from `lo` to `hi`.  Both ends
/// are included when there are at least two samples, and the last
/// one is exactly `hi` no matter how the steps rounded.  A single
/// sample is just `lo`.
pub fn linspace(lo: f64, hi: f64, size: usize) -> Result<Vec<f64>> {
    match size {
        0 => Err(MandelbrotError::EmptyGrid),
        1 => Ok(vec![lo]),
        _ => {
            let step = (hi - lo) / ((size - 1) as f64);
            let mut samples: Vec<f64> = (0..size).map(|i| lo + (i as f64) * step).collect();
            samples[size - 1] = hi;
            Ok(samples)
        }
    }
}

/// The square lattice of sample points laid over a region.
#[derive(Clone, Debug)]
pub struct SamplingGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SamplingGrid {
    /// Samples both axes of the region `size` times.
    pub fn new(region: &Region, size: usize) -> Result<SamplingGrid> {
        let (ll, ru) = (region.leftlower(), region.rightupper());
        Ok(SamplingGrid {
            xs: linspace(ll.re, ru.re, size)?,
            ys: linspace(ll.im, ru.im, size)?,
        })
    }

    /// The number of samples along each axis.
    pub fn size(&self) -> usize {
        self.xs.len()
    }

    /// The total number of sample points.
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// Describes that the grid has any points at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The real samples, left to right.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The imaginary samples, bottom to top.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// The complex number at a lattice position: the column picks the
    /// real part, the row picks the imaginary part.
    pub fn point(&self, row: usize, column: usize) -> Complex<f64> {
        Complex::new(self.xs[column], self.ys[row])
    }
}
