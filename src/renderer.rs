// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Drives the escape-time evaluation over a whole sampling grid.
//!
//! Every cell is independent of every other, so the multi-threaded
//! passes just cut the raster into bands of whole rows and give each
//! band to a scoped thread.  Each thread owns its slice of the output
//! outright; nothing is locked and the result does not depend on the
//! number of threads.

use itertools::iproduct;
use log::debug;
use num::Complex;

use crate::error::{MandelbrotError, Result};
use crate::escape::{escape_count, is_bounded};
use crate::params::{Iterations, Power};
use crate::planes::{Region, SamplingGrid};
use crate::raster::Raster;

/// Takes a region, a resolution, an iteration bound and a power, and
/// classifies every sample point of the region.  Once built, this
/// object is not mutable.
pub struct EscapeTimeRenderer {
    grid: SamplingGrid,
    iterations: Iterations,
    power: Power,
}

impl EscapeTimeRenderer {
    /// Requires the number of samples along each side, the region of
    /// the complex plane to cover, and the iteration parameters.
    pub fn new(
        size: usize,
        region: &Region,
        iterations: Iterations,
        power: Power,
    ) -> Result<Self> {
        Ok(EscapeTimeRenderer {
            grid: SamplingGrid::new(region, size)?,
            iterations,
            power,
        })
    }

    /// The grid the renderer samples.
    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    /// The iteration bound.
    pub fn iterations(&self) -> Iterations {
        self.iterations
    }

    /// The exponent.
    pub fn power(&self) -> Power {
        self.power
    }

    fn bounded_cell(&self, c: Complex<f64>) -> u8 {
        if is_bounded(c, self.iterations.get(), self.power.get()) {
            1
        } else {
            0
        }
    }

    fn graded_cell(&self, c: Complex<f64>) -> u32 {
        escape_count(c, self.iterations.get(), self.power.get())
    }

    /// Fills a band of whole rows, the first of which is `first_row`.
    fn fill_band<T, F>(&self, band: &mut [T], first_row: usize, classify: &F)
    where
        F: Fn(Complex<f64>) -> T,
    {
        let size = self.grid.size();
        let rows = band.len() / size;
        for ((row, column), cell) in iproduct!(first_row..first_row + rows, 0..size).zip(band) {
            *cell = classify(self.grid.point(row, column));
        }
    }

    fn single<T, F>(&self, classify: F) -> Raster<T>
    where
        T: Copy + Default,
        F: Fn(Complex<f64>) -> T,
    {
        let mut cells = vec![T::default(); self.grid.len()];
        self.fill_band(&mut cells, 0, &classify);
        Raster::from_cells(self.grid.size(), cells)
    }

    fn threaded<T, F>(&self, threads: usize, classify: F) -> Result<Raster<T>>
    where
        T: Copy + Default + Send,
        F: Fn(Complex<f64>) -> T + Sync,
    {
        let size = self.grid.size();
        let threads = threads.max(1).min(size);
        let rows_per_band = (size + threads - 1) / threads;
        debug!(
            "rendering {} rows in bands of {} on {} threads",
            size, rows_per_band, threads
        );

        let mut cells = vec![T::default(); self.grid.len()];
        let classify = &classify;
        crossbeam::scope(|spawner| {
            for (index, band) in cells.chunks_mut(rows_per_band * size).enumerate() {
                spawner.spawn(move |_| {
                    self.fill_band(band, index * rows_per_band, classify);
                });
            }
        })
        .map_err(|_| MandelbrotError::WorkerPanicked)?;

        Ok(Raster::from_cells(size, cells))
    }

    /// The binary classification on the calling thread: 1 for points
    /// whose orbits stayed bounded, 0 for those that escaped.
    pub fn binary_single(&self) -> Raster<u8> {
        self.single(|c| self.bounded_cell(c))
    }

    /// The binary classification, split over `threads` threads.
    pub fn binary(&self, threads: usize) -> Result<Raster<u8>> {
        self.threaded(threads, |c| self.bounded_cell(c))
    }

    /// The graded classification on the calling thread: each cell is
    /// the number of leading iterates that stayed inside radius 2.
    pub fn graded_single(&self) -> Raster<u32> {
        self.single(|c| self.graded_cell(c))
    }

    /// The graded classification, split over `threads` threads.
    pub fn graded(&self, threads: usize) -> Result<Raster<u32>> {
        self.threaded(threads, |c| self.graded_cell(c))
    }
}

/// Classifies every point of a `size x size` grid over `region` as
/// bounded (1) or escaped (0) after at most `n` iterations of
/// `z -> z^p + c`.
pub fn compute_binary(n: u32, size: usize, region: &Region, p: u32) -> Result<Raster<u8>> {
    let renderer = EscapeTimeRenderer::new(size, region, Iterations::new(n)?, Power::new(p)?)?;
    Ok(renderer.binary_single())
}

/// Gives every point of a `size x size` grid over `region` its escape
/// count, a value in `0..=n`.
pub fn compute_graded(n: u32, size: usize, region: &Region, p: u32) -> Result<Raster<u32>> {
    let renderer = EscapeTimeRenderer::new(size, region, Iterations::new(n)?, Power::new(p)?)?;
    Ok(renderer.graded_single())
}
