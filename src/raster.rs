// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The square grid of classification values handed from the engine
//! to the image writer.

use std::slice::Chunks;

/// A `size x size` grid stored row by row.  Row `j` holds the values
/// for the `j`th imaginary sample, column `i` those for the `i`th
/// real sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Raster<T> {
    /// Wraps a fully populated buffer.  Only the renderer builds these,
    /// and it always hands over exactly `size * size` cells.
    pub(crate) fn from_cells(size: usize, cells: Vec<T>) -> Raster<T> {
        debug_assert_eq!(cells.len(), size * size);
        Raster { size, cells }
    }

    /// The width, which is also the height.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The value at a row and column.
    pub fn get(&self, row: usize, column: usize) -> T {
        self.cells[row * self.size + column]
    }

    /// Every value, row after row.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// The rows, bottom (first imaginary sample) first.
    pub fn rows(&self) -> Chunks<T> {
        self.cells.chunks(self.size)
    }
}
