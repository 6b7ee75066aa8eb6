// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a raster into pixels and pixels into a file.  The raster is
//! stretched linearly so that its smallest value lands on the low end
//! of the color map and its largest on the high end, and row 0 is
//! drawn at the top of the image.

use std::path::Path;

use image::ColorType;
use log::info;

use crate::colormap::Colormap;
use crate::error::{MandelbrotError, Result};
use crate::params::{Iterations, Mode, Power};
use crate::raster::Raster;

/// Rescales every cell into `[0, 1]` by the raster's own minimum and
/// maximum.  A raster with a single distinct value maps to all zeros.
pub fn normalize<T>(raster: &Raster<T>) -> Vec<f64>
where
    T: Copy + Into<f64>,
{
    let values: Vec<f64> = raster.cells().iter().map(|v| (*v).into()).collect();
    let min = values.iter().cloned().fold(std::f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(std::f64::NEG_INFINITY, f64::max);
    let range = max - min;
    values
        .iter()
        .map(|v| if range > 0.0 { (v - min) / range } else { 0.0 })
        .collect()
}

/// The raster as packed 8-bit RGB, three bytes per cell, row 0 first.
pub fn to_rgb<T>(raster: &Raster<T>, colormap: &Colormap) -> Vec<u8>
where
    T: Copy + Into<f64>,
{
    normalize(raster)
        .into_iter()
        .flat_map(|t| colormap.color_at(t).to_vec())
        .collect()
}

/// The caption describing what an image shows.
pub fn title(mode: Mode, power: Power, iterations: Iterations) -> String {
    format!(
        "Mandelbrot set (z -> z^{}+c) at iteration {} {}",
        power,
        mode.comparison_symbol(),
        iterations
    )
}

/// Colors the raster and writes it to `path`.  The format follows the
/// file extension.
pub fn write_image<T, P>(path: P, raster: &Raster<T>, colormap: &Colormap) -> Result<()>
where
    T: Copy + Into<f64>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let pixels = to_rgb(raster, colormap);
    let side = raster.size() as u32;
    image::save_buffer(path, &pixels, side, side, ColorType::RGB(8)).map_err(|e| {
        MandelbrotError::Write {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;
    info!(
        "wrote {}x{} image to {} using {}",
        side,
        side,
        path.display(),
        colormap.name()
    );
    Ok(())
}
