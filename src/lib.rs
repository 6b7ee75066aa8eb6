#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Generalized Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane
//! for which the orbit `0, c, c^2 + c, ...` never wanders off to
//! infinity.  This crate generalizes the squaring to any positive
//! integer power, `z -> z^p + c`, samples a square grid over a
//! rectangle of the plane, and decides for each sample whether it is
//! in the set.
//!
//! There are two ways to report the answer.  The binary pass marks
//! each point 1 (bounded) or 0 (escaped).  The graded pass counts how
//! long each orbit stayed inside the escape radius, which gives the
//! familiar colored bands around the set when fed through a color map.
//!
//! ```
//! use mandelbrot::{compute_binary, Region};
//!
//! let region = Region::new(-2.0, 2.0, -2.0, 2.0).unwrap();
//! let raster = compute_binary(25, 5, &region, 2).unwrap();
//! assert_eq!(raster.get(2, 2), 1);
//! ```

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;

pub mod colormap;
pub mod error;
pub mod escape;
pub mod output;
pub mod params;
pub mod planes;
pub mod raster;
pub mod renderer;

pub use colormap::Colormap;
pub use error::{MandelbrotError, Result};
pub use params::{Iterations, Mode, Power};
pub use planes::{linspace, Region, SamplingGrid};
pub use raster::Raster;
pub use renderer::{compute_binary, compute_graded, EscapeTimeRenderer};
