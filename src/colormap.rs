// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small registry of sequential color maps, named the way most
//! plotting tools name them.  Each map is a list of evenly spaced
//! color stops; values between stops are linearly interpolated.  Any
//! name may carry an `_r` suffix to run the map backwards.

use num::clamp;

use crate::error::{MandelbrotError, Result};

const GRAY: &[u32] = &[0x000000, 0xffffff];
const BINARY: &[u32] = &[0xffffff, 0x000000];
const HOT: &[u32] = &[0x0b0000, 0xff0000, 0xffff00, 0xffffff];
const VIRIDIS: &[u32] = &[
    0x440154, 0x482475, 0x414487, 0x355f8d, 0x2a788e, 0x21918c, 0x22a884, 0x44bf70, 0x7ad151,
    0xbddf26, 0xfde725,
];
const MAGMA: &[u32] = &[
    0x000004, 0x140e36, 0x3b0f70, 0x641a80, 0x8c2981, 0xb73779, 0xde4968, 0xf7705c, 0xfe9f6d,
    0xfecf92, 0xfcfdbf,
];
const INFERNO: &[u32] = &[
    0x000004, 0x160b39, 0x420a68, 0x6a176e, 0x932667, 0xbc3754, 0xdd513a, 0xf37819, 0xfca50a,
    0xf6d746, 0xfcffa4,
];
const PLASMA: &[u32] = &[
    0x0d0887, 0x41049d, 0x6a00a8, 0x8f0da4, 0xb12a90, 0xcc4778, 0xe16462, 0xf2844b, 0xfca636,
    0xfcce25, 0xf0f921,
];
const BLUES: &[u32] = &[
    0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6, 0x4292c6, 0x2171b5, 0x08519c, 0x08306b,
];
const GREENS: &[u32] = &[
    0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476, 0x41ab5d, 0x238b45, 0x006d2c, 0x00441b,
];
const REDS: &[u32] = &[
    0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a, 0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d,
];

const REGISTRY: &[(&str, &[u32])] = &[
    ("gray", GRAY),
    ("binary", BINARY),
    ("hot", HOT),
    ("viridis", VIRIDIS),
    ("magma", MAGMA),
    ("inferno", INFERNO),
    ("plasma", PLASMA),
    ("Blues", BLUES),
    ("Greens", GREENS),
    ("Reds", REDS),
];

/// The map used when graded mode is not given one.
pub const DEFAULT_GRADED: &str = "viridis";

/// The map binary mode always uses: bounded points black on white.
pub const BINARY_MODE: &str = "gray_r";

/// A resolved color map.
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    name: String,
    stops: &'static [u32],
    reversed: bool,
}

fn rgb(hex: u32) -> [f64; 3] {
    [
        f64::from((hex >> 16) & 0xff),
        f64::from((hex >> 8) & 0xff),
        f64::from(hex & 0xff),
    ]
}

impl Colormap {
    /// Looks a map up by name.  Names are case sensitive.
    pub fn by_name(name: &str) -> Result<Colormap> {
        let (base, reversed) = if name.ends_with("_r") {
            (&name[..name.len() - 2], true)
        } else {
            (name, false)
        };
        REGISTRY
            .iter()
            .find(|(candidate, _)| *candidate == base)
            .map(|&(_, stops)| Colormap {
                name: name.to_string(),
                stops,
                reversed,
            })
            .ok_or_else(|| MandelbrotError::UnknownColormap(name.to_string()))
    }

    /// The names of every registered map, without their reversals.
    pub fn names() -> Vec<&'static str> {
        REGISTRY.iter().map(|(name, _)| *name).collect()
    }

    /// The name this map was looked up under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color at `t`, where 0 is the low end of the map and 1 the
    /// high end.  Values outside that range are clamped, NaN is 0.
    pub fn color_at(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { clamp(t, 0.0, 1.0) };
        let t = if self.reversed { 1.0 - t } else { t };

        let last = self.stops.len() - 1;
        let position = t * last as f64;
        let index = (position.floor() as usize).min(last);
        let next = (index + 1).min(last);
        let fraction = position - index as f64;

        let (lo, hi) = (rgb(self.stops[index]), rgb(self.stops[next]));
        let mut color = [0u8; 3];
        for channel in 0..3 {
            let value = lo[channel] + (hi[channel] - lo[channel]) * fraction;
            color[channel] = clamp(value.round(), 0.0, 255.0) as u8;
        }
        color
    }
}
