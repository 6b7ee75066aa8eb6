// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use log::{debug, info};
use std::str::FromStr;
use std::time::Instant;

use mandelbrot::colormap::{BINARY_MODE, DEFAULT_GRADED};
use mandelbrot::output::{title, write_image};
use mandelbrot::{Colormap, EscapeTimeRenderer, Iterations, Mode, Power, Region};

fn validate_number<T: FromStr>(s: &str, isnotanumber_err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const MODE: &str = "mode";
const ITERATIONS: &str = "iter";
const SIZE: &str = "size";
const X1: &str = "x1";
const X2: &str = "x2";
const Y1: &str = "y1";
const Y2: &str = "y2";
const POWER: &str = "power";
const OUTPUT: &str = "out";
const CMAP: &str = "cmap";
const THREADS: &str = "threads";
const VERBOSE: &str = "verbose";

fn bound(name: &'static str, default: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .required(false)
        .long(name)
        .takes_value(true)
        .allow_hyphen_values(true)
        .default_value(default)
        .validator(|s| validate_number::<f64>(&s, "Could not parse bounding box endpoint"))
        .help(help)
}

fn args() -> ArgMatches<'static> {
    let max_threads = num_cpus::get();

    App::new("mandelbrot")
        .version("1.0.0")
        .about("Mathematical tool for visualizing sections of the Mandelbrot set")
        .arg(
            Arg::with_name(MODE)
                .index(1)
                .required(false)
                .possible_values(&["color"])
                .help("Color the image by escape count instead of set membership"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("n")
                .takes_value(true)
                .default_value("25")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        std::u32::MAX,
                        "Could not parse iteration count",
                        "Iteration count must be at least 1",
                    )
                })
                .help("The max iteration number to check"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("250")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u32::from(std::u16::MAX),
                        "Could not parse image size",
                        "Image size must be between 1 and 65535",
                    )
                })
                .help("Width/Height of the output image"),
        )
        .arg(bound(X1, "-2.0", "Left endpoint of the bounding box"))
        .arg(bound(X2, "2.0", "Right endpoint of the bounding box"))
        .arg(bound(Y1, "-2.0", "Bottom endpoint of the bounding box"))
        .arg(bound(Y2, "2.0", "Top endpoint of the bounding box"))
        .arg(
            Arg::with_name(POWER)
                .required(false)
                .long(POWER)
                .short("p")
                .takes_value(true)
                .default_value("2")
                .validator(|s| match f64::from_str(&s) {
                    Ok(p) => Power::from_real(p).map(|_| ()).map_err(|e| e.to_string()),
                    Err(_) => Err("Could not parse power".to_string()),
                })
                .help("The power z is raised to in z -> z^p+c"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file path"),
        )
        .arg(
            Arg::with_name(CMAP)
                .required(false)
                .long(CMAP)
                .short("m")
                .takes_value(true)
                .help("Colormap to use (if the \"color\" argument is given)"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .help("Show runtime info"),
        )
        .get_matches()
}

/// Pulls an already validated value out of the matches.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, failure::Error>
where
    T::Err: std::fmt::Display,
{
    let raw = matches
        .value_of(name)
        .ok_or_else(|| failure::format_err!("missing value for --{}", name))?;
    T::from_str(raw).map_err(|e| failure::format_err!("could not parse --{}: {}", name, e))
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let mode = if matches.is_present(MODE) {
        Mode::Graded
    } else {
        Mode::Binary
    };
    let iterations = Iterations::new(value(matches, ITERATIONS)?)?;
    let size: usize = value(matches, SIZE)?;
    let region = Region::new(
        value(matches, X1)?,
        value(matches, X2)?,
        value(matches, Y1)?,
        value(matches, Y2)?,
    )?;
    let power = Power::from_real(value(matches, POWER)?)?;
    let threads: usize = value(matches, THREADS)?;
    let output: String = value(matches, OUTPUT)?;
    let verbose = matches.is_present(VERBOSE);

    // The map is resolved before rendering so a typo fails fast.
    let colormap = match mode {
        Mode::Binary => Colormap::by_name(BINARY_MODE)?,
        Mode::Graded => Colormap::by_name(matches.value_of(CMAP).unwrap_or(DEFAULT_GRADED))?,
    };
    let renderer = EscapeTimeRenderer::new(size, &region, iterations, power)?;
    let grid = renderer.grid();
    debug!(
        "{:?} pass of z^{}+c over re [{}, {}] x im [{}, {}], {}x{} samples, n = {}, {} threads",
        mode,
        renderer.power(),
        grid.xs()[0],
        grid.xs()[grid.size() - 1],
        grid.ys()[0],
        grid.ys()[grid.size() - 1],
        grid.size(),
        grid.size(),
        renderer.iterations(),
        threads
    );
    let start = Instant::now();
    match mode {
        Mode::Binary => {
            let raster = renderer.binary(threads)?;
            report(verbose, start);
            write_image(&output, &raster, &colormap)?;
        }
        Mode::Graded => {
            let raster = renderer.graded(threads)?;
            report(verbose, start);
            write_image(&output, &raster, &colormap)?;
        }
    }
    info!("{}", title(mode, power, iterations));
    Ok(())
}

fn report(verbose: bool, start: Instant) {
    if verbose {
        let elapsed = start.elapsed();
        println!(
            "Time elapsed: {}.{:06} seconds",
            elapsed.as_secs(),
            elapsed.subsec_micros()
        );
    }
}

fn main() {
    let matches = args();
    let default_filter = if matches.is_present(VERBOSE) {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
