// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn mandelbrot() -> Command {
    Command::cargo_bin("mandelbrot").unwrap()
}

fn dimensions(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().to_rgb().dimensions()
}

#[test]
fn missing_output_fails_before_rendering() {
    let dir = tempfile::tempdir().unwrap();
    mandelbrot()
        .current_dir(dir.path())
        .args(&["-s", "10", "-n", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn binary_mode_writes_a_square_image() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("set.png");
    mandelbrot()
        .args(&["-s", "32", "-n", "20", "-o"])
        .arg(&out)
        .assert()
        .success();
    assert_eq!(dimensions(&out), (32, 32));
}

#[test]
fn color_mode_accepts_a_colormap_and_region() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bands.png");
    mandelbrot()
        .args(&[
            "color",
            "--size=24",
            "--iter=50",
            "--x1=-0.8",
            "--x2=-0.7",
            "--y1=0.05",
            "--y2=0.15",
            "--cmap=magma",
            "--threads=1",
            "-o",
        ])
        .arg(&out)
        .assert()
        .success();
    assert_eq!(dimensions(&out), (24, 24));
}

#[test]
fn verbose_reports_the_elapsed_time() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("timed.png");
    mandelbrot()
        .args(&["color", "-v", "-s", "8", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Time elapsed:"));
}

#[test]
fn unknown_colormap_is_a_render_failure() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.png");
    mandelbrot()
        .args(&["color", "-s", "8", "-m", "no_such_map", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown colormap"));
    assert!(!out.exists());
}

#[test]
fn fractional_power_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.png");
    mandelbrot()
        .args(&["-s", "8", "-p", "2.5", "-o"])
        .arg(&out)
        .assert()
        .failure();
    assert!(!out.exists());
}

#[test]
fn whole_real_power_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cubic.png");
    mandelbrot()
        .args(&["-s", "8", "-p", "3.0", "-o"])
        .arg(&out)
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn inverted_region_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.png");
    mandelbrot()
        .args(&["-s", "8", "--x1=1.0", "--x2=-1.0", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid region"));
    assert!(!out.exists());
}

#[test]
fn zero_iterations_are_refused() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.png");
    mandelbrot()
        .args(&["-s", "8", "-n", "0", "-o"])
        .arg(&out)
        .assert()
        .failure();
    assert!(!out.exists());
}
