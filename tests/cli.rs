// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const INPUT: &str = "P3\n4 3\n255\n\
                     10 10 10  200 30 40  10 10 10  90 90 90\n\
                     10 10 10  10 10 10  200 30 40  90 90 90\n\
                     90 90 90  10 10 10  10 10 10  200 30 40\n";

#[test]
fn carves_a_file_to_the_requested_width() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.ppm");
    let output = dir.path().join("carved.ppm");
    fs::write(&input, INPUT).unwrap();

    Command::cargo_bin("ppmcarve")
        .unwrap()
        .arg(&input)
        .args(&["4", "3", "2", "3"])
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let carved = ppmcarve::load(&output, 2, 3).unwrap();
    assert_eq!(carved.dimensions(), (2, 3));
}

#[test]
fn default_output_name_carries_the_target_dimensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.ppm"), INPUT).unwrap();

    Command::cargo_bin("ppmcarve")
        .unwrap()
        .current_dir(dir.path())
        .args(&["input.ppm", "4", "3", "3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carved3X3.input.ppm"));

    let carved = ppmcarve::load(dir.path().join("carved3X3.input.ppm"), 3, 3).unwrap();
    assert_eq!(carved.dimensions(), (3, 3));
}

#[test]
fn rejects_a_target_wider_than_the_source() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.ppm");
    fs::write(&input, INPUT).unwrap();

    Command::cargo_bin("ppmcarve")
        .unwrap()
        .arg(&input)
        .args(&["4", "3", "9", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9 is greater than 4"));
}

#[test]
fn rejects_a_non_integer_dimension() {
    Command::cargo_bin("ppmcarve")
        .unwrap()
        .args(&["whatever.ppm", "four", "3", "2", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("width is a non-integer value"));
}

#[test]
fn rejects_a_zero_dimension() {
    Command::cargo_bin("ppmcarve")
        .unwrap()
        .args(&["whatever.ppm", "4", "3", "0", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "target width must be greater than 0",
        ));
}

#[test]
fn rejects_a_file_with_mismatched_dimensions() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.ppm");
    fs::write(&input, INPUT).unwrap();

    Command::cargo_bin("ppmcarve")
        .unwrap()
        .arg(&input)
        .args(&["5", "3", "2", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match value in file"));
}

#[test]
fn energy_mode_emits_a_binary_graymap() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.ppm");
    fs::write(&input, INPUT).unwrap();

    let assert = Command::cargo_bin("ppmcarve")
        .unwrap()
        .arg(&input)
        .args(&["4", "3", "4", "3", "--energy"])
        .assert()
        .success();
    let stdout = &assert.get_output().stdout;
    assert!(stdout.starts_with(b"P5"));
}
