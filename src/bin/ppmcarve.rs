// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg};
use failure::{bail, format_err, Error};
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use ppmcarve::{energy_map, energy_to_image, load, seamcarve, store};
use std::io;

fn dimension(value: &str, name: &str) -> Result<u32, Error> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| format_err!("{} is a non-integer value", name))?;
    if parsed <= 0 {
        bail!("{} must be greater than 0. You entered {}", name, parsed);
    }
    Ok(parsed as u32)
}

fn run() -> Result<(), Error> {
    let matches = App::new("ppmcarve")
        .version("0.1.0")
        .about("Content-aware narrowing for plain (P3) PPM images")
        .arg(
            Arg::with_name("image")
                .help("The P3 image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("Declared width of the input image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("height")
                .help("Declared height of the input image")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("target-width")
                .help("Width to carve down to")
                .required(true)
                .index(4),
        )
        .arg(
            Arg::with_name("target-height")
                .help("Height to carve down to (validated, never carved)")
                .required(true)
                .index(5),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Output filename [default: carved{W}X{H}.{image}]"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map to stdout as a binary PGM instead of carving"),
        )
        .get_matches();

    let input = matches.value_of("image").unwrap();
    let width = dimension(matches.value_of("width").unwrap(), "width")?;
    let height = dimension(matches.value_of("height").unwrap(), "height")?;
    let target_width = dimension(matches.value_of("target-width").unwrap(), "target width")?;
    let target_height = dimension(matches.value_of("target-height").unwrap(), "target height")?;

    if target_width > width {
        bail!(
            "target width must be no greater than width, {} is greater than {}",
            target_width,
            width
        );
    }
    if target_height > height {
        bail!(
            "target height must be no greater than height, {} is greater than {}",
            target_height,
            height
        );
    }

    let grid = load(input, width, height)?;

    if matches.is_present("energy") {
        let emap = energy_map(&grid);
        PNMEncoder::new(io::stdout())
            .with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary))
            .encode(
                energy_to_image(&emap, width, height)
                    .into_flat_samples()
                    .as_slice(),
                width,
                height,
                ColorType::Gray(8),
            )?;
        return Ok(());
    }

    let carved = seamcarve(&grid, target_width, target_height)?;

    let output = match matches.value_of("output") {
        Some(path) => path.to_string(),
        None => format!("carved{}X{}.{}", target_width, target_height, input),
    };
    store(&output, &carved)?;
    println!(
        "{} ({}x{}) -> {} ({}x{})",
        input,
        width,
        height,
        output,
        carved.width(),
        carved.height()
    );
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
