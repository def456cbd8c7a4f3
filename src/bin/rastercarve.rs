// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg};
use rastercarve::{calculate_energy, energy_to_image, SeamCarver};
use std::process;
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), failure::Error> {
    let matches = App::new("rastercarve")
        .version("0.1.0")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (defaults to the current width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (defaults to the current height)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .conflicts_with_all(&["width", "height"])
                .help("Write the grayscale energy map instead of carving"),
        )
        .get_matches();

    let image = image::open(matches.value_of("input").unwrap())?.to_rgb();
    let output = matches.value_of("output").unwrap();

    if matches.is_present("energy") {
        energy_to_image(&calculate_energy(&image)).save(output)?;
        return Ok(());
    }

    let (width, height) = image.dimensions();
    let new_width = match matches.value_of("width") {
        Some(w) => w.parse()?,
        None => width,
    };
    let new_height = match matches.value_of("height") {
        Some(h) => h.parse()?,
        None => height,
    };

    let mut carver = SeamCarver::new(image)?;
    carver.carve(new_width, new_height)?;
    carver.picture().save(output)?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("rastercarve: {}", e);
        process::exit(1);
    }
}
