//! Sectorial property probe for the reference C profile.
//!
//! Purpose
//! - Provide a reproducible, code-backed data point for the full
//!   property chain on the 33-sample squared-off "C" section with
//!   uniform wall thickness 4.4.
//! - Useful as a quick visual sanity check when touching the sectorial
//!   passes: the section is symmetric about the x-axis, so both centers
//!   must land on y = 0.

use thinwall::prelude::{CrossSection, Sample};

const THICKNESS: f64 = 4.4;

fn c_profile() -> Vec<Sample> {
    let xs = [
        32.0, 28.44, 24.89, 21.33, 17.78, 14.22, 10.67, 7.11, 3.56, 0.0,
    ];
    let ys = [
        -21.15, -17.31, -13.46, -9.62, -5.77, -1.92, 0.0, 1.92, 5.77, 9.62, 13.46, 17.31, 21.15,
    ];
    let mut samples: Vec<Sample> = xs.iter().map(|&x| Sample::new(x, -25.0, THICKNESS)).collect();
    samples.extend(ys.iter().map(|&y| Sample::new(0.0, y, THICKNESS)));
    samples.extend(xs.iter().rev().map(|&x| Sample::new(x, 25.0, THICKNESS)));
    samples
}

fn main() {
    let mut cs = CrossSection::new(&c_profile()).expect("C profile is a valid open section");

    let f = cs.section_area(true);
    let gc = cs.gravity_center(true);
    let im = cs.inertia_moment(true);
    let ip = cs.polar_inertia_moment(true);
    let rc = cs.rigidity_center(true).expect("C profile is non-singular");
    let iw = cs
        .sectorial_inertia_moment(true)
        .expect("C profile is non-singular");

    println!("** Sectorial properties:");
    println!("-- Section area (F): {f:.2} mm^2");
    println!("-- Center of gravity (x, y): ({:.2}, {:.2}) mm", gc.x, gc.y);
    println!("-- Center of rigidity (x, y): ({:.2}, {:.2}) mm", rc.x, rc.y);
    println!("-- Main moments of inertia (Ix, Iy): ({:.2}, {:.2}) mm^4", im.x, im.y);
    println!("-- Polar moment of inertia (Ip): {ip:.2} mm^4");
    println!("-- Sectorial moment of inertia (Iw): {iw:.2} mm^6");
}
