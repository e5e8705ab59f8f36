use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::fmt::SubscriberBuilder;

use thinwall::prelude::{CrossSection, Sample};

#[derive(Parser)]
#[command(name = "sectorial")]
#[command(about = "Sectorial property calculator for open thin-walled sections")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the property report for a JSON sample list
    Report {
        /// Path to a JSON array of {"x", "y", "thickness"} samples
        #[arg(long)]
        input: String,
    },
    /// Run the built-in 33-sample C-profile demo
    Demo,
}

/// One input row of the centerline sample list.
#[derive(Deserialize)]
struct SampleRow {
    x: f64,
    y: f64,
    thickness: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Report { input } => report(&input),
        Action::Demo => demo(),
    }
}

fn report(input: &str) -> Result<()> {
    tracing::info!(input, "report");
    let text = std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    let rows: Vec<SampleRow> =
        serde_json::from_str(&text).with_context(|| format!("parsing {input}"))?;
    let samples: Vec<Sample> = rows
        .iter()
        .map(|r| Sample::new(r.x, r.y, r.thickness))
        .collect();
    tracing::info!(samples = samples.len(), "input parsed");
    print_report(&samples)
}

fn demo() -> Result<()> {
    const THICKNESS: f64 = 4.4;
    let xs = [
        32.0, 28.44, 24.89, 21.33, 17.78, 14.22, 10.67, 7.11, 3.56, 0.0,
    ];
    let ys = [
        -21.15, -17.31, -13.46, -9.62, -5.77, -1.92, 0.0, 1.92, 5.77, 9.62, 13.46, 17.31, 21.15,
    ];
    let mut samples: Vec<Sample> = xs.iter().map(|&x| Sample::new(x, -25.0, THICKNESS)).collect();
    samples.extend(ys.iter().map(|&y| Sample::new(0.0, y, THICKNESS)));
    samples.extend(xs.iter().rev().map(|&x| Sample::new(x, 25.0, THICKNESS)));
    print_report(&samples)
}

fn print_report(samples: &[Sample]) -> Result<()> {
    let mut cs = CrossSection::new(samples)?;

    let f = cs.section_area(true);
    let gc = cs.gravity_center(true);
    let im = cs.inertia_moment(true);
    let ip = cs.polar_inertia_moment(true);
    let rc = cs.rigidity_center(true)?;
    let iw = cs.sectorial_inertia_moment(true)?;

    println!("** Sectorial properties:");
    println!("-- Section area (F): {f:.2} mm^2");
    println!("-- Center of gravity (x, y): ({:.2}, {:.2}) mm", gc.x, gc.y);
    println!("-- Center of rigidity (x, y): ({:.2}, {:.2}) mm", rc.x, rc.y);
    println!(
        "-- Main moments of inertia (Ix, Iy): ({:.2}, {:.2}) mm^4",
        im.x, im.y
    );
    println!("-- Polar moment of inertia (Ip): {ip:.2} mm^4");
    println!("-- Sectorial moment of inertia (Iw): {iw:.2} mm^6");
    Ok(())
}
