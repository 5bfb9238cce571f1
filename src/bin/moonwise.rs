// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Command-line front end: resolve a moment, print the status report.

use clap::Parser;
use chrono::SecondsFormat;
use moonwise::{
    GeoCoordinate, IpLocator, Meeus, Moment, Resolver, StatusComposer, TzFinder, Zone,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "moonwise", version, about = "Moon phase, almanac name, zodiac signs and retrogrades for a moment and place")]
struct Cli {
    /// Free-text timestamp ("2024-01-25", "July 20, 1969 20:17 UTC", …);
    /// defaults to now.
    timestamp: Option<String>,

    /// Observer latitude in decimal degrees.
    #[arg(requires = "longitude", allow_negative_numbers = true)]
    latitude: Option<f64>,

    /// Observer longitude in decimal degrees.
    #[arg(requires = "latitude", allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// IANA zone name or UTC offset; overrides coordinate lookup.
    #[arg(short, long)]
    zone: Option<Zone>,
}

fn run(cli: Cli) -> moonwise::Result<()> {
    let coordinate = match (cli.latitude, cli.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoCoordinate::new(latitude, longitude)?),
        _ => None,
    };

    let resolver = Resolver::new(IpLocator::new(), TzFinder::new());
    let resolved = resolver.resolve(cli.timestamp.as_deref(), cli.zone, coordinate)?;

    match resolved.moment {
        Moment::Date(date) => println!("{date} ({})", resolved.zone),
        Moment::Instant(instant) => println!(
            "{} ({})",
            instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            resolved.zone
        ),
    }
    println!("{}", StatusComposer::new(Meeus).report(&resolved)?);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("moonwise: {error}");
        std::process::exit(1);
    }
}
