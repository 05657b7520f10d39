use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use tiny_gps::{ChecksumScheme, Gps, GpsConfig, GpsError};

#[derive(Parser)]
#[command(name = "NMEA CLI")]
#[command(bin_name = "nmea-cli")]
#[command(about = "Decode GGA, GLL and RMC sentences, one per line")]
struct Cli {
    /// File to read sentences from, stdin when omitted
    input: Option<PathBuf>,

    /// Checksums are CRC-CCITT instead of the NMEA xor
    #[arg(long)]
    crc: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_fields(gps: &Gps) {
    match gps.lat_lon() {
        Ok(lat_lon) => println!(
            "  lat/lon: {}.{:04} {} {}.{:04} {}",
            lat_lon.latitude.degrees_minutes,
            lat_lon.latitude.fraction,
            lat_lon.lat_hemisphere,
            lat_lon.longitude.degrees_minutes,
            lat_lon.longitude.fraction,
            lat_lon.lon_hemisphere,
        ),
        Err(e) => println!("  lat/lon: {}", e),
    }
    match gps.time() {
        Ok(time) => println!("  time: {}", time),
        Err(e) => println!("  time: {}", e),
    }
    match gps.altitude() {
        Ok(altitude) => println!("  altitude: {} m", altitude),
        Err(e) => println!("  altitude: {}", e),
    }
    match gps.geoid_separation() {
        Ok(separation) => println!("  geoid separation: {} m", separation),
        Err(e) => println!("  geoid separation: {}", e),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder().filter_level(level).init();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let scheme = if args.crc {
        ChecksumScheme::CrcCcitt
    } else {
        ChecksumScheme::NmeaXor
    };
    let mut gps = Gps::with_config(GpsConfig::with_checksum(scheme));

    let mut decoded = 0usize;
    let mut rejected = 0usize;
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let sentence = line.trim_end_matches(['\r', '\n']);
        if sentence.is_empty() {
            continue;
        }

        match gps.update(sentence.as_bytes()) {
            Ok(sentence_type) => {
                decoded += 1;
                println!("{}: {}", line_number + 1, sentence_type.code());
                print_fields(&gps);
            }
            Err(GpsError::Unimplemented) => {
                info!("Line {}: sentence type not decoded", line_number + 1);
            }
            Err(e) => {
                rejected += 1;
                warn!("Line {}: {}", line_number + 1, e);
            }
        }
    }

    info!("{} sentences decoded, {} rejected", decoded, rejected);
    Ok(())
}
