mod motion;
mod noise;

use anyhow::{Context, Result};
use clap::Parser;
use imu_common::{Real, init_tracer};
use motion::{Motion, Recording};
use noise::Noise;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{io::Write, num::NonZeroU32, path::PathBuf};
use tracing::{debug, info, level_filters::LevelFilter};

// cargo run --bin imu-simulator -- --output recording.csv --samples 6000 --motion walking --seed 1

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// CSV file to write, if not set the recording is written to stdout
    #[clap(long)]
    output: Option<PathBuf>,

    #[clap(long, default_value = "1000")]
    samples: u64,

    #[clap(long, default_value = "100")]
    sample_rate_hz: NonZeroU32,

    #[clap(long, default_value = "0")]
    clip_id: u32,

    /// Either "rest" or "walking"
    #[clap(long, default_value = "walking")]
    motion: Motion,

    /// Standard deviation of the gaussian noise added to every channel
    #[clap(long, default_value = "0.05")]
    noise: Real,

    /// Seed for reproducible recordings
    #[clap(long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let tracer = init_tracer!(args.log_level)?;
    let _root = tracer.root_span().entered();
    debug!("{args:?}");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let recording = Recording {
        motion: args.motion,
        noise: Noise::new(args.noise).context("Invalid noise level")?,
        sample_rate_hz: args.sample_rate_hz.get(),
        clip_id: args.clip_id,
    };

    match &args.output {
        Some(path) => {
            let writer = csv::Writer::from_path(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_recording(writer, &recording, args.samples, &mut rng)?;
        }
        None => {
            let writer = csv::Writer::from_writer(std::io::stdout().lock());
            write_recording(writer, &recording, args.samples, &mut rng)?;
        }
    }
    info!(samples = args.samples, motion = %args.motion, "Recording written");
    Ok(())
}

#[tracing::instrument(skip_all, fields(num_samples = num_samples))]
fn write_recording<W: Write, R: Rng>(
    mut writer: csv::Writer<W>,
    recording: &Recording,
    num_samples: u64,
    rng: &mut R,
) -> Result<()> {
    for index in 0..num_samples {
        writer.serialize(recording.row(index, rng))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_layout() {
        let recording = Recording {
            motion: Motion::Rest,
            noise: Noise::new(0.0).unwrap(),
            sample_rate_hz: 100,
            clip_id: 2,
        };
        let mut out = Vec::new();
        write_recording(
            csv::Writer::from_writer(&mut out),
            &recording,
            3,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "t_ms,clip_id,ax,ay,az,gx,gy,gz,label");
        assert_eq!(lines[2], "10,2,0.0,0.0,9.80665,0.0,0.0,0.0,rest");
    }
}
