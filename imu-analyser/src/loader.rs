use anyhow::{Context, Result, anyhow};
use csv::{ReaderBuilder, StringRecord, Trim};
use imu_common::{Channel, ChannelArray};
use imu_window_stats::Sample;
use std::{fs::File, io::Read, path::Path};
use strum::IntoEnumIterator;

/// Columns before `ax` (`t_ms` and `clip_id`) are not used.
const FIRST_CHANNEL_COLUMN: usize = 2;

pub(crate) fn load_samples(path: &Path) -> Result<Vec<Sample>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    load_samples_from_reader(file)
        .with_context(|| format!("Cannot load samples from {}", path.display()))
}

/// Reads a recording with a header row followed by rows of
/// `t_ms, clip_id, ax, ay, az, gx, gy, gz[, label]`.
#[tracing::instrument(skip_all, fields(num_samples))]
pub(crate) fn load_samples_from_reader<R: Read>(reader: R) -> Result<Vec<Sample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Invalid row {}", row + 1))?;
        let sample = parse_record(&record).with_context(|| format!("Invalid row {}", row + 1))?;
        samples.push(sample);
    }
    tracing::Span::current().record("num_samples", samples.len());
    Ok(samples)
}

fn parse_record(record: &StringRecord) -> Result<Sample> {
    let mut channels = ChannelArray::default();
    for (channel, value) in Channel::iter().zip(channels.iter_mut()) {
        let column = FIRST_CHANNEL_COLUMN + channel.index();
        let field = record
            .get(column)
            .ok_or_else(|| anyhow!("Missing column {column} ({channel})"))?;
        *value = field
            .parse()
            .with_context(|| format!("Cannot parse {channel} value '{field}'"))?;
    }
    Ok(Sample::from_channels(channels))
}
