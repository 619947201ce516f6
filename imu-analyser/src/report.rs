use crate::timer::Timings;
use anyhow::{Result, ensure};
use imu_common::{Channel, ChannelArray};
use imu_window_stats::{WindowIndexer, WindowMetrics};
use itertools::Itertools;
use serde::Serialize;
use std::{io::Write, path::Path};
use strum::IntoEnumIterator;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
pub(crate) struct RunSettings {
    pub(crate) strategy: String,
    pub(crate) threads: usize,
    pub(crate) variance_policy: String,
}

#[derive(Serialize)]
pub(crate) struct Report<'a> {
    file: &'a Path,
    num_samples: usize,
    window_length: usize,
    stride: usize,
    expected_windows: usize,
    discarded_tail: usize,
    settings: RunSettings,
    timings: Timings,
    selected_window: usize,
    windows: &'a [WindowMetrics],
}

impl<'a> Report<'a> {
    pub(crate) fn new(
        file: &'a Path,
        indexer: &WindowIndexer,
        settings: RunSettings,
        timings: Timings,
        selected_window: usize,
        windows: &'a [WindowMetrics],
    ) -> Result<Self> {
        ensure!(
            selected_window < windows.len(),
            "Window {selected_window} requested, but only {} windows were computed",
            windows.len()
        );
        Ok(Self {
            file,
            num_samples: indexer.total_samples(),
            window_length: indexer.spec().window_length(),
            stride: indexer.spec().stride(),
            expected_windows: indexer.num_windows(),
            discarded_tail: indexer.discarded_tail(),
            settings,
            timings,
            selected_window,
            windows,
        })
    }

    pub(crate) fn write<W: Write>(&self, format: ReportFormat, writer: &mut W) -> Result<()> {
        match format {
            ReportFormat::Text => self.write_text(writer)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
            }
        }
        Ok(())
    }

    fn write_text<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "--- Summary ---")?;
        writeln!(w, "File: {}", self.file.display())?;
        writeln!(w, "Samples loaded: {}", self.num_samples)?;
        writeln!(
            w,
            "Windows processed: {} (expected: {})",
            self.windows.len(),
            self.expected_windows
        )?;
        writeln!(w, "Window length: {} samples", self.window_length)?;
        writeln!(w, "Stride: {} samples", self.stride)?;
        writeln!(w, "Discarded tail: {} samples", self.discarded_tail)?;
        writeln!(
            w,
            "Strategy: {} ({} threads), variance policy: {}",
            self.settings.strategy, self.settings.threads, self.settings.variance_policy
        )?;

        writeln!(w)?;
        writeln!(w, "--- Timing ---")?;
        writeln!(w, "Load time: {:.6} s", self.timings.load.as_secs_f64())?;
        writeln!(
            w,
            "Compute time (wall clock): {:.6} s",
            self.timings.compute.as_secs_f64()
        )?;
        writeln!(w, "Total time: {:.6} s", self.timings.full.as_secs_f64())?;

        if let Some(metrics) = self.windows.get(self.selected_window) {
            writeln!(w)?;
            writeln!(w, "--- Metrics of window {} ---", self.selected_window)?;
            writeln!(
                w,
                "  Channels:  [{} ]",
                Channel::iter()
                    .map(|c| format!("{:>9}", c.to_string()))
                    .join(",")
            )?;
            writeln!(w, "  Mean:      [{} ]", format_channels(&metrics.mean))?;
            writeln!(w, "  Std dev:   [{} ]", format_channels(&metrics.stddev))?;
            writeln!(w, "  RMS:       [{} ]", format_channels(&metrics.rms))?;
            writeln!(w, "  Accel energy: {:.5}", metrics.accel_energy)?;
        }
        Ok(())
    }
}

fn format_channels(values: &ChannelArray) -> String {
    values.iter().map(|v| format!("{v:>9.5}")).join(",")
}
