use imu_common::{Channel, ChannelArray, Real};
use serde::Serialize;

/// Statistics of a single window. Arrays are indexed in [Channel] order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct WindowMetrics {
    pub mean: ChannelArray,
    pub rms: ChannelArray,
    /// Population standard deviation (divides by N).
    pub stddev: ChannelArray,
    /// Sum of `ax² + ay² + az²` over the window, not divided by its length.
    pub accel_energy: Real,
}

impl WindowMetrics {
    pub fn mean_of(&self, channel: Channel) -> Real {
        Self::select(&self.mean, channel)
    }

    pub fn rms_of(&self, channel: Channel) -> Real {
        Self::select(&self.rms, channel)
    }

    pub fn stddev_of(&self, channel: Channel) -> Real {
        Self::select(&self.stddev, channel)
    }

    fn select(values: &ChannelArray, channel: Channel) -> Real {
        values.get(channel.index()).copied().unwrap_or_default()
    }
}
