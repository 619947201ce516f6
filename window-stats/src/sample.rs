use imu_common::{Channel, ChannelArray, Real};

/// A single IMU observation. Fields are private so a sample cannot be
/// altered once it has been loaded.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    accel: [Real; 3],
    gyro: [Real; 3],
}

impl Sample {
    pub fn new(accel: [Real; 3], gyro: [Real; 3]) -> Self {
        Self { accel, gyro }
    }

    /// Builds a sample from values in `ax, ay, az, gx, gy, gz` order.
    pub fn from_channels(channels: ChannelArray) -> Self {
        let [ax, ay, az, gx, gy, gz] = channels;
        Self::new([ax, ay, az], [gx, gy, gz])
    }

    pub fn channels(&self) -> ChannelArray {
        let [ax, ay, az] = self.accel;
        let [gx, gy, gz] = self.gyro;
        [ax, ay, az, gx, gy, gz]
    }

    pub fn get(&self, channel: Channel) -> Real {
        let [ax, ay, az] = self.accel;
        let [gx, gy, gz] = self.gyro;
        match channel {
            Channel::AccelX => ax,
            Channel::AccelY => ay,
            Channel::AccelZ => az,
            Channel::GyroX => gx,
            Channel::GyroY => gy,
            Channel::GyroZ => gz,
        }
    }

    pub fn accel(&self) -> &[Real; 3] {
        &self.accel
    }

    pub fn gyro(&self) -> &[Real; 3] {
        &self.gyro
    }

    /// `ax² + ay² + az²`
    pub fn accel_magnitude_squared(&self) -> Real {
        let [ax, ay, az] = self.accel;
        (ax * ax) + (ay * ay) + (az * az)
    }
}

impl From<ChannelArray> for Sample {
    fn from(channels: ChannelArray) -> Self {
        Self::from_channels(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn channel_round_trip() {
        let sample = Sample::from_channels([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(sample.accel(), &[1.0, 2.0, 3.0]);
        assert_eq!(sample.gyro(), &[4.0, 5.0, 6.0]);
        assert_eq!(sample.channels(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn get_matches_channel_index() {
        let sample = Sample::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        for channel in Channel::iter() {
            assert_eq!(sample.get(channel), sample.channels()[channel.index()]);
        }
    }

    #[test]
    fn magnitude_ignores_gyro() {
        let sample = Sample::new([3.0, 4.0, 0.0], [100.0, -100.0, 7.0]);
        assert_eq!(sample.accel_magnitude_squared(), 25.0);
    }
}
