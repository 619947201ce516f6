pub mod tracer;

use strum::{EnumCount, EnumIter};

pub type Real = f64;

pub const CHANNELS_PER_SAMPLE: usize = Channel::COUNT;
pub const ACCELERATION_CHANNELS: usize = 3;

/// One value per channel, in [Channel] order.
pub type ChannelArray = [Real; CHANNELS_PER_SAMPLE];

/// The six measurement axes of an IMU sample, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumCount, EnumIter)]
pub enum Channel {
    #[strum(to_string = "ax")]
    AccelX,
    #[strum(to_string = "ay")]
    AccelY,
    #[strum(to_string = "az")]
    AccelZ,
    #[strum(to_string = "gx")]
    GyroX,
    #[strum(to_string = "gy")]
    GyroY,
    #[strum(to_string = "gz")]
    GyroZ,
}

impl Channel {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_acceleration(self) -> bool {
        self.index() < ACCELERATION_CHANNELS
    }
}
