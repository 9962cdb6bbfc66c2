//! The ROS2 node clock as a [`flip_core::Clock`].

use crate::message::ros_time_to_duration;
use flip_core::Clock;
use std::time::Duration;

/// Reads time from an [`rclrs::Clock`].
///
/// Follows whatever time source the node is configured with, including
/// simulated time when `use_sim_time` is set.
pub struct RosClock {
    clock: rclrs::Clock,
}

impl RosClock {
    pub fn new(clock: rclrs::Clock) -> Self {
        Self { clock }
    }
}

impl Clock for RosClock {
    fn now(&self) -> Duration {
        ros_time_to_duration(self.clock.now().nsec)
    }
}
