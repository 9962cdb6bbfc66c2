//! Conversions between flip-core values and ROS2 messages and time.

use flip_core::{Vector3, VelocityCommand};
use geometry_msgs::msg::{Twist, Vector3 as RosVector3};
use std::time::Duration;

/// Convert a [`VelocityCommand`] into a `geometry_msgs/msg/Twist`.
pub fn command_to_twist(command: &VelocityCommand) -> Twist {
    Twist {
        linear: to_ros_vector(&command.linear),
        angular: to_ros_vector(&command.angular),
    }
}

fn to_ros_vector(v: &Vector3) -> RosVector3 {
    RosVector3 {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

/// Convert a ROS clock reading in nanoseconds to a Duration.
///
/// Negative readings only occur on clocks that were never started, and
/// floor to zero.
///
/// # Example
///
/// ```
/// use flip_ros2::ros_time_to_duration;
/// use std::time::Duration;
///
/// let duration = ros_time_to_duration(1_500_000_000);
/// assert_eq!(duration, Duration::new(1, 500_000_000));
///
/// let duration = ros_time_to_duration(-1);
/// assert_eq!(duration, Duration::ZERO);
/// ```
pub fn ros_time_to_duration(nsec: i64) -> Duration {
    u64::try_from(nsec)
        .map(Duration::from_nanos)
        .unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_to_twist_copies_all_fields() {
        let command = VelocityCommand {
            linear: Vector3 {
                x: 1.0,
                y: 2.0,
                z: 3.0,
            },
            angular: Vector3 {
                x: 4.0,
                y: 5.0,
                z: 6.0,
            },
        };

        let twist = command_to_twist(&command);
        assert_eq!(twist.linear.x, 1.0);
        assert_eq!(twist.linear.y, 2.0);
        assert_eq!(twist.linear.z, 3.0);
        assert_eq!(twist.angular.x, 4.0);
        assert_eq!(twist.angular.y, 5.0);
        assert_eq!(twist.angular.z, 6.0);
    }

    #[test]
    fn test_linear_x_command_yields_sparse_twist() {
        let twist = command_to_twist(&VelocityCommand::linear_x(-1.0));

        assert_eq!(twist.linear.x, -1.0);
        assert_eq!(twist.linear.y, 0.0);
        assert_eq!(twist.linear.z, 0.0);
        assert_eq!(twist.angular.x, 0.0);
        assert_eq!(twist.angular.y, 0.0);
        assert_eq!(twist.angular.z, 0.0);
    }

    #[test]
    fn test_ros_time_to_duration() {
        assert_eq!(ros_time_to_duration(0), Duration::ZERO);
        assert_eq!(
            ros_time_to_duration(1_700_000_000_100_000_000),
            Duration::new(1_700_000_000, 100_000_000)
        );
        assert_eq!(ros_time_to_duration(i64::MIN), Duration::ZERO);
    }
}
