//! flip-node - Direction-flip velocity command ROS2 node.
//!
//! This crate provides a ROS2 node that publishes a constant-speed
//! `geometry_msgs/msg/Twist` on a configurable topic and reverses its
//! direction at a fixed interval, using the
//! [flip-core](../flip_core/index.html) controller.
//!
//! # Configuration
//!
//! The node declares these parameters:
//! - `cmd_vel_topic` (string, default `cmd_vel`)
//! - `speed` (double, default `1.0`)
//! - `flip_interval` (double, default `3.0`, seconds)
//! - `config_file` (string, optional): YAML file whose values replace the
//!   defaults above and may also set QoS
//!
//! See the `config/flip.yaml` file for a complete example.

pub mod config;
pub mod node;
pub mod shutdown;

pub use config::Config;
pub use node::FlipNode;
pub use shutdown::RunningFlag;

// Re-export types from flip-ros2 for convenience
pub use flip_ros2::{FlipRunner, RosClock, TwistPublisher};
