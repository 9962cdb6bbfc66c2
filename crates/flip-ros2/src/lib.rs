//! ROS2 integration for the [flip-core](../flip_core/index.html) controller.
//!
//! This crate supplies the ROS2 side of the controller's two seams and
//! the timer that drives it:
//!
//! - [`RosClock`]: the node clock as a [`flip_core::Clock`]
//! - [`TwistPublisher`]: a `geometry_msgs/msg/Twist` publisher as a
//!   [`flip_core::CommandSink`]
//! - [`FlipRunner`]: wires both into a [`flip_core::FlipController`] and
//!   ticks it from a repeating node timer
//!
//! # Example: Embedding the Controller in Your Node
//!
//! ```ignore
//! use flip_ros2::{FlipRunner, flip_core::FlipConfig};
//! use rclrs::{Context, CreateBasicExecutor, QOS_PROFILE_DEFAULT, SpinOptions};
//!
//! let context = Context::default_from_env()?;
//! let mut executor = context.create_basic_executor();
//! let node = executor.create_node("flip")?;
//!
//! // The runner owns the timer; dropping it stops the ticks.
//! let _runner = FlipRunner::new(&node, &FlipConfig::default(), QOS_PROFILE_DEFAULT)?;
//!
//! executor.spin(SpinOptions::default());
//! ```

pub mod clock;
pub mod message;
pub mod publisher;
pub mod runner;

pub use clock::RosClock;
pub use message::{command_to_twist, ros_time_to_duration};
pub use publisher::TwistPublisher;
pub use runner::FlipRunner;

// Re-export flip-core for convenience
pub use flip_core;
