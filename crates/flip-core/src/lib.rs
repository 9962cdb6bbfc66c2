//! This library generates a constant-speed velocity command whose
//! direction reverses every fixed interval.
//!
//! The controller owns no scheduling or transport machinery. It reads
//! time from an injected [`Clock`] and hands every command to an
//! injected [`CommandSink`], so the flip logic runs the same under a
//! ROS timer, a tokio interval, or a hand-driven test loop.
//!
//! # Usage
//!
//! ```rust
//! use flip_core::{ChannelSink, FlipConfig, FlipController, ManualClock};
//! use std::time::Duration;
//!
//! let config = FlipConfig {
//!     speed: 1.0,
//!     flip_interval: 0.3,
//!     ..FlipConfig::default()
//! };
//!
//! // A clock that only moves when told to, and a queue that collects
//! // every emitted command.
//! let clock = ManualClock::new();
//! let (sink, commands) = ChannelSink::unbounded();
//! let mut controller = FlipController::new(&config, clock.clone(), sink);
//!
//! for _ in 0..6 {
//!     clock.advance(Duration::from_millis(100));
//!     controller.on_tick();
//! }
//!
//! let linear_x: Vec<f64> = commands.try_iter().map(|cmd| cmd.linear.x).collect();
//! assert_eq!(linear_x, [1.0, 1.0, -1.0, -1.0, -1.0, 1.0]);
//! ```

mod clock;
mod command;
mod config;
pub mod controller;
pub mod sink;
#[cfg(feature = "tokio")]
pub mod ticker;

pub use clock::*;
pub use command::*;
pub use config::{FlipConfig, TICK_PERIOD};
pub use controller::{Direction, FlipController, FlipState, FlipStats};
pub use sink::{ChannelSink, CommandSink};
