//! Timer-driven controller runner.
//!
//! This module provides [`FlipRunner`], which ties together the node
//! clock, the velocity publisher and a [`FlipController`], and ticks the
//! controller from a repeating node timer.

use std::time::{Duration, Instant};

use eyre::{Result, eyre};
use flip_core::{FlipConfig, FlipController, TICK_PERIOD};
use rclrs::{Node, QoSProfile, Timer};
use tracing::info;

use crate::clock::RosClock;
use crate::publisher::TwistPublisher;

const STATS_LOG_INTERVAL: Duration = Duration::from_secs(10);

/// Runs a [`FlipController`] on a ROS2 node.
///
/// The controller is moved into the timer callback, which is its only
/// owner; nothing else touches its state. Ticks stop when the runner is
/// dropped or the executor stops spinning.
pub struct FlipRunner {
    /// Repeating timer (kept alive).
    _timer: Timer,

    /// Output topic (for logging/debugging).
    topic: String,
}

impl FlipRunner {
    /// Create the publisher and controller, and start ticking every
    /// [`TICK_PERIOD`].
    pub fn new(node: &Node, config: &FlipConfig, qos: QoSProfile) -> Result<Self> {
        let publisher = TwistPublisher::new(node, &config.cmd_vel_topic, qos)?;
        let clock = RosClock::new(node.get_clock());
        let mut controller = FlipController::new(config, clock, publisher);

        let mut last_stats_log = Instant::now();

        let timer = node
            .create_timer_repeating(TICK_PERIOD, move || {
                controller.on_tick();

                // Periodically log statistics
                if last_stats_log.elapsed() >= STATS_LOG_INTERVAL {
                    let stats = controller.stats();
                    info!(
                        ticks = stats.ticks,
                        flips = stats.flips,
                        send_failures = stats.send_failures,
                        direction = ?controller.direction(),
                        "Flip statistics"
                    );
                    last_stats_log = Instant::now();
                }
            })
            .map_err(|e| eyre!("Failed to create flip timer: {}", e))?;

        info!(
            topic = %config.cmd_vel_topic,
            period = ?TICK_PERIOD,
            speed = config.speed,
            flip_interval = config.flip_interval,
            "Started flip timer"
        );

        Ok(Self {
            _timer: timer,
            topic: config.cmd_vel_topic.clone(),
        })
    }

    /// The topic velocity commands are published on.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}
