//! FlipNode implementation.

use crate::config::{Config, Reliability};
use eyre::Result;
use flip_ros2::FlipRunner;
use rclrs::{Node, QOS_PROFILE_DEFAULT, QoSHistoryPolicy, QoSProfile, QoSReliabilityPolicy};
use tracing::{info, warn};

/// The direction-flip velocity node.
///
/// Publishes `speed * direction` as a `geometry_msgs/msg/Twist` every
/// 100ms and reverses the direction every `flip_interval` seconds.
pub struct FlipNode {
    /// The timer-driven controller.
    runner: FlipRunner,
}

impl FlipNode {
    /// Create a new FlipNode with the given configuration.
    pub fn new(node: &Node, config: &Config) -> Result<Self> {
        for reason in config.flip.degenerate_reasons() {
            warn!(reason = %reason, "Degenerate flip configuration");
        }

        let qos = build_qos_profile(config);

        let runner = FlipRunner::new(node, &config.flip, qos)?;

        info!(
            speed = config.flip.speed,
            flip_interval = config.flip.flip_interval,
            topic = %runner.topic(),
            "flip node started"
        );

        Ok(Self { runner })
    }

    /// The topic velocity commands are published on.
    pub fn topic(&self) -> &str {
        self.runner.topic()
    }
}

/// Build a QoS profile from the configuration.
fn build_qos_profile(config: &Config) -> QoSProfile {
    let mut qos = QOS_PROFILE_DEFAULT;

    qos.history = QoSHistoryPolicy::KeepLast {
        depth: config.qos.history_depth,
    };

    qos.reliability = match config.qos.reliability {
        Reliability::BestEffort => QoSReliabilityPolicy::BestEffort,
        Reliability::Reliable => QoSReliabilityPolicy::Reliable,
    };

    qos
}
