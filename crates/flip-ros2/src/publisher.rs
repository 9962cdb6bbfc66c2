//! Velocity command publisher.
//!
//! This module provides [`TwistPublisher`], which publishes every
//! [`VelocityCommand`] handed to it as a `geometry_msgs/msg/Twist`.

use crate::message::command_to_twist;
use eyre::{Result, eyre};
use flip_core::{CommandSink, VelocityCommand};
use geometry_msgs::msg::Twist;
use rclrs::{Node, Publisher, PublisherOptions, QoSProfile};
use tracing::info;

/// Publishes velocity commands on a single topic.
///
/// # Example
///
/// ```ignore
/// let publisher = TwistPublisher::new(&node, "cmd_vel", QOS_PROFILE_DEFAULT)?;
/// publisher.send(VelocityCommand::linear_x(1.0))?;
/// ```
pub struct TwistPublisher {
    publisher: Publisher<Twist>,
    topic: String,
}

impl TwistPublisher {
    /// Create a publisher for `topic` on `node`.
    ///
    /// # Errors
    ///
    /// Returns an error if the topic name is invalid or the publisher
    /// cannot be created.
    pub fn new(node: &Node, topic: &str, qos: QoSProfile) -> Result<Self> {
        let mut options = PublisherOptions::new(topic);
        options.qos = qos;

        let publisher = node.create_publisher::<Twist>(options).map_err(|e| {
            eyre!(
                "Failed to create publisher for topic '{}' with type 'geometry_msgs/msg/Twist': {}",
                topic,
                e
            )
        })?;

        info!(
            topic = %topic,
            msg_type = "geometry_msgs/msg/Twist",
            "Created velocity publisher"
        );

        Ok(Self {
            publisher,
            topic: topic.to_string(),
        })
    }
}

impl CommandSink for TwistPublisher {
    fn send(&self, command: VelocityCommand) -> Result<()> {
        self.publisher
            .publish(command_to_twist(&command))
            .map_err(|e| eyre!("Failed to publish to topic '{}': {}", self.topic, e))
    }
}
