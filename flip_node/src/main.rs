//! flip node entry point.

use eyre::Result;
use flip_node::{Config, FlipNode, RunningFlag};
use rclrs::{Context, CreateBasicExecutor, RclrsErrorFilter, SpinOptions};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// How long a single spin may block before the interrupt flag is checked.
const SPIN_SLICE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Stop spinning on SIGINT/SIGTERM instead of dying mid-callback
    let running = RunningFlag::install()?;

    // Initialize ROS2 context and executor
    let context = Context::default_from_env()
        .map_err(|e| eyre::eyre!("Failed to create ROS2 context: {}", e))?;
    let mut executor = context.create_basic_executor();

    // Create the node
    let node = executor
        .create_node("flip")
        .map_err(|e| eyre::eyre!("Failed to create ROS2 node: {}", e))?;

    // Resolve parameters and the optional config file
    let config = Config::from_node(&node)?;

    info!(
        cmd_vel_topic = %config.flip.cmd_vel_topic,
        speed = config.flip.speed,
        flip_interval = config.flip.flip_interval,
        reliability = ?config.qos.reliability,
        history_depth = config.qos.history_depth,
        "Configuration loaded"
    );

    // Create the flip node; its timer starts ticking on the next spin
    let flip_node = FlipNode::new(&node, &config)?;

    info!(topic = %flip_node.topic(), "flip node spinning...");

    while running.is_running() && context.ok() {
        executor
            .spin(SpinOptions::default().timeout(SPIN_SLICE))
            .ignore_non_errors()
            .first_error()
            .map_err(|e| eyre::eyre!("Error while spinning: {}", e))?;
    }

    // Release the timer and publisher before the node goes away
    drop(flip_node);

    info!("flip node shutting down");
    Ok(())
}
