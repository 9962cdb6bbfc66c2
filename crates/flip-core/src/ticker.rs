//! Drive a [`FlipController`] from a tokio interval.
//!
//! This is the runtime-agnostic counterpart to a ROS repeating timer:
//! it calls [`FlipController::on_tick`] once per period until a
//! shutdown future resolves.

use std::{future::Future, time::Duration};

use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    clock::Clock,
    controller::{FlipController, FlipStats},
    sink::CommandSink,
};

/// Tick `controller` every `period` until `shutdown` resolves.
///
/// The first tick fires immediately. Ticks that fall behind are delayed
/// rather than bursted, so the controller never sees two ticks closer
/// together than `period`. Returns the controller's final statistics.
///
/// # Panics
///
/// Panics if `period` is zero.
pub async fn run<C, S, F>(
    controller: &mut FlipController<C, S>,
    period: Duration,
    shutdown: F,
) -> FlipStats
where
    C: Clock,
    S: CommandSink,
    F: Future<Output = ()>,
{
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(shutdown);

    info!(
        period = ?period,
        speed = controller.speed(),
        flip_interval = controller.flip_interval(),
        "Starting flip ticker"
    );

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                debug!("Shutdown requested");
                break;
            }
            _ = interval.tick() => {
                controller.on_tick();
            }
        }
    }

    let stats = controller.stats();
    info!(
        ticks = stats.ticks,
        flips = stats.flips,
        send_failures = stats.send_failures,
        "Flip ticker stopped"
    );
    stats
}
