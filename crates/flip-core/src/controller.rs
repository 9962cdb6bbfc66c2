//! The periodic direction-flip controller.
//!
//! [`FlipState`] holds the two-state machine and nothing else, so it can
//! be stepped with plain timestamps. [`FlipController`] wraps it with a
//! [`Clock`] to read time from and a [`CommandSink`] to emit into.

use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    clock::{Clock, elapsed_secs},
    command::VelocityCommand,
    config::FlipConfig,
    sink::CommandSink,
};

/// The sign applied to the configured speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Sign +1.0.
    #[default]
    Forward,
    /// Sign -1.0.
    Reverse,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Direction plus the time of the last flip.
///
/// # Algorithm
///
/// On every [`advance`](FlipState::advance):
/// 1. `elapsed = now - last_flip`, in seconds, negative if time went back
/// 2. if `elapsed >= flip_interval`, invert the direction and set
///    `last_flip = now`
/// 3. otherwise leave both fields untouched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipState {
    direction: Direction,
    last_flip: Duration,
}

impl FlipState {
    /// Start moving forward, with the flip reference set to `now`.
    pub fn new(now: Duration) -> Self {
        Self {
            direction: Direction::Forward,
            last_flip: now,
        }
    }

    /// Step the state to `now`. Returns true if the direction flipped.
    ///
    /// A NaN interval never compares as due, so the direction never
    /// flips.
    pub fn advance(&mut self, now: Duration, flip_interval: f64) -> bool {
        let elapsed = elapsed_secs(now, self.last_flip);
        if elapsed >= flip_interval {
            self.direction = self.direction.flipped();
            self.last_flip = now;
            true
        } else {
            false
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_flip(&self) -> Duration {
        self.last_flip
    }
}

/// Counters collected by a [`FlipController`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipStats {
    /// Number of completed ticks.
    pub ticks: u64,
    /// Number of direction reversals.
    pub flips: u64,
    /// Number of commands the sink refused.
    pub send_failures: u64,
}

/// Emits `speed * direction` on every tick and reverses the direction
/// every `flip_interval` seconds.
///
/// The controller does not schedule itself. Whatever drives it calls
/// [`on_tick`](FlipController::on_tick) roughly every
/// [`TICK_PERIOD`](crate::TICK_PERIOD).
///
/// # Example
///
/// ```ignore
/// let clock = RosClock::new(node.get_clock());
/// let sink = TwistPublisher::new(&node, "cmd_vel", qos)?;
/// let mut controller = FlipController::new(&config, clock, sink);
///
/// let _timer = node.create_timer_repeating(TICK_PERIOD, move || {
///     controller.on_tick();
/// })?;
/// ```
pub struct FlipController<C, S>
where
    C: Clock,
    S: CommandSink,
{
    speed: f64,
    flip_interval: f64,
    state: FlipState,
    stats: FlipStats,
    clock: C,
    sink: S,
}

impl<C, S> FlipController<C, S>
where
    C: Clock,
    S: CommandSink,
{
    /// Create a controller moving forward, with the flip reference set
    /// to the current clock reading.
    pub fn new(config: &FlipConfig, clock: C, sink: S) -> Self {
        let state = FlipState::new(clock.now());

        Self {
            speed: config.speed,
            flip_interval: config.flip_interval,
            state,
            stats: FlipStats::default(),
            clock,
            sink,
        }
    }

    /// Run one tick: flip if the interval elapsed, then emit the command.
    ///
    /// Returns the command handed to the sink, whether or not the sink
    /// accepted it.
    pub fn on_tick(&mut self) -> VelocityCommand {
        let now = self.clock.now();

        if self.state.advance(now, self.flip_interval) {
            self.stats.flips += 1;
            debug!(
                direction = ?self.state.direction(),
                flips = self.stats.flips,
                at = ?now,
                "Direction flipped"
            );
        }

        let command = VelocityCommand::linear_x(self.speed * self.state.direction().sign());

        if let Err(e) = self.sink.send(command) {
            self.stats.send_failures += 1;
            warn!(
                error = %e,
                linear_x = command.linear.x,
                "Failed to send velocity command"
            );
        }

        self.stats.ticks += 1;
        command
    }

    pub fn direction(&self) -> Direction {
        self.state.direction()
    }

    pub fn state(&self) -> FlipState {
        self.state
    }

    pub fn stats(&self) -> FlipStats {
        self.stats
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn flip_interval(&self) -> f64 {
        self.flip_interval
    }
}
