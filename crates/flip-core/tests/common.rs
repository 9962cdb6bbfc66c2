use flip_core::{ChannelSink, FlipConfig, FlipController, ManualClock, TICK_PERIOD, VelocityCommand};
use std::time::Duration;

/// A controller wired to a manual clock and a channel sink.
pub struct Harness {
    pub clock: ManualClock,
    pub controller: FlipController<ManualClock, ChannelSink>,
    pub commands: flume::Receiver<VelocityCommand>,
}

impl Harness {
    pub fn new(speed: f64, flip_interval: f64) -> Self {
        let config = FlipConfig {
            speed,
            flip_interval,
            ..FlipConfig::default()
        };
        Self::with_config(&config)
    }

    #[allow(dead_code)]
    pub fn with_config(config: &FlipConfig) -> Self {
        let clock = ManualClock::new();
        let (sink, commands) = ChannelSink::unbounded();
        let controller = FlipController::new(config, clock.clone(), sink);

        Self {
            clock,
            controller,
            commands,
        }
    }

    /// Advance the clock by one tick period and tick once.
    pub fn tick(&mut self) -> VelocityCommand {
        self.tick_after(TICK_PERIOD)
    }

    /// Advance the clock by `step` and tick once.
    #[allow(dead_code)]
    pub fn tick_after(&mut self, step: Duration) -> VelocityCommand {
        self.clock.advance(step);
        self.controller.on_tick()
    }

    /// Run `n` ticks at the nominal period.
    pub fn tick_n(&mut self, n: usize) -> Vec<VelocityCommand> {
        (0..n).map(|_| self.tick()).collect()
    }

    /// Drain every command emitted so far.
    #[allow(dead_code)]
    pub fn drain(&self) -> Vec<VelocityCommand> {
        self.commands.try_iter().collect()
    }
}

#[allow(dead_code)]
pub fn linear_x(commands: &[VelocityCommand]) -> Vec<f64> {
    commands.iter().map(|cmd| cmd.linear.x).collect()
}

/// Assert that only `linear.x` is set on every command.
#[allow(dead_code)]
pub fn assert_only_linear_x(commands: &[VelocityCommand]) {
    for (i, cmd) in commands.iter().enumerate() {
        assert_eq!(cmd.linear.y, 0.0, "linear.y set on command {i}");
        assert_eq!(cmd.linear.z, 0.0, "linear.z set on command {i}");
        assert_eq!(cmd.angular.x, 0.0, "angular.x set on command {i}");
        assert_eq!(cmd.angular.y, 0.0, "angular.y set on command {i}");
        assert_eq!(cmd.angular.z, 0.0, "angular.z set on command {i}");
    }
}
