use serde::Deserialize;
use std::time::Duration;

/// The fixed period between two controller ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Configuration parameters that are passed to
/// [FlipController::new](crate::FlipController::new).
///
/// Values are taken as given. A non-positive `flip_interval` makes the
/// controller flip on every tick and a zero `speed` emits a constant
/// zero command; neither is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlipConfig {
    /// Destination topic for the emitted velocity commands.
    pub cmd_vel_topic: String,
    /// Magnitude of the linear velocity, in units per second.
    pub speed: f64,
    /// Seconds between two direction reversals.
    pub flip_interval: f64,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            cmd_vel_topic: "cmd_vel".to_string(),
            speed: 1.0,
            flip_interval: 3.0,
        }
    }
}

impl FlipConfig {
    /// Describe values that will make the command stream degenerate.
    ///
    /// These are not errors. Callers usually log them and carry on.
    pub fn degenerate_reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();

        if !self.speed.is_finite() {
            reasons.push(format!("speed is not finite ({})", self.speed));
        } else if self.speed <= 0.0 {
            reasons.push(format!("speed is not positive ({})", self.speed));
        }

        if self.flip_interval.is_nan() {
            reasons.push("flip_interval is NaN, direction will never flip".to_string());
        } else if self.flip_interval <= 0.0 {
            reasons.push(format!(
                "flip_interval is not positive ({}), direction will flip on every tick",
                self.flip_interval
            ));
        }

        if self.cmd_vel_topic.is_empty() {
            reasons.push("cmd_vel_topic is empty".to_string());
        }

        reasons
    }
}
