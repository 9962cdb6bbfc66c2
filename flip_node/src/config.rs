//! Configuration loading for the flip node.
//!
//! Values come from three layers, later ones winning:
//! 1. built-in defaults
//! 2. the YAML file named by the `config_file` parameter, if any
//! 3. the `cmd_vel_topic`, `speed` and `flip_interval` ROS parameters

use eyre::{Result, WrapErr, eyre};
use flip_ros2::flip_core::FlipConfig;
use rclrs::Node;
use serde::Deserialize;
use std::{fs, path::Path, sync::Arc};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Controller parameters.
    #[serde(flatten)]
    pub flip: FlipConfig,

    /// Optional QoS configuration.
    #[serde(default)]
    pub qos: QosConfig,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Declare the node parameters and resolve the final configuration.
    pub fn from_node(node: &Node) -> Result<Self> {
        let config_file: Arc<str> = node
            .declare_parameter::<Arc<str>>("config_file")
            .default(Arc::from(""))
            .mandatory()
            .map_err(|e| eyre!("Failed to declare parameter 'config_file': {}", e))?
            .get();

        let mut config = if config_file.is_empty() {
            Config::default()
        } else {
            tracing::info!(config_file = %config_file, "Loading configuration");
            Config::load(config_file.as_ref())?
        };

        let cmd_vel_topic: Arc<str> = node
            .declare_parameter::<Arc<str>>("cmd_vel_topic")
            .default(Arc::from(config.flip.cmd_vel_topic.as_str()))
            .mandatory()
            .map_err(|e| eyre!("Failed to declare parameter 'cmd_vel_topic': {}", e))?
            .get();

        let speed: f64 = node
            .declare_parameter::<f64>("speed")
            .default(config.flip.speed)
            .mandatory()
            .map_err(|e| eyre!("Failed to declare parameter 'speed': {}", e))?
            .get();

        let flip_interval: f64 = node
            .declare_parameter::<f64>("flip_interval")
            .default(config.flip.flip_interval)
            .mandatory()
            .map_err(|e| eyre!("Failed to declare parameter 'flip_interval': {}", e))?
            .get();

        config.flip = FlipConfig {
            cmd_vel_topic: cmd_vel_topic.to_string(),
            speed,
            flip_interval,
        };

        Ok(config)
    }
}

/// QoS configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QosConfig {
    /// Reliability setting.
    #[serde(default = "default_reliability")]
    pub reliability: Reliability,

    /// History depth.
    #[serde(default = "default_history_depth")]
    pub history_depth: u32,
}

impl Default for QosConfig {
    fn default() -> Self {
        Self {
            reliability: default_reliability(),
            history_depth: default_history_depth(),
        }
    }
}

fn default_reliability() -> Reliability {
    Reliability::Reliable
}

fn default_history_depth() -> u32 {
    10
}

/// QoS reliability setting.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Reliability {
    BestEffort,
    #[default]
    Reliable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_example_config() {
        let yaml = r#"
cmd_vel_topic: /robot/cmd_vel
speed: 0.5
flip_interval: 2.0

qos:
  reliability: best_effort
  history_depth: 1
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.flip.cmd_vel_topic, "/robot/cmd_vel");
        assert_eq!(config.flip.speed, 0.5);
        assert_eq!(config.flip.flip_interval, 2.0);
        assert_eq!(config.qos.reliability, Reliability::BestEffort);
        assert_eq!(config.qos.history_depth, 1);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.flip.cmd_vel_topic, "cmd_vel");
        assert_eq!(config.flip.speed, 1.0);
        assert_eq!(config.flip.flip_interval, 3.0);
        assert_eq!(config.qos.reliability, Reliability::Reliable);
        assert_eq!(config.qos.history_depth, 10);
    }

    #[test]
    fn test_partial_qos_section() {
        let yaml = r#"
speed: 2.5
qos:
  history_depth: 5
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.flip.speed, 2.5);
        assert_eq!(config.flip.flip_interval, 3.0);
        assert_eq!(config.qos.reliability, Reliability::Reliable);
        assert_eq!(config.qos.history_depth, 5);
    }

    #[test]
    fn test_reject_history_depth_beyond_u32() {
        let yaml = r#"
qos:
  history_depth: 4294967296
"#;

        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_reject_negative_history_depth() {
        let yaml = r#"
qos:
  history_depth: -1
"#;

        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_reject_unknown_reliability() {
        let yaml = r#"
qos:
  reliability: sometimes
"#;

        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_bundled_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/flip.yaml");
        let config = Config::load(&path).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_launch_file_leaves_values_to_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("launch/flip.launch.xml");
        let launch = fs::read_to_string(&path).unwrap();

        assert!(launch.contains(r#"<param name="config_file""#));
        for name in ["cmd_vel_topic", "speed", "flip_interval"] {
            assert!(
                !launch.contains(&format!(r#"<param name="{name}""#)),
                "launch file overrides {name} from the config file"
            );
        }
    }
}
