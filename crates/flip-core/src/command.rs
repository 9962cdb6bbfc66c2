/// A three-component vector, laid out like `geometry_msgs/Vector3`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A velocity command, laid out like `geometry_msgs/Twist`.
///
/// The flip controller only ever sets `linear.x`; the other five
/// components stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityCommand {
    pub linear: Vector3,
    pub angular: Vector3,
}

impl VelocityCommand {
    /// A command moving along the x axis at `x` units per second.
    pub fn linear_x(x: f64) -> Self {
        Self {
            linear: Vector3 {
                x,
                ..Vector3::default()
            },
            ..Self::default()
        }
    }
}
