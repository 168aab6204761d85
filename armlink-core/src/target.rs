use nalgebra::Point3;

/// A point in space the end effector should reach.
///
/// The arm has no wrist, so a target carries no orientation; the gripper
/// heading follows from the last link vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    /// The point in space.
    pub point: Point3<f32>,
}

impl Target {
    /// Construct a new target from a point
    pub fn from_point(x: f32, y: f32, z: f32) -> Self {
        Self {
            point: Point3::new(x, y, z),
        }
    }
}

impl From<Point3<f32>> for Target {
    fn from(point: Point3<f32>) -> Self {
        Self { point }
    }
}

impl From<(f32, f32, f32)> for Target {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self {
            point: Point3::new(x, y, z),
        }
    }
}

impl From<[f32; 3]> for Target {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self {
            point: Point3::new(x, y, z),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2})",
            self.point.x, self.point.y, self.point.z
        )
    }
}
