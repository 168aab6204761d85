use nalgebra::{Point3, Rotation3, Vector3};

use crate::math::YawPitch;
use crate::{ArmConfig, JointAngles};

/// Spatial joint positions for one joint configuration.
#[derive(Copy, Clone, Debug)]
pub struct ArmPose {
    /// Shoulder position on top of the base column.
    pub base: Point3<f32>,
    /// Elbow position.
    pub joint1: Point3<f32>,
    /// End effector position.
    pub joint2: Point3<f32>,
    /// Gripper forward direction, the unit vector of the last link.
    pub direction: Vector3<f32>,
}

impl ArmPose {
    /// End effector position, the terminal point of the chain.
    #[inline]
    pub fn end_effector(&self) -> Point3<f32> {
        self.joint2
    }
}

impl std::fmt::Display for ArmPose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Endpoint [{:.2}, {:.2}, {:.2}]",
            self.joint2.x, self.joint2.y, self.joint2.z
        )
    }
}

/// Forward kinematics of the three link chain.
///
/// Pitch angles are measured from the horizontal plane in the vertical
/// plane selected by the yaw bearing. The solve is deterministic and has
/// no failure mode.
pub struct ForwardKinematics {
    base_height: f32,
    l2: f32,
    l3: f32,
}

impl ForwardKinematics {
    /// Construct a solver for the given arm profile.
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            base_height: config.base_height,
            l2: config.upper_arm,
            l3: config.forearm,
        }
    }

    /// Compute the joint positions for a configuration.
    pub fn solve(&self, angles: &JointAngles) -> ArmPose {
        let base = Point3::new(0.0, self.base_height, 0.0);

        // Unit vector at the yaw bearing, so that yaw = atan2(-z, x).
        let radial = Rotation3::from_yaw(angles.yaw) * Vector3::x();
        let up = Vector3::y();

        let dir1 = radial * angles.pitch.cos() + up * angles.pitch.sin();
        let joint1 = base + dir1 * self.l2;

        let reach = angles.pitch + angles.elbow;
        let dir2 = radial * reach.cos() + up * reach.sin();
        let joint2 = joint1 + dir2 * self.l3;

        ArmPose {
            base,
            joint1,
            joint2,
            direction: dir2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_up() {
        let config = ArmConfig::default();
        let fk = ForwardKinematics::new(&config);

        // Both links vertical: pitch 90 degrees, elbow fully extended.
        let pose = fk.solve(&JointAngles::new(90.0_f32.to_radians(), 0.0, 0.0));

        let tolerance = 1e-5;
        assert!((pose.joint2.x).abs() < tolerance);
        assert!((pose.joint2.y - 4.5).abs() < tolerance);
        assert!((pose.joint2.z).abs() < tolerance);
    }

    #[test]
    fn test_horizontal_reach() {
        let config = ArmConfig::default();
        let fk = ForwardKinematics::new(&config);

        let pose = fk.solve(&JointAngles::new(0.0, 0.0, 0.0));

        let tolerance = 1e-5;
        assert!((pose.joint2.x - 4.0).abs() < tolerance);
        assert!((pose.joint2.y - 0.5).abs() < tolerance);
        assert!((pose.joint2.z).abs() < tolerance);
    }

    #[test]
    fn test_yaw_bearing() {
        let config = ArmConfig::default();
        let fk = ForwardKinematics::new(&config);

        // Quarter turn: the arm points along -z.
        let pose = fk.solve(&JointAngles::new(0.0, 90.0_f32.to_radians(), 0.0));

        let tolerance = 1e-5;
        assert!((pose.joint2.x).abs() < tolerance);
        assert!((pose.joint2.z + 4.0).abs() < tolerance);

        // The bearing is recovered by atan2(-z, x).
        let yaw = (-pose.joint2.z).atan2(pose.joint2.x);
        assert!((yaw - 90.0_f32.to_radians()).abs() < tolerance);
    }

    #[test]
    fn test_direction_is_unit() {
        let config = ArmConfig::default();
        let fk = ForwardKinematics::new(&config);

        let pose = fk.solve(&config.rest_angles());
        assert!((pose.direction.norm() - 1.0).abs() < 1e-5);
    }
}
