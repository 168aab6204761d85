use crate::{Axis, JointAngles};

/// Rotation range of a single joint, radians.
#[derive(Copy, Clone, Debug, PartialEq, serde::Deserialize)]
pub struct JointLimit {
    /// Lower bound, inclusive.
    pub lower: f32,
    /// Upper bound, inclusive.
    pub upper: f32,
}

impl JointLimit {
    /// Construct a new joint limit.
    pub fn new(lower: f32, upper: f32) -> Self {
        Self { lower, upper }
    }

    /// Whether the angle lies within the range.
    #[inline]
    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.lower && angle <= self.upper
    }

    /// Clamp the angle to the range.
    #[inline]
    pub fn clamp(&self, angle: f32) -> f32 {
        angle.clamp(self.lower, self.upper)
    }
}

/// Fixed geometry of the arm.
///
/// Segment lengths and joint ranges are immutable for the lifetime of the
/// arm. The default profile is the canonical variant: a 0.5 base column and
/// two 2.0 segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArmConfig {
    /// Height of the shoulder above the origin.
    pub base_height: f32,
    /// Upper arm segment length (L2).
    pub upper_arm: f32,
    /// Forearm segment length (L3).
    pub forearm: f32,
    /// Shoulder pitch range.
    pub pitch_limit: JointLimit,
    /// Shoulder yaw range.
    pub yaw_limit: JointLimit,
    /// Elbow range.
    pub elbow_limit: JointLimit,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            base_height: 0.5,
            upper_arm: 2.0,
            forearm: 2.0,
            pitch_limit: JointLimit::new(40.0_f32.to_radians(), 120.0_f32.to_radians()),
            yaw_limit: JointLimit::new(-175.0_f32.to_radians(), 175.0_f32.to_radians()),
            elbow_limit: JointLimit::new(-150.0_f32.to_radians(), 0.0),
        }
    }
}

impl ArmConfig {
    /// Joint limit for the given axis.
    pub fn limit(&self, axis: Axis) -> JointLimit {
        match axis {
            Axis::Pitch => self.pitch_limit,
            Axis::Yaw => self.yaw_limit,
            Axis::Elbow => self.elbow_limit,
        }
    }

    /// Maximum distance the end effector can reach from the shoulder.
    #[inline]
    pub fn reach(&self) -> f32 {
        self.upper_arm + self.forearm
    }

    /// Whether the configuration lies within all joint limits.
    pub fn within_limits(&self, angles: &JointAngles) -> bool {
        Axis::ALL
            .iter()
            .all(|axis| self.limit(*axis).contains(angles.angle(*axis)))
    }

    /// Rest configuration the arm starts from.
    pub fn rest_angles(&self) -> JointAngles {
        JointAngles::new(
            65.0_f32.to_radians(),
            0.0,
            -100.0_f32.to_radians(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_contains() {
        let limit = JointLimit::new(-1.0, 1.0);

        assert!(limit.contains(0.0));
        assert!(limit.contains(-1.0));
        assert!(limit.contains(1.0));
        assert!(!limit.contains(1.1));
        assert_eq!(limit.clamp(2.0), 1.0);
        assert_eq!(limit.clamp(-2.0), -1.0);
    }

    #[test]
    fn test_default_profile() {
        let config = ArmConfig::default();

        assert_eq!(config.reach(), 4.0);
        assert!(config.within_limits(&config.rest_angles()));
        assert!(!config.within_limits(&JointAngles::new(0.0, 0.0, 0.0)));
    }
}
