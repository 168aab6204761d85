use crate::math::normalize_angle;
use crate::{ArmConfig, JointAngles, Target};

/// Inverse kinematics failure.
///
/// Covers targets outside the reachable annulus, degenerate elbow cosines
/// and configurations where no branch satisfies the joint limits. The
/// caller must leave its motion state untouched on failure.
#[derive(Debug, PartialEq, Eq)]
pub enum KinematicsError {
    /// No limit-satisfying joint configuration reaches the target.
    Unreachable,
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KinematicsError::Unreachable => write!(f, "target is out of reach"),
        }
    }
}

impl std::error::Error for KinematicsError {}

/// Inverse kinematics of the three link chain.
///
/// The yaw follows directly from the horizontal bearing of the target;
/// the remaining pitch and elbow form a planar two link problem solved
/// with the law of cosines. The elbow admits an up and a down branch and
/// both are generated; a solver that silently takes one branch fails near
/// the limit boundaries.
pub struct InverseKinematics {
    config: ArmConfig,
}

impl InverseKinematics {
    /// Construct a solver for the given arm profile.
    pub fn new(config: &ArmConfig) -> Self {
        Self { config: *config }
    }

    /// Solve for the joint configuration reaching the target.
    ///
    /// Candidates outside the joint limits are discarded; among the
    /// survivors the one with the least total angular displacement from
    /// `current` wins, ties going to the elbow-up branch.
    pub fn solve(
        &self,
        target: &Target,
        current: &JointAngles,
    ) -> Result<JointAngles, KinematicsError> {
        let l2 = self.config.upper_arm;
        let l3 = self.config.forearm;

        let yaw = (-target.point.z).atan2(target.point.x);

        // Planar reduction: radial distance and height above the shoulder.
        let r = (target.point.x.powi(2) + target.point.z.powi(2)).sqrt();
        let s = target.point.y - self.config.base_height;

        let cos_elbow = (r.powi(2) + s.powi(2) - l2.powi(2) - l3.powi(2)) / (2.0 * l2 * l3);
        if cos_elbow.abs() > 1.0 {
            return Err(KinematicsError::Unreachable);
        }

        let sin_elbow = (1.0 - cos_elbow.powi(2)).sqrt();

        let mut best: Option<JointAngles> = None;

        // Elbow-up branch first; it wins displacement ties.
        for sign in [1.0, -1.0] {
            let elbow = (sign * sin_elbow).atan2(cos_elbow);

            let phi = s.atan2(r);
            let psi = (l3 * elbow.sin()).atan2(l2 + l3 * elbow.cos());

            let candidate = JointAngles {
                pitch: normalize_angle(phi - psi),
                yaw: normalize_angle(yaw),
                elbow: normalize_angle(elbow),
            };

            if !self.config.within_limits(&candidate) {
                continue;
            }

            let replace = match &best {
                Some(winner) => candidate.displacement(current) < winner.displacement(current),
                None => true,
            };
            if replace {
                best = Some(candidate);
            }
        }

        best.ok_or(KinematicsError::Unreachable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ForwardKinematics;

    fn roundtrip(target: Target) -> JointAngles {
        let config = ArmConfig::default();
        let ik = InverseKinematics::new(&config);
        let fk = ForwardKinematics::new(&config);

        let angles = ik
            .solve(&target, &config.rest_angles())
            .expect("target should be reachable");

        let pose = fk.solve(&angles);
        let error = nalgebra::distance(&pose.end_effector(), &target.point);
        assert!(
            error < 1e-3,
            "fk(ik(target)) error {} for target {}",
            error,
            target
        );

        angles
    }

    #[test]
    fn test_canonical_scenario() {
        // Rest angles 65/0/-100 degrees, L2 = L3 = 2.0, base height 0.5.
        let angles = roundtrip(Target::from_point(1.0, 1.5, 1.0));

        let config = ArmConfig::default();
        assert!(config.within_limits(&angles));
        assert!((angles.yaw + 45.0_f32.to_radians()).abs() < 1e-3);
    }

    #[test]
    fn test_roundtrip_within_annulus() {
        roundtrip(Target::from_point(2.0, 2.0, 0.0));
        roundtrip(Target::from_point(1.5, 3.0, -1.0));
        roundtrip(Target::from_point(0.5, 2.5, 1.5));
    }

    #[test]
    fn test_out_of_reach() {
        let config = ArmConfig::default();
        let ik = InverseKinematics::new(&config);

        // Beyond L2 + L3 from the shoulder.
        let result = ik.solve(&Target::from_point(5.0, 0.5, 0.0), &config.rest_angles());
        assert_eq!(result, Err(KinematicsError::Unreachable));

        // Inside the inner annulus boundary a fully folded elbow would be
        // needed, which the limits forbid as well.
        let result = ik.solve(&Target::from_point(0.0, 0.5, 0.0), &config.rest_angles());
        assert!(result.is_err());
    }

    #[test]
    fn test_limit_filtering() {
        let config = ArmConfig::default();
        let ik = InverseKinematics::new(&config);

        // Every returned solution respects the profile limits.
        let angles = ik
            .solve(&Target::from_point(1.0, 1.5, 1.0), &config.rest_angles())
            .unwrap();
        assert!(config.within_limits(&angles));

        // A target below the shoulder plane forces the pitch under its
        // lower bound on both branches.
        let result = ik.solve(&Target::from_point(3.5, 0.0, 0.0), &config.rest_angles());
        assert!(result.is_err());
    }
}
