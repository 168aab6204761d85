use crate::consts::{ANGLE_TOLERANCE, FLOOR_CLEARANCE};
use crate::core::algorithm::ForwardKinematics;
use crate::core::math::step_toward;
use crate::core::{ArmConfig, Axis, JointAngles};

/// Drives the joint angles toward a commanded configuration.
///
/// The controller is a two state machine. While idle the angles only move
/// through direct per-axis deltas; while reaching they converge toward the
/// target once per tick under a maximum angular speed, each axis stepping
/// independently. Setting a new target while reaching overwrites the old
/// one; there is no queuing.
pub struct MotionController {
    angles: JointAngles,
    target: Option<JointAngles>,
}

impl MotionController {
    /// Construct a controller at the rest configuration.
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            angles: config.rest_angles(),
            target: None,
        }
    }

    /// Current joint configuration.
    #[inline]
    pub fn angles(&self) -> JointAngles {
        self.angles
    }

    /// Whether a target is in flight.
    #[inline]
    pub fn is_reaching(&self) -> bool {
        self.target.is_some()
    }

    /// Command a target configuration and enter the reaching state.
    pub fn set_target(&mut self, target: JointAngles) {
        if self.target.is_some() {
            trace!("Target overwritten: {}", target);
        }

        self.target = Some(target);
    }

    /// Overwrite the joint configuration directly, dropping any target.
    ///
    /// Used by sequence playback, which replaces the motion state frame by
    /// frame instead of converging toward it.
    pub fn overwrite(&mut self, angles: JointAngles) {
        self.angles = angles;
        self.target = None;
    }

    /// Reset to the rest configuration.
    pub fn reset(&mut self, config: &ArmConfig) {
        self.angles = config.rest_angles();
        self.target = None;
    }

    /// Advance toward the target by at most `max_step` per axis.
    ///
    /// When every axis is within tolerance of the target the controller
    /// snaps onto it, drops the target and returns to idle. A target that
    /// never converges keeps the controller reaching indefinitely; that is
    /// accepted behavior, not an error.
    pub fn tick(&mut self, max_step: f32) {
        let Some(target) = self.target else {
            return;
        };

        let mut done = true;
        for axis in Axis::ALL {
            let current = self.angles.angle(axis);
            let goal = target.angle(axis);

            if (goal - current).abs() > ANGLE_TOLERANCE {
                *self.angles.angle_mut(axis) = step_toward(current, goal, max_step);
                done = false;
            }
        }

        if done {
            self.angles = target;
            self.target = None;
            debug!("Target reached: {}", self.angles);
        }
    }

    /// Apply a manual jog delta on one axis.
    ///
    /// Permitted only while idle. The result is clamped to the axis limit,
    /// and for the pitch and elbow axes the delta is reverted when it
    /// would push the end effector below the floor clearance. The floor
    /// constraint is derived, so it is recomputed from forward kinematics
    /// after the delta.
    pub fn apply_delta(&mut self, config: &ArmConfig, axis: Axis, delta: f32) {
        if self.target.is_some() {
            trace!("Ignoring {} delta while reaching", axis);
            return;
        }

        let previous = self.angles;

        let angle = self.angles.angle(axis) + delta;
        *self.angles.angle_mut(axis) = config.limit(axis).clamp(angle);

        if matches!(axis, Axis::Pitch | Axis::Elbow) {
            let fk = ForwardKinematics::new(config);
            if fk.solve(&self.angles).end_effector().y < FLOOR_CLEARANCE {
                self.angles = previous;
            }
        }
    }
}
