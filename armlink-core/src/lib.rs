// Copyright (C) 2024 Armlink Contributors
// All rights reserved.

/// The `armlink-core` library holds the pure parts of the arm simulator:
/// the world-frame geometry helpers, the joint and arm profile types, and
/// the forward and inverse kinematics solvers.
///
/// The world frame is y-up: x to the right, y up, z toward the viewer.
/// All angles are radians. Nothing in this crate owns mutable simulation
/// state; the runtime crate layers the motion controller, grasp manager
/// and sequence recorder on top of these types.
pub mod algorithm;
pub mod math;

pub use nalgebra;

mod config;
mod joint;
mod target;

pub use self::config::{ArmConfig, JointLimit};
pub use self::joint::{Axis, JointAngles};
pub use self::target::Target;
