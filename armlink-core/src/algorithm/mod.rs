pub use self::fk::{ArmPose, ForwardKinematics};
pub use self::ik::{InverseKinematics, KinematicsError};

mod fk;
mod ik;
