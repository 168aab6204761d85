use std::{error, fmt};

use crate::core::algorithm::KinematicsError;

pub type Result<T = ()> = std::result::Result<T, Error>;

/// Runtime error.
///
/// Every variant is a well-defined rejection that leaves prior state
/// intact; there are no fatal classes in the simulation core.
#[derive(Debug)]
pub enum Error {
    /// Inverse kinematics found no limit-satisfying solution.
    Kinematics(KinematicsError),
    /// The end effector is not within the object radius.
    GraspTooFar { distance: f32, radius: f32 },
    /// The gripper is already holding an object.
    GraspAlreadyHolding,
    /// Playback was requested with no recorded frames.
    SequenceEmpty,
    /// Unknown object handle.
    InvalidObject,
    /// Profile file could not be read.
    Io(std::io::Error),
    /// Profile file could not be parsed.
    Config(toml::de::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Kinematics(e) => write!(f, "{}", e),
            Error::GraspTooFar { distance, radius } => {
                write!(
                    f,
                    "can't grab - too far ({:.2} >= {:.2})",
                    distance, radius
                )
            }
            Error::GraspAlreadyHolding => write!(f, "can't grab - grabber closed"),
            Error::SequenceEmpty => write!(f, "no moves were taught"),
            Error::InvalidObject => write!(f, "unknown object handle"),
            Error::Io(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Kinematics(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KinematicsError> for Error {
    fn from(value: KinematicsError) -> Self {
        Error::Kinematics(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::Config(value)
    }
}
