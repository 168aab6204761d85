use crate::math::normalize_angle;

/// Arm joint axis.
///
/// The three degrees of freedom of the arm, ordered shoulder first.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Shoulder pitch about the horizontal axis.
    Pitch = 0,
    /// Shoulder yaw about the vertical axis.
    Yaw = 1,
    /// Elbow pitch relative to the upper arm.
    Elbow = 2,
}

impl Axis {
    /// All axes in joint order.
    pub const ALL: [Axis; 3] = [Axis::Pitch, Axis::Yaw, Axis::Elbow];
}

impl TryFrom<u8> for Axis {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::Pitch),
            1 => Ok(Axis::Yaw),
            2 => Ok(Axis::Elbow),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Pitch => write!(f, "pitch"),
            Axis::Yaw => write!(f, "yaw"),
            Axis::Elbow => write!(f, "elbow"),
        }
    }
}

/// Joint configuration of the arm.
///
/// An ordered triple of shoulder pitch, shoulder yaw and elbow angle in
/// radians. Committed configurations stay within the profile limits; only
/// the interpolation toward a target may pass through values outside them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JointAngles {
    /// Shoulder pitch angle.
    pub pitch: f32,
    /// Shoulder yaw angle.
    pub yaw: f32,
    /// Elbow angle.
    pub elbow: f32,
}

impl JointAngles {
    /// Construct a new joint configuration.
    pub fn new(pitch: f32, yaw: f32, elbow: f32) -> Self {
        Self { pitch, yaw, elbow }
    }

    /// Angle on the given axis.
    #[inline]
    pub fn angle(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Pitch => self.pitch,
            Axis::Yaw => self.yaw,
            Axis::Elbow => self.elbow,
        }
    }

    /// Mutable angle on the given axis.
    #[inline]
    pub fn angle_mut(&mut self, axis: Axis) -> &mut f32 {
        match axis {
            Axis::Pitch => &mut self.pitch,
            Axis::Yaw => &mut self.yaw,
            Axis::Elbow => &mut self.elbow,
        }
    }

    /// Return the configuration with every angle wrapped into (-PI, PI].
    pub fn normalized(&self) -> Self {
        Self {
            pitch: normalize_angle(self.pitch),
            yaw: normalize_angle(self.yaw),
            elbow: normalize_angle(self.elbow),
        }
    }

    /// Total absolute angular displacement to another configuration.
    pub fn displacement(&self, rhs: &Self) -> f32 {
        (self.pitch - rhs.pitch).abs() + (self.yaw - rhs.yaw).abs() + (self.elbow - rhs.elbow).abs()
    }
}

impl From<(f32, f32, f32)> for JointAngles {
    fn from((pitch, yaw, elbow): (f32, f32, f32)) -> Self {
        Self { pitch, yaw, elbow }
    }
}

impl From<[f32; 3]> for JointAngles {
    fn from([pitch, yaw, elbow]: [f32; 3]) -> Self {
        Self { pitch, yaw, elbow }
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pitch: {:.2}rad {:.2}°; Yaw: {:.2}rad {:.2}°; Elbow: {:.2}rad {:.2}°",
            self.pitch,
            self.pitch.to_degrees(),
            self.yaw,
            self.yaw.to_degrees(),
            self.elbow,
            self.elbow.to_degrees(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::try_from(axis as u8), Ok(axis));
        }
        assert!(Axis::try_from(3).is_err());
    }

    #[test]
    fn test_angle_by_axis() {
        let mut angles = JointAngles::new(0.1, 0.2, 0.3);

        assert_eq!(angles.angle(Axis::Pitch), 0.1);
        assert_eq!(angles.angle(Axis::Yaw), 0.2);
        assert_eq!(angles.angle(Axis::Elbow), 0.3);

        *angles.angle_mut(Axis::Elbow) = -0.5;
        assert_eq!(angles.elbow, -0.5);
    }

    #[test]
    fn test_normalized() {
        let angles = JointAngles::new(3.0 * std::f32::consts::PI, 0.0, -0.5).normalized();

        assert!((angles.pitch.abs() - std::f32::consts::PI).abs() < 1e-5);
        assert!((angles.elbow + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_displacement() {
        let lhs = JointAngles::new(0.0, 1.0, -1.0);
        let rhs = JointAngles::new(0.5, 0.5, -0.5);

        assert!((lhs.displacement(&rhs) - 1.5).abs() < 1e-6);
        assert_eq!(lhs.displacement(&lhs), 0.0);
    }
}
