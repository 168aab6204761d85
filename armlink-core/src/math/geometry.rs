use nalgebra::{Rotation3, UnitQuaternion, Vector3};

/// Rotations about the world axes of the y-up simulator frame.
///
/// Yaw turns about the vertical y axis, pitch about the horizontal x axis.
pub trait YawPitch {
    /// Create a rotation from a yaw angle.
    fn from_yaw(yaw: f32) -> Self;
    /// Create a rotation from a pitch angle.
    fn from_pitch(pitch: f32) -> Self;
}

impl YawPitch for Rotation3<f32> {
    #[inline]
    fn from_yaw(yaw: f32) -> Self {
        Rotation3::from_axis_angle(&Vector3::y_axis(), yaw)
    }

    #[inline]
    fn from_pitch(pitch: f32) -> Self {
        Rotation3::from_axis_angle(&Vector3::x_axis(), pitch)
    }
}

impl YawPitch for UnitQuaternion<f32> {
    #[inline]
    fn from_yaw(yaw: f32) -> Self {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
    }

    #[inline]
    fn from_pitch(pitch: f32) -> Self {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaw_about_vertical() {
        let rotation = Rotation3::from_yaw(90.0_f32.to_radians());
        let rotated = rotation * Vector3::x();

        let tolerance = 1e-6;
        assert!((rotated.x).abs() < tolerance);
        assert!((rotated.y).abs() < tolerance);
        assert!((rotated.z + 1.0).abs() < tolerance);
    }

    #[test]
    fn test_pitch_about_horizontal() {
        let rotation = Rotation3::from_pitch(90.0_f32.to_radians());
        let rotated = rotation * Vector3::y();

        let tolerance = 1e-6;
        assert!((rotated.x).abs() < tolerance);
        assert!((rotated.y).abs() < tolerance);
        assert!((rotated.z - 1.0).abs() < tolerance);
    }
}
