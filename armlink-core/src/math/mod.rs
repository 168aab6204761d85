use std::f32::consts::PI;

pub use geometry::*;

mod geometry;

/// Wrap an angle into the half-open interval (-PI, PI].
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    angle.sin().atan2(angle.cos())
}

/// Calculate the shortest rotation between two points on a circle
pub fn shortest_rotation(distance: f32) -> f32 {
    let dist_normal = (distance + (2.0 * PI)) % (2.0 * PI);

    if dist_normal > PI {
        dist_normal - (2.0 * PI)
    } else {
        dist_normal
    }
}

/// Calculate the angle of a triangle using the law of cosines
pub fn law_of_cosines(a: f32, b: f32, c: f32) -> f32 {
    let a2 = a.powi(2);
    let b2 = b.powi(2);
    let c2 = c.powi(2);

    let numerator = a2 + b2 - c2;
    let denominator = 2.0 * a * b;

    (numerator / denominator).acos()
}

/// Move `current` toward `target` by at most `max_step`.
///
/// The step is clamped so the result never overshoots the target. This is
/// the per-axis primitive of the motion controller.
pub fn step_toward(current: f32, target: f32, max_step: f32) -> f32 {
    current + (target - current).clamp(-max_step, max_step)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle() {
        let tolerance = 1e-6;

        assert!((normalize_angle(0.0)).abs() < tolerance);
        // Wrapping an odd multiple of PI lands on either end of the
        // half-open interval depending on rounding.
        assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) + PI / 2.0).abs() < tolerance);
        assert!((normalize_angle(2.0 * PI)).abs() < tolerance);
    }

    #[test]
    fn test_shortest_rotation() {
        assert!(shortest_rotation(45.0_f32.to_radians()) < 46.0_f32.to_radians());
        assert!(shortest_rotation(179.0_f32.to_radians()) < 180.0_f32.to_radians());
        assert!(shortest_rotation(270.0_f32.to_radians()) < 0.0);
    }

    #[test]
    fn test_law_of_cosines() {
        let tolerance = 1e-5;

        // Equilateral triangle.
        assert!((law_of_cosines(1.0, 1.0, 1.0) - 60.0_f32.to_radians()).abs() < tolerance);
        // Right triangle.
        assert!((law_of_cosines(3.0, 4.0, 5.0) - 90.0_f32.to_radians()).abs() < tolerance);
    }

    #[test]
    fn test_step_toward() {
        assert_eq!(step_toward(0.0, 1.0, 0.25), 0.25);
        assert_eq!(step_toward(0.0, -1.0, 0.25), -0.25);
        // Within a single step the target is reached exactly.
        assert_eq!(step_toward(0.9, 1.0, 0.25), 1.0);
        assert_eq!(step_toward(1.0, 1.0, 0.25), 1.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 2.0, 0.75), 2.0);
    }
}
