use std::path::Path;

use crate::core::{ArmConfig, JointLimit};
use crate::Result;

/// Arm profile as found on disk.
///
/// Limits are degrees in the file and radians in memory. Missing fields
/// fall back to the canonical profile.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct Profile {
    /// Segment geometry.
    #[serde(default)]
    pub arm: ArmSection,
    /// Joint ranges in degrees, `[lower, upper]`.
    #[serde(default)]
    pub limits: LimitsSection,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct ArmSection {
    /// Height of the shoulder above the origin.
    #[serde(default = "ArmSection::default_base_height")]
    pub base_height: f32,
    /// Upper arm segment length.
    #[serde(default = "ArmSection::default_segment")]
    pub upper_arm: f32,
    /// Forearm segment length.
    #[serde(default = "ArmSection::default_segment")]
    pub forearm: f32,
}

impl ArmSection {
    fn default_base_height() -> f32 {
        0.5
    }

    fn default_segment() -> f32 {
        2.0
    }
}

impl Default for ArmSection {
    fn default() -> Self {
        Self {
            base_height: Self::default_base_height(),
            upper_arm: Self::default_segment(),
            forearm: Self::default_segment(),
        }
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct LimitsSection {
    #[serde(default = "LimitsSection::default_pitch")]
    pub pitch: [f32; 2],
    #[serde(default = "LimitsSection::default_yaw")]
    pub yaw: [f32; 2],
    #[serde(default = "LimitsSection::default_elbow")]
    pub elbow: [f32; 2],
}

impl LimitsSection {
    fn default_pitch() -> [f32; 2] {
        [40.0, 120.0]
    }

    fn default_yaw() -> [f32; 2] {
        [-175.0, 175.0]
    }

    fn default_elbow() -> [f32; 2] {
        [-150.0, 0.0]
    }
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            pitch: Self::default_pitch(),
            yaw: Self::default_yaw(),
            elbow: Self::default_elbow(),
        }
    }
}

impl Profile {
    /// Read a profile from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        Ok(toml::from_str(&contents)?)
    }

    /// Convert the profile into an arm configuration.
    pub fn arm_config(&self) -> ArmConfig {
        let limit = |range: [f32; 2]| {
            JointLimit::new(range[0].to_radians(), range[1].to_radians())
        };

        ArmConfig {
            base_height: self.arm.base_height,
            upper_arm: self.arm.upper_arm,
            forearm: self.arm.forearm,
            pitch_limit: limit(self.limits.pitch),
            yaw_limit: limit(self.limits.yaw),
            elbow_limit: limit(self.limits.elbow),
        }
    }
}
