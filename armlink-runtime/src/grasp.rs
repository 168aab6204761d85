use nalgebra::Point3;

use crate::scene::{ObjectId, Scene};
use crate::{Error, Result};

/// Binds a held object to the end effector frame.
///
/// Grasping is gated by a strict proximity test against the object
/// radius. While an object is held the owning loop calls `sync` once per
/// tick, which overwrites the object position with the end effector
/// position and so establishes a rigid attachment.
#[derive(Default)]
pub struct GraspManager {
    held: Option<ObjectId>,
}

impl GraspManager {
    /// Handle of the held object, if any.
    #[inline]
    pub fn held(&self) -> Option<ObjectId> {
        self.held
    }

    /// Whether the gripper is holding an object.
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Attempt to bind an object to the gripper.
    ///
    /// Succeeds only when the end effector is strictly within the object
    /// radius and nothing is held yet. Both rejections are distinct
    /// non-fatal conditions and leave the grasp state unchanged; the
    /// object is not moved on success, position sync happens per tick.
    pub fn try_grasp(
        &mut self,
        scene: &Scene,
        id: ObjectId,
        end_effector: Point3<f32>,
    ) -> Result {
        if self.held.is_some() {
            return Err(Error::GraspAlreadyHolding);
        }

        let object = scene.object(id).ok_or(Error::InvalidObject)?;

        let distance = nalgebra::distance(&end_effector, &object.position);
        if distance >= object.radius {
            return Err(Error::GraspTooFar {
                distance,
                radius: object.radius,
            });
        }

        self.held = Some(id);
        Ok(())
    }

    /// Release the held object unconditionally.
    pub fn release(&mut self) {
        self.held = None;
    }

    /// Restore a recorded grasp state during playback.
    pub(crate) fn overwrite(&mut self, held: Option<ObjectId>) {
        self.held = held;
    }

    /// Per-tick position sync of the held object.
    pub fn sync(&self, scene: &mut Scene, end_effector: Point3<f32>) {
        if let Some(id) = self.held {
            if let Some(object) = scene.object_mut(id) {
                object.position = end_effector;
            }
        }
    }
}
