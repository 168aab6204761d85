use nalgebra::Point3;

/// A grabbable object collaborator.
///
/// Exposes a mutable position and a fixed radius; the radius doubles as
/// the proximity gate for grasping.
#[derive(Copy, Clone, Debug)]
pub struct Grabbable {
    /// Object position in world space.
    pub position: Point3<f32>,
    /// Object radius.
    pub radius: f32,
}

impl Grabbable {
    /// Construct a new grabbable object.
    pub fn new(position: Point3<f32>, radius: f32) -> Self {
        Self { position, radius }
    }
}

impl Default for Grabbable {
    fn default() -> Self {
        Self {
            position: Point3::new(1.5, 0.5, 0.0),
            radius: 0.5,
        }
    }
}

/// Handle to an object in the scene.
///
/// Handles use reference semantics: a recorded sequence frame holds the
/// handle, not a snapshot, so record and playback share one logical
/// object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ObjectId(usize);

/// Registry of the grabbable objects in the simulation.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Grabbable>,
}

impl Scene {
    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Grabbable) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    /// Retrieve an object.
    pub fn object(&self, id: ObjectId) -> Option<&Grabbable> {
        self.objects.get(id.0)
    }

    /// Retrieve an object mutably.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Grabbable> {
        self.objects.get_mut(id.0)
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_refers_to_object() {
        let mut scene = Scene::default();
        let id = scene.add_object(Grabbable::default());

        assert_eq!(scene.len(), 1);
        assert!(scene.object(id).is_some());

        scene.object_mut(id).unwrap().position = Point3::new(0.0, 1.0, 0.0);
        assert_eq!(scene.object(id).unwrap().position, Point3::new(0.0, 1.0, 0.0));
    }
}
