use nalgebra::Point3;

use crate::consts::DEFAULT_MAX_STEP;
use crate::core::algorithm::{ArmPose, ForwardKinematics, InverseKinematics};
use crate::core::{ArmConfig, Axis, JointAngles, Target};
use crate::grasp::GraspManager;
use crate::motion::MotionController;
use crate::scene::{Grabbable, ObjectId, Scene};
use crate::sequence::{Sequence, SequenceFrame};
use crate::{Error, Result};

/// Operating mode of the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Manual control, nothing recorded.
    Free,
    /// Manual control with per-tick recording.
    Teach,
    /// Looped replay of the recorded sequence.
    Play,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Free => write!(f, "free"),
            Mode::Teach => write!(f, "teach"),
            Mode::Play => write!(f, "play"),
        }
    }
}

/// Owner of the whole simulation state.
///
/// One session holds the motion controller, the grasp manager, the
/// sequence and the scene, and is stepped synchronously once per frame by
/// the outer loop. Input reaches the session as plain method calls,
/// independent of the concrete input device.
pub struct Session {
    config: ArmConfig,
    fk: ForwardKinematics,
    ik: InverseKinematics,
    motion: MotionController,
    grasp: GraspManager,
    sequence: Sequence,
    scene: Scene,
    subject: Option<ObjectId>,
    mode: Mode,
    max_step: f32,
}

impl Session {
    /// Construct a session for the given arm profile.
    pub fn new(config: ArmConfig) -> Self {
        Self {
            fk: ForwardKinematics::new(&config),
            ik: InverseKinematics::new(&config),
            motion: MotionController::new(&config),
            grasp: GraspManager::default(),
            sequence: Sequence::default(),
            scene: Scene::default(),
            subject: None,
            mode: Mode::Free,
            max_step: DEFAULT_MAX_STEP,
            config,
        }
    }

    /// Maximum angular speed per tick.
    pub fn set_max_step(&mut self, max_step: f32) {
        self.max_step = max_step;
    }

    /// Add a grabbable object to the scene.
    ///
    /// The first object becomes the subject whose position is tracked in
    /// recorded frames.
    pub fn add_object(&mut self, object: Grabbable) -> ObjectId {
        let id = self.scene.add_object(object);
        self.subject.get_or_insert(id);
        id
    }

    /// Arm profile.
    #[inline]
    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    /// Current operating mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current joint configuration, for display and link transforms.
    #[inline]
    pub fn angles(&self) -> JointAngles {
        self.motion.angles()
    }

    /// Computed joint and end effector positions, for drawing.
    pub fn pose(&self) -> ArmPose {
        self.fk.solve(&self.motion.angles())
    }

    /// Whether a target is in flight.
    #[inline]
    pub fn is_reaching(&self) -> bool {
        self.motion.is_reaching()
    }

    /// Whether the gripper is holding, for gripper spacing visuals.
    #[inline]
    pub fn is_holding(&self) -> bool {
        self.grasp.is_holding()
    }

    /// Number of recorded frames, for the sequence UI.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.sequence.len()
    }

    /// Whether a sequence was taught, for the no-recording message.
    #[inline]
    pub fn has_recording(&self) -> bool {
        !self.sequence.is_empty()
    }

    /// Scene access for rendering collaborators.
    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access.
    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Switch the operating mode.
    ///
    /// Entering play rewinds the sequence cursor so replay is
    /// deterministic from the first frame; all other transitions carry
    /// state over unchanged.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }

        if mode == Mode::Play {
            self.sequence.rewind();
        }

        info!("Mode changed: {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    /// Apply a manual jog delta on one axis.
    ///
    /// Manual control is only available in free and teach mode.
    pub fn apply_delta(&mut self, axis: Axis, delta: f32) {
        if self.mode == Mode::Play {
            return;
        }

        self.motion.apply_delta(&self.config, axis, delta);
    }

    /// Reset the arm to its rest configuration.
    pub fn reset_arm(&mut self) {
        self.motion.reset(&self.config);
    }

    /// Command the end effector toward a target position.
    ///
    /// Solves inverse kinematics from the current configuration and hands
    /// the winning branch to the motion controller. On an unreachable
    /// target the motion state is left unchanged.
    pub fn command_target(&mut self, target: impl Into<Target>) -> Result {
        let target = target.into();

        match self.ik.solve(&target, &self.motion.angles()) {
            Ok(angles) => {
                debug!("Target {} solved: {}", target, angles);
                self.motion.set_target(angles);
                Ok(())
            }
            Err(e) => {
                warn!("Target {} rejected: {}", target, e);
                Err(e.into())
            }
        }
    }

    /// Attempt to grasp an object with the gripper.
    pub fn try_grasp(&mut self, id: ObjectId) -> Result {
        let end_effector = self.pose().end_effector();

        match self.grasp.try_grasp(&self.scene, id, end_effector) {
            Ok(()) => {
                debug!("Object grasped at {}", self.pose());
                Ok(())
            }
            Err(e) => {
                warn!("Grasp rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Release the held object.
    pub fn release(&mut self) {
        self.grasp.release();
    }

    /// Advance the simulation by one tick.
    ///
    /// Integrates motion, keeps the held object attached, and records or
    /// replays a frame depending on the mode. In play mode with nothing
    /// recorded the tick reports the empty-sequence condition and changes
    /// nothing.
    pub fn tick(&mut self) -> Result {
        if self.mode == Mode::Play {
            return self.playback_tick();
        }

        self.motion.tick(self.max_step);

        let end_effector = self.pose().end_effector();
        self.grasp.sync(&mut self.scene, end_effector);

        if self.mode == Mode::Teach {
            self.record_frame();
        }

        Ok(())
    }

    /// Snapshot the current state into the sequence.
    fn record_frame(&mut self) {
        let object_position = self
            .subject
            .and_then(|id| self.scene.object(id))
            .map(|object| object.position)
            .unwrap_or_else(Point3::origin);

        self.sequence.record(SequenceFrame {
            angles: self.motion.angles(),
            holding: self.grasp.is_holding(),
            object: self.subject,
            object_position,
        });
    }

    /// Apply the next recorded frame and advance the cursor.
    fn playback_tick(&mut self) -> Result {
        let Some(frame) = self.sequence.advance() else {
            return Err(Error::SequenceEmpty);
        };
        let frame = *frame;

        self.motion.overwrite(frame.angles);
        self.grasp
            .overwrite(if frame.holding { frame.object } else { None });

        if let Some(id) = frame.object {
            if let Some(object) = self.scene.object_mut(id) {
                object.position = if frame.holding {
                    // The handle is shared across frames, so the stored
                    // position is stale for held frames; re-derive the
                    // attachment point from the replayed angles.
                    self.fk.solve(&frame.angles).end_effector()
                } else {
                    frame.object_position
                };
            }
        }

        Ok(())
    }
}
