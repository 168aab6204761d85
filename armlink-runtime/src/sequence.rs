use nalgebra::Point3;

use crate::core::JointAngles;
use crate::scene::ObjectId;

/// One recorded snapshot of the arm state.
///
/// Angles and the object position are captured by value; the object
/// itself is captured by handle, so every frame refers to the same
/// logical object. The recorded position is only authoritative for
/// frames captured while not holding — a held object's position is
/// re-derived from kinematics on replay.
#[derive(Copy, Clone, Debug)]
pub struct SequenceFrame {
    /// Joint configuration at capture time.
    pub angles: JointAngles,
    /// Whether the gripper was holding.
    pub holding: bool,
    /// Handle of the held object.
    pub object: Option<ObjectId>,
    /// Object position at capture time.
    pub object_position: Point3<f32>,
}

/// Append-only recording of arm states with a wrapping playback cursor.
///
/// Frames are appended once per tick in teach mode and kept for the whole
/// session; there is no compression or frame skip.
#[derive(Default)]
pub struct Sequence {
    frames: Vec<SequenceFrame>,
    cursor: usize,
}

impl Sequence {
    /// Append a frame.
    pub fn record(&mut self, frame: SequenceFrame) {
        self.frames.push(frame);
    }

    /// Number of recorded frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Current playback cursor.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return the frame at the cursor and advance, wrapping past the end.
    ///
    /// Returns `None` on an empty recording; the caller handles the
    /// nothing-recorded condition.
    pub fn advance(&mut self) -> Option<&SequenceFrame> {
        if self.frames.is_empty() {
            return None;
        }

        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.frames.len();

        self.frames.get(index)
    }

    /// Move the cursor back to the first frame.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Drop all frames and reset the cursor.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(pitch: f32) -> SequenceFrame {
        SequenceFrame {
            angles: JointAngles::new(pitch, 0.0, -1.0),
            holding: false,
            object: None,
            object_position: Point3::new(1.5, 0.5, 0.0),
        }
    }

    #[test]
    fn test_empty_playback_is_noop() {
        let mut sequence = Sequence::default();

        assert!(sequence.advance().is_none());
        assert_eq!(sequence.cursor(), 0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut sequence = Sequence::default();
        for i in 0..3 {
            sequence.record(frame(i as f32));
        }

        // Teach 3 frames, advance 5 ticks: cursor reads 5 mod 3 = 2.
        for _ in 0..5 {
            assert!(sequence.advance().is_some());
        }
        assert_eq!(sequence.cursor(), 2);
    }

    #[test]
    fn test_playback_is_idempotent() {
        let mut sequence = Sequence::default();
        for i in 0..4 {
            sequence.record(frame(i as f32 * 0.1));
        }

        let mut first = Vec::new();
        sequence.rewind();
        for _ in 0..4 {
            first.push(sequence.advance().unwrap().angles);
        }

        let mut second = Vec::new();
        sequence.rewind();
        for _ in 0..4 {
            second.push(sequence.advance().unwrap().angles);
        }

        assert_eq!(first, second);
    }
}
