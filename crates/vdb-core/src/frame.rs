//! Playback frame state.

use serde::{Deserialize, Serialize};

/// How a committed frame is validated against the asset's frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FrameBoundsPolicy {
    /// Frames past the last one are clamped to the last frame.
    #[default]
    Clamp,
    /// Frames are stored as given, even when no grid has data for them.
    PassThrough,
}

impl FrameBoundsPolicy {
    /// Resolves `frame` against an asset holding `num_frames` frames.
    ///
    /// An asset without frames has nothing to clamp against, so the frame
    /// passes through under every policy.
    #[must_use]
    pub fn resolve(self, frame: u32, num_frames: u32) -> u32 {
        match self {
            Self::Clamp if num_frames > 0 => frame.min(num_frames - 1),
            _ => frame,
        }
    }
}

/// The frame currently displayed and the frame the owner asked for.
///
/// `current` only moves when a frame is committed; `target` is a pending
/// request that may be overwritten any number of times before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameState {
    current: u32,
    target: u32,
}

impl FrameState {
    /// Creates a stable state at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed frame.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Returns the requested frame.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns true while the requested frame differs from the committed one.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.current != self.target
    }

    /// Records a frame request without committing it.
    pub fn set_target(&mut self, frame: u32) {
        self.target = frame;
    }

    /// Commits `frame` as the displayed frame.
    pub(crate) fn commit(&mut self, frame: u32) {
        self.current = frame;
    }
}
