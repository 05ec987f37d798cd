//! Time-driven playback of an animated volume asset.
//!
//! The [`SequencePlayer`] turns elapsed time into a frame request on a
//! [`VolumeAssetSet`] and decides once per tick whether that request is
//! committed. Commits are skipped while the frame is unchanged, and
//! optionally while any grid is still streaming the requested frame.

use crate::asset::VolumeAssetSet;
use crate::options::PlaybackOptions;

/// Drives the frame of a volume asset from a tick cadence.
#[derive(Debug, Clone)]
pub struct SequencePlayer {
    options: PlaybackOptions,
    /// Sequence time in seconds, already scaled by the playback speed.
    elapsed: f32,
    playing: bool,
}

impl SequencePlayer {
    /// Creates a player at frame 0. It starts playing if `auto_play` is set.
    pub fn new(options: PlaybackOptions) -> Self {
        let playing = options.auto_play;
        Self {
            options,
            elapsed: 0.0,
            playing,
        }
    }

    /// Returns the playback options.
    #[must_use]
    pub fn options(&self) -> &PlaybackOptions {
        &self.options
    }

    /// Returns the playback options for modification.
    pub fn options_mut(&mut self) -> &mut PlaybackOptions {
        &mut self.options
    }

    /// Returns whether time advances on tick.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns the sequence time in seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Resumes playback from the current position.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Pauses playback, keeping the current position.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pauses playback and rewinds to frame 0.
    pub fn stop(&mut self) {
        self.playing = false;
        self.elapsed = 0.0;
    }

    /// Moves playback to the start of `frame`.
    pub fn seek(&mut self, frame: u32) {
        self.elapsed = if self.options.frame_rate > 0.0 {
            frame as f32 / self.options.frame_rate
        } else {
            0.0
        };
    }

    /// Resolves the elapsed time to a frame of a `num_frames` long sequence.
    ///
    /// Wraps the elapsed time when looping; otherwise holds the first or
    /// last frame and stops playing once either end is reached.
    fn resolve_frame(&mut self, num_frames: u32) -> u32 {
        let frame_rate = self.options.frame_rate;
        if frame_rate <= 0.0 || num_frames == 0 {
            return 0;
        }

        let last = num_frames - 1;
        let duration = num_frames as f32 / frame_rate;

        if self.options.looping {
            self.elapsed = self.elapsed.rem_euclid(duration);
        } else if self.elapsed < 0.0 {
            self.elapsed = 0.0;
            self.playing = false;
        } else if self.elapsed >= duration {
            self.elapsed = last as f32 / frame_rate;
            self.playing = false;
            return last;
        }

        ((self.elapsed * frame_rate).floor() as u32).min(last)
    }

    /// Advances time by `delta_seconds` and commits the resulting frame.
    ///
    /// The frame is always recorded as the asset's target. It is committed
    /// only when it differs from the current frame and, if
    /// `wait_for_residency` is set, once every grid has it loaded. Returns the
    /// committed frame.
    pub fn tick(&mut self, asset: &mut VolumeAssetSet, delta_seconds: f32) -> Option<u32> {
        let num_frames = asset.num_frames();
        if num_frames == 0 {
            return None;
        }

        if self.playing {
            self.elapsed += delta_seconds * self.options.playback_speed;
        }

        let frame = self.resolve_frame(num_frames);
        asset.set_target_frame_index(frame);

        if !asset.frame_state().is_pending() {
            return None;
        }

        if self.options.wait_for_residency && !asset.is_frame_resident(frame) {
            log::trace!("frame {frame} not resident yet, keeping frame {}", asset.curr_frame_index());
            return None;
        }

        asset.broadcast_frame_changed(frame);
        Some(asset.curr_frame_index())
    }
}

impl Default for SequencePlayer {
    fn default() -> Self {
        Self::new(PlaybackOptions::default())
    }
}
