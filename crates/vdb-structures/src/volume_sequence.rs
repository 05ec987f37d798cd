//! Animated sparse volume.

use std::any::Any;
use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;
use vdb_core::error::{Result, VdbError};
use vdb_core::volume::{RenderInfos, VdbClass, VolumeGrid};

/// A sparse volume with one grid per frame.
///
/// Frames may have different active bounds. UV scales are rewritten at
/// construction so that every frame samples inside the box of the largest
/// frame. Frames are streamed in order; [`Self::set_resident_frames`] records
/// how many are loaded and may be called from a streaming thread.
pub struct VdbVolumeSequence {
    name: String,
    class: VdbClass,
    frames: Vec<RenderInfos>,
    largest_index_size: Vec3,
    resident_frames: AtomicU32,
}

/// Ratio of `size` to `largest`, 1 on axes where the largest frame is flat.
fn uv_scale(size: Vec3, largest: Vec3) -> Vec3 {
    Vec3::select(largest.cmpgt(Vec3::ZERO), size / largest, Vec3::ONE)
}

impl VdbVolumeSequence {
    /// Creates a sequence from per-frame render infos.
    ///
    /// Returns an error if `frames` is empty.
    pub fn new(name: impl Into<String>, class: VdbClass, mut frames: Vec<RenderInfos>) -> Result<Self> {
        let name = name.into();
        if frames.is_empty() {
            return Err(VdbError::EmptySequence(name));
        }

        let largest_index_size = frames
            .iter()
            .map(RenderInfos::index_size)
            .fold(Vec3::ZERO, Vec3::max);

        for infos in &mut frames {
            infos.uv_scale = uv_scale(infos.index_size(), largest_index_size);
        }

        log::debug!(
            "volume sequence '{name}' created with {} frames, largest size {largest_index_size}",
            frames.len()
        );

        let resident_frames = AtomicU32::new(frames.len() as u32);
        Ok(Self {
            name,
            class,
            frames,
            largest_index_size,
            resident_frames,
        })
    }

    /// Returns the index-space size of the largest frame.
    #[must_use]
    pub fn largest_index_size(&self) -> Vec3 {
        self.largest_index_size
    }

    /// Returns the number of frames loaded so far.
    #[must_use]
    pub fn resident_frames(&self) -> u32 {
        self.resident_frames.load(Ordering::Acquire)
    }

    /// Marks frames `[0, count)` as loaded. Counts past the end are clamped.
    pub fn set_resident_frames(&self, count: u32) {
        let count = count.min(self.num_frames());
        self.resident_frames.store(count, Ordering::Release);
    }
}

impl VolumeGrid for VdbVolumeSequence {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn class(&self) -> VdbClass {
        self.class
    }

    fn num_frames(&self) -> u32 {
        self.frames.len() as u32
    }

    fn render_infos(&self, frame: u32) -> Option<&RenderInfos> {
        self.frames.get(frame as usize)
    }

    fn is_frame_resident(&self, frame: u32) -> bool {
        frame < self.resident_frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{IVec3, Mat4};
    use vdb_core::volume::GridHandle;

    fn frame(max: IVec3, grid: u64) -> RenderInfos {
        RenderInfos::new(IVec3::ZERO, max, Mat4::IDENTITY, GridHandle(grid))
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        let err = VdbVolumeSequence::new("empty", VdbClass::FogVolume, Vec::new())
            .err()
            .unwrap();
        assert!(matches!(err, VdbError::EmptySequence(name) if name == "empty"));
    }

    #[test]
    fn test_uv_scale_relative_to_largest_frame() {
        let sequence = VdbVolumeSequence::new(
            "explosion",
            VdbClass::FogVolume,
            vec![
                frame(IVec3::new(5, 10, 10), 0),
                frame(IVec3::new(10, 20, 5), 1),
            ],
        )
        .unwrap();

        assert_eq!(sequence.largest_index_size(), Vec3::new(10.0, 20.0, 10.0));
        assert_eq!(
            sequence.render_infos(0).unwrap().uv_scale,
            Vec3::new(0.5, 0.5, 1.0)
        );
        assert_eq!(
            sequence.render_infos(1).unwrap().uv_scale,
            Vec3::new(1.0, 1.0, 0.5)
        );
    }

    #[test]
    fn test_flat_axis_keeps_unit_scale() {
        let sequence = VdbVolumeSequence::new(
            "sheet",
            VdbClass::FogVolume,
            vec![frame(IVec3::new(4, 4, 0), 0)],
        )
        .unwrap();
        assert_eq!(sequence.render_infos(0).unwrap().uv_scale, Vec3::ONE);
    }

    #[test]
    fn test_frames_past_end() {
        let sequence = VdbVolumeSequence::new(
            "fire",
            VdbClass::FogVolume,
            vec![frame(IVec3::splat(4), 0), frame(IVec3::splat(4), 1)],
        )
        .unwrap();
        assert!(sequence.is_sequence());
        assert_eq!(sequence.render_infos(1).unwrap().grid, GridHandle(1));
        assert!(sequence.render_infos(2).is_none());
    }

    #[test]
    fn test_residency() {
        let sequence = VdbVolumeSequence::new(
            "fire",
            VdbClass::FogVolume,
            vec![frame(IVec3::splat(4), 0); 5],
        )
        .unwrap();
        assert_eq!(sequence.resident_frames(), 5);

        sequence.set_resident_frames(2);
        assert!(sequence.is_frame_resident(1));
        assert!(!sequence.is_frame_resident(2));

        sequence.set_resident_frames(100);
        assert_eq!(sequence.resident_frames(), 5);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn uv_scales_fit_in_largest_frame(
                sizes in proptest::collection::vec((0i32..64, 0i32..64, 0i32..64), 1..8)
            ) {
                let frames = sizes
                    .iter()
                    .enumerate()
                    .map(|(i, (x, y, z))| frame(IVec3::new(*x, *y, *z), i as u64))
                    .collect();
                let sequence = VdbVolumeSequence::new("p", VdbClass::FogVolume, frames).unwrap();

                for i in 0..sequence.num_frames() {
                    let scale = sequence.render_infos(i).unwrap().uv_scale;
                    prop_assert!(scale.cmple(Vec3::ONE).all());
                    prop_assert!(scale.cmpge(Vec3::ZERO).all());
                }
            }
        }
    }
}
