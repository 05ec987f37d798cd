//! Single-frame sparse volume.

use std::any::Any;

use glam::{IVec3, Mat4, Vec3};
use vdb_core::volume::{GridHandle, RenderInfos, VdbClass, VolumeGrid};

/// A sparse volume with one frame.
///
/// Every frame index answers the same render infos, so a static volume can
/// sit next to animated ones in an asset set.
pub struct VdbVolumeStatic {
    name: String,
    class: VdbClass,
    infos: RenderInfos,
}

impl VdbVolumeStatic {
    /// Creates a static volume from its render infos.
    pub fn new(name: impl Into<String>, class: VdbClass, infos: RenderInfos) -> Self {
        Self {
            name: name.into(),
            class,
            infos,
        }
    }

    /// Creates a static volume with uniform voxels.
    ///
    /// # Arguments
    /// * `name` - The asset name
    /// * `class` - Value semantics of the grid
    /// * `index_min` - Minimum active voxel index
    /// * `index_max` - One past the maximum active voxel index
    /// * `voxel_size` - Edge length of one voxel in local space
    /// * `grid` - Buffer holding the grid data
    pub fn from_bounds(
        name: impl Into<String>,
        class: VdbClass,
        index_min: IVec3,
        index_max: IVec3,
        voxel_size: f32,
        grid: GridHandle,
    ) -> Self {
        let index_to_local = Mat4::from_scale(Vec3::splat(voxel_size));
        Self::new(
            name,
            class,
            RenderInfos::new(index_min, index_max, index_to_local, grid),
        )
    }

    /// Returns the render infos of the single frame.
    #[must_use]
    pub fn infos(&self) -> &RenderInfos {
        &self.infos
    }
}

impl VolumeGrid for VdbVolumeStatic {
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
        1
    }

    fn render_infos(&self, _frame: u32) -> Option<&RenderInfos> {
        Some(&self.infos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_volume_creation() {
        let volume = VdbVolumeStatic::from_bounds(
            "smoke",
            VdbClass::FogVolume,
            IVec3::new(-5, 0, 0),
            IVec3::new(5, 10, 10),
            0.1,
            GridHandle(3),
        );
        assert_eq!(volume.name(), "smoke");
        assert_eq!(volume.class(), VdbClass::FogVolume);
        assert_eq!(volume.num_frames(), 1);
        assert!(!volume.is_sequence());
        assert_eq!(volume.infos().index_size(), Vec3::splat(10.0));
    }

    #[test]
    fn test_every_frame_answers_single_snapshot() {
        let volume = VdbVolumeStatic::new("sdf", VdbClass::LevelSet, RenderInfos::default());
        assert_eq!(volume.render_infos(0), Some(volume.infos()));
        assert_eq!(volume.render_infos(99), Some(volume.infos()));
        assert!(volume.is_frame_resident(99));
    }

    #[test]
    fn test_local_bounds_use_voxel_size() {
        let volume = VdbVolumeStatic::from_bounds(
            "smoke",
            VdbClass::FogVolume,
            IVec3::ZERO,
            IVec3::new(10, 20, 30),
            0.5,
            GridHandle(0),
        );
        let (min, max) = volume.infos().local_bounds();
        assert!((min - Vec3::ZERO).length() < 1e-6);
        assert!((max - Vec3::new(5.0, 10.0, 15.0)).length() < 1e-6);
    }
}
