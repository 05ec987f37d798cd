//! Volume grid trait and per-frame render snapshots.
//!
//! A [`VolumeGrid`] represents one sparse volume asset (a single VDB grid,
//! possibly animated over several frames). Grids own their data and any
//! per-frame residency; the rest of the crate only selects which frame's
//! [`RenderInfos`] to expose.

use std::any::Any;

use glam::{IVec3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Semantics of the values stored in a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VdbClass {
    /// Class could not be determined (e.g. no density grid assigned).
    #[default]
    Unknown,
    /// Participating medium: density, temperature and color values.
    FogVolume,
    /// Narrow-band signed distance surface.
    LevelSet,
}

impl VdbClass {
    /// Returns the numeric id used when packing the class for shaders.
    #[must_use]
    pub fn shader_id(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::FogVolume => 1,
            Self::LevelSet => 2,
        }
    }
}

/// Opaque handle to the per-frame grid buffer owned by a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridHandle(pub u64);

/// Geometric data a renderer needs to place and sample one frame of a volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInfos {
    /// Minimum active voxel index.
    pub index_min: IVec3,
    /// One past the maximum active voxel index.
    pub index_max: IVec3,
    /// Transform from index space to the volume's local space.
    pub index_to_local: Mat4,
    /// Scale applied to UVs so sequences sample within their largest frame.
    pub uv_scale: Vec3,
    /// Buffer holding this frame's grid data.
    pub grid: GridHandle,
}

impl RenderInfos {
    /// Creates render infos with a unit UV scale.
    pub fn new(index_min: IVec3, index_max: IVec3, index_to_local: Mat4, grid: GridHandle) -> Self {
        Self {
            index_min,
            index_max,
            index_to_local,
            uv_scale: Vec3::ONE,
            grid,
        }
    }

    /// Returns the extent of the active index bounds.
    #[must_use]
    pub fn index_size(&self) -> Vec3 {
        (self.index_max - self.index_min).max(IVec3::ZERO).as_vec3()
    }

    /// Returns the index-space offset of the active bounds.
    #[must_use]
    pub fn index_offset(&self) -> Vec3 {
        self.index_min.as_vec3()
    }

    /// Returns the axis-aligned bounds in local space.
    ///
    /// All eight corners of the index box are transformed, so rotated
    /// transforms still produce an enclosing box.
    #[must_use]
    pub fn local_bounds(&self) -> (Vec3, Vec3) {
        let min = self.index_min.as_vec3();
        let max = self.index_max.as_vec3();

        let corners = [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(min.x, max.y, max.z),
        ];

        corners.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), corner| {
                let p = self.index_to_local.transform_point3(*corner);
                (lo.min(p), hi.max(p))
            },
        )
    }
}

impl Default for RenderInfos {
    fn default() -> Self {
        Self::new(IVec3::ZERO, IVec3::ZERO, Mat4::IDENTITY, GridHandle::default())
    }
}

/// A sparse volume asset that can be attached to a volume asset set.
///
/// Grids are shared between slots and other holders through `Arc`, so every
/// method takes `&self`.
pub trait VolumeGrid: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the asset name of this grid.
    fn name(&self) -> &str;

    /// Returns the value semantics of this grid.
    fn class(&self) -> VdbClass;

    /// Returns the number of frames. Static grids have exactly one.
    fn num_frames(&self) -> u32;

    /// Returns the render snapshot for a frame, if the grid has one.
    fn render_infos(&self, frame: u32) -> Option<&RenderInfos>;

    /// Returns whether this grid is animated.
    fn is_sequence(&self) -> bool {
        self.num_frames() > 1
    }

    /// Returns whether the data for `frame` is loaded and can be displayed.
    fn is_frame_resident(&self, _frame: u32) -> bool {
        true
    }
}
