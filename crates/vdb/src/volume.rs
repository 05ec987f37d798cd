//! Volume creation and slot assignment helpers.
//!
//! # Example
//!
//! ```
//! use vdb::*;
//!
//! let mut asset = VolumeAssetSet::new();
//! let density = create_static_volume(
//!     "smoke",
//!     VdbClass::FogVolume,
//!     IVec3::ZERO,
//!     IVec3::splat(10),
//!     0.1,
//! );
//! asset.set_volume(VolumeSlot::Density, density);
//!
//! assert_eq!(asset.vdb_class(), VdbClass::FogVolume);
//! assert_eq!(asset.volume_size(), Vec3::splat(10.0));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::{
    GridHandle, IVec3, RenderInfos, Result, VdbClass, VdbVolumeSequence, VdbVolumeStatic,
    VolumeAssetSet, VolumeGrid, VolumeSlot,
};

static NEXT_GRID_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Returns a grid handle not handed out before in this process.
pub fn allocate_grid_handle() -> GridHandle {
    GridHandle(NEXT_GRID_HANDLE.fetch_add(1, Ordering::Relaxed))
}

/// Creates a shared static volume with uniform voxels and a fresh grid handle.
pub fn create_static_volume(
    name: impl Into<String>,
    class: VdbClass,
    index_min: IVec3,
    index_max: IVec3,
    voxel_size: f32,
) -> Arc<VdbVolumeStatic> {
    Arc::new(VdbVolumeStatic::from_bounds(
        name,
        class,
        index_min,
        index_max,
        voxel_size,
        allocate_grid_handle(),
    ))
}

/// Creates a shared volume sequence.
pub fn create_volume_sequence(
    name: impl Into<String>,
    class: VdbClass,
    frames: Vec<RenderInfos>,
) -> Result<Arc<VdbVolumeSequence>> {
    Ok(Arc::new(VdbVolumeSequence::new(name, class, frames)?))
}

/// Assigns grids to several slots at once and returns the asset set.
///
/// Later entries for the same slot replace earlier ones.
pub fn build_asset_set<I>(volumes: I) -> VolumeAssetSet
where
    I: IntoIterator<Item = (VolumeSlot, Arc<dyn VolumeGrid>)>,
{
    let mut asset = VolumeAssetSet::new();
    for (slot, grid) in volumes {
        asset.set_volume(slot, grid);
    }
    asset
}
