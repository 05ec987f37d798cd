//! vdb-rs: sparse volume asset aggregation for renderers.
//!
//! A [`VolumeAssetSet`] gathers the grids of one volumetric effect (density,
//! temperature, color and extra float/vector grids) into a single asset,
//! decides which animation frame is displayed and tells its dependents when
//! that frame changes.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use vdb::*;
//!
//! let frames = (0..4)
//!     .map(|i| RenderInfos::new(IVec3::ZERO, IVec3::splat(8 + i), Mat4::IDENTITY, allocate_grid_handle()))
//!     .collect();
//! let density = create_volume_sequence("explosion", VdbClass::FogVolume, frames)?;
//!
//! let mut asset = VolumeAssetSet::new();
//! asset.set_volume(VolumeSlot::Density, density);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! asset.on_asset_changed.add(move |frame| sink.lock().unwrap().push(frame));
//!
//! asset.set_target_frame_index(2);
//! assert_eq!(asset.curr_frame_index(), 0);
//!
//! asset.commit_target_frame();
//! assert_eq!(asset.curr_frame_index(), 2);
//! assert_eq!(*seen.lock().unwrap(), vec![2]);
//! # Ok::<(), vdb::VdbError>(())
//! ```
//!
//! # Architecture
//!
//! - **Grids** implement [`VolumeGrid`] and own their per-frame [`RenderInfos`].
//!   [`VdbVolumeStatic`] and [`VdbVolumeSequence`] are provided.
//! - **Slots** ([`VolumeSlot`]) bind grids positionally; order is fixed.
//! - **Frames**: the owner requests a frame with
//!   [`VolumeAssetSet::set_target_frame_index`] and commits it with
//!   [`VolumeAssetSet::broadcast_frame_changed`]. [`SequencePlayer`] does
//!   this from elapsed time.
//! - **Events**: `on_frame_changed` (internal systems) fires before
//!   `on_asset_changed` (external observers) on every commit.

mod init;
mod volume;

// Re-export core types
pub use vdb_core::{
    asset::{AssetMetadata, VolumeAssetSet},
    delegate::{DelegateHandle, MulticastDelegate},
    error::{Result, VdbError},
    frame::{FrameBoundsPolicy, FrameState},
    options::{AssetOptions, Options, PlaybackOptions},
    playback::SequencePlayer,
    slot::{VolumeSlot, NUM_VOLUME_SLOTS},
    uniforms::VolumeUniforms,
    volume::{GridHandle, RenderInfos, VdbClass, VolumeGrid},
    IVec3, Mat4, Vec3,
};

// Re-export structures
pub use vdb_structures::{VdbVolumeSequence, VdbVolumeStatic};

pub use init::{create_playback, init_logging, load_options};
pub use volume::{
    allocate_grid_handle, build_asset_set, create_static_volume, create_volume_sequence,
};
