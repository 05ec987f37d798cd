//! Core abstractions for vdb-rs.
//!
//! This crate provides the types shared by every vdb-rs crate:
//! - [`VolumeGrid`] trait for sparse volume assets and their per-frame [`RenderInfos`]
//! - [`VolumeAssetSet`] aggregating grids into named [`VolumeSlot`]s
//! - Frame sequencing ([`FrameState`], [`SequencePlayer`]) and change events ([`MulticastDelegate`])
//! - Configuration options and GPU uniforms

// Frame indices and index bounds are converted to floats for geometry
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod asset;
pub mod delegate;
pub mod error;
pub mod frame;
pub mod options;
pub mod playback;
pub mod slot;
pub mod uniforms;
pub mod volume;

#[cfg(test)]
mod testing;

pub use asset::{AssetMetadata, VolumeAssetSet};
pub use delegate::{DelegateHandle, MulticastDelegate};
pub use error::{Result, VdbError};
pub use frame::{FrameBoundsPolicy, FrameState};
pub use options::{AssetOptions, Options, PlaybackOptions};
pub use playback::SequencePlayer;
pub use slot::{VolumeSlot, NUM_VOLUME_SLOTS};
pub use uniforms::VolumeUniforms;
pub use volume::{GridHandle, RenderInfos, VdbClass, VolumeGrid};

// Re-export glam types for convenience
pub use glam::{IVec3, Mat4, Vec3};
