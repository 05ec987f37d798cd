//! Volume grid implementations for vdb-rs.
//!
//! This crate provides concrete implementations of [`vdb_core::VolumeGrid`]:
//! - Static volumes (a single frame)
//! - Volume sequences (animated, streamed frame by frame)

// Frame counts and index bounds are converted to floats for geometry
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

pub mod volume_sequence;
pub mod volume_static;

pub use volume_sequence::VdbVolumeSequence;
pub use volume_static::VdbVolumeStatic;
