//! GPU-compatible packing of asset metadata.

use crate::asset::AssetMetadata;

/// Per-asset uniforms bound alongside the volume buffers.
///
/// `slot_mask` tells the shader which positional buffer slots hold data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VolumeUniforms {
    /// Index-space size of the density grid.
    pub size: [f32; 3],
    /// Class id (0 = unknown, 1 = fog volume, 2 = level set).
    pub class_id: u32,
    /// Index-space offset of the density grid.
    pub offset: [f32; 3],
    /// Committed frame.
    pub frame: u32,
    /// UV scale of the density grid.
    pub uv_scale: [f32; 3],
    /// Bit mask of assigned slots.
    pub slot_mask: u32,
}

impl From<&AssetMetadata> for VolumeUniforms {
    fn from(metadata: &AssetMetadata) -> Self {
        Self {
            size: metadata.size.to_array(),
            class_id: metadata.class.shader_id(),
            offset: metadata.offset.to_array(),
            frame: metadata.frame,
            uv_scale: metadata.uv_scale.to_array(),
            slot_mask: metadata.slot_mask,
        }
    }
}

impl Default for VolumeUniforms {
    fn default() -> Self {
        Self::from(&AssetMetadata::default())
    }
}
