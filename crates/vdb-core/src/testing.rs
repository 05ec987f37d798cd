//! In-memory grid used by unit tests.

use std::any::Any;
use std::sync::Arc;

use glam::{IVec3, Mat4};

use crate::volume::{GridHandle, RenderInfos, VdbClass, VolumeGrid};

pub(crate) struct TestGrid {
    pub name: String,
    pub class: VdbClass,
    pub frames: Vec<RenderInfos>,
    pub resident: u32,
}

impl TestGrid {
    /// A grid whose frame `i` spans `[0, size + i)` and uses buffer `i`.
    pub fn animated(name: &str, class: VdbClass, size: i32, num_frames: u32) -> Arc<Self> {
        let frames = (0..num_frames)
            .map(|i| {
                RenderInfos::new(
                    IVec3::ZERO,
                    IVec3::splat(size + i as i32),
                    Mat4::IDENTITY,
                    GridHandle(u64::from(i)),
                )
            })
            .collect();
        Arc::new(Self {
            name: name.to_string(),
            class,
            frames,
            resident: num_frames,
        })
    }

    pub fn single(name: &str, class: VdbClass, size: i32) -> Arc<Self> {
        Self::animated(name, class, size, 1)
    }
}

impl VolumeGrid for TestGrid {
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
        frame < self.resident
    }
}
