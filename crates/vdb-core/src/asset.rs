//! Aggregation of volume grids into one renderable asset.
//!
//! A [`VolumeAssetSet`] holds one shared grid reference per [`VolumeSlot`],
//! tracks which frame is displayed and tells its dependents when that frame
//! is committed. Classification and geometry always come from the density
//! slot; the other slots are assumed to share its index space.

use std::fmt;
use std::sync::Arc;

use glam::Vec3;

use crate::delegate::MulticastDelegate;
use crate::error::{Result, VdbError};
use crate::frame::FrameState;
use crate::options::AssetOptions;
use crate::slot::{VolumeSlot, NUM_VOLUME_SLOTS};
use crate::volume::{RenderInfos, VdbClass, VolumeGrid};

/// Geometry and classification of an asset at its current frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AssetMetadata {
    /// Class of the density grid.
    pub class: VdbClass,
    /// Index-space size of the density grid.
    pub size: Vec3,
    /// Index-space offset of the density grid.
    pub offset: Vec3,
    /// UV scale of the density grid.
    pub uv_scale: Vec3,
    /// Committed frame the values were read at.
    pub frame: u32,
    /// Bit `i` is set when the slot with index `i` is assigned.
    pub slot_mask: u32,
}

/// A set of volume grids rendered together as one asset.
#[derive(Default)]
pub struct VolumeAssetSet {
    volumes: [Option<Arc<dyn VolumeGrid>>; NUM_VOLUME_SLOTS],
    frame: FrameState,
    options: AssetOptions,

    /// Fired on every frame commit, before [`Self::on_asset_changed`].
    /// Meant for internal systems such as render proxies.
    pub on_frame_changed: MulticastDelegate<u32>,

    /// Fired on every frame commit, after internal systems have refreshed.
    /// Meant for scripts and other external observers.
    pub on_asset_changed: MulticastDelegate<u32>,
}

fn is_same_grid(slot: &Arc<dyn VolumeGrid>, grid: &dyn VolumeGrid) -> bool {
    std::ptr::eq(
        Arc::as_ptr(slot).cast::<()>(),
        std::ptr::addr_of!(*grid).cast::<()>(),
    )
}

impl VolumeAssetSet {
    /// Creates an empty asset set with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty asset set with the given options.
    pub fn with_options(options: AssetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Returns the asset options.
    #[must_use]
    pub fn options(&self) -> &AssetOptions {
        &self.options
    }

    /// Replaces the asset options. Takes effect on the next commit.
    pub fn set_options(&mut self, options: AssetOptions) {
        self.options = options;
    }

    // ------------------------------------------------------------------
    // Slots

    /// Returns the grid assigned to a slot.
    #[must_use]
    pub fn volume(&self, slot: VolumeSlot) -> Option<&Arc<dyn VolumeGrid>> {
        self.volumes[slot.index()].as_ref()
    }

    /// Returns the grid assigned to a slot as its concrete type.
    ///
    /// Yields `None` when the slot is unset or holds another grid type.
    #[must_use]
    pub fn volume_as<T: VolumeGrid>(&self, slot: VolumeSlot) -> Option<&T> {
        let grid: &dyn VolumeGrid = &**self.volume(slot)?;
        grid.as_any().downcast_ref::<T>()
    }

    /// Assigns a grid to a slot and returns the grid it replaces.
    ///
    /// No event is fired; use [`Self::edit_volume`] when dependents must rebuild.
    pub fn set_volume(
        &mut self,
        slot: VolumeSlot,
        grid: Arc<dyn VolumeGrid>,
    ) -> Option<Arc<dyn VolumeGrid>> {
        self.replace_volume(slot, Some(grid))
    }

    /// Unsets a slot and returns the grid it held.
    pub fn clear_volume(&mut self, slot: VolumeSlot) -> Option<Arc<dyn VolumeGrid>> {
        self.replace_volume(slot, None)
    }

    /// Sets or unsets a slot and returns its previous grid.
    pub fn replace_volume(
        &mut self,
        slot: VolumeSlot,
        grid: Option<Arc<dyn VolumeGrid>>,
    ) -> Option<Arc<dyn VolumeGrid>> {
        std::mem::replace(&mut self.volumes[slot.index()], grid)
    }

    /// Sets or unsets a slot looked up by display or property name.
    pub fn set_volume_by_name(
        &mut self,
        name: &str,
        grid: Option<Arc<dyn VolumeGrid>>,
    ) -> Result<Option<Arc<dyn VolumeGrid>>> {
        let slot =
            VolumeSlot::from_name(name).ok_or_else(|| VdbError::UnknownSlot(name.to_string()))?;
        Ok(self.replace_volume(slot, grid))
    }

    /// Unsets every slot.
    pub fn clear_volumes(&mut self) {
        self.volumes.iter_mut().for_each(|v| *v = None);
    }

    /// Returns true if the mandatory density slot is assigned.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.volume(VolumeSlot::Density).is_some()
    }

    /// Returns the assigned slots and their grids in declaration order.
    pub fn assigned_slots(&self) -> impl Iterator<Item = (VolumeSlot, &Arc<dyn VolumeGrid>)> {
        VolumeSlot::ALL
            .into_iter()
            .zip(self.volumes.iter())
            .filter_map(|(slot, grid)| grid.as_ref().map(|g| (slot, g)))
    }

    /// Returns the assigned grids in declaration order, skipping unset slots.
    #[must_use]
    pub fn volumes(&self) -> Vec<Arc<dyn VolumeGrid>> {
        self.assigned_slots().map(|(_, g)| Arc::clone(g)).collect()
    }

    /// Borrowing variant of [`Self::volumes`].
    #[must_use]
    pub fn const_volumes(&self) -> Vec<&dyn VolumeGrid> {
        self.assigned_slots().map(|(_, g)| &**g).collect()
    }

    /// Appends every assigned grid to `objects`, in declaration order.
    ///
    /// A grid assigned to several slots is appended once per slot.
    pub fn referenced_content_objects(&self, objects: &mut Vec<Arc<dyn VolumeGrid>>) {
        objects.extend(self.assigned_slots().map(|(_, g)| Arc::clone(g)));
    }

    /// Returns a bit mask of the assigned slots (bit = slot index).
    #[must_use]
    pub fn slot_mask(&self) -> u32 {
        self.assigned_slots()
            .fold(0, |mask, (slot, _)| mask | (1 << slot.index()))
    }

    // ------------------------------------------------------------------
    // Derived metadata

    /// Returns the class of the density grid, or `Unknown` without one.
    #[must_use]
    pub fn vdb_class(&self) -> VdbClass {
        self.volume(VolumeSlot::Density)
            .map_or(VdbClass::Unknown, |g| g.class())
    }

    fn density_infos(&self) -> Option<&RenderInfos> {
        self.render_infos_for_slot(VolumeSlot::Density)
    }

    /// Returns the index-space size of the density grid at the current frame.
    #[must_use]
    pub fn volume_size(&self) -> Vec3 {
        self.density_infos().map_or(Vec3::ZERO, RenderInfos::index_size)
    }

    /// Returns the index-space offset of the density grid at the current frame.
    #[must_use]
    pub fn volume_offset(&self) -> Vec3 {
        self.density_infos().map_or(Vec3::ZERO, RenderInfos::index_offset)
    }

    /// Returns the UV scale of the density grid at the current frame.
    #[must_use]
    pub fn volume_uv_scale(&self) -> Vec3 {
        self.density_infos().map_or(Vec3::ZERO, |infos| infos.uv_scale)
    }

    /// Returns the local-space bounds of the density grid at the current frame.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        self.density_infos().map(RenderInfos::local_bounds)
    }

    /// Gathers classification and geometry in one pass.
    #[must_use]
    pub fn metadata(&self) -> AssetMetadata {
        let infos = self.density_infos();
        AssetMetadata {
            class: self.vdb_class(),
            size: infos.map_or(Vec3::ZERO, RenderInfos::index_size),
            offset: infos.map_or(Vec3::ZERO, RenderInfos::index_offset),
            uv_scale: infos.map_or(Vec3::ZERO, |i| i.uv_scale),
            frame: self.frame.current(),
            slot_mask: self.slot_mask(),
        }
    }

    /// Returns the longest frame count over the assigned grids.
    #[must_use]
    pub fn num_frames(&self) -> u32 {
        self.assigned_slots()
            .map(|(_, g)| g.num_frames())
            .max()
            .unwrap_or(0)
    }

    /// Returns the longest frame count over the animated grids.
    ///
    /// Static grids answer every frame, so they never bound a commit.
    fn sequence_frames(&self) -> u32 {
        self.assigned_slots()
            .filter(|(_, g)| g.is_sequence())
            .map(|(_, g)| g.num_frames())
            .max()
            .unwrap_or(0)
    }

    /// Returns true if every assigned grid has `frame` loaded.
    ///
    /// Grids shorter than `frame` are not consulted.
    #[must_use]
    pub fn is_frame_resident(&self, frame: u32) -> bool {
        self.assigned_slots()
            .filter(|(_, g)| frame < g.num_frames())
            .all(|(_, g)| g.is_frame_resident(frame))
    }

    // ------------------------------------------------------------------
    // Render infos

    /// Returns the render infos of `grid` at the committed frame.
    ///
    /// `grid` must be the same object as one assigned to a slot; any other
    /// grid yields `None`.
    #[must_use]
    pub fn render_infos(&self, grid: &dyn VolumeGrid) -> Option<&RenderInfos> {
        let frame = self.frame.current();
        let slot_grid = self
            .volumes
            .iter()
            .flatten()
            .find(|slot| is_same_grid(slot, grid));

        match slot_grid {
            Some(g) => g.render_infos(frame),
            None => {
                log::trace!("render infos requested for unassigned grid '{}'", grid.name());
                None
            }
        }
    }

    /// Returns the render infos of the grid in `slot` at the committed frame.
    #[must_use]
    pub fn render_infos_for_slot(&self, slot: VolumeSlot) -> Option<&RenderInfos> {
        self.volume(slot)?.render_infos(self.frame.current())
    }

    // ------------------------------------------------------------------
    // Frames

    /// Returns the committed frame.
    #[must_use]
    pub fn curr_frame_index(&self) -> u32 {
        self.frame.current()
    }

    /// Returns the requested frame.
    #[must_use]
    pub fn target_frame_index(&self) -> u32 {
        self.frame.target()
    }

    /// Returns the frame state.
    #[must_use]
    pub fn frame_state(&self) -> FrameState {
        self.frame
    }

    /// Requests a frame. Nothing is committed and no event fires.
    pub fn set_target_frame_index(&mut self, frame: u32) {
        self.frame.set_target(frame);
    }

    /// Commits `frame` and notifies dependents.
    ///
    /// The frame is resolved through [`AssetOptions::frame_bounds`] against
    /// the animated grids, stored as the current frame, then broadcast to
    /// [`Self::on_frame_changed`] and [`Self::on_asset_changed`], in that
    /// order. An asset without animated grids takes any frame. Events fire
    /// even when the frame did not change.
    pub fn broadcast_frame_changed(&mut self, frame: u32) {
        let num_frames = self.sequence_frames();
        let resolved = self.options.frame_bounds.resolve(frame, num_frames);
        if resolved != frame {
            log::warn!("frame {frame} is past the last of {num_frames} frames, clamped to {resolved}");
        }

        log::debug!(
            "committing frame {resolved} (previous {})",
            self.frame.current()
        );
        self.frame.commit(resolved);
        self.on_frame_changed.broadcast(resolved);
        self.on_asset_changed.broadcast(resolved);
    }

    /// Commits the requested frame.
    pub fn commit_target_frame(&mut self) {
        self.broadcast_frame_changed(self.frame.target());
    }

    // ------------------------------------------------------------------
    // Editing

    /// Reacts to an edited property.
    ///
    /// When the property is one of the volume slots, dependents are notified
    /// at the current frame so they rebuild from the new grids. Returns
    /// whether a notification was sent.
    pub fn post_edit_change_property(&mut self, property_name: &str) -> bool {
        let Some(slot) = VolumeSlot::from_name(property_name) else {
            return false;
        };

        log::debug!("volume slot {slot} edited, class is now {:?}", self.vdb_class());
        self.broadcast_frame_changed(self.frame.current());
        true
    }

    /// Assigns or unsets a slot and notifies dependents.
    pub fn edit_volume(
        &mut self,
        slot: VolumeSlot,
        grid: Option<Arc<dyn VolumeGrid>>,
    ) -> Option<Arc<dyn VolumeGrid>> {
        let previous = self.replace_volume(slot, grid);
        self.post_edit_change_property(slot.property_name());
        previous
    }
}

impl fmt::Debug for VolumeAssetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<_> = self
            .assigned_slots()
            .map(|(slot, g)| (slot, g.name().to_string()))
            .collect();
        f.debug_struct("VolumeAssetSet")
            .field("volumes", &slots)
            .field("frame", &self.frame)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
