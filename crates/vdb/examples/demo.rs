//! Demo application showing basic vdb-rs usage.
//!
//! This demo builds an animated fog volume with a static color grid and plays
//! it back at a fixed tick rate, printing every committed frame.

use std::sync::Arc;

use vdb::*;

fn main() -> Result<()> {
    init_logging();

    // A growing plume: each frame is a little taller than the last
    let frames: Vec<RenderInfos> = (0..24)
        .map(|i| {
            RenderInfos::new(
                IVec3::new(-16, 0, -16),
                IVec3::new(16, 32 + i, 16),
                Mat4::from_scale(Vec3::splat(0.05)),
                allocate_grid_handle(),
            )
        })
        .collect();
    let density = create_volume_sequence("plume_density", VdbClass::FogVolume, frames)?;
    let color = create_static_volume(
        "plume_color",
        VdbClass::FogVolume,
        IVec3::new(-16, 0, -16),
        IVec3::new(16, 56, 16),
        0.05,
    );

    let (mut asset, mut player) = create_playback(&Options::default());
    asset.set_volume(VolumeSlot::Density, density.clone());
    asset.set_volume(VolumeSlot::Color, color);

    // Render proxies refresh first
    asset.on_frame_changed.add(|frame| {
        log::info!("render proxy refreshed for frame {frame}");
    });

    // Scripts observe afterwards
    asset.on_asset_changed.add(|frame| {
        println!("asset changed: frame {frame}");
    });

    // Simulate a streamer that has only loaded half the sequence so far
    density.set_resident_frames(12);

    let dt = 1.0 / 60.0;
    for tick in 0..120 {
        if tick == 60 {
            density.set_resident_frames(24);
        }
        if player.tick(&mut asset, dt).is_some() {
            let uniforms = VolumeUniforms::from(&asset.metadata());
            println!(
                "  size {:?} uv scale {:?} slots {:#b}",
                uniforms.size, uniforms.uv_scale, uniforms.slot_mask
            );
        }
    }

    let mut content: Vec<Arc<dyn VolumeGrid>> = Vec::new();
    asset.referenced_content_objects(&mut content);
    println!(
        "asset references: {}",
        content.iter().map(|g| g.name()).collect::<Vec<_>>().join(", ")
    );

    Ok(())
}
