//! Integration tests for sequence playback driving a volume asset set.

use std::sync::{Arc, Mutex};

use vdb::*;

fn plume(num_frames: i32) -> Arc<VdbVolumeSequence> {
    let frames = (0..num_frames)
        .map(|i| {
            RenderInfos::new(
                IVec3::ZERO,
                IVec3::new(8, 8 + i, 8),
                Mat4::IDENTITY,
                allocate_grid_handle(),
            )
        })
        .collect();
    create_volume_sequence("plume", VdbClass::FogVolume, frames).expect("non-empty sequence")
}

fn options(json: &str) -> Options {
    Options::from_json_str(json).expect("valid options")
}

#[test]
fn test_player_waits_for_streamed_frames() {
    let density = plume(8);
    let options = options(r#"{ "playback": { "frame_rate": 4.0, "looping": false } }"#);
    let (mut asset, mut player) = create_playback(&options);
    asset.set_volume(VolumeSlot::Density, density.clone());

    let committed = Arc::new(Mutex::new(Vec::new()));
    let c = Arc::clone(&committed);
    asset.on_asset_changed.add(move |frame| c.lock().unwrap().push(frame));

    density.set_resident_frames(2);
    for _ in 0..3 {
        player.tick(&mut asset, 0.25);
    }
    // Frame 1 is loaded, 2 and 3 are not.
    assert_eq!(asset.curr_frame_index(), 1);
    assert_eq!(asset.target_frame_index(), 3);

    density.set_resident_frames(8);
    assert_eq!(player.tick(&mut asset, 0.0), Some(3));
    assert_eq!(*committed.lock().unwrap(), vec![1, 3]);

    let infos = asset.render_infos(&*density).unwrap();
    assert_eq!(infos.index_max, IVec3::new(8, 11, 8));
}

#[test]
fn test_looping_playback_cycles() {
    let options = options(r#"{ "playback": { "frame_rate": 4.0 } }"#);
    let (mut asset, mut player) = create_playback(&options);
    asset.set_volume(VolumeSlot::Density, plume(4));

    let frames: Vec<_> = (0..8).filter_map(|_| player.tick(&mut asset, 0.25)).collect();
    assert_eq!(frames, vec![1, 2, 3, 0, 1, 2, 3, 0]);
}

#[test]
fn test_static_and_animated_slots_together() {
    let options = options(r#"{ "playback": { "frame_rate": 2.0, "looping": false } }"#);
    let (mut asset, mut player) = create_playback(&options);
    asset.set_volume(VolumeSlot::Density, plume(3));
    asset.set_volume(
        VolumeSlot::Color,
        create_static_volume("color", VdbClass::FogVolume, IVec3::ZERO, IVec3::splat(8), 1.0),
    );
    assert_eq!(asset.num_frames(), 3);

    assert_eq!(player.tick(&mut asset, 5.0), Some(2));
    assert!(!player.is_playing());
    assert!(asset.render_infos_for_slot(VolumeSlot::Color).is_some());
    assert_eq!(asset.volume_size(), Vec3::new(8.0, 10.0, 8.0));
}

#[test]
fn test_default_logging_init_is_idempotent() {
    init_logging();
    init_logging();
}
