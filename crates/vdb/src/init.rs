//! Initialization helpers for vdb-rs.
//!
//! The library crates only emit `log` records. Applications that do not
//! install their own logger can call [`init_logging`].

use std::path::Path;

use crate::{Options, Result, SequencePlayer, VolumeAssetSet};

/// Installs an `env_logger` logger with a default filter of `info`.
///
/// The filter can be overridden with the `RUST_LOG` environment variable.
/// Calling this more than once, or after another logger was installed, is a
/// no-op.
pub fn init_logging() {
    let installed = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()
        .is_ok();
    if installed {
        log::info!("vdb-rs logging initialized");
    }
}

/// Loads options from a JSON file.
///
/// # Example
///
/// ```no_run
/// fn main() -> vdb::Result<()> {
///     let options = vdb::load_options("volumes.json")?;
///     let (asset, player) = vdb::create_playback(&options);
///     # let _ = (asset, player);
///     Ok(())
/// }
/// ```
pub fn load_options(path: impl AsRef<Path>) -> Result<Options> {
    let path = path.as_ref();
    let options = Options::load(path)?;
    log::info!("loaded options from {}", path.display());
    Ok(options)
}

/// Creates an empty asset set and a player configured from `options`.
#[must_use]
pub fn create_playback(options: &Options) -> (VolumeAssetSet, SequencePlayer) {
    (
        VolumeAssetSet::with_options(options.asset.clone()),
        SequencePlayer::new(options.playback.clone()),
    )
}
