//! Configuration options for volume assets and playback.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frame::FrameBoundsPolicy;

/// Options controlling a [`VolumeAssetSet`](crate::VolumeAssetSet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetOptions {
    /// How committed frames are validated against the frame count.
    pub frame_bounds: FrameBoundsPolicy,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            frame_bounds: FrameBoundsPolicy::Clamp,
        }
    }
}

/// Options controlling a [`SequencePlayer`](crate::SequencePlayer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Frames per second of the source sequence.
    pub frame_rate: f32,

    /// Multiplier applied to elapsed time (1.0 = real time).
    pub playback_speed: f32,

    /// Whether playback wraps to frame 0 after the last frame.
    pub looping: bool,

    /// Whether the player starts playing as soon as it is created.
    pub auto_play: bool,

    /// Whether a frame is only committed once every grid has it resident.
    pub wait_for_residency: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            playback_speed: 1.0,
            looping: true,
            auto_play: true,
            wait_for_residency: true,
        }
    }
}

/// All vdb-rs options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Asset set options.
    pub asset: AssetOptions,

    /// Playback options.
    pub playback: PlaybackOptions,
}

impl Options {
    /// Parses options from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VdbError;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.asset.frame_bounds, FrameBoundsPolicy::Clamp);
        assert_eq!(options.playback.frame_rate, 30.0);
        assert!(options.playback.looping);
        assert!(options.playback.wait_for_residency);
    }

    #[test]
    fn test_partial_json() {
        let options = Options::from_json_str(
            r#"{ "asset": { "frame_bounds": "PassThrough" }, "playback": { "looping": false } }"#,
        )
        .unwrap();
        assert_eq!(options.asset.frame_bounds, FrameBoundsPolicy::PassThrough);
        assert!(!options.playback.looping);
        assert_eq!(options.playback.playback_speed, 1.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = Options::default();
        options.playback.frame_rate = 24.0;
        let json = options.to_json_string().unwrap();
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_invalid_json() {
        let err = Options::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, VdbError::JsonError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Options::load("/nonexistent/vdb-options.json").unwrap_err();
        assert!(matches!(err, VdbError::IoError(_)));
    }
}
