//! Named volume slots of an asset set.
//!
//! Slots bind positionally to shader buffers, so their order is fixed:
//! the three primary slots first, then the extra float and vector slots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VdbError;

/// Number of volume slots in an asset set.
pub const NUM_VOLUME_SLOTS: usize = 11;

/// One named volume slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VolumeSlot {
    /// Principal volume. Density values for fog volumes, distances for level sets.
    Density,
    /// Temperature values (fog volumes only).
    Temperature,
    /// Color values (fog volumes only).
    Color,
    /// Extra float volume.
    Float1,
    /// Extra float volume.
    Float2,
    /// Extra float volume.
    Float3,
    /// Extra float volume.
    Float4,
    /// Extra vector volume.
    Vector1,
    /// Extra vector volume.
    Vector2,
    /// Extra vector volume.
    Vector3,
    /// Extra vector volume.
    Vector4,
}

impl VolumeSlot {
    /// All slots in declaration order.
    pub const ALL: [VolumeSlot; NUM_VOLUME_SLOTS] = [
        Self::Density,
        Self::Temperature,
        Self::Color,
        Self::Float1,
        Self::Float2,
        Self::Float3,
        Self::Float4,
        Self::Vector1,
        Self::Vector2,
        Self::Vector3,
        Self::Vector4,
    ];

    /// Returns the position of this slot in declaration order.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the slot at a declaration-order position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the display name of this slot.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Density => "Density",
            Self::Temperature => "Temperature",
            Self::Color => "Color",
            Self::Float1 => "Float1",
            Self::Float2 => "Float2",
            Self::Float3 => "Float3",
            Self::Float4 => "Float4",
            Self::Vector1 => "Vector1",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Vector4 => "Vector4",
        }
    }

    /// Returns the property name used by editing surfaces (e.g. `FloatVolume1`).
    #[must_use]
    pub fn property_name(self) -> &'static str {
        match self {
            Self::Density => "DensityVolume",
            Self::Temperature => "TemperatureVolume",
            Self::Color => "ColorVolume",
            Self::Float1 => "FloatVolume1",
            Self::Float2 => "FloatVolume2",
            Self::Float3 => "FloatVolume3",
            Self::Float4 => "FloatVolume4",
            Self::Vector1 => "VectorVolume1",
            Self::Vector2 => "VectorVolume2",
            Self::Vector3 => "VectorVolume3",
            Self::Vector4 => "VectorVolume4",
        }
    }

    /// Looks up a slot by display name or property name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.name() == name || slot.property_name() == name)
    }

    /// Returns true for the density, temperature and color slots.
    #[must_use]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Density | Self::Temperature | Self::Color)
    }
}

impl fmt::Display for VolumeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VolumeSlot {
    type Err = VdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| VdbError::UnknownSlot(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        for (i, slot) in VolumeSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
            assert_eq!(VolumeSlot::from_index(i), Some(*slot));
        }
        assert_eq!(VolumeSlot::from_index(NUM_VOLUME_SLOTS), None);
        assert_eq!(VolumeSlot::ALL[0], VolumeSlot::Density);
        assert_eq!(VolumeSlot::ALL[NUM_VOLUME_SLOTS - 1], VolumeSlot::Vector4);
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(VolumeSlot::from_name("Density"), Some(VolumeSlot::Density));
        assert_eq!(VolumeSlot::from_name("FloatVolume3"), Some(VolumeSlot::Float3));
        assert_eq!(VolumeSlot::from_name("Vector2"), Some(VolumeSlot::Vector2));
        assert_eq!(VolumeSlot::from_name("density"), None);
        assert_eq!(VolumeSlot::from_name("Transform"), None);
    }

    #[test]
    fn test_from_str() {
        let slot: VolumeSlot = "ColorVolume".parse().unwrap();
        assert_eq!(slot, VolumeSlot::Color);

        let err = "Velocity".parse::<VolumeSlot>().unwrap_err();
        assert!(matches!(err, VdbError::UnknownSlot(name) if name == "Velocity"));
    }

    #[test]
    fn test_primary_slots() {
        let primary: Vec<_> = VolumeSlot::ALL.into_iter().filter(|s| s.is_primary()).collect();
        assert_eq!(
            primary,
            vec![VolumeSlot::Density, VolumeSlot::Temperature, VolumeSlot::Color]
        );
        assert_eq!(VolumeSlot::Float1.to_string(), "Float1");
    }
}
