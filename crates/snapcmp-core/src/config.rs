use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of intensity levels each color channel is bucketed into.
///
/// Only levels whose cube fits in a byte are offered, so a quantized pixel
/// always fits in a `u8`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum Detail {
    Two,
    #[default]
    Three,
    Four,
    Five,
    Six,
}

impl Detail {
    pub const ALL: [Detail; 5] = [
        Detail::Two,
        Detail::Three,
        Detail::Four,
        Detail::Five,
        Detail::Six,
    ];

    pub fn level(self) -> u8 {
        match self {
            Detail::Two => 2,
            Detail::Three => 3,
            Detail::Four => 4,
            Detail::Five => 5,
            Detail::Six => 6,
        }
    }

    pub fn colors_per_channel(self) -> u32 {
        self.level() as u32
    }

    pub fn colors_per_pixel(self) -> u32 {
        self.colors_per_channel().pow(3)
    }

    /// Width of the intensity range that collapses into one channel bucket.
    pub fn channel_division(self) -> u32 {
        256 / self.colors_per_channel()
    }
}

impl TryFrom<u8> for Detail {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        Detail::ALL
            .into_iter()
            .find(|d| d.level() == level)
            .ok_or_else(|| {
                Error::InvalidConfiguration(format!(
                    "detail level {} is not one of 2..=6",
                    level
                ))
            })
    }
}

impl From<Detail> for u8 {
    fn from(detail: Detail) -> Self {
        detail.level()
    }
}

/// Validated comparator settings.
///
/// There are no setters: a configuration is checked once in [`ComparatorConfig::new`]
/// and stays fixed for the lifetime of any comparator built from it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparatorConfig {
    detail: Detail,
    square_side: u32,
    tolerance_percent: u32,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawComparatorConfig {
    detail: Detail,
    square_side: u32,
    tolerance_percent: u32,
}

impl Default for RawComparatorConfig {
    fn default() -> Self {
        let ComparatorConfig {
            detail,
            square_side,
            tolerance_percent,
        } = ComparatorConfig::default();
        Self {
            detail,
            square_side,
            tolerance_percent,
        }
    }
}

impl<'de> Deserialize<'de> for ComparatorConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawComparatorConfig::deserialize(deserializer)?;
        ComparatorConfig::new(raw.detail, raw.square_side, raw.tolerance_percent)
            .map_err(serde::de::Error::custom)
    }
}

impl ComparatorConfig {
    pub fn new(detail: Detail, square_side: u32, tolerance_percent: u32) -> Result<Self> {
        if tolerance_percent > 100 {
            return Err(Error::InvalidConfiguration(format!(
                "{}% is not a valid tolerance, expected 0..=100",
                tolerance_percent
            )));
        }
        if square_side == 0 {
            return Err(Error::InvalidConfiguration(
                "square side must be positive".to_string(),
            ));
        }
        Ok(Self {
            detail,
            square_side,
            tolerance_percent,
        })
    }

    pub fn detail(&self) -> Detail {
        self.detail
    }

    pub fn square_side(&self) -> u32 {
        self.square_side
    }

    pub fn tolerance_percent(&self) -> u32 {
        self.tolerance_percent
    }

    pub fn fingerprint_len(&self) -> usize {
        self.square_side as usize * self.square_side as usize
    }
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            detail: Detail::Three,
            square_side: 10,
            tolerance_percent: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_fit_in_a_byte() {
        for detail in Detail::ALL {
            assert!(detail.colors_per_pixel() <= 256, "{:?}", detail);
        }
        assert_eq!(Detail::Six.colors_per_pixel(), 216);
    }

    #[test]
    fn test_derived_values() {
        assert_eq!(Detail::Three.channel_division(), 85);
        assert_eq!(Detail::Three.colors_per_pixel(), 27);
        assert_eq!(Detail::Four.channel_division(), 64);
        assert_eq!(Detail::Five.channel_division(), 51);
    }

    #[test]
    fn test_detail_try_from() {
        assert_eq!(Detail::try_from(4u8).unwrap(), Detail::Four);
        assert!(matches!(
            Detail::try_from(7u8),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Detail::try_from(1u8).is_err());
    }

    #[test]
    fn test_rejects_tolerance_above_100() {
        let err = ComparatorConfig::new(Detail::Three, 10, 150).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(ComparatorConfig::new(Detail::Three, 10, 100).is_ok());
    }

    #[test]
    fn test_rejects_zero_side() {
        assert!(matches!(
            ComparatorConfig::new(Detail::Three, 0, 0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = ComparatorConfig::default();
        assert_eq!(config.detail(), Detail::Three);
        assert_eq!(config.square_side(), 10);
        assert_eq!(config.tolerance_percent(), 0);
        assert_eq!(config.fingerprint_len(), 100);
    }

    #[test]
    fn test_deserialize_validates() {
        let config: ComparatorConfig =
            toml::from_str("detail = 4\nsquare_side = 16\ntolerance_percent = 5").unwrap();
        assert_eq!(config.detail(), Detail::Four);
        assert_eq!(config.square_side(), 16);

        let partial: ComparatorConfig = toml::from_str("tolerance_percent = 20").unwrap();
        assert_eq!(partial.square_side(), 10);

        assert!(toml::from_str::<ComparatorConfig>("tolerance_percent = 101").is_err());
        assert!(toml::from_str::<ComparatorConfig>("detail = 9").is_err());
    }
}
