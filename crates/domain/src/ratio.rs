use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A reduced `width:height` target ratio such as `9x16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RatioSpec {
    width_units: u32,
    height_units: u32,
}

impl RatioSpec {
    pub fn new(width_units: u32, height_units: u32) -> Result<Self, DomainError> {
        if width_units == 0 || height_units == 0 {
            return Err(DomainError::InvalidRatioFormat(format!(
                "{width_units}x{height_units}"
            )));
        }
        Ok(Self {
            width_units,
            height_units,
        })
    }

    /// Parses `<int>x<int>` without consulting any allow-list.
    pub fn parse_format(token: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidRatioFormat(token.to_string());
        let lowered = token.to_ascii_lowercase();
        let (width, height) = lowered.split_once('x').ok_or_else(invalid)?;
        if !is_ascii_number(width) || !is_ascii_number(height) {
            return Err(invalid());
        }
        let width_units = width.parse::<u32>().map_err(|_| invalid())?;
        let height_units = height.parse::<u32>().map_err(|_| invalid())?;
        Self::new(width_units, height_units).map_err(|_| invalid())
    }

    pub fn width_units(self) -> u32 {
        self.width_units
    }

    pub fn height_units(self) -> u32 {
        self.height_units
    }

    pub fn aspect(self) -> f64 {
        f64::from(self.width_units) / f64::from(self.height_units)
    }

    /// Normalized token, e.g. `9x16`.
    pub fn token(self) -> String {
        format!("{}x{}", self.width_units, self.height_units)
    }

    /// File-name suffix inserted before the extension, e.g. `_9x16`.
    pub fn suffix(self) -> String {
        format!("_{}", self.token())
    }
}

impl Display for RatioSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width_units, self.height_units)
    }
}

impl TryFrom<String> for RatioSpec {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_format(&value)
    }
}

impl From<RatioSpec> for String {
    fn from(value: RatioSpec) -> Self {
        value.token()
    }
}

fn is_ascii_number(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|byte| byte.is_ascii_digit())
}

/// The set of ratios an invocation may target. Loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatioAllowList(Vec<RatioSpec>);

impl Default for RatioAllowList {
    fn default() -> Self {
        Self(vec![
            RatioSpec {
                width_units: 9,
                height_units: 16,
            },
            RatioSpec {
                width_units: 4,
                height_units: 5,
            },
            RatioSpec {
                width_units: 1,
                height_units: 1,
            },
            RatioSpec {
                width_units: 16,
                height_units: 9,
            },
        ])
    }
}

impl RatioAllowList {
    pub fn new(ratios: Vec<RatioSpec>) -> Self {
        let mut unique: Vec<RatioSpec> = Vec::with_capacity(ratios.len());
        for ratio in ratios {
            if !unique.contains(&ratio) {
                unique.push(ratio);
            }
        }
        Self(unique)
    }

    pub fn ratios(&self) -> &[RatioSpec] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a user token and checks it against the allow-list.
    ///
    /// The token must match an entry's normalized form exactly after
    /// lowercasing, so `9X16` is accepted but `09x16` is not.
    pub fn resolve(&self, token: &str) -> Result<RatioSpec, DomainError> {
        RatioSpec::parse_format(token)?;
        let normalized = token.to_ascii_lowercase();
        self.0
            .iter()
            .copied()
            .find(|ratio| ratio.token() == normalized)
            .ok_or_else(|| DomainError::UnsupportedRatio {
                token: token.to_string(),
                allowed: self.describe(),
            })
    }

    pub fn describe(&self) -> String {
        self.0
            .iter()
            .map(|ratio| ratio.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_allow_listed_ratio_case_insensitively() {
        let allow = RatioAllowList::default();
        let ratio = allow.resolve("9X16").expect("9X16 should resolve");
        assert_eq!(ratio.width_units(), 9);
        assert_eq!(ratio.height_units(), 16);
        assert_eq!(ratio.suffix(), "_9x16");
    }

    #[test]
    fn rejects_malformed_tokens() {
        let allow = RatioAllowList::default();
        for token in ["", "9", "9x", "x16", " 9x16", "9x16 ", "9:16", "-9x16", "9x16x1", "ax16"] {
            assert!(
                matches!(allow.resolve(token), Err(DomainError::InvalidRatioFormat(_))),
                "{token:?} should be an invalid format"
            );
        }
    }

    #[test]
    fn rejects_zero_units() {
        assert!(matches!(
            RatioSpec::parse_format("0x16"),
            Err(DomainError::InvalidRatioFormat(_))
        ));
    }

    #[test]
    fn rejects_well_formed_ratio_outside_allow_list() {
        let allow = RatioAllowList::default();
        assert!(matches!(
            allow.resolve("3x4"),
            Err(DomainError::UnsupportedRatio { .. })
        ));
        assert!(matches!(
            allow.resolve("09x16"),
            Err(DomainError::UnsupportedRatio { .. })
        ));
    }

    #[test]
    fn allow_list_is_extensible() {
        let allow = RatioAllowList::new(vec![
            RatioSpec::parse_format("3x4").expect("3x4"),
            RatioSpec::parse_format("3x4").expect("3x4"),
        ]);
        assert_eq!(allow.ratios().len(), 1);
        assert_eq!(allow.resolve("3x4").expect("resolve").token(), "3x4");
    }

    #[test]
    fn allow_list_deserializes_from_tokens() {
        let allow: RatioAllowList =
            serde_json::from_str(r#"["2x3", "21x9"]"#).expect("json should parse");
        assert_eq!(allow.describe(), "2x3, 21x9");
        assert!(serde_json::from_str::<RatioAllowList>(r#"["2:3"]"#).is_err());
    }
}
