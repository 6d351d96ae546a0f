use edge_pad_domain::{DEFAULT_MATCH_TOLERANCE, DEFAULT_STRIP_THICKNESS};
use serde::{Deserialize, Serialize};

use crate::ApplicationError;

pub const DEFAULT_JPEG_QUALITY: u8 = 92;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingSettings {
    pub strip_thickness: u32,
    pub match_tolerance: f64,
    pub jpeg_quality: u8,
}

impl Default for PaddingSettings {
    fn default() -> Self {
        Self {
            strip_thickness: DEFAULT_STRIP_THICKNESS,
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PaddingSettings {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.strip_thickness == 0 {
            return Err(ApplicationError::InvalidInput(
                "strip thickness must be at least 1 pixel".to_string(),
            ));
        }
        if !self.match_tolerance.is_finite() || self.match_tolerance < 0.0 {
            return Err(ApplicationError::InvalidInput(format!(
                "match tolerance must be a non-negative number, got {}",
                self.match_tolerance
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ApplicationError::InvalidInput(format!(
                "jpeg quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
