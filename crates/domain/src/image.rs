use std::path::Path;

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    width: u32,
    height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Jpeg,
    Png,
}

pub fn detect_raster_format(path: &Path) -> Option<RasterFormat> {
    let ext = path.extension().and_then(|ext| ext.to_str())?;

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some(RasterFormat::Jpeg),
        "png" => Some(RasterFormat::Png),
        _ => None,
    }
}
