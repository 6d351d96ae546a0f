use crate::{ImageDimensions, RatioSpec};

/// Aspect difference below which an image already matches its target ratio.
pub const DEFAULT_MATCH_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    WidenTopBottom,
    WidenLeftRight,
    NoPad,
}

/// A band along the padded axis, measured from the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margin {
    pub offset: u32,
    pub length: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingPlan {
    pub orientation: Orientation,
    pub original: ImageDimensions,
    pub target_width: u32,
    pub target_height: u32,
    pub primary_margin: Margin,
    pub secondary_margin: Margin,
}

impl PaddingPlan {
    fn unpadded(original: ImageDimensions) -> Self {
        Self {
            orientation: Orientation::NoPad,
            original,
            target_width: original.width(),
            target_height: original.height(),
            primary_margin: Margin::default(),
            secondary_margin: Margin::default(),
        }
    }

    pub fn is_padded(&self) -> bool {
        self.orientation != Orientation::NoPad
    }

    /// Top-left corner of the original inside the target canvas.
    pub fn source_offset(&self) -> (u32, u32) {
        match self.orientation {
            Orientation::WidenTopBottom => (0, self.primary_margin.length),
            Orientation::WidenLeftRight => (self.primary_margin.length, 0),
            Orientation::NoPad => (0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionPlanner {
    pub match_tolerance: f64,
}

impl Default for DimensionPlanner {
    fn default() -> Self {
        Self {
            match_tolerance: DEFAULT_MATCH_TOLERANCE,
        }
    }
}

impl DimensionPlanner {
    pub fn new(match_tolerance: f64) -> Self {
        Self { match_tolerance }
    }

    pub fn plan(&self, original: ImageDimensions, ratio: RatioSpec) -> PaddingPlan {
        let image_aspect = original.aspect();
        let target_aspect = ratio.aspect();
        if (image_aspect - target_aspect).abs() < self.match_tolerance {
            return PaddingPlan::unpadded(original);
        }

        let orientation = if image_aspect > target_aspect {
            Orientation::WidenTopBottom
        } else {
            Orientation::WidenLeftRight
        };

        // (cross axis length, padded axis length, cross units, padded units)
        let (cross_len, padded_len, cross_units, padded_units) = match orientation {
            Orientation::WidenTopBottom => (
                original.width(),
                original.height(),
                ratio.width_units(),
                ratio.height_units(),
            ),
            _ => (
                original.height(),
                original.width(),
                ratio.height_units(),
                ratio.width_units(),
            ),
        };

        let target_padded = scaled_length(cross_len, padded_units, cross_units).max(padded_len);
        if target_padded == padded_len {
            return PaddingPlan::unpadded(original);
        }

        let total = target_padded - padded_len;
        let primary = total / 2;
        let secondary = total - primary;
        let (target_width, target_height) = match orientation {
            Orientation::WidenTopBottom => (original.width(), target_padded),
            _ => (target_padded, original.height()),
        };

        PaddingPlan {
            orientation,
            original,
            target_width,
            target_height,
            primary_margin: Margin {
                offset: 0,
                length: primary,
            },
            secondary_margin: Margin {
                offset: primary + padded_len,
                length: secondary,
            },
        }
    }
}

/// `round(length * numerator / denominator)`, half away from zero, at least 1.
fn scaled_length(length: u32, numerator: u32, denominator: u32) -> u32 {
    let exact = f64::from(length) * f64::from(numerator) / f64::from(denominator);
    exact.round().clamp(1.0, f64::from(u32::MAX)) as u32
}
