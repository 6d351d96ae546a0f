use crate::{Orientation, PaddingPlan};

pub const DEFAULT_STRIP_THICKNESS: u32 = 1;

/// An opaque 8-bit sRGB color as sampled from the source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && u64::from(x) < u64::from(self.x) + u64::from(self.width)
            && u64::from(y) < u64::from(self.y) + u64::from(self.height)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Colors sampled from the two edges facing the new margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeColors {
    pub first: Option<Rgb>,
    pub second: Option<Rgb>,
}

impl EdgeColors {
    pub fn pair(&self) -> Option<(Rgb, Rgb)> {
        Some((self.first?, self.second?))
    }

    pub fn is_complete(&self) -> bool {
        self.pair().is_some()
    }
}

/// Strips of the *source* image to average for the first and second edge.
///
/// Returns `None` for unpadded plans. The thickness is clamped to the
/// source extent so the trailing strip never starts before offset 0.
pub fn edge_strips(plan: &PaddingPlan, thickness: u32) -> Option<(PixelRect, PixelRect)> {
    let width = plan.original.width();
    let height = plan.original.height();

    match plan.orientation {
        Orientation::WidenTopBottom => {
            let thickness = thickness.clamp(1, height);
            Some((
                PixelRect {
                    x: 0,
                    y: 0,
                    width,
                    height: thickness,
                },
                PixelRect {
                    x: 0,
                    y: height.saturating_sub(thickness),
                    width,
                    height: thickness,
                },
            ))
        }
        Orientation::WidenLeftRight => {
            let thickness = thickness.clamp(1, width);
            Some((
                PixelRect {
                    x: 0,
                    y: 0,
                    width: thickness,
                    height,
                },
                PixelRect {
                    x: width.saturating_sub(thickness),
                    y: 0,
                    width: thickness,
                    height,
                },
            ))
        }
        Orientation::NoPad => None,
    }
}
