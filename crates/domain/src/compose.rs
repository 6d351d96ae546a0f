use crate::{EdgeColors, Orientation, PaddingPlan, PixelRect, Rgb};

/// Fill used when either edge could not be sampled.
pub const FALLBACK_FILL: Rgb = Rgb::BLACK;

/// How the canvas behind the centered source is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasFill {
    /// Background in the first edge color, secondary margin in the second.
    TwoTone {
        background: Rgb,
        secondary: Rgb,
        secondary_region: PixelRect,
    },
    Uniform(Rgb),
}

impl CanvasFill {
    pub fn for_plan(plan: &PaddingPlan, colors: &EdgeColors) -> Self {
        let Some((first, second)) = colors.pair() else {
            return Self::Uniform(FALLBACK_FILL);
        };
        match secondary_region(plan) {
            Some(region) => Self::TwoTone {
                background: first,
                secondary: second,
                secondary_region: region,
            },
            None => Self::Uniform(first),
        }
    }

    pub fn is_fallback(&self) -> bool {
        *self == Self::Uniform(FALLBACK_FILL)
    }

    /// Fill color at canvas coordinate `(x, y)`, before the source is composited.
    pub fn color_at(&self, x: u32, y: u32) -> Rgb {
        match *self {
            Self::TwoTone {
                background,
                secondary,
                secondary_region,
            } => {
                if secondary_region.contains(x, y) {
                    secondary
                } else {
                    background
                }
            }
            Self::Uniform(color) => color,
        }
    }
}

/// Secondary margin as a canvas rectangle spanning the full cross axis.
pub fn secondary_region(plan: &PaddingPlan) -> Option<PixelRect> {
    let margin = plan.secondary_margin;
    if margin.length == 0 {
        return None;
    }
    match plan.orientation {
        Orientation::WidenTopBottom => Some(PixelRect {
            x: 0,
            y: margin.offset,
            width: plan.target_width,
            height: margin.length,
        }),
        Orientation::WidenLeftRight => Some(PixelRect {
            x: margin.offset,
            y: 0,
            width: margin.length,
            height: plan.target_height,
        }),
        Orientation::NoPad => None,
    }
}
