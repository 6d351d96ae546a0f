mod color;
mod compose;
mod error;
mod image;
mod naming;
mod plan;
mod ratio;
mod result;

pub use color::{edge_strips, EdgeColors, PixelRect, Rgb, DEFAULT_STRIP_THICKNESS};
pub use compose::{secondary_region, CanvasFill, FALLBACK_FILL};
pub use error::DomainError;
pub use image::{detect_raster_format, ImageDimensions, RasterFormat};
pub use naming::{is_already_tagged, output_path_for};
pub use plan::{DimensionPlanner, Margin, Orientation, PaddingPlan, DEFAULT_MATCH_TOLERANCE};
pub use ratio::{RatioAllowList, RatioSpec};
pub use result::{BatchSummary, ProcessResult, ProcessStatus};
