mod error;
mod ports;
mod service;
mod settings;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    CanvasRenderer, DimensionReader, EdgeSampler, FileScanSummary, FileScanner, InputKind,
    RenderRequest,
};
pub use service::{BatchRun, PaddingService};
pub use settings::{PaddingSettings, DEFAULT_JPEG_QUALITY};
pub use use_cases::{PadImageCommand, RunBatchCommand};
