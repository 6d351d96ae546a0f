use std::path::{Path, PathBuf};
use std::rc::Rc;

use edge_pad_domain::{CanvasFill, ImageDimensions, PaddingPlan, PixelRect, RasterFormat, Rgb};

use crate::ApplicationError;

pub trait DimensionReader {
    /// Dimensions of the first frame, without decoding pixel data where possible.
    fn read_dimensions(&self, path: &Path) -> Result<ImageDimensions, ApplicationError>;
}

pub trait EdgeSampler {
    /// Area average of `strip`, ignoring alpha.
    fn sample_strip_average(&self, path: &Path, strip: PixelRect)
        -> Result<Rgb, ApplicationError>;
}

#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub source: &'a Path,
    pub output: &'a Path,
    pub plan: &'a PaddingPlan,
    pub fill: CanvasFill,
    pub format: RasterFormat,
    pub jpeg_quality: u8,
}

pub trait CanvasRenderer {
    /// Paints `fill`, composites the source at the plan's offset and encodes
    /// to `output`. Implementations remove `output` if encoding fails midway.
    fn render(&self, request: &RenderRequest<'_>) -> Result<(), ApplicationError>;

    fn copy_verbatim(&self, source: &Path, output: &Path) -> Result<(), ApplicationError>;
}

// One codec instance can back several ports and share its decode cache.
impl<T: DimensionReader + ?Sized> DimensionReader for Rc<T> {
    fn read_dimensions(&self, path: &Path) -> Result<ImageDimensions, ApplicationError> {
        (**self).read_dimensions(path)
    }
}

impl<T: EdgeSampler + ?Sized> EdgeSampler for Rc<T> {
    fn sample_strip_average(
        &self,
        path: &Path,
        strip: PixelRect,
    ) -> Result<Rgb, ApplicationError> {
        (**self).sample_strip_average(path, strip)
    }
}

impl<T: CanvasRenderer + ?Sized> CanvasRenderer for Rc<T> {
    fn render(&self, request: &RenderRequest<'_>) -> Result<(), ApplicationError> {
        (**self).render(request)
    }

    fn copy_verbatim(&self, source: &Path, output: &Path) -> Result<(), ApplicationError> {
        (**self).copy_verbatim(source, output)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Directory,
}

#[derive(Debug, Clone, Default)]
pub struct FileScanSummary {
    pub scanned_files: usize,
    pub supported_files: usize,
    pub files: Vec<PathBuf>,
}

pub trait FileScanner {
    fn inspect(&self, input: &Path) -> Result<InputKind, ApplicationError>;

    /// Direct children of `folder` with a supported raster extension,
    /// ordered by file name.
    fn scan_supported(&self, folder: &Path) -> Result<FileScanSummary, ApplicationError>;
}
