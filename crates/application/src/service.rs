use std::path::{Path, PathBuf};

use edge_pad_domain::{
    detect_raster_format, edge_strips, is_already_tagged, output_path_for, CanvasFill,
    DimensionPlanner, EdgeColors, PaddingPlan, ProcessResult, RasterFormat, RatioSpec,
};
use log::{debug, info, warn};

use crate::{
    ApplicationError, CanvasRenderer, DimensionReader, EdgeSampler, FileScanner, InputKind,
    PadImageCommand, PaddingSettings, RenderRequest, RunBatchCommand,
};

pub struct PaddingService {
    dimensions: Box<dyn DimensionReader>,
    sampler: Box<dyn EdgeSampler>,
    renderer: Box<dyn CanvasRenderer>,
    scanner: Box<dyn FileScanner>,
    settings: PaddingSettings,
}

impl PaddingService {
    pub fn new(
        dimensions: Box<dyn DimensionReader>,
        sampler: Box<dyn EdgeSampler>,
        renderer: Box<dyn CanvasRenderer>,
        scanner: Box<dyn FileScanner>,
        settings: PaddingSettings,
    ) -> Self {
        Self {
            dimensions,
            sampler,
            renderer,
            scanner,
            settings,
        }
    }

    pub fn settings(&self) -> &PaddingSettings {
        &self.settings
    }

    /// Runs the whole pipeline for one file. Never fails: every per-file
    /// problem is reported in the returned result.
    pub fn plan_and_render(&self, command: PadImageCommand) -> ProcessResult {
        let PadImageCommand { source, ratio } = command;

        let Some(format) = detect_raster_format(&source) else {
            let error = ApplicationError::UnsupportedFormat(source.display().to_string());
            warn!("failed to pad {}: {error}", source.display());
            return ProcessResult::failed(source, None, error.to_string());
        };

        if is_already_tagged(&source, ratio) {
            debug!("skipping {}: already carries {}", source.display(), ratio.suffix());
            return ProcessResult::skipped(source, "already processed");
        }

        let output = output_path_for(&source, ratio);
        match self.process(&source, &output, ratio, format) {
            Ok(note) => {
                info!("padded {} -> {}", source.display(), output.display());
                ProcessResult::success(source, output, note)
            }
            Err(error) => {
                warn!("failed to pad {}: {error}", source.display());
                ProcessResult::failed(source, Some(output), error.to_string())
            }
        }
    }

    /// Resolves `input` into the files to process. Results are produced one
    /// file at a time as the returned iterator is advanced.
    pub fn run_batch(&self, command: RunBatchCommand) -> Result<BatchRun<'_>, ApplicationError> {
        self.settings.validate()?;
        let RunBatchCommand { input, ratio } = command;

        let pending = match self.scanner.inspect(&input)? {
            InputKind::File => vec![input],
            InputKind::Directory => {
                let scan = self.scanner.scan_supported(&input)?;
                debug!(
                    "scanned {}: {} files, {} supported",
                    input.display(),
                    scan.scanned_files,
                    scan.supported_files
                );
                scan.files
            }
        };

        Ok(BatchRun {
            service: self,
            ratio,
            pending: pending.into_iter(),
        })
    }

    fn process(
        &self,
        source: &Path,
        output: &Path,
        ratio: RatioSpec,
        format: RasterFormat,
    ) -> Result<Option<String>, ApplicationError> {
        let original = self.dimensions.read_dimensions(source)?;
        let plan = DimensionPlanner::new(self.settings.match_tolerance).plan(original, ratio);
        debug!(
            "{}: {}x{} -> {}x{} ({:?})",
            source.display(),
            original.width(),
            original.height(),
            plan.target_width,
            plan.target_height,
            plan.orientation
        );

        if !plan.is_padded() {
            self.renderer.copy_verbatim(source, output)?;
            return Ok(Some("aspect already matches, copied".to_string()));
        }

        let colors = self.sample_edges(source, &plan);
        let fill = CanvasFill::for_plan(&plan, &colors);
        self.renderer.render(&RenderRequest {
            source,
            output,
            plan: &plan,
            fill,
            format,
            jpeg_quality: self.settings.jpeg_quality,
        })?;

        if fill.is_fallback() && !colors.is_complete() {
            return Ok(Some("edge sampling failed, used black fill".to_string()));
        }
        Ok(None)
    }

    fn sample_edges(&self, source: &Path, plan: &PaddingPlan) -> EdgeColors {
        let Some((first, second)) = edge_strips(plan, self.settings.strip_thickness) else {
            return EdgeColors::default();
        };

        let sample = |strip| match self.sampler.sample_strip_average(source, strip) {
            Ok(color) => Some(color),
            Err(error) => {
                warn!("{}: {error}", source.display());
                None
            }
        };

        EdgeColors {
            first: sample(first),
            second: sample(second),
        }
    }
}

/// Lazily processes the files discovered by [`PaddingService::run_batch`].
pub struct BatchRun<'a> {
    service: &'a PaddingService,
    ratio: RatioSpec,
    pending: std::vec::IntoIter<PathBuf>,
}

impl BatchRun<'_> {
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Iterator for BatchRun<'_> {
    type Item = ProcessResult;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.pending.next()?;
        Some(self.service.plan_and_render(PadImageCommand {
            source,
            ratio: self.ratio,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pending.size_hint()
    }
}
