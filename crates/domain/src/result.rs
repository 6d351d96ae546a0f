use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Success,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub source_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub status: ProcessStatus,
    pub reason: Option<String>,
}

impl ProcessResult {
    pub fn success(source_path: PathBuf, output_path: PathBuf, note: Option<String>) -> Self {
        Self {
            source_path,
            output_path: Some(output_path),
            status: ProcessStatus::Success,
            reason: note,
        }
    }

    pub fn skipped(source_path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            source_path,
            output_path: None,
            status: ProcessStatus::Skipped,
            reason: Some(reason.into()),
        }
    }

    pub fn failed(
        source_path: PathBuf,
        output_path: Option<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            source_path,
            output_path,
            status: ProcessStatus::Failed,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[ProcessResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            match result.status {
                ProcessStatus::Success => summary.succeeded += 1,
                ProcessStatus::Skipped => summary.skipped += 1,
                ProcessStatus::Failed => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
