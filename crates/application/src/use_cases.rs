use std::path::PathBuf;

use edge_pad_domain::RatioSpec;

#[derive(Debug, Clone)]
pub struct PadImageCommand {
    pub source: PathBuf,
    pub ratio: RatioSpec,
}

#[derive(Debug, Clone)]
pub struct RunBatchCommand {
    pub input: PathBuf,
    pub ratio: RatioSpec,
}
