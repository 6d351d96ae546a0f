use std::path::{Path, PathBuf};

use crate::RatioSpec;

/// `{dir}/{stem}_{ratio}.{ext}`; the extension keeps its original spelling.
pub fn output_path_for(source: &Path, ratio: RatioSpec) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match source.extension() {
        Some(ext) => format!("{stem}{}.{}", ratio.suffix(), ext.to_string_lossy()),
        None => format!("{stem}{}", ratio.suffix()),
    };
    source.with_file_name(file_name)
}

/// True when the file stem already ends with this ratio's suffix.
pub fn is_already_tagged(source: &Path, ratio: RatioSpec) -> bool {
    source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_ascii_lowercase().ends_with(&ratio.suffix()))
        .unwrap_or(false)
}
