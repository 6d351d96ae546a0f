use std::path::Path;

use edge_pad_application::{ApplicationError, FileScanSummary, FileScanner, InputKind};
use edge_pad_domain::detect_raster_format;
use walkdir::WalkDir;

/// Lists the direct children of a folder; subdirectories are not entered.
#[derive(Debug, Default)]
pub struct DirectoryScanner;

impl FileScanner for DirectoryScanner {
    fn inspect(&self, input: &Path) -> Result<InputKind, ApplicationError> {
        if input.is_dir() {
            return Ok(InputKind::Directory);
        }
        if input.is_file() {
            return Ok(InputKind::File);
        }
        Err(ApplicationError::InvalidInput(format!(
            "input does not exist or is not a file or directory: {}",
            input.display()
        )))
    }

    fn scan_supported(&self, folder: &Path) -> Result<FileScanSummary, ApplicationError> {
        if !folder.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "folder does not exist or is not a directory: {}",
                folder.display()
            )));
        }

        let mut summary = FileScanSummary::default();

        let entries = WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = entry.map_err(|error| ApplicationError::Io(error.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            summary.scanned_files += 1;
            if detect_raster_format(entry.path()).is_none() {
                continue;
            }

            summary.supported_files += 1;
            summary.files.push(entry.into_path());
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_supported_direct_children_in_name_order() {
        let dir = TempDir::new().expect("tempdir should be created");
        for name in ["b.png", "a.JPG", "notes.txt", "c.jpeg"] {
            fs::write(dir.path().join(name), b"x").expect("write");
        }
        fs::create_dir(dir.path().join("nested")).expect("mkdir");
        fs::write(dir.path().join("nested").join("d.jpg"), b"x").expect("write");

        let summary = DirectoryScanner
            .scan_supported(dir.path())
            .expect("scan should work");

        assert_eq!(summary.scanned_files, 4);
        assert_eq!(summary.supported_files, 3);
        let names: Vec<PathBuf> = summary
            .files
            .iter()
            .map(|path| PathBuf::from(path.file_name().expect("file name")))
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.JPG"),
                PathBuf::from("b.png"),
                PathBuf::from("c.jpeg")
            ]
        );
    }

    #[test]
    fn inspect_distinguishes_files_and_directories() {
        let dir = TempDir::new().expect("tempdir should be created");
        let file = dir.path().join("a.jpg");
        fs::write(&file, b"x").expect("write");

        assert_eq!(
            DirectoryScanner.inspect(dir.path()).expect("dir"),
            InputKind::Directory
        );
        assert_eq!(DirectoryScanner.inspect(&file).expect("file"), InputKind::File);
        assert!(matches!(
            DirectoryScanner.inspect(&dir.path().join("missing")),
            Err(ApplicationError::InvalidInput(_))
        ));
    }
}
