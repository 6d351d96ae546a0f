use std::path::Path;

use edge_pad_domain::{BatchSummary, ProcessResult, ProcessStatus, RatioAllowList};

pub fn present_result(result: &ProcessResult) -> String {
    let source = display_name(&result.source_path);
    let line = match result.status {
        ProcessStatus::Success => {
            let output = result
                .output_path
                .as_deref()
                .map(display_name)
                .unwrap_or_default();
            format!("processed {source} -> {output}")
        }
        ProcessStatus::Skipped => format!("skipped   {source}"),
        ProcessStatus::Failed => format!("failed    {source}"),
    };
    match &result.reason {
        Some(reason) => format!("{line} ({reason})"),
        None => line,
    }
}

pub fn present_summary(summary: &BatchSummary) -> String {
    format!(
        "done: {} processed, {} skipped, {} failed",
        summary.succeeded, summary.skipped, summary.failed
    )
}

pub fn present_ratio_choices(ratios: &RatioAllowList) -> Vec<String> {
    ratios
        .ratios()
        .iter()
        .enumerate()
        .map(|(index, ratio)| format!("{}) {ratio}", index + 1))
        .collect()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_lines_name_files_and_reasons() {
        let ok = ProcessResult::success("/p/a.jpg".into(), "/p/a_9x16.jpg".into(), None);
        assert_eq!(present_result(&ok), "processed a.jpg -> a_9x16.jpg");

        let skipped = ProcessResult::skipped("/p/a_9x16.jpg".into(), "already processed");
        assert_eq!(
            present_result(&skipped),
            "skipped   a_9x16.jpg (already processed)"
        );

        let failed = ProcessResult::failed("/p/b.png".into(), None, "io error: denied");
        assert_eq!(present_result(&failed), "failed    b.png (io error: denied)");
    }

    #[test]
    fn ratio_choices_are_numbered_from_one() {
        let choices = present_ratio_choices(&RatioAllowList::default());
        assert_eq!(choices, vec!["1) 9x16", "2) 4x5", "3) 1x1", "4) 16x9"]);
    }
}
