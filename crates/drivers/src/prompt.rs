use std::io::{BufRead, Write};

use edge_pad_adapters::present_ratio_choices;
use edge_pad_domain::RatioAllowList;

/// Asks for a ratio on `input`. Accepts a list number or a ratio token; the
/// token itself is validated by the caller.
pub fn choose_ratio<R: BufRead, W: Write>(
    ratios: &RatioAllowList,
    mut input: R,
    mut output: W,
) -> Result<String, String> {
    let write_error = |error: std::io::Error| format!("failed to write prompt: {error}");
    writeln!(output, "select a target ratio:").map_err(write_error)?;
    for line in present_ratio_choices(ratios) {
        writeln!(output, "  {line}").map_err(write_error)?;
    }
    write!(output, "> ").map_err(write_error)?;
    output.flush().map_err(write_error)?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|error| format!("failed to read ratio choice: {error}"))?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err("no ratio selected".to_string());
    }

    if let Ok(index) = answer.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|index| ratios.ratios().get(index))
            .map(|ratio| ratio.token())
            .ok_or_else(|| format!("no ratio numbered {index}"));
    }
    Ok(answer.to_string())
}
