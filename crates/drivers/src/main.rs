mod config;
mod logging;
mod prompt;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use config::AppConfig;
use edge_pad_adapters::{
    present_ratio_choices, present_result, present_summary, DirectoryScanner, ImageCrateCodec,
};
use edge_pad_application::{PaddingService, RunBatchCommand};
use edge_pad_domain::{BatchSummary, ProcessResult};
use log::debug;

/// Pad images to an aspect ratio, filling the margins with colors sampled
/// from the image's own edges.
#[derive(Debug, Parser)]
#[command(name = "edge-pad", version)]
struct Cli {
    /// Image file, or folder whose direct children are processed
    #[arg(required_unless_present = "list_ratios")]
    input: Option<PathBuf>,

    /// Target ratio such as 9x16; prompts when omitted
    #[arg(short, long)]
    ratio: Option<String>,

    /// JSON config with `ratios` and `padding` settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Thickness in pixels of the edge strips that are averaged
    #[arg(long)]
    strip_thickness: Option<u32>,

    /// Quality used when writing JPEG output (1-100)
    #[arg(long)]
    jpeg_quality: Option<u8>,

    /// Print the allowed ratios and exit
    #[arg(long)]
    list_ratios: bool,

    /// Log per-file decisions
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(summary) if summary.has_failures() => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<BatchSummary, CommandError> {
    let config = resolve_config(&cli)?;

    if cli.list_ratios {
        for line in present_ratio_choices(&config.ratios) {
            println!("{line}");
        }
        return Ok(BatchSummary::default());
    }

    let input = cli
        .input
        .ok_or_else(|| CommandError::Usage("missing input path".to_string()))?;
    let token = match cli.ratio {
        Some(token) => token,
        None => prompt::choose_ratio(&config.ratios, io::stdin().lock(), io::stdout())
            .map_err(CommandError::Usage)?,
    };
    let ratio = config
        .ratios
        .resolve(&token)
        .map_err(|error| CommandError::Usage(error.to_string()))?;

    let service = build_padding_service(&config);
    let run = service
        .run_batch(RunBatchCommand { input, ratio })
        .map_err(|error| CommandError::Runtime(format!("cannot start run: {error}")))?;

    let results: Vec<ProcessResult> = run
        .inspect(|result| println!("{}", present_result(result)))
        .collect();
    let summary = BatchSummary::from_results(&results);
    println!("{}", present_summary(&summary));
    Ok(summary)
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, CommandError> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(thickness) = cli.strip_thickness {
        config.padding.strip_thickness = thickness;
    }
    if let Some(quality) = cli.jpeg_quality {
        config.padding.jpeg_quality = quality;
    }
    config
        .validate()
        .map_err(|error| CommandError::Usage(error.to_string()))?;
    debug!(
        "ratios: {}; padding: {:?}",
        config.ratios.describe(),
        config.padding
    );
    Ok(config)
}

fn load_config(path: &Path) -> Result<AppConfig, CommandError> {
    AppConfig::load(path).map_err(|error| CommandError::Usage(error.to_string()))
}

fn build_padding_service(config: &AppConfig) -> PaddingService {
    let codec = Rc::new(ImageCrateCodec::default());
    PaddingService::new(
        Box::new(Rc::clone(&codec)),
        Box::new(Rc::clone(&codec)),
        Box::new(codec),
        Box::new(DirectoryScanner),
        config.padding,
    )
}
