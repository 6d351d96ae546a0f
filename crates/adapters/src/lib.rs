pub mod fs;
pub mod imaging;
pub mod presenters;

pub use fs::DirectoryScanner;
pub use imaging::ImageCrateCodec;
pub use presenters::{present_ratio_choices, present_result, present_summary};
