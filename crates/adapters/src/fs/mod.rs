mod scanner;

pub use scanner::DirectoryScanner;
