pub mod output;
pub mod walker;

pub use output::{create_writer, FileReport, OutputFormat, OutputWriter};
pub use walker::{find_project_files, FileWalker};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system("Failed to write file", path, e))
}
