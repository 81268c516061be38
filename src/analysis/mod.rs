//! Analysis passes run over parsed source files.

pub mod wrap_error;

pub use wrap_error::{analyze_file, FileAnalysisState, WrapErrorPass};
