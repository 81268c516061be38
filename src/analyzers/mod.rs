//! Language front ends that turn source text into a [`SourceFile`].

use crate::core::{Error, Language, Result, SourceFile};
use std::path::{Path, PathBuf};

pub mod go;

pub trait Analyzer: Send + Sync {
    fn parse(&self, content: &str, path: PathBuf) -> Result<SourceFile>;
    fn language(&self) -> Language;
}

pub fn get_analyzer(language: Language) -> Option<Box<dyn Analyzer>> {
    match language {
        Language::Go => Some(Box::new(go::GoAnalyzer::new())),
        Language::Unknown => None,
    }
}

pub fn detect_language(path: &Path) -> Language {
    Language::from_path(path)
}

/// Parse `content` with the front end chosen from the file extension.
pub fn parse_file(content: &str, path: PathBuf) -> Result<SourceFile> {
    let language = detect_language(&path);
    let analyzer = get_analyzer(language).ok_or_else(|| {
        Error::Unsupported(format!("no front end for {}", path.display()))
    })?;
    analyzer.parse(content, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_dispatches_on_extension() {
        let file = parse_file("package a\n", PathBuf::from("a.go")).unwrap();
        assert!(file.file_node().is_some());

        let err = parse_file("fn main() {}", PathBuf::from("main.rs")).unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language(Path::new("pkg/a_test.go")), Language::Go);
        assert_eq!(detect_language(Path::new("go.mod")), Language::Unknown);
    }

    #[test]
    fn test_get_analyzer() {
        assert_eq!(
            get_analyzer(Language::Go).map(|a| a.language()),
            Some(Language::Go)
        );
        assert!(get_analyzer(Language::Unknown).is_none());
    }
}
