use crate::core::{Language, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directories the Go toolchain itself skips when expanding `./...`, besides
/// names starting with `.` or `_`.
const SKIPPED_DIRS: &[&str] = &["vendor", "testdata"];

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
    include_tests: bool,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
            include_tests: true,
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_tests(mut self, include_tests: bool) -> Self {
        self.include_tests = include_tests;
        self
    }

    /// Go files under the root, sorted by path. A root that is itself a file
    /// is returned as-is, whatever the filters say.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let root = self.root.clone();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry.path() != root
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(is_skipped_dir))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if Language::from_path(path) != Language::Go {
            return false;
        }

        if !self.include_tests && is_test_file(path) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self.ignore_patterns.iter().any(|pattern| {
            glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str) || self.matches_relative(&p, path))
                .unwrap_or(false)
        })
    }

    fn matches_relative(&self, pattern: &glob::Pattern, path: &Path) -> bool {
        path.strip_prefix(&self.root)
            .map(|rel| pattern.matches_path(rel))
            .unwrap_or(false)
    }
}

fn is_skipped_dir(name: &str) -> bool {
    SKIPPED_DIRS.contains(&name) || name.starts_with('.') || name.starts_with('_')
}

fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_test.go"))
}

/// Go files under every root, de-duplicated, in root order.
pub fn find_project_files(
    roots: &[PathBuf],
    ignore_patterns: &[String],
    include_tests: bool,
) -> Result<Vec<PathBuf>> {
    let mut seen = std::collections::HashSet::new();
    let mut files = Vec::new();
    for root in roots {
        let found = FileWalker::new(root.clone())
            .with_ignore_patterns(ignore_patterns.to_vec())
            .with_tests(include_tests)
            .walk()?;
        files.extend(found.into_iter().filter(|f| seen.insert(f.clone())));
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "package x\n").unwrap();
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_walk_finds_go_files_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "main.go");
        touch(dir.path(), "pkg/util.go");
        touch(dir.path(), "README.md");
        touch(dir.path(), "vendor/dep/dep.go");
        touch(dir.path(), "pkg/testdata/fixture.go");
        touch(dir.path(), "_obsolete/old.go");
        touch(dir.path(), ".cache/gen.go");

        let files = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert_eq!(names(&files, dir.path()), vec!["main.go", "pkg/util.go"]);
    }

    #[test]
    fn test_walk_excludes_tests_when_asked() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.go");
        touch(dir.path(), "a_test.go");

        let all = FileWalker::new(dir.path().to_path_buf()).walk().unwrap();
        assert_eq!(all.len(), 2);

        let no_tests = FileWalker::new(dir.path().to_path_buf())
            .with_tests(false)
            .walk()
            .unwrap();
        assert_eq!(names(&no_tests, dir.path()), vec!["a.go"]);
    }

    #[test]
    fn test_walk_applies_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.go");
        touch(dir.path(), "gen/a.pb.go");

        let files = FileWalker::new(dir.path().to_path_buf())
            .with_ignore_patterns(vec!["**/*.pb.go".to_string()])
            .walk()
            .unwrap();
        assert_eq!(names(&files, dir.path()), vec!["a.go"]);
    }

    #[test]
    fn test_explicit_file_root_is_kept() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "x_test.go");
        let file = dir.path().join("x_test.go");

        let files = FileWalker::new(file.clone()).with_tests(false).walk().unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_find_project_files_deduplicates() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.go");
        let roots = vec![dir.path().to_path_buf(), dir.path().join("a.go")];
        let files = find_project_files(&roots, &[], true).unwrap();
        assert_eq!(files.len(), 1);
    }
}
