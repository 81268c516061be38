// Test utility module for errwrap integration tests
#![allow(dead_code)]

use errwrap::diagnostics::Diagnostic;
use errwrap::{apply_fixes, parse_file, WrapErrorPass};
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/wrap_error")
}

pub fn fixture(name: &str) -> PathBuf {
    fixture_dir().join(name)
}

/// Expected-message patterns keyed by line, read from
/// ``// want `pattern` `` comments. One comment may hold several patterns.
pub fn parse_expectations(source: &str) -> BTreeMap<usize, Vec<Regex>> {
    let want = Regex::new(r"//\s*want\s+(.*)$").unwrap();
    let pattern = Regex::new(r"`([^`]*)`").unwrap();

    let mut expectations = BTreeMap::new();
    for (index, line) in source.lines().enumerate() {
        let Some(captures) = want.captures(line) else {
            continue;
        };
        let patterns: Vec<Regex> = pattern
            .captures_iter(&captures[1])
            .map(|c| Regex::new(&c[1]).unwrap())
            .collect();
        if !patterns.is_empty() {
            expectations.insert(index + 1, patterns);
        }
    }
    expectations
}

/// Analyze a fixture, failing on diagnostics nobody asked for and on
/// expectations nothing satisfied. Returns the diagnostics for further checks.
pub fn run(path: &Path) -> (String, Vec<Diagnostic>) {
    let source = std::fs::read_to_string(path).unwrap();
    let file = parse_file(&source, path.to_path_buf()).unwrap();
    let diagnostics = WrapErrorPass::new().analyze(&file).unwrap();

    let mut expectations = parse_expectations(&source);
    for diagnostic in &diagnostics {
        let line = diagnostic.position.line;
        let pending = expectations.entry(line).or_default();
        match pending.iter().position(|re| re.is_match(&diagnostic.message)) {
            Some(i) => {
                pending.remove(i);
            }
            None => panic!(
                "{}:{}: unexpected diagnostic: {}",
                path.display(),
                diagnostic.position,
                diagnostic.message
            ),
        }
    }

    let unmet: Vec<String> = expectations
        .iter()
        .flat_map(|(line, patterns)| {
            patterns
                .iter()
                .map(move |re| format!("{}:{}: no diagnostic matching `{}`", path.display(), line, re))
        })
        .collect();
    assert!(unmet.is_empty(), "{}", unmet.join("\n"));

    (source, diagnostics)
}

/// Like [`run`], then apply every suggested fix and compare the result with
/// the fixture's `.golden` file. Fixtures without one must stay unchanged.
pub fn run_with_suggested_fixes(path: &Path) -> Vec<Diagnostic> {
    let (source, diagnostics) = run(path);
    let fixed = apply_fixes(&source, &diagnostics).unwrap();

    let golden_path = PathBuf::from(format!("{}.golden", path.display()));
    let expected = if golden_path.exists() {
        std::fs::read_to_string(&golden_path).unwrap()
    } else {
        source
    };
    pretty_assertions::assert_eq!(expected, fixed, "{}", golden_path.display());

    diagnostics
}
