use crate::analysis::WrapErrorPass;
use crate::analyzers;
use crate::cli::setup::{configure_thread_pool, get_worker_count};
use crate::config::{load_config, load_config_from, ErrwrapConfig};
use crate::diagnostics::apply::apply_fixes;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::io::{self, create_writer, find_project_files, FileReport, OutputFormat};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Exit status when findings were reported and not fixed.
pub const EXIT_FINDINGS: i32 = 3;
/// Exit status when at least one file could not be analyzed or fixed.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    pub paths: Vec<PathBuf>,
    pub fix: bool,
    pub format: Option<OutputFormat>,
    pub config_path: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub no_tests: bool,
    pub show_fixes: bool,
    pub plain: bool,
}

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub reports: Vec<FileReport>,
    pub fix: bool,
}

impl CheckOutcome {
    pub fn findings(&self) -> usize {
        self.reports.iter().map(|r| r.diagnostics.len()).sum()
    }

    pub fn failures(&self) -> usize {
        self.reports.iter().filter(|r| r.error.is_some()).count()
    }

    /// 0 when clean or every finding was fixed, 3 for unfixed findings,
    /// 1 when any file failed.
    pub fn exit_code(&self) -> i32 {
        if self.failures() > 0 {
            EXIT_FAILURE
        } else if !self.fix && self.findings() > 0 {
            EXIT_FINDINGS
        } else {
            0
        }
    }
}

/// Run the check command and print its report to stdout.
pub fn handle_check(config: CheckConfig) -> Result<CheckOutcome> {
    let file_config = match &config.config_path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => load_config(),
    };

    let format = config
        .format
        .or_else(|| file_config.default_format().and_then(OutputFormat::parse))
        .unwrap_or(OutputFormat::Text);
    let formatting = formatting_for(&config, &file_config);

    let outcome = run_check(&config, &file_config)?;

    let mut writer = create_writer(
        format,
        Box::new(std::io::stdout()),
        formatting,
        config.show_fixes,
    );
    writer.write_reports(&outcome.reports)?;

    Ok(outcome)
}

/// Discover, analyze and optionally fix files, without printing anything.
pub fn run_check(config: &CheckConfig, file_config: &ErrwrapConfig) -> Result<CheckOutcome> {
    let jobs = config.jobs.unwrap_or_else(|| file_config.jobs());
    let include_tests = !config.no_tests && file_config.include_tests();
    let paths = if config.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        config.paths.clone()
    };

    let files = find_project_files(&paths, &file_config.get_ignore_patterns(), include_tests)
        .context("discovering Go files")?;
    log::info!(
        "analyzing {} file(s) with {} worker(s)",
        files.len(),
        get_worker_count(jobs)
    );

    let mut reports: Vec<FileReport> = if jobs == 1 {
        files.iter().map(|path| check_file(path, config.fix)).collect()
    } else {
        configure_thread_pool(jobs);
        files
            .par_iter()
            .map(|path| check_file(path, config.fix))
            .collect()
    };
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(CheckOutcome {
        reports,
        fix: config.fix,
    })
}

/// Analyze one file. Failures are captured in the report rather than
/// returned, so one bad file does not stop the run.
pub fn check_file(path: &Path, fix: bool) -> FileReport {
    let _span = tracing::debug_span!("check_file", path = %path.display()).entered();

    match analyze_and_fix(path, fix) {
        Ok(report) => report,
        Err(e) => {
            if e.is_per_file() {
                log::warn!("{}: {}", path.display(), e);
            } else {
                log::error!("{}: {}", path.display(), e);
            }
            FileReport::failed(path.to_path_buf(), e)
        }
    }
}

fn analyze_and_fix(path: &Path, fix: bool) -> crate::core::Result<FileReport> {
    let content = io::read_file(path)?;
    let file = analyzers::parse_file(&content, path.to_path_buf())?;
    let diagnostics = WrapErrorPass::new().analyze(&file)?;

    let mut report = FileReport::clean(path.to_path_buf());
    if fix && !diagnostics.is_empty() {
        let fixed = apply_fixes(&file.text, &diagnostics)?;
        io::write_file(path, &fixed)?;
        log::info!("{}: applied {} fix(es)", path.display(), diagnostics.len());
        report.fixed = true;
    }
    report.diagnostics = diagnostics;
    Ok(report)
}

fn formatting_for(config: &CheckConfig, file_config: &ErrwrapConfig) -> FormattingConfig {
    if config.plain {
        return FormattingConfig::plain();
    }
    let from_env = FormattingConfig::from_env();
    match (from_env.color, file_config.use_color()) {
        (ColorMode::Auto, Some(false)) => FormattingConfig::new(ColorMode::Never),
        _ => from_env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    const UNWRAPPED: &str = indoc! {r#"
        package a

        import (
        	"fmt"
        )

        var ErrBad = fmt.Errorf("bad")

        func f() error {
        	if err := g(); err != nil {
        		return ErrBad
        	}
        	return nil
        }

        func g() error { return nil }
    "#};

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn check_config(dir: &TempDir) -> CheckConfig {
        CheckConfig {
            paths: vec![dir.path().to_path_buf()],
            jobs: Some(1),
            ..CheckConfig::default()
        }
    }

    #[test]
    fn test_findings_exit_code() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.go", UNWRAPPED);

        let outcome = run_check(&check_config(&dir), &ErrwrapConfig::default()).unwrap();
        assert_eq!(outcome.findings(), 2);
        assert_eq!(outcome.exit_code(), EXIT_FINDINGS);
    }

    #[test]
    fn test_fix_rewrites_file_and_exits_clean() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.go", UNWRAPPED);

        let config = CheckConfig {
            fix: true,
            ..check_config(&dir)
        };
        let outcome = run_check(&config, &ErrwrapConfig::default()).unwrap();
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.reports[0].fixed);

        let fixed = std::fs::read_to_string(&path).unwrap();
        assert!(fixed.contains("return errors.Wrap(ErrBad, err.Error())"));
        assert!(fixed.contains("\t\"github.com/pkg/errors\"\n"));

        let again = run_check(&check_config(&dir), &ErrwrapConfig::default()).unwrap();
        assert_eq!(again.findings(), 0);
    }

    #[test]
    fn test_parse_failure_is_reported_per_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.go", UNWRAPPED);
        write(&dir, "broken.go", "package a\nfunc {\n");

        let outcome = run_check(&check_config(&dir), &ErrwrapConfig::default()).unwrap();
        assert_eq!(outcome.reports.len(), 2);
        assert_eq!(outcome.failures(), 1);
        assert_eq!(outcome.findings(), 2);
        assert_eq!(outcome.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_missing_import_declaration_fails_file() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "a.go",
            indoc! {r#"
                package a

                var ErrBad error

                func f(g func() error) error {
                	if err := g(); err != nil {
                		return ErrBad
                	}
                	return nil
                }
            "#},
        );

        let outcome = run_check(&check_config(&dir), &ErrwrapConfig::default()).unwrap();
        let report = &outcome.reports[0];
        assert!(report.diagnostics.is_empty());
        assert!(report.error.as_deref().unwrap_or("").contains("import"));
        assert_eq!(outcome.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_no_tests_skips_test_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a_test.go", UNWRAPPED);

        let config = CheckConfig {
            no_tests: true,
            ..check_config(&dir)
        };
        let outcome = run_check(&config, &ErrwrapConfig::default()).unwrap();
        assert!(outcome.reports.is_empty());
        assert_eq!(outcome.exit_code(), 0);
    }
}
