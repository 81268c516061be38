use crate::diagnostics::Diagnostic;
use crate::formatting::{ColoredFormatter, FormattingConfig, OutputFormatter};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Outcome of analyzing one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Set when the file could not be analyzed or fixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Fixes were written back to the file.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fixed: bool,
}

impl FileReport {
    pub fn clean(path: PathBuf) -> Self {
        Self {
            path,
            diagnostics: Vec::new(),
            error: None,
            fixed: false,
        }
    }

    pub fn failed(path: PathBuf, error: impl ToString) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::clean(path)
        }
    }
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// `path:line:col: message` lines, the layout `go vet` uses.
pub struct TextWriter<W: Write> {
    writer: W,
    formatter: ColoredFormatter,
    show_fixes: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: ColoredFormatter::new(formatting),
            show_fixes: false,
        }
    }

    pub fn with_fixes(mut self, show_fixes: bool) -> Self {
        self.show_fixes = show_fixes;
        self
    }

    fn write_diagnostic(&mut self, report: &FileReport, diagnostic: &Diagnostic) -> anyhow::Result<()> {
        let location = format!("{}:{}", report.path.display(), diagnostic.position);
        let status = if report.fixed {
            format!(" {}", self.formatter.success("(fixed)"))
        } else {
            String::new()
        };
        writeln!(
            self.writer,
            "{}: {}{}",
            self.formatter.location(&location),
            diagnostic.message,
            status
        )?;

        if self.show_fixes {
            for fix in &diagnostic.suggested_fixes {
                writeln!(self.writer, "    {}", self.formatter.dim(&fix.message))?;
            }
        }
        Ok(())
    }

    fn write_summary(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        let findings: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
        let failures = reports.iter().filter(|r| r.error.is_some()).count();
        let fixed_files = reports.iter().filter(|r| r.fixed).count();

        let mut line = format!(
            "{} file(s) checked, {} finding(s)",
            reports.len(),
            findings
        );
        if fixed_files > 0 {
            line.push_str(&format!(", {fixed_files} file(s) fixed"));
        }
        if failures > 0 {
            line.push_str(&format!(", {failures} file(s) failed"));
        }
        writeln!(self.writer, "{}", self.formatter.dim(&line))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        for report in reports {
            if let Some(error) = &report.error {
                writeln!(
                    self.writer,
                    "{}: {}",
                    self.formatter.location(&report.path.display().to_string()),
                    self.formatter.error(error)
                )?;
            }
            for diagnostic in &report.diagnostics {
                self.write_diagnostic(report, diagnostic)?;
            }
        }
        self.write_summary(reports)
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
    show_fixes: bool,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Text => Box::new(TextWriter::new(writer, formatting).with_fixes(show_fixes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::diagnostics::{SuggestedFix, TextEdit};
    use pretty_assertions::assert_eq;

    fn report() -> FileReport {
        FileReport {
            path: PathBuf::from("pkg/a.go"),
            diagnostics: vec![Diagnostic {
                analyzer: "wrap_error",
                position: Position {
                    offset: 40,
                    line: 5,
                    column: 3,
                },
                message: "unwrapped error found 'return ErrX'".to_string(),
                suggested_fixes: vec![SuggestedFix {
                    message: "should replace 'return ErrX' with 'return errors.Wrap(ErrX, err.Error())'"
                        .to_string(),
                    edits: vec![TextEdit::new(40, 51, "return errors.Wrap(ErrX, err.Error())")],
                }],
            }],
            error: None,
            fixed: false,
        }
    }

    #[test]
    fn test_text_writer_layout() {
        let mut buf = Vec::new();
        {
            let mut writer = TextWriter::new(&mut buf, FormattingConfig::plain()).with_fixes(true);
            writer
                .write_reports(&[report(), FileReport::failed(PathBuf::from("b.go"), "boom")])
                .unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "pkg/a.go:5:3: unwrapped error found 'return ErrX'\n    \
             should replace 'return ErrX' with 'return errors.Wrap(ErrX, err.Error())'\n\
             b.go: boom\n\
             2 file(s) checked, 1 finding(s), 1 file(s) failed\n"
        );
    }

    #[test]
    fn test_json_writer_shape() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_reports(&[report()]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let diagnostic = &value[0]["diagnostics"][0];
        assert_eq!(value[0]["path"], "pkg/a.go");
        assert_eq!(diagnostic["analyzer"], "wrap_error");
        assert_eq!(diagnostic["position"]["line"], 5);
        assert_eq!(diagnostic["suggested_fixes"][0]["edits"][0]["start"], 40);
        assert!(value[0].get("error").is_none());
        assert!(value[0].get("fixed").is_none());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("sarif"), None);
    }
}
