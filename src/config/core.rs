use serde::{Deserialize, Serialize};

/// Root configuration structure for errwrap
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrwrapConfig {
    /// Ignore patterns
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,

    /// Which files are analyzed and how
    #[serde(default)]
    pub analysis: Option<AnalysisSettings>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl ErrwrapConfig {
    /// Get ignore patterns from configuration
    ///
    /// # Example
    ///
    /// ```
    /// use errwrap::config::ErrwrapConfig;
    ///
    /// let config = ErrwrapConfig::default();
    /// assert!(config.get_ignore_patterns().is_empty());
    /// ```
    pub fn get_ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .as_ref()
            .map(|ig| ig.patterns.clone())
            .unwrap_or_default()
    }

    pub fn include_tests(&self) -> bool {
        self.analysis
            .as_ref()
            .and_then(|a| a.include_tests)
            .unwrap_or(true)
    }

    /// Worker count from the config file; 0 means one per core.
    pub fn jobs(&self) -> usize {
        self.analysis.as_ref().and_then(|a| a.jobs).unwrap_or(0)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreConfig {
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Analyze `_test.go` files (default: true)
    #[serde(default)]
    pub include_tests: Option<bool>,
    /// Parallel workers (default: 0, one per core)
    #[serde(default)]
    pub jobs: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
