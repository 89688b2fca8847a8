use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level lagstat configuration (`lagstat.toml`).
///
/// Every section and field is optional; command-line flags override it.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LagstatConfig {
    /// ACF/PACF settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// AR fitting settings.
    #[serde(default)]
    pub ar: ArToml,

    /// Smoothing settings.
    #[serde(default)]
    pub smoothing: SmoothingToml,
}

impl LagstatConfig {
    /// Reads and parses `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Number of lags; `floor(10 * log10(n))` when unset.
    #[serde(default)]
    pub max_lags: Option<usize>,
    #[serde(default = "default_pacf_method")]
    pub pacf_method: String,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            max_lags: None,
            pacf_method: default_pacf_method(),
        }
    }
}

fn default_pacf_method() -> String {
    "yw".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArToml {
    #[serde(default = "default_ar_order")]
    pub order: usize,
    #[serde(default = "default_ar_length")]
    pub length: usize,
    /// Gaussian innovation seed; zero innovations when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ArToml {
    fn default() -> Self {
        Self {
            order: default_ar_order(),
            length: default_ar_length(),
            seed: None,
        }
    }
}

fn default_ar_order() -> usize {
    1
}
fn default_ar_length() -> usize {
    1500
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothingToml {
    #[serde(default = "default_window")]
    pub ma_window: usize,
    #[serde(default = "default_window")]
    pub ema_span: usize,
    #[serde(default)]
    pub wilder: bool,
    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,
    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,
    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,
}

impl Default for SmoothingToml {
    fn default() -> Self {
        Self {
            ma_window: default_window(),
            ema_span: default_window(),
            wilder: false,
            macd_fast: default_macd_fast(),
            macd_slow: default_macd_slow(),
            macd_signal: default_macd_signal(),
        }
    }
}

fn default_window() -> usize {
    10
}
fn default_macd_fast() -> usize {
    12
}
fn default_macd_slow() -> usize {
    26
}
fn default_macd_signal() -> usize {
    9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config: LagstatConfig = toml::from_str("").unwrap();
        assert_eq!(config.analysis.max_lags, None);
        assert_eq!(config.analysis.pacf_method, "yw");
        assert_eq!(config.ar.order, 1);
        assert_eq!(config.ar.length, 1500);
        assert_eq!(config.ar.seed, None);
        assert_eq!(config.smoothing.ma_window, 10);
        assert_eq!(config.smoothing.ema_span, 10);
        assert!(!config.smoothing.wilder);
        assert_eq!(
            (
                config.smoothing.macd_fast,
                config.smoothing.macd_slow,
                config.smoothing.macd_signal
            ),
            (12, 26, 9)
        );
    }

    #[test]
    fn partial_sections() {
        let config: LagstatConfig = toml::from_str(
            r#"
            [analysis]
            max_lags = 12
            pacf_method = "mle"

            [ar]
            order = 3
            seed = 42

            [smoothing]
            wilder = true
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.max_lags, Some(12));
        assert_eq!(config.analysis.pacf_method, "mle");
        assert_eq!(config.ar.order, 3);
        assert_eq!(config.ar.length, 1500);
        assert_eq!(config.ar.seed, Some(42));
        assert!(config.smoothing.wilder);
        assert_eq!(config.smoothing.ema_span, 10);
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<LagstatConfig, _> = toml::from_str("[ar]\nlags = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<LagstatConfig, _> = toml::from_str("[spectral]\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_without_path_is_default() {
        let config = LagstatConfig::load(None).unwrap();
        assert_eq!(config.ar.order, 1);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("lagstat.toml");
        std::fs::write(&path, "[smoothing]\nma_window = 4\n").unwrap();
        let config = LagstatConfig::load(Some(&path)).unwrap();
        assert_eq!(config.smoothing.ma_window, 4);
    }

    #[test]
    fn load_missing_file_names_path() {
        let err = LagstatConfig::load(Some(Path::new("/nonexistent/lagstat.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/lagstat.toml"));
    }
}
