#![forbid(unsafe_code)]

//! Widget defaults and environment overrides.
//!
//! | variable             | field         | accepted values                 |
//! |----------------------|---------------|---------------------------------|
//! | `SLABEL_LINE_WRAP`   | `line_wrap`   | `1/0/true/false/yes/no/on/off`  |
//! | `SLABEL_ROW_GAP`     | `row_gap`     | unsigned integer (pixels)       |
//! | `SLABEL_WRAP_MODE`   | `wrap_mode`   | `word`, `char`, `word-char`     |
//! | `SLABEL_CELL_WIDTH`  | `cell_width`  | positive integer (pixels)       |
//! | `SLABEL_CELL_HEIGHT` | `cell_height` | positive integer (pixels)       |
//!
//! A value that does not parse keeps the default and is reported as a
//! [`ConfigIssue`].

use std::env;
use std::fmt;

use styled_label_text::{CellMetrics, WrapMode};
use tracing::warn;

pub const ENV_LINE_WRAP: &str = "SLABEL_LINE_WRAP";
pub const ENV_ROW_GAP: &str = "SLABEL_ROW_GAP";
pub const ENV_WRAP_MODE: &str = "SLABEL_WRAP_MODE";
pub const ENV_CELL_WIDTH: &str = "SLABEL_CELL_WIDTH";
pub const ENV_CELL_HEIGHT: &str = "SLABEL_CELL_HEIGHT";

/// Defaults applied to newly created labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelConfig {
    pub line_wrap: bool,
    pub row_gap: u32,
    pub wrap_mode: WrapMode,
    /// Cell width for [`CellMetrics`].
    pub cell_width: u32,
    /// Cell height for [`CellMetrics`].
    pub cell_height: u32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            line_wrap: false,
            row_gap: 0,
            wrap_mode: WrapMode::WordChar,
            cell_width: 1,
            cell_height: 1,
        }
    }
}

/// An environment value that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub variable: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?} (expected {})", self.variable, self.value, self.expected)
    }
}

impl LabelConfig {
    #[must_use]
    pub fn line_wrap(mut self, line_wrap: bool) -> Self {
        self.line_wrap = line_wrap;
        self
    }

    #[must_use]
    pub fn row_gap(mut self, row_gap: u32) -> Self {
        self.row_gap = row_gap;
        self
    }

    #[must_use]
    pub fn wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    /// Set the metrics cell size. Zero is raised to one.
    #[must_use]
    pub fn cell_size(mut self, width: u32, height: u32) -> Self {
        self.cell_width = width.max(1);
        self.cell_height = height.max(1);
        self
    }

    /// Metrics for the configured cell size.
    pub fn metrics(&self) -> CellMetrics {
        CellMetrics::new(self.cell_width, self.cell_height)
    }

    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok()).0
    }

    /// Read overrides through a custom lookup (for tests).
    ///
    /// Every rejected value is logged at `warn` and returned alongside the
    /// config.
    pub fn from_env_with<F>(get: F) -> (Self, Vec<ConfigIssue>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut issues = Vec::new();
        let mut reject = |variable: &'static str, value: String, expected: &'static str| {
            let issue = ConfigIssue {
                variable,
                value,
                expected,
            };
            warn!(%issue, "ignoring invalid label configuration");
            issues.push(issue);
        };

        if let Some(value) = get(ENV_LINE_WRAP) {
            match parse_bool(&value) {
                Some(parsed) => config.line_wrap = parsed,
                None => reject(ENV_LINE_WRAP, value, "a boolean"),
            }
        }

        if let Some(value) = get(ENV_ROW_GAP) {
            match value.trim().parse::<u32>() {
                Ok(parsed) => config.row_gap = parsed,
                Err(_) => reject(ENV_ROW_GAP, value, "an unsigned integer"),
            }
        }

        if let Some(value) = get(ENV_WRAP_MODE) {
            match WrapMode::from_name(&value) {
                Some(parsed) => config.wrap_mode = parsed,
                None => reject(ENV_WRAP_MODE, value, "word, char or word-char"),
            }
        }

        if let Some(value) = get(ENV_CELL_WIDTH) {
            match parse_positive(&value) {
                Some(parsed) => config.cell_width = parsed,
                None => reject(ENV_CELL_WIDTH, value, "a positive integer"),
            }
        }

        if let Some(value) = get(ENV_CELL_HEIGHT) {
            match parse_positive(&value) {
                Some(parsed) => config.cell_height = parsed,
                None => reject(ENV_CELL_HEIGHT, value, "a positive integer"),
            }
        }

        (config, issues)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|&n| n > 0)
}
