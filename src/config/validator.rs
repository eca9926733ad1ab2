//! Config validator
//!
//! Checks value ranges that serde cannot express. Used by `folio check-config`
//! and at startup (errors fall back to defaults, warnings are logged).

use crate::config::UiConfig;
use crate::core::scroll::ROW_HEIGHT;
use crate::theme::AppTheme;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    UnknownTheme {
        name: String,
    },
    ThresholdUnreachable {
        threshold: u32,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::OutOfRange { .. } | ValidationIssue::UnknownTheme { .. } => {
                ValidationSeverity::Error
            }
            ValidationIssue::ThresholdUnreachable { .. } => ValidationSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::OutOfRange {
                field,
                value,
                expected,
            } => format!("ui.{} = {} is out of range (expected {})", field, value, expected),
            ValidationIssue::UnknownTheme { name } => format!(
                "Unknown theme '{}'. Available: {}",
                name,
                AppTheme::preset_names().join(", ")
            ),
            ValidationIssue::ThresholdUnreachable { threshold } => format!(
                "ui.scroll_threshold = {} ({} rows) is taller than any section at usual terminal sizes; the nav will rarely switch to its scrolled style",
                threshold,
                threshold / ROW_HEIGHT
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

// Sixty rows of scrolling; only very narrow terminals make a section this tall
const MAX_USEFUL_THRESHOLD: u32 = 60 * ROW_HEIGHT;

pub fn validate_ui_config(ui: &UiConfig) -> ValidationResult {
    let mut issues = Vec::new();

    if !(1..=1000).contains(&ui.poll_timeout_ms) {
        issues.push(ValidationIssue::OutOfRange {
            field: "poll_timeout_ms",
            value: ui.poll_timeout_ms.to_string(),
            expected: "1..=1000",
        });
    }

    if ui.scroll_step == 0 {
        issues.push(ValidationIssue::OutOfRange {
            field: "scroll_step",
            value: ui.scroll_step.to_string(),
            expected: "> 0",
        });
    }

    if AppTheme::from_name(&ui.theme).is_none() {
        issues.push(ValidationIssue::UnknownTheme {
            name: ui.theme.clone(),
        });
    }

    if ui.scroll_threshold > MAX_USEFUL_THRESHOLD {
        issues.push(ValidationIssue::ThresholdUnreachable {
            threshold: ui.scroll_threshold,
        });
    }

    ValidationResult { issues }
}

/// Replace values that failed validation with their defaults
///
/// Returns the number of fields changed.
pub fn auto_fix_ui_config(ui: &mut UiConfig, issues: &[ValidationIssue]) -> usize {
    let defaults = UiConfig::default();
    let mut fixed = 0;

    for issue in issues {
        match issue {
            ValidationIssue::OutOfRange { field: "poll_timeout_ms", .. } => {
                ui.poll_timeout_ms = defaults.poll_timeout_ms;
                fixed += 1;
            }
            ValidationIssue::OutOfRange { field: "scroll_step", .. } => {
                ui.scroll_step = defaults.scroll_step;
                fixed += 1;
            }
            ValidationIssue::UnknownTheme { .. } => {
                ui.theme = defaults.theme.clone();
                fixed += 1;
            }
            _ => {}
        }
    }

    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let result = validate_ui_config(&UiConfig::default());
        assert!(result.is_valid());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_detects_errors_and_warnings() {
        let ui = UiConfig {
            poll_timeout_ms: 0,
            scroll_step: 0,
            theme: "neon".to_string(),
            scroll_threshold: 1_000_000,
            ..UiConfig::default()
        };
        let result = validate_ui_config(&ui);
        assert_eq!(result.errors().len(), 3);
        assert_eq!(result.warnings().len(), 1);
        assert!(result.errors()[2].message().contains("neon"));
    }

    #[test]
    fn test_threshold_warning_reports_rows() {
        let ui = UiConfig {
            scroll_threshold: 100 * ROW_HEIGHT,
            ..UiConfig::default()
        };
        let result = validate_ui_config(&ui);
        assert!(result.is_valid());
        assert!(result.warnings()[0].message().contains("(100 rows)"));

        let ui = UiConfig {
            scroll_threshold: 30 * ROW_HEIGHT,
            ..UiConfig::default()
        };
        assert!(!validate_ui_config(&ui).has_warnings());
    }

    #[test]
    fn test_auto_fix_restores_defaults() {
        let mut ui = UiConfig {
            poll_timeout_ms: 5000,
            theme: "neon".to_string(),
            ..UiConfig::default()
        };
        let result = validate_ui_config(&ui);
        let fixed = auto_fix_ui_config(&mut ui, &result.issues);
        assert_eq!(fixed, 2);
        assert!(validate_ui_config(&ui).is_valid());
    }
}
