//! Plain-text rendering of classification results.
//!
//! The renderer is a pure function of a [`Classification`] and a
//! [`ReportConfig`]; it performs no I/O and holds no state, so a host can
//! route the output to whatever surface it has.

use crate::classifier::Classification;
use numscope_core::ReportConfig;
use std::fmt::Write;

/// Render a classification as a human-readable report.
///
/// With the default config the report is a header line followed by one
/// indented line per matched label, in registration order. A value with no
/// matches renders a single "no special properties" line.
#[must_use]
pub fn render(classification: &Classification, config: &ReportConfig) -> String {
    let labels = classification.labels();

    if labels.is_empty() && !config.include_non_matches {
        return if config.show_value {
            format!("{} has no special properties", classification.value())
        } else {
            "No special properties".to_string()
        };
    }

    let mut out = String::new();
    if config.show_value {
        let _ = writeln!(out, "Properties of {}:", classification.value());
    } else {
        out.push_str("Properties:\n");
    }

    if labels.is_empty() {
        out.push_str("  (none)\n");
    } else {
        for label in &labels {
            let _ = writeln!(out, "  - {label}");
        }
    }

    if config.include_non_matches {
        let unmatched: Vec<&str> = classification
            .outcomes()
            .iter()
            .filter(|outcome| !outcome.matched)
            .map(|outcome| outcome.label.as_str())
            .collect();

        if !unmatched.is_empty() {
            out.push_str("Not matched:\n");
            for label in &unmatched {
                let _ = writeln!(out, "  - {label}");
            }
        }
    }

    // Reports are single values, not line streams
    out.truncate(out.trim_end().len());
    out
}
