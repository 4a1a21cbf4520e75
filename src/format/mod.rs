//! Output formatters
//!
//! Renders suite and single-analyzer reports. Nothing in the analytical
//! core depends on this module.

pub mod csv;
pub mod json;
pub mod text;

use crate::analysis::AnalysisReport;
use crate::error::Result;
use crate::suite::SuiteReport;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a full suite run
    fn format_suite(&self, report: &SuiteReport) -> Result<String>;

    /// Format one analyzer's report for one candidate
    fn format_analysis(&self, candidate: &str, report: &AnalysisReport) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        "csv" => Some(Box::new(csv::CsvFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON report".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable summary".to_string(),
        },
        FormatInfo {
            name: "csv".to_string(),
            description: "Series rows for plotting".to_string(),
        },
    ]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("csv").is_some());
        assert!(get_formatter("png").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
        assert!(get_formatter("CSV").is_some());
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), 3);
        for format in &formats {
            let formatter = get_formatter(&format.name).unwrap();
            assert_eq!(formatter.name(), format.name);
        }
    }
}
