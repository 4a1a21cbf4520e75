//! JSON output formatter

use crate::analysis::AnalysisReport;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::suite::SuiteReport;
use serde::Serialize;

/// JSON formatter - outputs full reports as pretty-printed JSON
pub struct JsonFormatter;

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    candidate: &'a str,
    report: &'a AnalysisReport,
}

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON report"
    }

    fn format_suite(&self, report: &SuiteReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn format_analysis(&self, candidate: &str, report: &AnalysisReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(&AnalysisOutput { candidate, report })?)
    }
}
