//! Human-readable text output formatter

use crate::analysis::{AnalysisReport, AvalancheReport, BitPredictionReport, RunsReport};
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::suite::SuiteReport;

/// Text formatter - outputs a console summary per candidate
pub struct TextFormatter;

impl TextFormatter {
    fn avalanche_line(report: &AvalancheReport) -> String {
        format!(
            "[Hamming] avg distance = {:.2} bits (ideal ~ {:.2})\n",
            report.mean, report.ideal
        )
    }

    fn bias_line(report: &BitPredictionReport) -> String {
        let s = &report.summary;
        format!(
            "[Bit prediction] min={:.2}  max={:.2}  avg={:.2}  sd=±{:.2}\n",
            s.min, s.max, s.avg, s.sd
        )
    }

    fn runs_line(report: &RunsReport) -> String {
        format!(
            "[Runs test] mean |Z| = {:.3} (closer to 0 looks more random)\n",
            report.mean_abs_z
        )
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable summary"
    }

    fn format_suite(&self, report: &SuiteReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("hash-diffusion suite ({})\n", report.id));
        output.push_str(&format!("Started: {}\n", report.created_at));
        output.push_str(&format!("Source: {}\n", report.source));

        for (name, bundle) in &report.bundles {
            output.push_str(&format!("\n===== {} =====\n", name));
            output.push_str(&Self::avalanche_line(&bundle.avalanche));
            output.push_str(&Self::bias_line(&bundle.bitbias));
            output.push_str(&Self::runs_line(&bundle.runs));
        }

        Ok(output)
    }

    fn format_analysis(&self, candidate: &str, report: &AnalysisReport) -> Result<String> {
        let line = match report {
            AnalysisReport::Avalanche(r) => Self::avalanche_line(r),
            AnalysisReport::BitBias(r) => Self::bias_line(r),
            AnalysisReport::Runs(r) => Self::runs_line(r),
        };
        Ok(format!("===== {} =====\n{}", candidate, line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::small_suite;

    #[test]
    fn test_text_suite() {
        let output = TextFormatter.format_suite(&small_suite()).unwrap();

        assert!(output.contains("hash-diffusion suite"));
        assert!(output.contains("===== sha2-256 ====="));
        assert!(output.contains("[Hamming] avg distance"));
        assert!(output.contains("ideal ~ 128.00"));
        assert!(output.contains("[Bit prediction] min="));
        assert!(output.contains("[Runs test] mean |Z|"));
    }

    #[test]
    fn test_text_analysis() {
        let report = AnalysisReport::Runs(RunsReport {
            mean_abs_z: 0.8123,
            sample_count: 10,
            output_bits: 256,
        });
        let output = TextFormatter.format_analysis("demo", &report).unwrap();
        assert!(output.starts_with("===== demo ====="));
        assert!(output.contains("mean |Z| = 0.812"));
    }

    #[test]
    fn test_text_formatter_info() {
        assert_eq!(TextFormatter.name(), "text");
        assert!(!TextFormatter.description().is_empty());
    }
}
