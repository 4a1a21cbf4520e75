//! CSV series output formatter
//!
//! One row per data point: `candidate,test,index,value`. Avalanche rows
//! index samples in generation order, bit-bias rows index bit positions,
//! and the runs summary is a single row at index 0.

use crate::analysis::{AnalysisReport, AvalancheReport, BitPredictionReport, RunsReport};
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::suite::SuiteReport;

/// CSV formatter - long-form series for external plotting
pub struct CsvFormatter;

const HEADER: &str = "candidate,test,index,value\n";

/// Quote a field if it contains a delimiter, quote or newline
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_avalanche(output: &mut String, name: &str, report: &AvalancheReport) {
    for (i, d) in report.distances.iter().enumerate() {
        output.push_str(&format!("{},avalanche,{},{}\n", name, i, d));
    }
}

fn push_bias(output: &mut String, name: &str, report: &BitPredictionReport) {
    for (i, p) in report.probabilities.iter().enumerate() {
        output.push_str(&format!("{},bit_bias,{},{}\n", name, i, p));
    }
}

fn push_runs(output: &mut String, name: &str, report: &RunsReport) {
    output.push_str(&format!("{},runs,0,{}\n", name, report.mean_abs_z));
}

impl OutputFormatter for CsvFormatter {
    fn name(&self) -> &str {
        "csv"
    }

    fn description(&self) -> &str {
        "Series rows for plotting"
    }

    fn format_suite(&self, report: &SuiteReport) -> Result<String> {
        let mut output = String::from(HEADER);
        for (name, bundle) in &report.bundles {
            let name = escape(name);
            push_avalanche(&mut output, &name, &bundle.avalanche);
            push_bias(&mut output, &name, &bundle.bitbias);
            push_runs(&mut output, &name, &bundle.runs);
        }
        Ok(output)
    }

    fn format_analysis(&self, candidate: &str, report: &AnalysisReport) -> Result<String> {
        let mut output = String::from(HEADER);
        let name = escape(candidate);
        match report {
            AnalysisReport::Avalanche(r) => push_avalanche(&mut output, &name, r),
            AnalysisReport::BitBias(r) => push_bias(&mut output, &name, r),
            AnalysisReport::Runs(r) => push_runs(&mut output, &name, r),
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::small_suite;

    #[test]
    fn test_csv_suite_row_counts() {
        let output = CsvFormatter.format_suite(&small_suite()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "candidate,test,index,value");
        // header + 10 avalanche + 256 bit positions + 1 runs summary
        assert_eq!(lines.len(), 1 + 10 + 256 + 1);
        assert_eq!(lines.iter().filter(|l| l.contains(",runs,")).count(), 1);
    }

    #[test]
    fn test_csv_preserves_generation_order() {
        let report = AnalysisReport::Avalanche(AvalancheReport {
            distances: vec![3, 1, 2],
            mean: 2.0,
            output_bits: 8,
            ideal: 4.0,
        });
        let output = CsvFormatter.format_analysis("toy", &report).unwrap();
        assert_eq!(
            output,
            "candidate,test,index,value\ntoy,avalanche,0,3\ntoy,avalanche,1,1\ntoy,avalanche,2,2\n"
        );
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("sha2-256"), "sha2-256");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
