//! JSON validation report writer.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use codepad_model::{LanguageRole, RuleResult, ValidationReport};

const REPORT_SCHEMA: &str = "codepad.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub reports: Vec<FileReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct FileReportSummary {
    pub file: String,
    pub role: LanguageRole,
    pub total: usize,
    pub passed: usize,
    pub score: f64,
    pub results: Vec<RuleResult>,
}

/// Write the aggregated validation report as pretty-printed JSON to
/// `<output_dir>/validation_report.json`, creating the directory if needed.
pub fn write_validation_report_json(
    output_dir: &Path,
    reports: &[ValidationReport],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        reports: reports
            .iter()
            .map(|report| FileReportSummary {
                file: report.file_name.clone(),
                role: report.role,
                total: report.total(),
                passed: report.passed_count(),
                score: report.score(),
                results: report.results.clone(),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
