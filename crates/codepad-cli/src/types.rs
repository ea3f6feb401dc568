use std::path::PathBuf;

use codepad_model::{ValidationReport, ViewportMode};

/// Result of `codepad preview`.
pub struct PreviewResult {
    pub out: PathBuf,
    pub bytes: usize,
    pub viewport: ViewportMode,
}

/// Result of `codepad check`.
pub struct CheckResult {
    pub reports: Vec<ValidationReport>,
    pub report_path: Option<PathBuf>,
}

impl CheckResult {
    pub fn has_errors(&self) -> bool {
        codepad_validate::has_validation_errors(&self.reports)
    }
}
