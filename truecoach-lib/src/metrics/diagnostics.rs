/// Receives non-fatal findings made while resolving metrics.
pub trait Diagnostics: Send + Sync {
    /// A sample belongs to an assessment whose unit is outside the known vocabulary.
    ///
    /// Called once per affected sample.
    fn unsupported_unit(&self, assessment_id: u64, unit: &str);
}

/// Forwards diagnostics to the `log` facade as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn unsupported_unit(&self, assessment_id: u64, unit: &str) {
        log::warn!(target: super::LOG_TARGET, "unsupported unit '{unit}' for assessment {assessment_id}");
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn unsupported_unit(&self, _assessment_id: u64, _unit: &str) {}
}
