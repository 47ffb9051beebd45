//! Prometheus metrics
//!
//! The recorder is global, so it is installed at most once per process and
//! every router shares the same handle.

use anyhow::Result;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use crate::services::assessment::ASSESSMENT_CATEGORIES;
use prakriti_shared::{RiskFinding, Severity};

/// Label for categories outside the assessment set; keeps series bounded
pub const CUSTOM_CATEGORY_LABEL: &str = "custom";

static PROMETHEUS: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder, or return the existing handle
pub fn init_metrics() -> Result<PrometheusHandle> {
    PROMETHEUS
        .get_or_try_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))
        })
        .cloned()
}

/// Render the current metrics in Prometheus text format
pub fn render() -> String {
    PROMETHEUS.get().map(|handle| handle.render()).unwrap_or_default()
}

pub fn record_assessment() {
    counter!("assessments_total").increment(1);
}

/// Count risk findings by severity
pub fn record_risk_findings(findings: &[RiskFinding]) {
    for severity in [Severity::Low, Severity::Moderate, Severity::High] {
        let count = findings.iter().filter(|f| f.severity == severity).count() as u64;
        if count > 0 {
            counter!("risk_findings_total", "severity" => severity.as_str()).increment(count);
        }
    }
}

/// Metric label for a category; caller-chosen names collapse into one value
pub fn category_label(category: &str) -> &'static str {
    ASSESSMENT_CATEGORIES
        .iter()
        .copied()
        .find(|known| *known == category)
        .unwrap_or(CUSTOM_CATEGORY_LABEL)
}

pub fn record_data_write(category: &str) {
    counter!("data_writes_total", "category" => category_label(category)).increment(1);
}
