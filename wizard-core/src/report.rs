//! Comparison report shapes produced by the research pipeline

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One vendor×category analysis cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorAnalysis {
    pub content: String,
    pub summary: String,
}

/// Per-category analysis across all vendors, keyed by vendor id
///
/// The pipeline does not validate that the map's keys reference vendors the
/// caller still tracks; unknown ids simply fail to render downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub category: String,
    pub vendors: BTreeMap<String, VendorAnalysis>,
}

/// The aggregate comparison report returned by compare-vendors
///
/// `generated_at` is assigned from the orchestrator's local clock when the
/// parsed payload is received, never taken from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReport {
    pub overall_summary: String,
    pub recommendations: Vec<String>,
    pub comparison_data: Vec<ComparisonResult>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_wire_format_is_camel_case() {
        let report = FinalReport {
            overall_summary: "summary".to_string(),
            recommendations: vec!["pick Acme".to_string()],
            comparison_data: Vec::new(),
            generated_at: Utc::now(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["overallSummary"], "summary");
        assert!(json.get("comparisonData").is_some());
        assert!(json.get("generatedAt").is_some());
    }
}
