//! Strict parsing of model responses into domain shapes
//!
//! The prompts instruct the model to return only valid JSON, so the raw text
//! must be exactly one JSON document. No extraction from surrounding prose
//! or code fences: a response the model wrapped in commentary is malformed,
//! and surfacing that is better than guessing at its contents.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wizard_core::{ComparisonResult, CompetitorSuggestion, WizardError, WizardResult};

/// Wire shape of a suggest-competitors response
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitorsPayload {
    pub competitors: Vec<CompetitorSuggestion>,
}

/// Wire shape of a compare-vendors response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPayload {
    pub comparisons: Vec<ComparisonResult>,
    pub overall_summary: String,
    pub recommendations: Vec<String>,
}

/// Parse a raw completion response as exactly one JSON document of shape `T`
///
/// Fails with `MalformedResponse` carrying the raw text when the document is
/// invalid JSON or is missing/mistyping required keys. Never coerces a bad
/// payload into defaults.
pub fn parse_response<T: DeserializeOwned>(raw: &str) -> WizardResult<T> {
    serde_json::from_str(raw).map_err(|e| WizardError::malformed(e.to_string(), raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wizard_core::VendorProfile;

    const PROFILE_JSON: &str = r#"{
        "name": "Acme",
        "description": "Widgets for every occasion",
        "industry": "Manufacturing",
        "logo": null
    }"#;

    #[test]
    fn parses_vendor_profile() {
        let profile: VendorProfile = parse_response(PROFILE_JSON).unwrap();
        assert_eq!(profile.name, "Acme");
        assert_eq!(profile.industry.as_deref(), Some("Manufacturing"));
        assert!(profile.logo.is_none());
    }

    #[test]
    fn parsing_is_idempotent() {
        let first: VendorProfile = parse_response(PROFILE_JSON).unwrap();
        let second: VendorProfile = parse_response(PROFILE_JSON).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn truncated_json_is_malformed() {
        let result: WizardResult<VendorProfile> = parse_response(r#"{"name": "Acme", "desc"#);
        match result {
            Err(WizardError::MalformedResponse { raw, .. }) => {
                assert_eq!(raw, r#"{"name": "Acme", "desc"#);
            }
            other => panic!("expected MalformedResponse, got {:?}", other.err()),
        }
    }

    #[test]
    fn prose_around_json_is_malformed() {
        let raw = format!("Here is the JSON you asked for:\n{}", PROFILE_JSON);
        let result: WizardResult<VendorProfile> = parse_response(&raw);
        assert!(matches!(result, Err(WizardError::MalformedResponse { .. })));
    }

    #[test]
    fn missing_required_key_is_malformed() {
        let result: WizardResult<VendorProfile> =
            parse_response(r#"{"name": "Acme", "industry": null, "logo": null}"#);
        assert!(matches!(result, Err(WizardError::MalformedResponse { .. })));
    }

    #[test]
    fn competitors_must_be_a_sequence() {
        let result: WizardResult<CompetitorsPayload> =
            parse_response(r#"{"competitors": {"name": "Initech"}}"#);
        assert!(matches!(result, Err(WizardError::MalformedResponse { .. })));
    }

    #[test]
    fn comparison_vendors_must_be_a_mapping() {
        let raw = r#"{
            "comparisons": [{"category": "Pricing", "vendors": ["not", "a", "map"]}],
            "overallSummary": "s",
            "recommendations": []
        }"#;
        let result: WizardResult<ComparisonPayload> = parse_response(raw);
        assert!(matches!(result, Err(WizardError::MalformedResponse { .. })));
    }

    #[test]
    fn parses_comparison_payload() {
        let raw = r#"{
            "comparisons": [
                {
                    "category": "Pricing",
                    "vendors": {
                        "1": {"content": "Flat rate", "summary": "Cheap"}
                    }
                }
            ],
            "overallSummary": "Acme is cheaper",
            "recommendations": ["Pick Acme for budget deployments"]
        }"#;
        let payload: ComparisonPayload = parse_response(raw).unwrap();
        assert_eq!(payload.comparisons.len(), 1);
        assert_eq!(payload.comparisons[0].category, "Pricing");
        assert_eq!(payload.comparisons[0].vendors["1"].summary, "Cheap");
        assert_eq!(payload.recommendations.len(), 1);
    }
}
