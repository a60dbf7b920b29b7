//! Research pipeline orchestrator
//!
//! Composes prompt builder → completion client → parser for each of the
//! three wizard operations. The pipeline is stateless: every input arrives
//! as an explicit argument, callers may run operations concurrently, and a
//! late result for a vendor the caller no longer tracks is simply dropped by
//! the caller.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use wizard_core::{
    ComparisonVendor, CompetitorSuggestion, FinalReport, VendorProfile, VendorSummary,
    WizardError, WizardResult,
};

use crate::client::CompletionClient;
use crate::parser::{self, ComparisonPayload, CompetitorsPayload};
use crate::prompts;

/// Upper bound on suggestions returned by `suggest_competitors`
pub const MAX_COMPETITOR_SUGGESTIONS: usize = 3;

/// Orchestrator for the three research operations
///
/// Holds only the completion client; cheap to clone and safe to share
/// across concurrent callers. No operation retries, caches, or keeps state
/// between calls.
#[derive(Clone)]
pub struct ResearchPipeline {
    client: Arc<dyn CompletionClient>,
}

impl ResearchPipeline {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Infer a vendor profile from a website URL
    ///
    /// One completion round trip; client and parser failures propagate
    /// unchanged. The returned profile always carries all four fields.
    #[instrument(skip(self))]
    pub async fn resolve_vendor(&self, url: &str) -> WizardResult<VendorProfile> {
        if url.trim().is_empty() {
            return Err(WizardError::invalid_argument("url is required"));
        }

        let spec = prompts::vendor_lookup(url);
        let raw = self.client.complete(&spec).await?;
        parser::parse_response(&raw)
    }

    /// Suggest up to 3 competitors for a loaded vendor
    ///
    /// Requires a non-empty name and description; the caller must only
    /// invoke this for a vendor whose lookup has completed. Truncates any
    /// surplus the model emits but never pads. Further truncation to the
    /// session's free slots is the caller's job.
    #[instrument(skip(self, vendor), fields(vendor = %vendor.name))]
    pub async fn suggest_competitors(
        &self,
        vendor: &VendorSummary,
    ) -> WizardResult<Vec<CompetitorSuggestion>> {
        if vendor.name.trim().is_empty() || vendor.description.trim().is_empty() {
            return Err(WizardError::invalid_argument(
                "vendor name and description are required",
            ));
        }

        let spec = prompts::competitor_suggestions(vendor);
        let raw = self.client.complete(&spec).await?;
        let payload: CompetitorsPayload = parser::parse_response(&raw)?;

        let mut competitors = payload.competitors;
        competitors.truncate(MAX_COMPETITOR_SUGGESTIONS);
        Ok(competitors)
    }

    /// Compare vendors across the selected categories into a final report
    ///
    /// Both inputs are checked before any network call so an unusable
    /// request never spends a completion. `generated_at` comes from the
    /// local clock at the moment the parsed payload is received.
    #[instrument(skip(self, vendors, category_labels), fields(vendors = vendors.len(), categories = category_labels.len()))]
    pub async fn compare_vendors(
        &self,
        vendors: &[ComparisonVendor],
        category_labels: &[String],
    ) -> WizardResult<FinalReport> {
        if vendors.is_empty() {
            return Err(WizardError::invalid_argument("at least one vendor is required"));
        }
        if category_labels.is_empty() {
            return Err(WizardError::invalid_argument(
                "at least one research category is required",
            ));
        }

        let spec = prompts::comparison(vendors, category_labels);
        let raw = self.client.complete(&spec).await?;
        let payload: ComparisonPayload = parser::parse_response(&raw)?;

        info!(
            comparisons = payload.comparisons.len(),
            recommendations = payload.recommendations.len(),
            "comparison report received"
        );

        Ok(FinalReport {
            overall_summary: payload.overall_summary,
            recommendations: payload.recommendations,
            comparison_data: payload.comparisons,
            generated_at: Utc::now(),
        })
    }
}
