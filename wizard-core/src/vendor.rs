//! Vendor representations shared between the pipeline and its hosts

use serde::{Deserialize, Serialize};

/// Maximum number of vendors a single wizard session may hold
pub const MAX_VENDORS: usize = 4;

/// Company details inferred from a URL by the resolve-vendor operation
///
/// Ephemeral: exists only in the caller's response, never persisted. A parse
/// either yields all four fields (industry/logo may be null) or fails; the
/// pipeline never returns a partially-typed profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub name: String,
    pub description: String,
    pub industry: Option<String>,
    pub logo: Option<String>,
}

/// Lifecycle of a vendor card in the wizard UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    Pending,
    Loading,
    Loaded,
    Error,
}

/// A vendor under comparison, as tracked by a wizard session
///
/// Owned and mutated by the session layer, not the pipeline. The id is an
/// opaque string whose uniqueness is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorCard {
    pub id: String,
    pub url: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub status: VendorStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl VendorCard {
    /// Create a card for a freshly submitted URL, pending resolution
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            name: String::new(),
            description: String::new(),
            logo: None,
            industry: None,
            status: VendorStatus::Loading,
            error_message: None,
        }
    }

    /// Apply a resolved profile, moving the card to `Loaded`
    pub fn resolve(&mut self, profile: VendorProfile) {
        self.name = profile.name;
        self.description = profile.description;
        self.industry = profile.industry;
        self.logo = profile.logo;
        self.status = VendorStatus::Loaded;
        self.error_message = None;
    }

    /// Record a resolution failure, moving the card to `Error`
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = VendorStatus::Error;
        self.error_message = Some(message.into());
    }
}

/// Input row for the compare-vendors operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonVendor {
    pub id: String,
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Input to the suggest-competitors operation
///
/// A loaded vendor's identifying details, without session bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSummary {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub industry: Option<String>,
    pub url: String,
}

/// A competitor proposed by the suggest-competitors operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorSuggestion {
    pub name: String,
    pub description: String,
    pub url: String,
    pub industry: String,
}
