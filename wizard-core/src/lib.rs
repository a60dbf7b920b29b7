//! Core types for the Vendor Comparison Wizard
//!
//! This crate defines the shared data structures used across the wizard
//! backend, including vendor representations, the research category catalog,
//! comparison report shapes, and the service-wide error type.

pub mod catalog;
pub mod error;
pub mod report;
pub mod vendor;

pub use catalog::{category_label, ResearchCategory, RESEARCH_CATEGORIES};
pub use error::{WizardError, WizardResult};
pub use report::{ComparisonResult, FinalReport, VendorAnalysis};
pub use vendor::{
    ComparisonVendor, CompetitorSuggestion, VendorCard, VendorProfile, VendorStatus, VendorSummary,
    MAX_VENDORS,
};
