//! Research pipeline for the Vendor Comparison Wizard
//!
//! This crate turns a vendor URL into a company profile, a loaded vendor
//! into competitor suggestions, and a vendor list plus category labels into
//! a structured comparison report, each via a single OpenAI completion call.

pub mod client;
pub mod parser;
pub mod pipeline;
pub mod prompts;

pub use client::{CompletionClient, OpenAiCompletion};
pub use parser::{ComparisonPayload, CompetitorsPayload};
pub use pipeline::{ResearchPipeline, MAX_COMPETITOR_SUGGESTIONS};
pub use prompts::PromptSpec;
