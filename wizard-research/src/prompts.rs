//! Prompt construction for the research pipeline
//!
//! Pure functions: given the same input they produce the same prompt text
//! and completion parameters. Preconditions (non-empty vendors, loaded
//! cards) are enforced by the pipeline, not here.

use wizard_core::{ComparisonVendor, VendorSummary};

/// A fully-specified completion request: persona, instruction, and
/// generation parameters sized to the expected payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

const VENDOR_LOOKUP_SYSTEM: &str =
    "You are a helpful assistant that extracts company information from websites. \
     Return only valid JSON.";

const COMPETITOR_SYSTEM: &str =
    "You are a business intelligence expert who identifies market competitors. \
     Return only valid JSON with real, accurate company information.";

const COMPARISON_SYSTEM: &str =
    "You are an expert business analyst who provides detailed vendor comparisons. \
     Return only valid JSON.";

/// Build the prompt that infers a company profile from a URL
///
/// The model answers from its background knowledge; there is no page fetch,
/// so accuracy is bounded by training data rather than a live crawl.
pub fn vendor_lookup(url: &str) -> PromptSpec {
    let user = format!(
        r#"Given this website URL: {url}

Extract the following information about this company/vendor:
- Company name
- Brief description (1-2 sentences)
- Industry/category
- Logo URL (if available from common locations)

Return the information in JSON format:
{{
  "name": "Company Name",
  "description": "Brief description",
  "industry": "Industry type",
  "logo": "logo URL or null"
}}"#
    );

    PromptSpec {
        system: VENDOR_LOOKUP_SYSTEM.to_string(),
        user,
        temperature: 0.3,
        max_tokens: 500,
    }
}

/// Build the prompt that asks for the top 3 competitors of a vendor
pub fn competitor_suggestions(vendor: &VendorSummary) -> PromptSpec {
    let user = format!(
        r#"Based on this company information:
Name: {name}
Description: {description}
Industry: {industry}
URL: {url}

Identify the top 3 direct competitors or alternative vendors in this space. For each competitor, provide:
- Company name
- Brief description (1-2 sentences)
- Website URL (use your knowledge of real companies)
- Industry category

Return ONLY valid JSON in this exact format:
{{
  "competitors": [
    {{
      "name": "Company Name",
      "description": "Brief description",
      "url": "https://company-website.com",
      "industry": "Industry type"
    }}
  ]
}}"#,
        name = vendor.name,
        description = vendor.description,
        industry = vendor.industry.as_deref().unwrap_or("Not specified"),
        url = vendor.url,
    );

    PromptSpec {
        system: COMPETITOR_SYSTEM.to_string(),
        user,
        temperature: 0.7,
        max_tokens: 1000,
    }
}

/// Build the prompt that compares vendors across the selected categories
///
/// Category labels must already be human-readable; id-to-label mapping is
/// the caller's responsibility.
pub fn comparison(vendors: &[ComparisonVendor], category_labels: &[String]) -> PromptSpec {
    let vendor_list = vendors
        .iter()
        .map(|v| format!("- {} ({}): {}", v.name, v.url, v.description))
        .collect::<Vec<_>>()
        .join("\n");
    let categories_list = category_labels.join(", ");

    let user = format!(
        r#"Compare these vendors based on the following research categories:

Vendors:
{vendor_list}

Research Categories: {categories_list}

For each research category, provide detailed analysis for each vendor. Then provide an overall summary and recommendations.

Return the response in the following JSON format:
{{
  "comparisons": [
    {{
      "category": "category name",
      "vendors": {{
        "vendor-id": {{
          "content": "detailed analysis",
          "summary": "brief summary"
        }}
      }}
    }}
  ],
  "overallSummary": "comprehensive summary comparing all vendors",
  "recommendations": ["recommendation 1", "recommendation 2", ...]
}}"#
    );

    PromptSpec {
        system: COMPARISON_SYSTEM.to_string(),
        user,
        temperature: 0.5,
        max_tokens: 4000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> VendorSummary {
        VendorSummary {
            name: "Acme".to_string(),
            description: "Widgets".to_string(),
            industry: None,
            url: "https://acme.test".to_string(),
        }
    }

    #[test]
    fn vendor_lookup_is_deterministic() {
        assert_eq!(vendor_lookup("https://acme.test"), vendor_lookup("https://acme.test"));
    }

    #[test]
    fn vendor_lookup_embeds_url_and_params() {
        let spec = vendor_lookup("https://acme.test");
        assert!(spec.user.contains("https://acme.test"));
        assert!(spec.system.contains("only valid JSON"));
        assert_eq!(spec.temperature, 0.3);
        assert_eq!(spec.max_tokens, 500);
    }

    #[test]
    fn competitor_prompt_defaults_missing_industry() {
        let spec = competitor_suggestions(&summary());
        assert!(spec.user.contains("Industry: Not specified"));
        assert!(spec.user.contains("Name: Acme"));
        assert_eq!(spec.temperature, 0.7);
        assert_eq!(spec.max_tokens, 1000);
    }

    #[test]
    fn comparison_prompt_renders_vendor_bullets_and_labels() {
        let vendors = vec![
            ComparisonVendor {
                id: "1".to_string(),
                name: "Acme".to_string(),
                url: "https://acme.test".to_string(),
                description: "Widgets".to_string(),
            },
            ComparisonVendor {
                id: "2".to_string(),
                name: "Globex".to_string(),
                url: "https://globex.test".to_string(),
                description: "Gadgets".to_string(),
            },
        ];
        let labels = vec!["Pricing".to_string(), "Support".to_string()];

        let spec = comparison(&vendors, &labels);
        assert!(spec.user.contains("- Acme (https://acme.test): Widgets"));
        assert!(spec.user.contains("- Globex (https://globex.test): Gadgets"));
        assert!(spec.user.contains("Research Categories: Pricing, Support"));
        assert_eq!(spec.temperature, 0.5);
        assert_eq!(spec.max_tokens, 4000);
    }
}
