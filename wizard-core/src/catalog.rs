//! Static catalog of research categories
//!
//! Read-only reference data. The pipeline itself only ever sees
//! human-readable labels; hosts that track category ids use
//! [`category_label`] to map before invoking compare-vendors.

use serde::Serialize;

/// A named axis of comparison drawn from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResearchCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The fixed comparison-criteria catalog offered by the wizard
pub const RESEARCH_CATEGORIES: &[ResearchCategory] = &[
    ResearchCategory {
        id: "executive-overview",
        label: "Executive Overview",
        description: "High-level company overview, mission, and key differentiators",
        icon: "📋",
    },
    ResearchCategory {
        id: "technology-stack",
        label: "Technology Stack",
        description: "Technical infrastructure, platforms, and integrations",
        icon: "💻",
    },
    ResearchCategory {
        id: "services",
        label: "Services & Products",
        description: "Core offerings, features, and capabilities",
        icon: "🎯",
    },
    ResearchCategory {
        id: "customer-reviews",
        label: "Customer Reviews",
        description: "User feedback, ratings, and testimonials",
        icon: "⭐",
    },
    ResearchCategory {
        id: "pricing",
        label: "Pricing",
        description: "Pricing models, plans, and cost structure",
        icon: "💰",
    },
    ResearchCategory {
        id: "market-position",
        label: "Market Position",
        description: "Industry standing, market share, and competitive landscape",
        icon: "📊",
    },
    ResearchCategory {
        id: "security-compliance",
        label: "Security & Compliance",
        description: "Security measures, certifications, and regulatory compliance",
        icon: "🔒",
    },
    ResearchCategory {
        id: "customer-support",
        label: "Customer Support",
        description: "Support channels, SLAs, and customer success programs",
        icon: "💬",
    },
    ResearchCategory {
        id: "scalability",
        label: "Scalability",
        description: "Growth capacity, performance, and enterprise readiness",
        icon: "📈",
    },
    ResearchCategory {
        id: "integrations",
        label: "Integrations",
        description: "Third-party integrations and API capabilities",
        icon: "🔗",
    },
];

/// Look up the human-readable label for a catalog id
pub fn category_label(id: &str) -> Option<&'static str> {
    RESEARCH_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.label)
}
