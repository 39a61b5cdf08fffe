//! Static opportunity catalog and the display-only template list.
//!
//! Both are compiled into the binary and never change at runtime. Catalog order
//! is significant: it is the tie-break when two opportunities score the same.

use crate::opportunities::models::{
    BusinessTemplate, OpportunityKind, OpportunityRecord, RiskLevel,
};

pub static CATALOG: &[OpportunityRecord] = &[
    OpportunityRecord {
        id: "token-launch",
        name: "Crypto Token Launch",
        description: "Create and launch a meme/utility token on Base chain using Clanker",
        kind: OpportunityKind::Token,
        categories: &["Crypto", "Quick Money"],
        build_days: 0.5,
        min_revenue_target: 500,
        max_revenue_target: 100_000,
        effort: "Very Low",
        risk_level: RiskLevel::High,
        roi: "500-10000x (but volatile)",
        revenue_projection: "$500-$50K per launch (highly variable)",
        build_time: "2 hours to launch",
        why_this_works: "Clanker automates token creation. Community hype drives initial volume. Potential for quick wins.",
        pros: &[
            "Fastest to money",
            "Zero technical knowledge needed",
            "High upside if hype catches",
        ],
        cons: &[
            "High failure rate",
            "Volatile",
            "Regulatory uncertainty",
            "Requires marketing skill",
        ],
    },
    OpportunityRecord {
        id: "niche-saas",
        name: "Niche AI SaaS Tool",
        description: "Build a highly specific SaaS tool (e.g., AI email writer)",
        kind: OpportunityKind::Saas,
        categories: &["SaaS", "Sustainable"],
        build_days: 5.0,
        min_revenue_target: 1_000,
        max_revenue_target: 50_000,
        effort: "Medium",
        risk_level: RiskLevel::Medium,
        roi: "2-5x per customer (recurring)",
        revenue_projection: "$2-10K MRR with 20-50 customers",
        build_time: "3-5 days to MVP",
        why_this_works: "SaaS has predictable revenue. Niche focus means less competition. People pay for tools that save time.",
        pros: &[
            "Recurring revenue",
            "Scalable",
            "Less competition in niches",
            "Predictable income",
        ],
        cons: &[
            "Takes longer to build",
            "Needs customer acquisition",
            "Support required",
        ],
    },
    OpportunityRecord {
        id: "affiliate-network",
        name: "Affiliate Marketing Network",
        description: "Promote high-commission products (Stripe, HubSpot, Semrush) via Twitter",
        kind: OpportunityKind::Affiliate,
        categories: &["Marketing", "Quick Money"],
        build_days: 1.0,
        min_revenue_target: 100,
        max_revenue_target: 10_000,
        effort: "Low",
        risk_level: RiskLevel::Low,
        roi: "10-30% commission per sale",
        revenue_projection: "$500-$2K MRR with consistent promotion",
        build_time: "1 day setup",
        why_this_works: "Zero product build. Leverage existing products. High-value B2B commissions.",
        pros: &[
            "No product to build",
            "Fast setup",
            "Low effort",
            "Passive if audience grows",
        ],
        cons: &[
            "Needs audience",
            "Low conversion",
            "Requires constant promotion",
            "Limited upside",
        ],
    },
    OpportunityRecord {
        id: "content-monetization",
        name: "Monetized Content Creator",
        description: "Build Twitter presence + newsletter with sponsorships, ads, courses",
        kind: OpportunityKind::Content,
        categories: &["Content", "Long-term"],
        build_days: 30.0,
        min_revenue_target: 500,
        max_revenue_target: 50_000,
        effort: "Medium-High",
        risk_level: RiskLevel::Low,
        roi: "1-5x per month as audience grows",
        revenue_projection: "$1-5K MRR at 10-50K followers",
        build_time: "4+ weeks to meaningful revenue",
        why_this_works: "Multiple monetization layers (sponsors, ads, courses, tips). Compound growth as audience builds.",
        pros: &[
            "Multiple income streams",
            "Compound growth",
            "Brand value",
            "Long-term asset",
        ],
        cons: &[
            "Slow to start",
            "Requires consistent posting",
            "Audience building is hard",
            "Volatile sponsorship deals",
        ],
    },
    OpportunityRecord {
        id: "automated-service",
        name: "Automated Service Business",
        description: "Offer services (copywriting, design, consulting) with AI handling delivery",
        kind: OpportunityKind::Service,
        categories: &["Services", "Quick Money"],
        build_days: 2.0,
        min_revenue_target: 500,
        max_revenue_target: 20_000,
        effort: "Low-Medium",
        risk_level: RiskLevel::Low,
        roi: "50-200% markup on AI costs",
        revenue_projection: "$1-5K MRR with 10-20 clients",
        build_time: "1-2 days setup",
        why_this_works: "High margins. AI does the work. Customers pay premium for quality.",
        pros: &[
            "Fast setup",
            "High margins",
            "Recurring if retainer model",
            "Low overhead",
        ],
        cons: &[
            "Customer acquisition needed",
            "Support required",
            "Scaling is limited by time",
        ],
    },
    OpportunityRecord {
        id: "ecommerce-ai",
        name: "AI-Powered Ecommerce Store",
        description: "Dropshipping/POD store with AI product discovery and marketing",
        kind: OpportunityKind::Ecommerce,
        categories: &["Ecommerce", "Quick Money"],
        build_days: 3.0,
        min_revenue_target: 500,
        max_revenue_target: 30_000,
        effort: "Low-Medium",
        risk_level: RiskLevel::Medium,
        roi: "20-50% per sale",
        revenue_projection: "$1-3K MRR with consistent traffic",
        build_time: "2-3 days to store launch",
        why_this_works: "AI finds winning products. Automation handles fulfillment. No inventory needed.",
        pros: &[
            "No inventory",
            "Automated fulfillment",
            "Scalable",
            "Profitable products",
        ],
        cons: &[
            "Shipping delays",
            "Customer service",
            "Competitive",
            "Needs consistent marketing",
        ],
    },
    OpportunityRecord {
        id: "trading-bot",
        name: "Crypto Trading Bot",
        description: "Automated trading bot with AI-driven strategy",
        kind: OpportunityKind::Trading,
        categories: &["Crypto", "Advanced"],
        build_days: 14.0,
        min_revenue_target: 5_000,
        max_revenue_target: 1_000_000,
        effort: "High",
        risk_level: RiskLevel::Extreme,
        roi: "Variable (highly dependent on market)",
        revenue_projection: "Unknown (market dependent)",
        build_time: "1-2 weeks build + testing",
        why_this_works: "Algorithmic trading exploits market inefficiencies. Passive once running.",
        pros: &[
            "Passive if successful",
            "High upside",
            "Scalable",
            "Always trading",
        ],
        cons: &[
            "High risk",
            "Requires deep crypto knowledge",
            "Regulatory issues",
            "Market risk",
        ],
    },
];

pub static TEMPLATES: &[BusinessTemplate] = &[
    BusinessTemplate {
        id: "token",
        name: "Token Launch (Clanker)",
        description: "Create and launch a crypto token on Base chain",
        effort: "Very Low (30 min)",
        roi: "High (but volatile)",
        build_time: "2 hours",
        category: "Crypto",
    },
    BusinessTemplate {
        id: "saas",
        name: "Niche SaaS Tool",
        description: "Build a specific AI tool for one use case",
        effort: "Medium (3-5 days)",
        roi: "Medium-High ($2-10K MRR)",
        build_time: "3-5 days",
        category: "SaaS",
    },
    BusinessTemplate {
        id: "affiliate",
        name: "Affiliate Marketing Network",
        description: "Promote high-commission products via Twitter/email",
        effort: "Low (1 day setup)",
        roi: "Medium ($500-2K MRR)",
        build_time: "1 day",
        category: "Marketing",
    },
    BusinessTemplate {
        id: "content",
        name: "Monetized Content Creator",
        description: "Build Twitter presence, newsletter, or YouTube channel with multiple revenue streams",
        effort: "Medium (2-4 weeks)",
        roi: "Medium ($1-5K MRR)",
        build_time: "2-4 weeks",
        category: "Content",
    },
    BusinessTemplate {
        id: "service",
        name: "Automated Service Business",
        description: "Offer automated services (consulting, copywriting, design) with AI handling delivery",
        effort: "Low-Medium (1-2 days)",
        roi: "High ($500-5K MRR)",
        build_time: "1-2 days",
        category: "Services",
    },
    BusinessTemplate {
        id: "ecommerce",
        name: "AI-Powered Ecommerce",
        description: "Dropshipping or print-on-demand store with AI product discovery and marketing",
        effort: "Low-Medium (2-3 days)",
        roi: "Medium ($1-3K MRR)",
        build_time: "2-3 days",
        category: "Ecommerce",
    },
    BusinessTemplate {
        id: "trading",
        name: "Crypto Trading Bot",
        description: "Automated trading bot with AI-driven strategy",
        effort: "High (1-2 weeks)",
        roi: "High but risky",
        build_time: "1-2 weeks",
        category: "Crypto",
    },
];

/// Looks up a catalog record by its identifier.
#[cfg(test)]
pub fn find_record(id: &str) -> Option<&'static OpportunityRecord> {
    CATALOG.iter().find(|r| r.id == id)
}
