//! Static brand registry.
//!
//! # Responsibilities
//! - Declare every company section served by this deployment
//! - Hold each section's matching rule (hostnames, aliases, path prefixes)
//! - Hold each section's form options and page metadata
//!
//! # Design Decisions
//! - Data lives in code, not config: sections change with a deploy, and a
//!   malformed entry should be a compile error rather than a runtime one
//! - `REGISTRY` is ordered; the resolver scans top to bottom and returns
//!   the first match, so declaration order is load-bearing
//! - The default section carries no matching rule and is reachable only as
//!   the resolver's fallback

use serde::{Deserialize, Serialize};

/// Identifier for one of the company sections served by this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Employment and business-solutions brand.
    Equal,
    /// Financial-services brand.
    MoneyOne,
    /// Account-aggregator brand.
    OneMoney,
    /// Fallback when no brand matches.
    Default,
}

impl SectionId {
    /// Legacy lowercase name, as used in URLs and API payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Equal => "equal",
            SectionId::MoneyOne => "moneyone",
            SectionId::OneMoney => "onemoney",
            SectionId::Default => "default",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a brand's contact-form purpose dropdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Page metadata for a brand's `<head>`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

/// Matching rule and brand data for one section.
#[derive(Debug)]
pub struct SectionRule {
    pub id: SectionId,
    /// Primary domains; matched as substrings of the request host.
    pub hostnames: &'static [&'static str],
    /// CDN-fronted domains; matched like hostnames, listed separately.
    pub aliases: &'static [&'static str],
    /// Request-path prefixes owned by this section on a shared deployment.
    pub path_prefixes: &'static [&'static str],
    pub form_options: &'static [FormOption],
    pub metadata: Option<SectionMetadata>,
}

static EQUAL: SectionRule = SectionRule {
    id: SectionId::Equal,
    hostnames: &["equal.in"],
    aliases: &[],
    path_prefixes: &["/employment", "/solutions", "/equal"],
    form_options: &[
        FormOption { value: "Employment", label: "Employment" },
        FormOption { value: "BFSI", label: "BFSI" },
        FormOption { value: "AI Assistant", label: "AI Assistant" },
        FormOption { value: "General", label: "General" },
    ],
    metadata: Some(SectionMetadata {
        title: "Equal - Employment & Solutions",
        description: "Equal provides comprehensive employment and business solutions",
        keywords: &[],
    }),
};

static MONEYONE: SectionRule = SectionRule {
    id: SectionId::MoneyOne,
    hostnames: &["moneyone.in"],
    aliases: &[],
    path_prefixes: &["/moneyone"],
    form_options: &[
        FormOption { value: "General", label: "General" },
        FormOption { value: "Business Enquiry", label: "Business Enquiry" },
        FormOption { value: "Customer Query", label: "Customer Query" },
    ],
    metadata: Some(SectionMetadata {
        title: "MoneyOne - Financial Services",
        description: "MoneyOne provides innovative financial services and solutions",
        keywords: &[],
    }),
};

static ONEMONEY: SectionRule = SectionRule {
    id: SectionId::OneMoney,
    hostnames: &["onemoney.in"],
    aliases: &["d2bd7hfw4pwyvv.cloudfront.net"],
    path_prefixes: &["/onemoney"],
    form_options: &[
        FormOption { value: "General", label: "General" },
        FormOption { value: "Business Enquiry", label: "Business Enquiry" },
        FormOption { value: "Customer Query", label: "Customer Query" },
    ],
    metadata: Some(SectionMetadata {
        title: "OneMoney - India's First RBI-Licensed Account Aggregator",
        description: "Powering India's consent-driven financial ecosystem",
        keywords: &[],
    }),
};

static DEFAULT: SectionRule = SectionRule {
    id: SectionId::Default,
    hostnames: &[],
    aliases: &[],
    path_prefixes: &[],
    form_options: &[FormOption { value: "General", label: "General" }],
    metadata: Some(SectionMetadata {
        title: "Welcome",
        description: "Welcome to our platform",
        keywords: &[],
    }),
};

/// Ordered section table. The resolver scans this top to bottom and returns
/// the first match; keep the default entry last.
pub static REGISTRY: [&SectionRule; 4] = [&EQUAL, &MONEYONE, &ONEMONEY, &DEFAULT];

/// Look up the rule for a section. Total: every `SectionId` has an entry.
pub fn rule_for(id: SectionId) -> &'static SectionRule {
    match id {
        SectionId::Equal => &EQUAL,
        SectionId::MoneyOne => &MONEYONE,
        SectionId::OneMoney => &ONEMONEY,
        SectionId::Default => &DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_has_no_match_targets() {
        let rule = rule_for(SectionId::Default);
        assert!(rule.hostnames.is_empty());
        assert!(rule.aliases.is_empty());
        assert!(rule.path_prefixes.is_empty());
    }

    #[test]
    fn every_section_has_nonempty_form_options() {
        for rule in REGISTRY {
            assert!(!rule.form_options.is_empty(), "section {}", rule.id);
            for opt in rule.form_options {
                assert!(!opt.value.is_empty());
                assert!(!opt.label.is_empty());
            }
        }
    }

    #[test]
    fn registry_order_is_stable() {
        let order: Vec<SectionId> = REGISTRY.iter().map(|r| r.id).collect();
        assert_eq!(
            order,
            vec![
                SectionId::Equal,
                SectionId::MoneyOne,
                SectionId::OneMoney,
                SectionId::Default,
            ]
        );
    }

    #[test]
    fn section_names_round_trip_through_serde() {
        let json = serde_json::to_string(&SectionId::OneMoney).unwrap();
        assert_eq!(json, "\"onemoney\"");
        let back: SectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SectionId::OneMoney);
    }
}
