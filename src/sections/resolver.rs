//! Section resolution.
//!
//! # Responsibilities
//! - Classify a request into a company section from its path and host
//! - Scan the registry in declaration order, first match wins
//! - Fall back to the default section when nothing matches
//!
//! # Design Decisions
//! - Host matching is a substring test so `www.onemoney.in` and
//!   `onemoney.in:443` both hit their brand
//! - Path matching is a plain prefix test; anything after the matched
//!   prefix (query, hash) is irrelevant
//! - Never fails: empty or garbage inputs resolve to `Default`

use crate::sections::registry::{SectionId, REGISTRY};

/// Classify a request into a company section.
///
/// A section matches when any of its path prefixes is a prefix of `path`,
/// or any of its hostnames or aliases is a substring of `host`. Sections
/// are tried in registry order and the first match is returned. Callers
/// without a host pass `""`, which disables host-based matching.
pub fn resolve(path: &str, host: &str) -> SectionId {
    for rule in REGISTRY.iter().filter(|r| r.id != SectionId::Default) {
        let path_matches = rule.path_prefixes.iter().any(|p| path.starts_with(p));
        let host_matches = rule.hostnames.iter().any(|h| host.contains(h));
        let alias_matches = rule.aliases.iter().any(|a| host.contains(a));

        if path_matches || host_matches || alias_matches {
            return rule.id;
        }
    }

    SectionId::Default
}
