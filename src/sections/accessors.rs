//! Accessors layered on the resolver.
//!
//! Each call resolves the request once and then reads the matching
//! registry entry. All of these are total; the worst case is the default
//! section's data.

use std::borrow::Cow;

use crate::sections::registry::{rule_for, FormOption, SectionId, SectionMetadata};
use crate::sections::resolver::resolve;

/// Contact-form purpose options for the section owning this request.
/// Always non-empty.
pub fn form_options(path: &str, host: &str) -> &'static [FormOption] {
    rule_for(resolve(path, host)).form_options
}

/// True when the request belongs to `section`. Used by the view layer to
/// suppress or show brand-specific chrome.
pub fn is_section(section: SectionId, path: &str, host: &str) -> bool {
    resolve(path, host) == section
}

/// Page metadata for the section owning this request, when it defines any.
pub fn metadata(path: &str, host: &str) -> Option<&'static SectionMetadata> {
    rule_for(resolve(path, host)).metadata.as_ref()
}

/// Shorten brand-prefixed hrefs when the brand is served from its own
/// hostname.
///
/// Links are authored for the shared deployment (`/moneyone/products`), so
/// on `moneyone.in` the prefix would double up in the address bar. When
/// `host` hits a brand's hostnames or aliases and `href` starts with that
/// brand's prefix segment, the segment is stripped and the remainder
/// returned root-relative. With no host the href passes through unchanged.
pub fn transform_href<'a>(href: &'a str, host: Option<&str>) -> Cow<'a, str> {
    let Some(host) = host else {
        return Cow::Borrowed(href);
    };

    for id in [SectionId::MoneyOne, SectionId::OneMoney] {
        let rule = rule_for(id);
        let on_brand_host = rule
            .hostnames
            .iter()
            .chain(rule.aliases.iter())
            .any(|h| host.contains(h));
        if !on_brand_host {
            continue;
        }

        for prefix in rule.path_prefixes {
            let segment = format!("{prefix}/");
            if let Some(rest) = href.strip_prefix(&segment) {
                return Cow::Owned(format!("/{rest}"));
            }
        }
    }

    Cow::Borrowed(href)
}
