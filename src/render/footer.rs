//! Shared footer rendering.
//!
//! The footer link table mirrors the header dropdown structure and is
//! authored with shared-deployment hrefs; `transform_href` shortens them
//! when a brand is served from its own hostname. The onemoney section
//! ships its own simple footer in its layout, so the shared footer is
//! suppressed there.

use std::fmt::Write;

use crate::sections::{is_section, transform_href, SectionId};

pub struct FooterLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "ABOUT US",
        links: &[
            FooterLink { title: "Team", href: "/common/team" },
            FooterLink { title: "Vision & Mission", href: "/common/vision-mission" },
            FooterLink { title: "Leadership", href: "/onemoney/leadership" },
            FooterLink { title: "Values", href: "/equal/values" },
        ],
    },
    FooterColumn {
        title: "PRODUCTS",
        links: &[
            FooterLink { title: "OneMoney AA", href: "/onemoney" },
            FooterLink { title: "FinPro FIU TSP", href: "/moneyone/products/finpro" },
            FooterLink { title: "FinShare FIP TSP", href: "/finshare" },
            FooterLink { title: "OneApp", href: "/oneapp" },
            FooterLink { title: "Enterprise Hiring", href: "/equal/solutions/enterprise-hiring" },
            FooterLink { title: "Gig Hiring", href: "/equal/solutions/gig-hiring" },
            FooterLink { title: "Financial Services", href: "/equal/solutions/financial-services" },
            FooterLink { title: "Staffing & Contract", href: "/equal/solutions/staffing" },
        ],
    },
    FooterColumn {
        title: "SOLUTIONS",
        links: &[
            FooterLink { title: "Financial Services", href: "/equal/solutions/financial-services" },
            FooterLink { title: "HRMS BGV Integration", href: "/equal/solutions/enterprise-hiring" },
            FooterLink { title: "Multi-Platform Verification", href: "/equal/products/identity-gateway" },
            FooterLink { title: "Custom Workflow for Businesses", href: "/equal/industries/" },
        ],
    },
    FooterColumn {
        title: "RESOURCES",
        links: &[
            FooterLink { title: "Case Studies", href: "/news/latest-press-releases" },
            FooterLink { title: "Media Coverage", href: "/news/media-coverage" },
            FooterLink { title: "Blog", href: "/blog" },
            FooterLink { title: "In The News", href: "/blog/in-the-news" },
            FooterLink { title: "Terms and Conditions", href: "/newsletter/subscribe" },
            FooterLink { title: "Privacy Policy", href: "/newsletter/archive" },
        ],
    },
];

/// Whether the shared footer should render for this request.
pub fn footer_visible(path: &str, host: &str) -> bool {
    !is_section(SectionId::OneMoney, path, host)
}

/// Render the shared footer with hrefs rewritten for `host`.
pub fn render_footer(host: Option<&str>) -> String {
    let mut html = String::from("<footer class=\"main-footer\">\n");

    for column in FOOTER_COLUMNS {
        let _ = writeln!(html, "  <section>\n    <h2>{}</h2>\n    <ul>", column.title);
        for link in column.links {
            let href = transform_href(link.href, host);
            let _ = writeln!(html, "      <li><a href=\"{}\">{}</a></li>", href, link.title);
        }
        html.push_str("    </ul>\n  </section>\n");
    }

    html.push_str("</footer>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_hidden_on_onemoney_pages() {
        assert!(!footer_visible("/onemoney/leadership", ""));
        assert!(!footer_visible("/", "onemoney.in"));
        assert!(!footer_visible("/", "d2bd7hfw4pwyvv.cloudfront.net"));
    }

    #[test]
    fn footer_shown_everywhere_else() {
        assert!(footer_visible("/", ""));
        assert!(footer_visible("/moneyone/products/finpro", ""));
        assert!(footer_visible("/equal/values", "equal.in"));
    }

    #[test]
    fn footer_links_rewritten_for_brand_host() {
        let html = render_footer(Some("moneyone.in"));
        assert!(html.contains("href=\"/products/finpro\""));
        // Links for other brands keep their shared-deployment form.
        assert!(html.contains("href=\"/onemoney/leadership\""));
    }

    #[test]
    fn footer_links_unchanged_without_host() {
        let html = render_footer(None);
        assert!(html.contains("href=\"/moneyone/products/finpro\""));
        assert!(html.contains("href=\"/onemoney\""));
    }
}
