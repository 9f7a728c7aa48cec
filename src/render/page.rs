//! Page shell rendering.

use std::fmt::Write;

use crate::render::assets::SCROLL_SCRIPT_ROUTE;
use crate::render::footer::{footer_visible, render_footer};
use crate::sections::{metadata, resolve};

/// Render the HTML shell for a request.
///
/// The shell carries everything section-aware: head metadata, the section
/// marker on `<body>`, the shared footer (unless the request belongs to
/// onemoney), and the scroll helper. Brand page content is mounted into
/// `<main>` by the asset pipeline and is out of scope here.
pub fn render_page(path: &str, host: &str) -> String {
    let section = resolve(path, host);
    let host_opt = (!host.is_empty()).then_some(host);

    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");

    if let Some(meta) = metadata(path, host) {
        let _ = writeln!(html, "  <title>{}</title>", meta.title);
        let _ = writeln!(
            html,
            "  <meta name=\"description\" content=\"{}\">",
            meta.description
        );
        if !meta.keywords.is_empty() {
            let _ = writeln!(
                html,
                "  <meta name=\"keywords\" content=\"{}\">",
                meta.keywords.join(", ")
            );
        }
    }

    let _ = writeln!(html, "  <script src=\"{}\" defer></script>", SCROLL_SCRIPT_ROUTE);
    html.push_str("</head>\n");

    let _ = writeln!(html, "<body data-section=\"{}\">", section);
    html.push_str("  <main id=\"content\"></main>\n");

    if footer_visible(path, host) {
        html.push_str(&render_footer(host_opt));
    }

    html.push_str("</body>\n</html>\n");
    html
}
