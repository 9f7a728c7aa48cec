//! Server-side view layer.
//!
//! # Data Flow
//! ```text
//! Request (path, host)
//!     → page.rs (shell: head metadata, body, footer slot)
//!     → footer.rs (shared footer, suppressed for onemoney)
//!     → assets.rs (embedded scroll-to-hash script)
//!     → HTML string back to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Rendering is plain string assembly; page content itself is owned by
//!   the brand teams, this shell only carries section-aware chrome
//! - Footer hrefs are authored for the shared deployment and rewritten
//!   per host at render time
//! - No user-controlled text is interpolated into markup

pub mod assets;
pub mod footer;
pub mod page;

pub use page::render_page;
