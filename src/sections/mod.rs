//! Section resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (path, host)
//!     → resolver.rs (scan registry, first match wins)
//!     → Return: SectionId (or Default when nothing matches)
//!
//! Registry (at compile time):
//!     registry.rs declares an ordered table of (SectionId, SectionRule)
//!     → hostnames, alias hostnames, path prefixes per brand
//!     → form options and page metadata per brand
//!     → frozen as static data, shared by every caller
//! ```
//!
//! # Design Decisions
//! - Registry is an ordered list, not a map: declaration order is the
//!   priority order and is a testable property
//! - Host and path are plain strings supplied by the caller; no ambient
//!   environment reads
//! - Substring matching for hosts, prefix matching for paths (no regex)
//! - Total functions: every input resolves to at least `Default`

pub mod accessors;
pub mod registry;
pub mod resolver;

pub use accessors::{form_options, is_section, metadata, transform_href};
pub use registry::{FormOption, SectionId, SectionMetadata, SectionRule};
pub use resolver::resolve;
