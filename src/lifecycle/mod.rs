//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Init logging/metrics → Bind → Serve
//!
//! Shutdown:
//!     Ctrl+C (or a test trigger) → graceful shutdown future resolves
//!     → axum stops accepting → in-flight requests drain → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
