//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. The format is
//! compact and hides the module prefix (`with_target(false)`); the actor tags its lines with
//! an `entity_type` field instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown and final store size
//! - **Store operations**: Create, List, Get, Replace, Delete and Actions, with the id
//! - **Requests**: method, URI, status and latency of every HTTP request
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show request payloads and lookups
//! RUST_LOG=debug cargo run
//!
//! # Without RUST_LOG the --log-level flag decides
//! cargo run -- --log-level warn
//! ```
//!
//! With `RUST_LOG=info` a create followed by a stock update reads:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Created entity_type="Product" size=1
//! INFO Request handled method=POST uri=/products status=201 elapsed_ms=0
//! INFO Action ok entity_type="Product" id=1
//! INFO Request handled method=PATCH uri=/products/1/estoque status=200 elapsed_ms=0
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
