//! Driver for the mathlang token reader.
//!
//! Hosts the `mathlang` binary's commands and the diagnostic renderer.
//!
//! # Debugging
//!
//! - `RUST_LOG=mathlang_lexer=trace`: log every scanned token.
//! - `RUST_LOG=mathlangc=debug`: log command progress.

use std::sync::Once;

pub mod commands;
pub mod reporting;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
