//! Hormuz, a Persian C to plain C transpiler.
//!
//! Hormuz source is C written with Persian keywords and operator names. This crate lexes that
//! source into a flat token stream, substitutes every localized keyword with its ASCII
//! equivalent, and emits the tokens again separated by single spaces so a regular C compiler can
//! take over. There is no parsing step: the output is a token-for-token re-lexing of the input.
//!

#[macro_use]
extern crate static_assertions;

#[doc(hidden)]
pub use const_format;

pub mod error;
pub mod toolchain;

pub use error::Error;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=hormuz=debug` or `RUST_LOG=hormuz=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
