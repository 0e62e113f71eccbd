//! Diagnostic logging for the CLI.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only active when `RUST_LOG` is set, e.g. `RUST_LOG=gb_resolve=debug`.
/// Output goes to stderr as an indented span tree. Safe to call more than
/// once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_some() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
