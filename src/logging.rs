//! tracing の初期化

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` があればそれを使い、なければ verbose に応じて info/debug
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "portfolio_site=debug"
    } else {
        "portfolio_site=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
