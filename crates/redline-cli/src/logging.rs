use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the stderr log subscriber.
///
/// `--verbose` forces `debug` for the redline crates. Otherwise logging is
/// only enabled when `RUST_LOG` is set, e.g. `RUST_LOG=redline_reader=debug`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("redline_reader=debug,redline_redact=debug,redline=debug")
    } else if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}
