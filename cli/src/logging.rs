//! Verbosity-to-log-level mapping (§4.9 ambient stack), grounded on
//! `geobasenrn/nrn/main.py`'s `configure_logging`: a WARN baseline that
//! `-v` steps down and `-q` steps back up.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8, quiet: u8) {
    let verbosity = verbose as i32 - quiet as i32;
    let level = match verbosity {
        ..=-1 => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
