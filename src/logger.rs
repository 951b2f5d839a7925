use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the process-wide logger. Safe to call more than once.
///
/// `RUST_LOG` overrides the default levels, e.g. `RUST_LOG=chainstore=debug`
/// shows every resize.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chainstore", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the embedding program
        let _ = builder.try_init();
    });
}
