mod contract;

pub use contract::*;

use log::LevelFilter;
use std::env;

/// Initializes test logging once per process. `RUST_LOG` wins when set.
pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger.is_test(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}
