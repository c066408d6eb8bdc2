//! Console logging for the `log` facade, backed by `console_log`.

use log::{Level, LevelFilter};

use crate::error::Result;

/// `console_log` wants a `Level`; with `Off` the max-level filter does the
/// silencing.
fn console_level(filter: LevelFilter) -> Level {
    filter.to_level().unwrap_or(Level::Error)
}

/// Installs the console logger. Fails if another logger is already set.
pub fn init(filter: LevelFilter) -> Result<()> {
    console_log::init_with_level(console_level(filter))?;
    log::set_max_level(filter);
    Ok(())
}
