#![cfg(feature = "std")]
//! Diagnostics for the terminal game and the simulator.
//!
//! Lines go to stderr, so `BATTLESHIP_LOG=debug` can be turned on mid-game
//! without corrupting the boards drawn on stdout.

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

const LOG_ENV: &str = "BATTLESHIP_LOG";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct GameLogger;

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        // A closed stderr is not worth aborting a game over.
        let _ = writeln!(err, "[{}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: GameLogger = GameLogger;

/// Level named by `value` (`off`, `error` .. `trace`, any case), falling back
/// to `warn` for anything unset or unrecognised.
fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level given by `BATTLESHIP_LOG`.
/// Calling it again is harmless; only the first call installs the logger.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
