//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

use clockface_common::config::TICK_PERIOD_MS;

/// Target tick time (~16 FPS). The main loop sleeps if the tick completes early.
pub const TICK_PERIOD: Duration = Duration::from_millis(TICK_PERIOD_MS as u64);

/// One clock second.
pub const CLOCK_SECOND: Duration = Duration::from_secs(1);
