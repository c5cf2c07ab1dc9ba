//! Event log for the face.
//!
//! A fixed-size ring buffer of short text lines. The host pushes a line for
//! every notable tick event (jump, box hit, reveal finished, repaint) and for
//! setting changes; the simulator shows the most recent lines on its debug
//! page. Formatting avoids `format!` so the log works without an allocator.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.push("Face started");
//! log.push_value("Minute ", 42);
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use heapless::{Deque, String};

use crate::scheduler::TickReport;

// =============================================================================
// Log Configuration
// =============================================================================

/// Maximum number of lines kept.
pub const LOG_CAPACITY: usize = 8;

/// Maximum characters per line.
pub const LOG_LINE_LENGTH: usize = 32;

/// One stored line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Ring Buffer
// =============================================================================

/// Last `LOG_CAPACITY` lines, oldest first. Older lines drop off the front.
pub struct EventLog {
    lines: Deque<LogLine, LOG_CAPACITY>,
    total: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            lines: Deque::new(),
            total: 0,
        }
    }

    /// Push a line, truncated to fit.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line = LogLine::new();
        push_truncated(&mut line, msg);
        self.push_line(line);
    }

    /// Push `prefix` followed by a decimal value.
    pub fn push_value(
        &mut self,
        prefix: &str,
        value: u32,
    ) {
        let mut line = LogLine::new();
        push_truncated(&mut line, prefix);
        push_u32(&mut line, value);
        self.push_line(line);
    }

    /// Push one line per event in `report`, stamped with the tick number.
    pub fn record(
        &mut self,
        tick: u32,
        report: &TickReport,
    ) {
        let events = [
            (report.jump_started, " jump"),
            (report.box_hit, " box hit"),
            (report.reveal_finished, " coin done"),
            (report.score_repainted, " score"),
        ];
        for (_, name) in events.iter().filter(|(happened, _)| *happened) {
            let mut line = LogLine::new();
            line.push('#').ok();
            push_u32(&mut line, tick);
            push_truncated(&mut line, name);
            self.push_line(line);
        }
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Lines pushed since creation, including dropped ones.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }

    fn push_line(
        &mut self,
        line: LogLine,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        self.lines.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Append as much of `s` as fits.
fn push_truncated<const N: usize>(
    line: &mut String<N>,
    s: &str,
) {
    for c in s.chars() {
        if line.push(c).is_err() {
            break;
        }
    }
}

/// Append a u32 in decimal (no `format!`).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

/// Append a value as two zero-padded digits.
pub fn push_two_digits<const N: usize>(
    s: &mut String<N>,
    val: u8,
) {
    s.push((b'0' + val / 10 % 10) as char).ok();
    s.push((b'0' + val % 10) as char).ok();
}

// =============================================================================
// Tests
// =============================================================================
