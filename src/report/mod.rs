//! Report line formatting for the serial console.
//!
//! Everything here is pure text construction: identical inputs always
//! produce identical output. Lines carry no terminator; the monitor runner
//! appends CRLF when writing.
use core::fmt::{self, Write};

use heapless::String;

use crate::filter::FilterMode;
use crate::frame::CanFrame;

//==================================================================================Constants

/// Capacity covering the worst-case line (large uptime, full payload).
pub const REPORT_LINE_CAP: usize = 96;

/// One formatted console line.
pub type ReportLine = String<REPORT_LINE_CAP>;

/// Terminal clear + cursor home, sent raw once at startup.
pub const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";

/// Column legend matching the [`FrameReport`] layout.
pub const LEGEND: &str = "Time Pri ArbID Sender FullID Len Data";

/// Confirmation printed after the clear command.
pub const FILTER_CLEARED: &str = "Filter cleared";

//==================================================================================Frame report
/// Per-frame report: uptime, decoded header fields, full identifier,
/// length, and payload.
pub struct FrameReport<'a> {
    /// Milliseconds since boot at the moment the frame was handled.
    pub uptime_ms: u64,
    /// The received frame.
    pub frame: &'a CanFrame,
}

impl fmt::Display for FrameReport<'_> {
    /// `S.CC P AAAA SSSS IIIIIIII L [BB BB ..]`; the bracketed payload
    /// list is omitted entirely for zero-length frames.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.frame.id.header();
        write!(
            f,
            "{}.{:02} {:X} {:04X} {:04X} {:08X} {}",
            self.uptime_ms / 1000,
            (self.uptime_ms % 1000) / 10,
            header.priority,
            header.arbitration,
            header.sender,
            self.frame.id.raw(),
            self.frame.len
        )?;
        if self.frame.len > 0 {
            f.write_str(" [")?;
            for (index, byte) in self.frame.payload().iter().enumerate() {
                if index > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{byte:02X}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl FrameReport<'_> {
    /// Materialize the line into a stack buffer.
    pub fn render(&self) -> ReportLine {
        let mut line = ReportLine::new();
        // REPORT_LINE_CAP covers the worst case; an overflow only truncates.
        let _ = write!(line, "{}", self);
        line
    }
}

//==================================================================================Notices
/// `Added <hex-id> to filter at position <n>`.
pub fn filter_added(id: u32, position: usize) -> ReportLine {
    let mut line = ReportLine::new();
    let _ = write!(line, "Added {id:08X} to filter at position {position}");
    line
}

/// Mode line printed after every toggle.
pub fn mode_line(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::Learning => "Learning mode enabled",
        FilterMode::Reporting => "Learning mode disabled",
    }
}

/// Header line of the filter dump.
pub fn dump_header(count: usize) -> ReportLine {
    let mut line = ReportLine::new();
    let _ = write!(line, "IDs in filter: {count}");
    line
}

/// One 1-based dump entry, `n: <hex-id>`.
pub fn dump_entry(index: usize, id: u32) -> ReportLine {
    let mut line = ReportLine::new();
    let _ = write!(line, "{index}: {id:08X}");
    line
}

/// Notice for a key outside the command set.
pub fn unknown_key(key: u8) -> ReportLine {
    let mut line = ReportLine::new();
    if key.is_ascii_graphic() {
        let _ = write!(line, "Unknown keypress: '{}'", key as char);
    } else {
        let _ = write!(line, "Unknown keypress: 0x{key:02X}");
    }
    line
}

/// Capture banner printed right after the legend.
pub fn startup_banner(bitrate_bps: u32) -> ReportLine {
    let mut line = ReportLine::new();
    let _ = write!(line, "Starting packet capture at {bitrate_bps} bps");
    line
}
