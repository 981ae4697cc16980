//! Single-key command interpreter driving the filter engine.
//!
//! Dispatch is case-insensitive and consumes at most one character per poll
//! cycle; there is no line buffering. Mutations happen here, rendering is
//! left to the monitor runner.
use crate::filter::{FilterEngine, FilterMode};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Recognized console commands.
pub enum Command {
    /// `F` — flip between learning and reporting.
    ToggleFilter,
    /// `C` — forget every recorded identifier.
    ClearFilter,
    /// `D` — list the recorded identifiers.
    DumpFilter,
    /// `R` — unconditional, non-graceful system reset.
    Reset,
}

impl Command {
    /// Case-insensitive key mapping; anything else is not a command.
    pub fn from_key(key: u8) -> Option<Self> {
        match key.to_ascii_uppercase() {
            b'F' => Some(Self::ToggleFilter),
            b'C' => Some(Self::ClearFilter),
            b'D' => Some(Self::DumpFilter),
            b'R' => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
/// What the caller should render after applying a keypress.
pub enum CommandEffect {
    /// Mode flipped; carries the new mode for the indicator and the console.
    ModeChanged(FilterMode),
    /// Set emptied; confirmation text expected.
    Cleared,
    /// Caller prints the entry count, then each recorded identifier.
    Dump,
    /// Caller must trigger the board reset. No cleanup.
    ResetRequested,
    /// Unrecognized key; notice only, no state change.
    Unknown(u8),
}

/// Apply one keypress to the engine and report what to render.
pub fn dispatch<const CAP: usize>(key: u8, engine: &mut FilterEngine<CAP>) -> CommandEffect {
    match Command::from_key(key) {
        Some(Command::ToggleFilter) => CommandEffect::ModeChanged(engine.toggle()),
        Some(Command::ClearFilter) => {
            engine.clear();
            CommandEffect::Cleared
        }
        Some(Command::DumpFilter) => CommandEffect::Dump,
        Some(Command::Reset) => CommandEffect::ResetRequested,
        None => CommandEffect::Unknown(key),
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
