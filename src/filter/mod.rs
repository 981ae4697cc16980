//! Learn/suppress filter over previously observed identifiers.
//!
//! The engine owns the learning-mode flag and the insertion-ordered set of
//! recorded identifiers. It is deliberately single-owner: the monitor runner
//! is the only task that touches it, which serializes every
//! read-modify-write against concurrently arriving frames and keypresses.
use heapless::Vec;

//==================================================================================Constants

/// Default capacity of the recorded-identifier set. A quiet GMLAN bus
/// carries a few dozen distinct identifiers; 64 leaves headroom.
pub const DEFAULT_FILTER_CAP: usize = 64;

//==================================================================================Enums and Structs
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Two-valued filter state, flipped only by the command interpreter.
pub enum FilterMode {
    /// Newly observed identifiers are recorded rather than reported.
    Learning,
    /// Recorded identifiers are suppressed; everything else is reported.
    Reporting,
}

impl FilterMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Learning => Self::Reporting,
            Self::Reporting => Self::Learning,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
/// Verdict for one observed identifier.
pub enum ClassifyResult {
    /// Identifier recorded; carries its 1-based position in the set.
    Added(usize),
    /// Nothing to emit: already learned while learning, or the set is full.
    Silent,
    /// Known identifier withheld from the report stream.
    Suppressed,
    /// Unknown identifier; the caller formats and emits it.
    Reported,
}

/// Stateful learn/suppress engine.
#[derive(Debug)]
pub struct FilterEngine<const CAP: usize> {
    mode: FilterMode,
    seen: Vec<u32, CAP>,
}

impl<const CAP: usize> Default for FilterEngine<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> FilterEngine<CAP> {
    /// Start in `Reporting` mode with an empty set, like the original
    /// firmware after power-up.
    pub const fn new() -> Self {
        Self {
            mode: FilterMode::Reporting,
            seen: Vec::new(),
        }
    }

    //==================================================================================Classification
    /// Classify one identifier and update the set when learning.
    ///
    /// While learning, frames are only recorded, never forwarded to the
    /// formatter; learned identifiers stay silent thereafter. The set is
    /// never populated in `Reporting` mode, so an identifier only becomes
    /// suppressible after being explicitly learned.
    pub fn classify(&mut self, id: u32) -> ClassifyResult {
        let known = self.seen.contains(&id);
        match self.mode {
            FilterMode::Learning => {
                if known {
                    return ClassifyResult::Silent;
                }
                // A full set stops learning rather than evicting entries.
                match self.seen.push(id) {
                    Ok(()) => ClassifyResult::Added(self.seen.len()),
                    Err(_) => ClassifyResult::Silent,
                }
            }
            FilterMode::Reporting => {
                if known {
                    ClassifyResult::Suppressed
                } else {
                    ClassifyResult::Reported
                }
            }
        }
    }

    //==================================================================================State control
    /// Empty the set. The mode is untouched.
    pub fn clear(&mut self) {
        self.seen.clear();
    }

    /// Flip the mode and return the new value.
    pub fn toggle(&mut self) -> FilterMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// Recorded identifiers in insertion order.
    #[inline]
    pub fn list(&self) -> &[u32] {
        &self.seen
    }

    /// Number of recorded identifiers.
    #[inline]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether the set holds no identifiers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Current filter mode.
    #[inline]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }
}
