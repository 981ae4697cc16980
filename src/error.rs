//! Error definitions shared across library modules.
//! The monitor core is mostly total: errors only arise at the I/O seams
//! (frame ingress, console writes) and on identifier range checks.
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors raised while constructing a 29-bit GMLAN identifier.
pub enum IdError {
    /// Raw value does not fit the extended (29-bit) identifier range.
    #[error("Identifier out of 29-bit range: {raw:#010X}")]
    OutOfRange { raw: u32 },
}

#[derive(Error, Debug)]
/// Errors that terminate the monitor loop.
pub enum MonitorError<R: core::fmt::Debug, W: core::fmt::Debug> {
    /// CAN layer failed to deliver a frame.
    #[error("CAN receive error: {0:?}")]
    Receive(R),

    /// Serial console rejected a write.
    #[error("Console write error: {0:?}")]
    Console(W),
}
