//! `gmlan-sniff`: passive monitoring of a GMLAN single-wire CAN bus in a
//! `no_std` environment. The crate exposes the 29-bit identifier codec,
//! the learn/suppress filter engine, the report formatter, the single-key
//! command interpreter, and the monitor runner that ties them to the
//! hardware seams. The bus is observed in listen-only mode; nothing here
//! ever transmits or acknowledges a frame.
#![no_std]
//==================================================================================
/// Single-key command interpreter driving the filter engine.
pub mod command;
/// Domain and I/O-seam errors (identifier range, receive, console writes).
pub mod error;
/// Learn/suppress filter over previously observed identifiers.
pub mod filter;
/// Representation of a raw GMLAN frame as it is read from the CAN bus.
pub mod frame;
/// Creation and extraction of the 29-bit GMLAN identifier sub-fields.
pub mod gmlan_id;
/// Hardware seams: frame ingress, key input, console, clock, board control.
pub mod hal;
/// Monitor service owning the filter engine and the capture loop.
pub mod monitor;
/// Pure report-line and notice formatting for the serial console.
pub mod report;
//==================================================================================
