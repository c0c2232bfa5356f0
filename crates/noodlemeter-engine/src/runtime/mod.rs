//! Command loop.
//!
//! Owns the meter, its tick deadline, and the command channel, and wires
//! them to the display collaborator. Single-threaded and cooperative:
//! commands may be sent from any thread through [`MeterHandle`], but are
//! applied exclusively on the loop thread, before any due tick.

mod driver;

pub use driver::{Command, MeterHandle, Runtime, RuntimeConfig};
