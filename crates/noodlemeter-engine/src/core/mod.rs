//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (command
//! loop) and higher layers (front panels, tools). It avoids leaking loop
//! internals into user code.

mod app;

pub use app::{App, AppControl};
