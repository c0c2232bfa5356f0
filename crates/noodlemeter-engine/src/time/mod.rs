//! Tick scheduling.
//!
//! The seam between the meter and whatever delivers its ticks. The meter
//! never sleeps or spins on its own; it asks a [`Ticker`] to deliver the
//! next tick, and the runtime loop waits on the resulting deadline. Tests
//! drive ticks synchronously through a recording fake.

mod ticker;

pub use ticker::{DeadlineTicker, Ticker};
