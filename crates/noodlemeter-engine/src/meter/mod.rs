//! The fare meter state machine.
//!
//! Two states, Paused and Running, driving a timed cost-increment cycle
//! with a self-adjusting period. Intended usage:
//! - build a [`MeterEngine`] from a [`Tariff`]
//! - call `tick()` on every fire of the injected scheduling primitive
//! - hand the returned [`MeterFrame`] to a display collaborator

mod engine;
mod frame;
mod tariff;

pub use engine::{CostRate, MeterEngine};
pub use frame::{DisplayFrame, MeterFrame};
pub use tariff::Tariff;
