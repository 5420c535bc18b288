//! Shared utilities.
//!
//! Helpers for tick drivers.

/// Frame timing for tick drivers.
pub mod frame_clock;

pub use frame_clock::FrameClock;
