//! Time subsystem.
//!
//! Fixed-rate update stepping for hosts that animate a scene. The host feeds
//! measured elapsed time into a `FixedStep` and runs one update per step it
//! returns, independent of how often it presents frames.

mod fixed_step;

pub use fixed_step::FixedStep;
