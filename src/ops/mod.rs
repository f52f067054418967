//! The three workflow operations: build, run, emulator.
//!
//! Each operation plans an ordered command sequence from the resolved
//! toolchain configuration, then executes it with stop-on-first-failure
//! semantics.

pub mod build;
pub mod emulator;
pub mod run;

pub use build::{AbiTarget, BuildProfile};
