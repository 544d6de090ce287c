#![forbid(unsafe_code)]

//! Deterministic Conway's Game of Life kernel.
//!
//! Pure data in, pure data out: no I/O, no clock, no logging, no internal
//! concurrency. Storage and transport layers depend on this crate's types;
//! nothing here depends on them.

pub mod board;
pub mod codec;
pub mod runner;
pub mod transition;
