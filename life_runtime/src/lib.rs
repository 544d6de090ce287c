#![forbid(unsafe_code)]

//! File-backed runtime for the Life kernel.
//!
//! Wraps the pure simulation kernel with board persistence, a service
//! layer, and settings. No transition logic lives here — every generation
//! step and cycle check is delegated to `life_engine`.

pub mod service;
pub mod settings;
pub mod store;
