//! # scoreshape (app library)
//!
//! Batch driver pieces for the scoreshape binary: the clap CLI surface
//! and the file-backed Source/Sink implementations. Exposed as a library
//! so integration tests can drive commands without spawning the binary.

pub mod cli;
pub mod io;
