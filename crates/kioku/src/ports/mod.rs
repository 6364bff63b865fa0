//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the importer
//! interacts with external systems.
//!
//! Implementations of these traits live in the CLI crate.

mod memory_writer;

pub use memory_writer::*;
