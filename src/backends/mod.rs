//! The backends of this crate take a loaded grammar and turn it into an
//! artifact on disk.

pub mod flat;
