//! The parsers for the supported grammar description formats.

pub(crate) mod lines;
