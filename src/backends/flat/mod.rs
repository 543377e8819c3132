//! Generate a CFG artifact in the flat file format.
//!
//! This is the wire contract with the downstream parser generator: a count
//! line followed by one listing line per entry, for the terminals, the
//! non-terminals, the literal start symbol `Start` and the rules, in that
//! order.
//!
//! Use it like so:
//! ```no_run
//! use cfgc::grammar::ContextFreeGrammar;
//! use cfgc::backends::flat::FlatGenerator;
//!
//! // First, load a grammar description from disk.
//! let grammar = ContextFreeGrammar::builder()
//!     .grammar_file("expr.grammar").unwrap()
//!     .build();
//!
//! // Then, write the flat CFG artifact.
//! FlatGenerator::new().generate("expr.cfg", &grammar).unwrap();
//! ```

mod generator;

pub use generator::FlatGenerator;
