//! This library compiles human-authored grammar descriptions into flat CFG
//! artifacts that a parser generator can consume.
//!
//! It consists of
//! - __frontend__: Load grammar descriptions in the line-oriented format
//!   (productions grouped under `Name:` headers, one production per line).
//! - __backend__: Serialize the loaded grammar. The only backend is
//!   - `flat`: the deterministic flat CFG file format.
//!
//! ## Getting Started
//! The first step always is to load a grammar. To do this use the [`ContextFreeGrammar::builder()`](grammar::ContextFreeGrammar::builder) method
//! that will give you access to a [`GrammarBuilder`](grammar::GrammarBuilder) like this:
//! ```no_run
//! use cfgc::grammar::ContextFreeGrammar;
//!
//! // Load multiple grammar files by joining their rules:
//! let grammar = ContextFreeGrammar::builder()
//!     .grammar_file("expr.grammar").unwrap()
//!     .grammar_file("common-definitions.grammar").unwrap()
//!     .build();
//! ```
//! Then, you can plug the grammar into the backend:
//! ```no_run
//! # use cfgc::grammar::ContextFreeGrammar;
//! use cfgc::backends::flat::FlatGenerator;
//!
//! # let grammar = ContextFreeGrammar::builder().grammar_file("expr.grammar").unwrap().build();
//! FlatGenerator::new().generate("expr.cfg", &grammar).unwrap();
//! ```
//! And that's it.

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod backends;
pub mod error;
pub mod grammar;
