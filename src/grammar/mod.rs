//! This is the frontend that loads grammar descriptions.
//!
//! Use it like so:
//! ```no_run
//! use cfgc::grammar::ContextFreeGrammar;
//!
//! // Load multiple grammar files by joining their rules:
//! let grammar = ContextFreeGrammar::builder()
//!     .grammar_file("expr.grammar").unwrap()
//!     .grammar_file("common-definitions.grammar").unwrap()
//!     .build();
//! ```
//! You can inspect the grammar contents like this:
//! ```no_run
//! # use cfgc::grammar::{ContextFreeGrammar, Symbol};
//! # let grammar = ContextFreeGrammar::builder().grammar_file("expr.grammar").unwrap().build();
//! // Since a grammar is nothing but a set of rules, traverse the rules
//! for rule in grammar.rules() {
//!     // The left-hand-side (lhs) of a rule is a single non-terminal
//!     println!("lhs = {:?}", rule.lhs());
//!
//!     // The right-hand-side (rhs) of a rule is a sequence of terminals and non-terminals.
//!     // This is captured in the enum "Symbol".
//!     for symbol in rule.rhs() {
//!         match symbol {
//!             Symbol::Terminal(terminal) => println!("terminal: {}", terminal.content()),
//!             Symbol::NonTerminal(nonterminal) => println!("non-terminal: {}", nonterminal.id()),
//!         }
//!     }
//! }
//! ```

mod builder;
mod cfg;

pub use builder::*;
pub use cfg::*;
