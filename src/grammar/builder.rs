use std::path::Path;

use ahash::AHashSet;

use crate::{
    error::Error,
    grammar::{ContextFreeGrammar, NonTerminal, ProductionRule, Symbol, Terminal},
    parser::lines::{self, RawRule},
};

/// The GrammarBuilder loads grammar descriptions from disk and returns a
/// classified [`ContextFreeGrammar`].
///
/// Use it like so:
/// ```no_run
/// use cfgc::grammar::ContextFreeGrammar;
///
/// // Load multiple grammar files by joining their rules:
/// let grammar = ContextFreeGrammar::builder()
///     .grammar_file("expr.grammar").unwrap()
///     .grammar_file("common-definitions.grammar").unwrap()
///     .build();
/// ```
#[derive(Debug)]
pub struct GrammarBuilder {
    headers: AHashSet<String>,
    body_tokens: AHashSet<String>,
    rules: AHashSet<RawRule>,
}

impl GrammarBuilder {
    pub(crate) fn new() -> Self {
        Self {
            headers: AHashSet::new(),
            body_tokens: AHashSet::new(),
            rules: AHashSet::new(),
        }
    }

    /// Load a grammar description from disk in the line-oriented format:
    /// productions grouped under `Name:` headers, one whitespace-separated
    /// production body per line, `\epsilon` for an empty body.
    ///
    /// May be called multiple times. Headers, body tokens and rules of all
    /// loaded files merge by set union.
    pub fn grammar_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, Error> {
        let raw = lines::parse_file(path.as_ref())?;

        self.headers.extend(raw.headers);
        self.body_tokens.extend(raw.body_tokens);
        self.rules.extend(raw.rules);

        Ok(self)
    }

    /// Create a [`ContextFreeGrammar`].
    ///
    /// Symbol classification happens here and nowhere else: a token is a
    /// terminal exactly if no header anywhere in the loaded input declares
    /// it, so the complete input has to be known first. A structurally valid
    /// rule set always builds, there are no failure modes.
    pub fn build(self) -> ContextFreeGrammar {
        let non_terminals: AHashSet<NonTerminal> = self.headers
            .iter()
            .cloned()
            .map(NonTerminal::new)
            .collect();

        let terminals: AHashSet<Terminal> = self.body_tokens
            .iter()
            .filter(|token| !self.headers.contains(*token))
            .cloned()
            .map(Terminal::new)
            .collect();

        let mut rules = AHashSet::with_capacity(self.rules.len());

        for raw in &self.rules {
            let rhs = raw.rhs
                .iter()
                .map(|token| {
                    if self.headers.contains(token) {
                        Symbol::NonTerminal(NonTerminal::new(token.clone()))
                    } else {
                        Symbol::Terminal(Terminal::new(token.clone()))
                    }
                })
                .collect();

            rules.insert(ProductionRule::new(NonTerminal::new(raw.lhs.clone()), rhs));
        }

        ContextFreeGrammar::new(terminals, non_terminals, rules)
    }
}
