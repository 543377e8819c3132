use std::fmt::{Display, Formatter, Result as FmtResult};

use ahash::AHashSet;
use itertools::Itertools;

use crate::grammar::GrammarBuilder;

/// The designated start symbol of every CFG artifact. It is a fixed literal
/// and not derived from the grammar contents: by convention the productions
/// of the first declared non-terminal are reachable from it.
pub const START_SYMBOL: &str = "Start";

/// A non-terminal: a symbol that was declared via a `Name:` header line.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct NonTerminal(String);

impl NonTerminal {
    pub(crate) fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The name of this non-terminal.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A terminal: a symbol that appears in some production body but was never
/// declared as a header anywhere in the input.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Terminal(String);

impl Terminal {
    pub(crate) fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The token of this terminal.
    pub fn content(&self) -> &str {
        &self.0
    }
}

/// The right-hand side of a production rule is a sequence of terminals and
/// non-terminals. The two kinds are disjoint: a symbol's kind is decided by
/// whether a header for it exists anywhere in the input.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum Symbol {
    /// A terminal
    Terminal(Terminal),
    /// A non-terminal
    NonTerminal(NonTerminal),
}

impl Symbol {
    /// The token of this symbol, regardless of its kind.
    pub fn name(&self) -> &str {
        match self {
            Symbol::Terminal(term) => term.content(),
            Symbol::NonTerminal(nonterm) => nonterm.id(),
        }
    }
}

/// A single production rule of a context-free grammar. An empty `rhs` is an
/// epsilon production. Two rules are equal when their LHS and their RHS
/// sequences are equal, RHS order included.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct ProductionRule {
    lhs: NonTerminal,
    rhs: Vec<Symbol>,
}

impl ProductionRule {
    pub(crate) fn new(lhs: NonTerminal, rhs: Vec<Symbol>) -> Self {
        Self {
            lhs,
            rhs,
        }
    }

    /// The non-terminal this rule expands.
    pub fn lhs(&self) -> &NonTerminal {
        &self.lhs
    }

    /// The expansion of this rule.
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// Whether this is an epsilon production.
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl Display for ProductionRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ->", self.lhs.id())?;

        for symbol in &self.rhs {
            write!(f, " {}", symbol.name())?;
        }

        Ok(())
    }
}

/// A context-free grammar: classified symbol sets plus a rule set.
///
/// The terminal and non-terminal sets are disjoint because terminals are
/// constructed as "all body tokens minus all headers". Built once per
/// invocation via [`GrammarBuilder`] and immutable afterwards.
pub struct ContextFreeGrammar {
    terminals: AHashSet<Terminal>,
    non_terminals: AHashSet<NonTerminal>,
    rules: AHashSet<ProductionRule>,
}

impl ContextFreeGrammar {
    pub(crate) fn new(
        terminals: AHashSet<Terminal>,
        non_terminals: AHashSet<NonTerminal>,
        rules: AHashSet<ProductionRule>,
    ) -> Self {
        Self {
            terminals,
            non_terminals,
            rules,
        }
    }

    /// Create a [`GrammarBuilder`] that loads grammar descriptions from disk.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// The terminals of this grammar.
    pub fn terminals(&self) -> &AHashSet<Terminal> {
        &self.terminals
    }

    /// The non-terminals of this grammar.
    pub fn non_terminals(&self) -> &AHashSet<NonTerminal> {
        &self.non_terminals
    }

    /// The production rules of this grammar.
    pub fn rules(&self) -> &AHashSet<ProductionRule> {
        &self.rules
    }

    /// The designated start symbol, always [`START_SYMBOL`].
    pub fn start_symbol(&self) -> &'static str {
        START_SYMBOL
    }
}

impl Display for ContextFreeGrammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "Terminals ({}):", self.terminals.len())?;
        for terminal in self.terminals.iter().map(Terminal::content).sorted() {
            writeln!(f, "  {}", terminal)?;
        }

        writeln!(f, "Non-terminals ({}):", self.non_terminals.len())?;
        for nonterminal in self.non_terminals.iter().map(NonTerminal::id).sorted() {
            writeln!(f, "  {}", nonterminal)?;
        }

        writeln!(f, "Start symbol: {}", self.start_symbol())?;

        writeln!(f, "Rules ({}):", self.rules.len())?;
        for rule in self.rules.iter().map(ProductionRule::to_string).sorted() {
            writeln!(f, "  {}", rule)?;
        }

        Ok(())
    }
}
