use std::{
    fs::File,
    io::Write,
    path::Path,
};

use itertools::Itertools;

use crate::grammar::{
    ContextFreeGrammar,
    NonTerminal,
    ProductionRule,
    Terminal,
};

/// A rule line is the LHS followed by the space-joined RHS. An epsilon rule
/// is the bare LHS with no trailing space.
fn rule_line(rule: &ProductionRule) -> String {
    let mut line = rule.lhs().id().to_string();

    for symbol in rule.rhs() {
        line.push(' ');
        line.push_str(symbol.name());
    }

    line
}

/// A section is its entry count followed by one line per entry.
fn push_section(out: &mut String, entries: &[String]) {
    out.push_str(&entries.len().to_string());
    out.push('\n');

    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
}

/// This is the main struct of the [`flat`](crate::backends::flat) backend that serializes a grammar into the flat CFG format.
pub struct FlatGenerator {}

impl FlatGenerator {
    /// Create a new FlatGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {}
    }

    /// Render the supplied `grammar` in the flat CFG format.
    ///
    /// Every listing is emitted in lexicographic order, rules by their
    /// rendered line, so the same grammar always renders byte-identically.
    pub fn render(&self, grammar: &ContextFreeGrammar) -> String {
        let terminals: Vec<String> = grammar.terminals()
            .iter()
            .map(Terminal::content)
            .map(str::to_string)
            .sorted()
            .collect();

        let non_terminals: Vec<String> = grammar.non_terminals()
            .iter()
            .map(NonTerminal::id)
            .map(str::to_string)
            .sorted()
            .collect();

        let rules: Vec<String> = grammar.rules()
            .iter()
            .map(rule_line)
            .sorted()
            .collect();

        let mut out = String::new();
        push_section(&mut out, &terminals);
        push_section(&mut out, &non_terminals);
        out.push_str(grammar.start_symbol());
        out.push('\n');
        push_section(&mut out, &rules);

        out
    }

    /// Write the supplied `grammar` into the output file `path` in the flat
    /// CFG format.
    ///
    /// The artifact is rendered in memory first and the output file is only
    /// created afterwards, so a failure never commits a partial artifact.
    pub fn generate<P: AsRef<Path>>(
        self,
        path: P,
        grammar: &ContextFreeGrammar,
    ) -> std::io::Result<()> {
        let buf = self.render(grammar);

        let mut file = File::create(path)?;
        file.write_all(buf.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(path: &str) -> ContextFreeGrammar {
        ContextFreeGrammar::builder()
            .grammar_file(path).unwrap()
            .build()
    }

    #[test]
    fn test_artifact_layout() {
        let cfg = load("test-data/grammars/ab.grammar");

        assert_eq!(
            FlatGenerator::new().render(&cfg),
            "3\nx\ny\nz\n2\nA\nB\nStart\n3\nA\nA x y\nB A z\n"
        );
    }

    #[test]
    fn test_count_lines() {
        let cfg = load("test-data/grammars/expr.grammar");
        let rendered = FlatGenerator::new().render(&cfg);
        let lines: Vec<&str> = rendered.lines().collect();

        let terminal_count: usize = lines[0].parse().unwrap();
        assert_eq!(terminal_count, cfg.terminals().len());

        let nonterminal_count: usize = lines[1 + terminal_count].parse().unwrap();
        assert_eq!(nonterminal_count, cfg.non_terminals().len());

        let start_line = 2 + terminal_count + nonterminal_count;
        assert_eq!(lines[start_line], "Start");

        let rule_count: usize = lines[start_line + 1].parse().unwrap();
        assert_eq!(rule_count, cfg.rules().len());

        assert_eq!(lines.len(), start_line + 2 + rule_count);
    }

    #[test]
    fn test_epsilon_has_no_trailing_space() {
        let cfg = load("test-data/grammars/epsilon.grammar");
        let rendered = FlatGenerator::new().render(&cfg);

        assert!(rendered.lines().any(|line| line == "OptSuffix"));
        assert!(rendered.lines().all(|line| line.trim_end() == line));
    }

    #[test]
    fn test_deterministic_output() {
        let generator = FlatGenerator::new();

        // Twice over the same value and over an independently loaded one
        let cfg = load("test-data/grammars/expr.grammar");
        let other = load("test-data/grammars/expr.grammar");

        assert_eq!(generator.render(&cfg), generator.render(&cfg));
        assert_eq!(generator.render(&cfg), generator.render(&other));
    }

    #[test]
    fn test_empty_grammar() {
        let cfg = ContextFreeGrammar::builder().build();

        assert_eq!(FlatGenerator::new().render(&cfg), "0\n0\nStart\n0\n");
    }

    #[test]
    fn test_no_artifact_for_malformed_input() {
        let path = std::env::temp_dir()
            .join(format!("cfgc-test-malformed-{}.cfg", std::process::id()));

        // The same load-then-generate flow the compile bin runs
        let result = ContextFreeGrammar::builder()
            .grammar_file("test-data/grammars/malformed.grammar")
            .map(|builder| FlatGenerator::new().generate(&path, &builder.build()));

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_generate_writes_artifact() {
        let cfg = load("test-data/grammars/ab.grammar");
        let path = std::env::temp_dir().join(format!("cfgc-test-ab-{}.cfg", std::process::id()));

        FlatGenerator::new().generate(&path, &cfg).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, FlatGenerator::new().render(&cfg));

        std::fs::remove_file(&path).unwrap();
    }
}
