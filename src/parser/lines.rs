use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashSet;

use crate::error::{Error, ParsingError};

/// The marker for a production with an empty right-hand side.
const EPSILON: &str = "\\epsilon";

/// A production rule as written in the source, before terminals and
/// non-terminals have been told apart. The RHS token order is part of the
/// rule's identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct RawRule {
    pub(crate) lhs: String,
    pub(crate) rhs: Vec<String>,
}

/// Everything one pass over a grammar description yields.
///
/// `body_tokens` is provisional: a token that also occurs as a header
/// anywhere in the input is reclassified as a non-terminal when the grammar
/// is built.
#[derive(Debug, Default)]
pub(crate) struct RawGrammar {
    pub(crate) headers: AHashSet<String>,
    pub(crate) body_tokens: AHashSet<String>,
    pub(crate) rules: AHashSet<RawRule>,
}

/// Match the header pattern: one or more word characters immediately followed
/// by a colon, anchored at the start of the line. Text after the colon is
/// ignored.
fn parse_header(line: &str) -> Option<&str> {
    let end = line.find(|c: char| !c.is_alphanumeric() && c != '_')?;

    if end > 0 && line[end..].starts_with(':') {
        Some(&line[..end])
    } else {
        None
    }
}

/// Parse the grammar description at `path`.
pub(crate) fn parse_file(path: &Path) -> Result<RawGrammar, Error> {
    let file = File::open(path)?;
    parse_lines(path, BufReader::new(file))
}

/// Parse a grammar description from `reader`. `path` is only used for error
/// reporting.
pub(crate) fn parse_lines<R: BufRead>(path: &Path, reader: R) -> Result<RawGrammar, Error> {
    let mut raw = RawGrammar::default();
    let mut current: Option<String> = None;

    for (num, line) in reader.lines().enumerate() {
        let line = line?;
        let num = num + 1;

        // Lines of pure whitespace count as blank too
        if line.trim().is_empty() {
            continue;
        }

        if let Some(header) = parse_header(&line) {
            raw.headers.insert(header.to_string());
            current = Some(header.to_string());
            continue;
        }

        let lhs = match &current {
            Some(lhs) => lhs.clone(),
            None => {
                return Err(ParsingError::new(
                    path,
                    num,
                    format!("production '{}' appears before the first non-terminal header", line.trim()),
                )
                .into());
            },
        };

        let body = line.trim();

        if body == EPSILON {
            raw.rules.insert(RawRule {
                lhs,
                rhs: Vec::new(),
            });
        } else {
            let rhs: Vec<String> = body.split_whitespace().map(str::to_string).collect();
            raw.body_tokens.extend(rhs.iter().cloned());
            raw.rules.insert(RawRule {
                lhs,
                rhs,
            });
        }
    }

    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_str(input: &str) -> Result<RawGrammar, Error> {
        parse_lines(Path::new("<test>"), Cursor::new(input))
    }

    #[test]
    fn test_header_pattern() {
        assert_eq!(parse_header("Expr:"), Some("Expr"));
        assert_eq!(parse_header("opt_42:"), Some("opt_42"));
        assert_eq!(parse_header("Expr: trailing junk"), Some("Expr"));
        assert_eq!(parse_header("Expr"), None);
        assert_eq!(parse_header(":"), None);
        assert_eq!(parse_header(" Expr:"), None);
        assert_eq!(parse_header("Expr :"), None);
    }

    #[test]
    fn test_rules_and_tokens() {
        let raw = parse_str("A:\nx y\n\nB:\nA z\n").unwrap();

        assert!(raw.headers.contains("A"));
        assert!(raw.headers.contains("B"));
        assert_eq!(raw.headers.len(), 2);

        // The provisional token set contains non-terminal usages too
        for token in ["x", "y", "A", "z"] {
            assert!(raw.body_tokens.contains(token));
        }
        assert_eq!(raw.body_tokens.len(), 4);

        assert!(raw.rules.contains(&RawRule {
            lhs: "A".to_string(),
            rhs: vec!["x".to_string(), "y".to_string()],
        }));
        assert!(raw.rules.contains(&RawRule {
            lhs: "B".to_string(),
            rhs: vec!["A".to_string(), "z".to_string()],
        }));
        assert_eq!(raw.rules.len(), 2);
    }

    #[test]
    fn test_epsilon_marker() {
        let raw = parse_str("A:\n\\epsilon\n").unwrap();

        assert!(raw.rules.contains(&RawRule {
            lhs: "A".to_string(),
            rhs: Vec::new(),
        }));
        assert!(raw.body_tokens.is_empty());
    }

    #[test]
    fn test_repeated_whitespace_in_body() {
        let raw = parse_str("A:\n  x \t y  \n").unwrap();

        assert!(raw.rules.contains(&RawRule {
            lhs: "A".to_string(),
            rhs: vec!["x".to_string(), "y".to_string()],
        }));
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        let raw = parse_str("A:\n   \t\nx\n").unwrap();

        assert_eq!(raw.rules.len(), 1);
        assert!(raw.rules.contains(&RawRule {
            lhs: "A".to_string(),
            rhs: vec!["x".to_string()],
        }));
    }

    #[test]
    fn test_duplicate_rules_collapse() {
        let raw = parse_str("A:\nx y\nx y\n").unwrap();
        assert_eq!(raw.rules.len(), 1);
    }

    #[test]
    fn test_body_before_header() {
        let err = parse_str("x y\nA:\n").unwrap_err();

        match err {
            Error::MalformedGrammar(e) => assert_eq!(e.line(), 1),
            _ => panic!("expected a MalformedGrammar error"),
        }
    }
}
