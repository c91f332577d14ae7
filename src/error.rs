//! Errors returned when a grammar cannot be loaded.

use std::error::Error;
use std::fmt;

use crate::symbol::Symbol;

/// Represents a malformed or oversized rule set.
///
/// Rule indices are zero-based positions in the rule list that was passed
/// to [`Grammar::load`](crate::Grammar::load).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidGrammar {
    /// There are no rules, or more rules than allowed.
    RuleCount {
        /// Number of rules given.
        count: usize,
        /// The configured upper bound.
        max: usize,
    },
    /// A rule's left-hand side is not a nonterminal.
    LhsNotNonTerminal {
        /// Index of the offending rule.
        rule: usize,
        /// The symbol found on the left-hand side.
        lhs: Symbol,
    },
    /// A rule's right-hand side is an empty sequence. Empty rules must be
    /// written with `Epsilon`.
    EmptyRhs {
        /// Index of the offending rule.
        rule: usize,
    },
    /// The end marker appears on a right-hand side.
    EndMarkerInRhs {
        /// Index of the offending rule.
        rule: usize,
    },
    /// A nonterminal is written with a character outside the nonterminal
    /// alphabet.
    NonTerminalOutsideAlphabet {
        /// Index of the offending rule.
        rule: usize,
        /// The offending character.
        symbol: char,
    },
    /// A terminal is written with a character that rule text cannot
    /// express as a terminal: a marker glyph, `|`, whitespace, or an
    /// uppercase ASCII letter when those are reserved for nonterminals.
    TerminalOutsideAlphabet {
        /// Index of the offending rule.
        rule: usize,
        /// The offending character.
        symbol: char,
    },
    /// The same character is used as a terminal and as a nonterminal.
    SymbolInBothRoles {
        /// Index of the rule where the second role first appears.
        rule: usize,
        /// The offending character.
        symbol: char,
    },
    /// The grammar has more distinct nonterminals than allowed.
    TooManyNonTerminals {
        /// Number of distinct nonterminals.
        count: usize,
        /// The configured upper bound.
        max: usize,
    },
}

impl fmt::Display for InvalidGrammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidGrammar::RuleCount { count, max } => {
                write!(f, "number of rules must be between 1 and {}, got {}", max, count)
            }
            InvalidGrammar::LhsNotNonTerminal { rule, lhs } => {
                write!(f, "rule {}: left-hand side `{}` is not a nonterminal", rule, lhs)
            }
            InvalidGrammar::EmptyRhs { rule } => {
                write!(f, "rule {}: right-hand side is empty", rule)
            }
            InvalidGrammar::EndMarkerInRhs { rule } => {
                write!(f, "rule {}: the end marker cannot appear in a rule", rule)
            }
            InvalidGrammar::NonTerminalOutsideAlphabet { rule, symbol } => {
                write!(
                    f,
                    "rule {}: `{}` is not an uppercase ASCII letter",
                    rule, symbol
                )
            }
            InvalidGrammar::TerminalOutsideAlphabet { rule, symbol } => {
                write!(f, "rule {}: `{}` cannot be a terminal", rule, symbol)
            }
            InvalidGrammar::SymbolInBothRoles { rule, symbol } => {
                write!(
                    f,
                    "rule {}: `{}` is used both as a terminal and as a nonterminal",
                    rule, symbol
                )
            }
            InvalidGrammar::TooManyNonTerminals { count, max } => {
                write!(f, "grammar has {} nonterminals, at most {} allowed", count, max)
            }
        }
    }
}

impl Error for InvalidGrammar {}

/// Represents an error when loading rule text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadError {
    /// The text is not in the `A->rhs` format.
    Parse {
        /// Human-readable reason for the error.
        reason: String,
        /// Line where the error happened.
        ///
        /// One-indexed.
        line: u32,
    },
    /// The rules parsed, but do not form a valid grammar.
    Invalid(InvalidGrammar),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Parse { reason, line } => {
                write!(f, "Parse error at line {}: reason: {}", line, reason)
            }
            LoadError::Invalid(invalid) => {
                write!(f, "Invalid grammar: {}", invalid)
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Parse { .. } => None,
            LoadError::Invalid(invalid) => Some(invalid),
        }
    }
}

impl From<InvalidGrammar> for LoadError {
    fn from(invalid: InvalidGrammar) -> Self {
        LoadError::Invalid(invalid)
    }
}
