//! Symbols of a context-free grammar. A symbol is a single character tagged
//! with its role in the grammar, or one of the two distinguished markers.

pub mod alphabet;
pub mod set;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use self::alphabet::Alphabet;
pub use self::set::SymbolSet;

/// The glyph that stands for the empty string in rule text.
pub const EPSILON_GLYPH: char = 'ε';
/// The glyph that stands for the end of input.
pub const END_MARKER_GLYPH: char = '$';

/// A grammar symbol.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// A terminal symbol.
    Terminal(char),
    /// A nonterminal symbol.
    NonTerminal(char),
    /// The empty string.
    Epsilon,
    /// The end of input, written `$`.
    EndMarker,
}

impl Symbol {
    /// Classifies a glyph the way rule text does: ASCII uppercase letters
    /// are nonterminals, `ε` and `$` are the markers, and anything else is a
    /// terminal.
    pub fn from_glyph(glyph: char) -> Self {
        match glyph {
            EPSILON_GLYPH => Symbol::Epsilon,
            END_MARKER_GLYPH => Symbol::EndMarker,
            c if c.is_ascii_uppercase() => Symbol::NonTerminal(c),
            c => Symbol::Terminal(c),
        }
    }

    /// Returns the character this symbol is written with.
    pub fn glyph(self) -> char {
        match self {
            Symbol::Terminal(c) | Symbol::NonTerminal(c) => c,
            Symbol::Epsilon => EPSILON_GLYPH,
            Symbol::EndMarker => END_MARKER_GLYPH,
        }
    }

    /// Returns the nonterminal's character, or `None` for any other symbol.
    #[inline]
    pub fn non_terminal(self) -> Option<char> {
        match self {
            Symbol::NonTerminal(c) => Some(c),
            _ => None,
        }
    }

    /// Whether this is a nonterminal.
    #[inline]
    pub fn is_non_terminal(self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    /// Whether this is a terminal.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Whether this is the empty string marker.
    #[inline]
    pub fn is_epsilon(self) -> bool {
        self == Symbol::Epsilon
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Splits a string of glyphs into symbols, skipping spaces and tabs.
pub fn symbols(text: &str) -> Vec<Symbol> {
    text.chars()
        .filter(|&c| c != ' ' && c != '\t')
        .map(Symbol::from_glyph)
        .collect()
}
