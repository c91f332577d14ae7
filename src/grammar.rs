//! Definitions of the context-free grammar type and its load-time limits.

use std::fmt;
use std::iter;
use std::rc::Rc;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidGrammar;
use crate::rule::Production;
use crate::symbol::{Alphabet, Symbol, END_MARKER_GLYPH, EPSILON_GLYPH};

/// Bounds checked when a grammar is loaded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrammarLimits {
    /// Maximum number of rules. Defaults to 100.
    pub max_rules: usize,
    /// Maximum number of distinct nonterminals. Defaults to 26.
    pub max_nonterminals: usize,
    /// Whether nonterminals must be ASCII uppercase letters, as in the rule
    /// text format. Defaults to `true`.
    pub ascii_uppercase_nonterminals: bool,
}

impl Default for GrammarLimits {
    fn default() -> Self {
        GrammarLimits {
            max_rules: 100,
            max_nonterminals: 26,
            ascii_uppercase_nonterminals: true,
        }
    }
}

impl GrammarLimits {
    fn check_non_terminal(&self, rule: usize, symbol: char) -> Result<(), InvalidGrammar> {
        if self.ascii_uppercase_nonterminals && !symbol.is_ascii_uppercase() {
            return Err(InvalidGrammar::NonTerminalOutsideAlphabet { rule, symbol });
        }
        Ok(())
    }

    fn check_terminal(&self, rule: usize, symbol: char) -> Result<(), InvalidGrammar> {
        let reserved = symbol == EPSILON_GLYPH
            || symbol == END_MARKER_GLYPH
            || symbol == '|'
            || symbol.is_whitespace();
        if reserved || (self.ascii_uppercase_nonterminals && symbol.is_ascii_uppercase()) {
            return Err(InvalidGrammar::TerminalOutsideAlphabet { rule, symbol });
        }
        Ok(())
    }

    fn check_rule(&self, idx: usize, rule: &Production) -> Result<(), InvalidGrammar> {
        match rule.lhs {
            Symbol::NonTerminal(c) => self.check_non_terminal(idx, c)?,
            lhs => return Err(InvalidGrammar::LhsNotNonTerminal { rule: idx, lhs }),
        }
        if rule.rhs.is_empty() {
            return Err(InvalidGrammar::EmptyRhs { rule: idx });
        }
        for &sym in rule.rhs.iter() {
            match sym {
                Symbol::NonTerminal(c) => self.check_non_terminal(idx, c)?,
                Symbol::EndMarker => return Err(InvalidGrammar::EndMarkerInRhs { rule: idx }),
                Symbol::Terminal(c) => self.check_terminal(idx, c)?,
                Symbol::Epsilon => {}
            }
        }
        Ok(())
    }
}

/// Context-free grammar type.
///
/// Holds the rules in the order they were given, together with the
/// nonterminal and terminal alphabets. Both alphabets are ordered by first
/// occurrence in a left-to-right scan of the rules, lhs before rhs. The first
/// nonterminal is the start symbol. No character is both a terminal and a
/// nonterminal.
///
/// A grammar never changes after it is loaded. To edit rules, load a new
/// grammar.
#[derive(Clone, Debug)]
pub struct Grammar {
    /// The array of rules.
    rules: Vec<Production>,
    /// Nonterminals in order of first occurrence.
    non_terminals: Alphabet,
    /// Terminals in order of first occurrence, shared with symbol sets.
    terminals: Rc<Alphabet>,
}

impl Grammar {
    /// Validates the rules and derives the alphabets.
    ///
    /// # Errors
    ///
    /// Returns an error when the rule count is outside `1..=max_rules`, a
    /// rule is malformed, a character is used both as a terminal and as a
    /// nonterminal, or there are too many nonterminals.
    pub fn load<I>(rules: I, limits: &GrammarLimits) -> Result<Self, InvalidGrammar>
    where
        I: IntoIterator<Item = Production>,
    {
        let rules: Vec<Production> = rules.into_iter().collect();
        if rules.is_empty() || rules.len() > limits.max_rules {
            return Err(InvalidGrammar::RuleCount {
                count: rules.len(),
                max: limits.max_rules,
            });
        }
        for (idx, rule) in rules.iter().enumerate() {
            limits.check_rule(idx, rule)?;
        }

        let mut non_terminals = Alphabet::new();
        let mut terminals = Alphabet::new();
        for (idx, rule) in rules.iter().enumerate() {
            for sym in iter::once(rule.lhs).chain(rule.rhs.iter().copied()) {
                let symbol = match sym {
                    Symbol::NonTerminal(c) if !terminals.contains(c) => {
                        non_terminals.insert(c);
                        continue;
                    }
                    Symbol::Terminal(c) if !non_terminals.contains(c) => {
                        terminals.insert(c);
                        continue;
                    }
                    Symbol::NonTerminal(c) | Symbol::Terminal(c) => c,
                    Symbol::Epsilon | Symbol::EndMarker => continue,
                };
                return Err(InvalidGrammar::SymbolInBothRoles { rule: idx, symbol });
            }
        }

        if non_terminals.len() > limits.max_nonterminals {
            return Err(InvalidGrammar::TooManyNonTerminals {
                count: non_terminals.len(),
                max: limits.max_nonterminals,
            });
        }

        let grammar = Grammar {
            rules,
            non_terminals,
            terminals: Rc::new(terminals),
        };
        for &nt in grammar.non_terminals() {
            if grammar.rules_for(nt).next().is_none() {
                warn!("nonterminal {} has no rules and derives nothing", nt);
            }
        }
        debug!(
            "loaded grammar: {} rules, {} nonterminals, {} terminals, start {}",
            grammar.rules.len(),
            grammar.non_terminals.len(),
            grammar.terminals.len(),
            grammar.start_symbol(),
        );
        Ok(grammar)
    }

    /// Returns an iterator over the list of grammar rules.
    pub fn rules(&self) -> impl Iterator<Item = &Production> + '_ {
        self.rules.iter()
    }

    /// Returns the rules whose LHS is the given nonterminal, in order.
    pub fn rules_for(&self, lhs: char) -> impl Iterator<Item = &Production> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.lhs == Symbol::NonTerminal(lhs))
    }

    /// Returns the rule at the given index.
    pub fn rule(&self, idx: usize) -> Option<&Production> {
        self.rules.get(idx)
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Nonterminals in order of first occurrence.
    pub fn non_terminals(&self) -> &[char] {
        self.non_terminals.glyphs()
    }

    /// Terminals in order of first occurrence.
    pub fn terminals(&self) -> &[char] {
        self.terminals.glyphs()
    }

    /// The terminal alphabet, shared with symbol sets built for this grammar.
    pub fn terminal_alphabet(&self) -> Rc<Alphabet> {
        self.terminals.clone()
    }

    /// The start symbol, which is the LHS of the first rule.
    pub fn start_symbol(&self) -> Symbol {
        Symbol::NonTerminal(self.start())
    }

    pub(crate) fn start(&self) -> char {
        // `load` guarantees at least one rule with a nonterminal LHS.
        self.non_terminals.glyphs()[0]
    }

    /// Whether the character is one of this grammar's nonterminals.
    pub fn is_non_terminal(&self, c: char) -> bool {
        self.non_terminals.contains(c)
    }

    /// Whether the character is one of this grammar's terminals.
    pub fn is_terminal(&self, c: char) -> bool {
        self.terminals.contains(c)
    }

    /// Position of the terminal in the terminal alphabet.
    pub fn terminal_index(&self, c: char) -> Option<usize> {
        self.terminals.index(c)
    }

    /// Position of the nonterminal in the nonterminal alphabet.
    pub fn non_terminal_index(&self, c: char) -> Option<usize> {
        self.non_terminals.index(c)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}

/// Loads a grammar from `(lhs, rhs)` pairs with the default limits.
pub fn load_grammar<I, S>(rules: I) -> Result<Grammar, InvalidGrammar>
where
    I: IntoIterator<Item = (Symbol, S)>,
    S: AsRef<[Symbol]>,
{
    let rules = rules
        .into_iter()
        .map(|(lhs, rhs)| Production::new(lhs, rhs));
    Grammar::load(rules, &GrammarLimits::default())
}
