//! Allows us to load grammars from rule text.
//!
//! Each non-blank line holds one rule, `A->rhs`. The right-hand side is a
//! juxtaposition of single-character symbols: uppercase ASCII letters are
//! nonterminals, `ε` is the empty string, and anything else is a terminal.
//! Spaces and tabs are ignored. `|` separates alternatives, so `A->b|ε`
//! stands for the two rules `A->b` and `A->ε`.
//!
//! A character written on the left-hand side of some rule is a nonterminal
//! on every right-hand side too, so `s->ax` with `x->b` reads `x` as a
//! nonterminal. Such grammars only load with
//! `GrammarLimits::ascii_uppercase_nonterminals` turned off.

use std::collections::BTreeSet;

use crate::error::LoadError;
use crate::grammar::{Grammar, GrammarLimits};
use crate::rule::Production;
use crate::symbol::{self, Symbol};

const ARROW: &str = "->";
const ALTERNATIVE: char = '|';

/// Extension trait for loading a grammar from rule text.
pub trait GrammarLoadExt: Sized {
    /// Parses and loads rule text with the default limits.
    fn from_text(text: &str) -> Result<Self, LoadError> {
        Self::from_text_with_limits(text, &GrammarLimits::default())
    }

    /// Parses and loads rule text with the given limits.
    fn from_text_with_limits(text: &str, limits: &GrammarLimits) -> Result<Self, LoadError>;
}

impl GrammarLoadExt for Grammar {
    fn from_text_with_limits(text: &str, limits: &GrammarLimits) -> Result<Self, LoadError> {
        let rules = parse_rules(text)?;
        Ok(Grammar::load(rules, limits)?)
    }
}

/// Parses rule text into rules, without validating them as a grammar.
pub fn parse_rules(text: &str) -> Result<Vec<Production>, LoadError> {
    let mut rules = vec![];
    for (line_idx, line) in text.lines().enumerate() {
        let line_no = line_idx as u32 + 1;
        let error = |reason: &str| LoadError::Parse {
            reason: reason.to_string(),
            line: line_no,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (lhs, rhs) = line
            .split_once(ARROW)
            .ok_or_else(|| error("expected `->` between the left- and right-hand side"))?;
        let mut lhs_chars = lhs.trim().chars();
        let lhs = match (lhs_chars.next(), lhs_chars.next()) {
            (Some(c), None) => Symbol::NonTerminal(c),
            (None, _) => return Err(error("missing left-hand side")),
            (Some(_), Some(_)) => return Err(error("left-hand side must be a single symbol")),
        };
        if rhs.trim().is_empty() {
            return Err(error("right-hand side is empty"));
        }
        for alternative in rhs.split(ALTERNATIVE) {
            let syms = symbol::symbols(alternative);
            if syms.is_empty() {
                return Err(error("empty alternative; write `ε` for the empty string"));
            }
            rules.push(Production::new(lhs, syms));
        }
    }
    Ok(promote_lhs_glyphs(rules))
}

fn promote_lhs_glyphs(rules: Vec<Production>) -> Vec<Production> {
    let lhs_glyphs: BTreeSet<char> = rules
        .iter()
        .filter_map(|rule| rule.lhs.non_terminal())
        .collect();
    rules
        .into_iter()
        .map(|rule| {
            let rhs: Vec<Symbol> = rule
                .rhs
                .iter()
                .map(|&sym| match sym {
                    Symbol::Terminal(c) if lhs_glyphs.contains(&c) => Symbol::NonTerminal(c),
                    sym => sym,
                })
                .collect();
            Production::new(rule.lhs, rhs)
        })
        .collect()
}
