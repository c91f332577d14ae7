//! A heuristic check for ambiguity.
//!
//! Two alternatives of the same nonterminal are said to conflict when their
//! right-hand sides can begin with the same terminal, or can both derive the
//! empty string. A grammar with a conflict is reported as ambiguous.
//!
//! Deciding ambiguity is undecidable in general, and this check only looks
//! one symbol ahead:
//!
//! - grammars that are ambiguous only deeper in a derivation go undetected
//!   (false negatives);
//! - grammars that are unambiguous but not LL(1), such as `S -> Sa | a`,
//!   are reported as ambiguous (false positives).
//!
//! The check only reads converged FIRST sets, so it terminates on every
//! grammar, left-recursive ones included.

use log::debug;

use crate::grammar::Grammar;
use crate::prediction::FirstSets;
use crate::symbol::Symbol;

/// Two alternatives of one nonterminal with overlapping leading sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    /// The shared LHS.
    pub lhs: Symbol,
    /// Index of the earlier rule.
    pub first_rule: usize,
    /// Index of the later rule.
    pub second_rule: usize,
    /// Symbols that can begin both alternatives. `Epsilon` is here when
    /// both alternatives are nullable.
    pub shared: Vec<Symbol>,
}

/// Returns the first pair of conflicting alternatives, in rule order.
pub fn find_conflict(grammar: &Grammar, first_sets: &FirstSets) -> Option<Conflict> {
    let leading_sets: Vec<_> = grammar
        .rules()
        .map(|rule| first_sets.first_set_for_string(&rule.rhs[..]))
        .collect();
    let rules: Vec<_> = grammar.rules().collect();
    for (i, rule) in rules.iter().enumerate() {
        for (j, other) in rules.iter().enumerate().skip(i + 1) {
            if rule.lhs != other.lhs {
                continue;
            }
            let shared = leading_sets[i].intersection(&leading_sets[j]);
            if !shared.is_empty() {
                debug!(
                    "alternatives `{}` and `{}` can both begin with {:?}",
                    rule, other, shared
                );
                return Some(Conflict {
                    lhs: rule.lhs,
                    first_rule: i,
                    second_rule: j,
                    shared,
                });
            }
        }
    }
    None
}

/// Reports whether the grammar looks ambiguous. See the module
/// documentation for what this can miss.
pub fn detect_ambiguity(grammar: &Grammar, first_sets: &FirstSets) -> bool {
    find_conflict(grammar, first_sets).is_some()
}
