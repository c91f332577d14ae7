//! Bounded search for derivations of terminal strings.
//!
//! The search explores sentential forms breadth-first, starting from the
//! start symbol. Only the leftmost nonterminal of each form is expanded,
//! once per alternative, which keeps the branching factor down.
//!
//! Forms are discarded when they can no longer produce the target:
//!
//! - they already hold more terminals than the target has, which is also
//!   checked for successors before they are queued;
//! - the terminals before their leftmost nonterminal are not a prefix of the
//!   target.
//!
//! Forms are also discarded when they grow longer than a slack bound
//! relative to the target length, and the whole search stops after a
//! maximum number of expansions or when the queue is full. These bounds
//! keep recursive grammars from running away, but they may hide a
//! derivation that only exists through long intermediate forms. The search
//! tells such outcomes apart with [`Derivation::BoundReached`].

use std::collections::VecDeque;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::Grammar;
use crate::symbol::{Symbol, END_MARKER_GLYPH, EPSILON_GLYPH};

/// Limits for the search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchLimits {
    /// How many sentential forms may be taken off the queue. Defaults to
    /// 20 000.
    pub max_expansions: usize,
    /// How many forms the queue may hold at once. Defaults to 10 000.
    pub max_queue: usize,
    /// Forms longer than `length_slack_factor * target_len +
    /// length_slack_offset` symbols are not expanded. Defaults to 2.
    pub length_slack_factor: usize,
    /// See `length_slack_factor`. Defaults to 5.
    pub length_slack_offset: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_expansions: 20_000,
            max_queue: 10_000,
            length_slack_factor: 2,
            length_slack_offset: 5,
        }
    }
}

impl SearchLimits {
    fn max_form_len(&self, target_len: usize) -> usize {
        self.length_slack_factor
            .saturating_mul(target_len)
            .saturating_add(self.length_slack_offset)
    }
}

/// Outcome of a search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Derivation {
    /// A derivation of the target was found.
    Derived,
    /// The target contains a character that is not a terminal of the
    /// grammar. Nothing was expanded.
    Rejected,
    /// Every form was examined and none matched. No form was discarded by
    /// a bound, so the target is not derivable.
    Exhausted,
    /// The search hit the expansion limit, the queue limit, or the length
    /// slack before finding a derivation. The target may still be
    /// derivable under larger limits.
    BoundReached,
}

impl Derivation {
    /// Whether a derivation was found.
    pub fn is_derived(self) -> bool {
        self == Derivation::Derived
    }
}

/// Counters collected during a search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Forms taken off the queue.
    pub expansions: usize,
    /// Forms put on the queue, the initial form included.
    pub enqueued: usize,
    /// Forms discarded because they can no longer produce the target.
    pub pruned: usize,
    /// Forms discarded by the length slack.
    pub slack_pruned: usize,
    /// Successors dropped because the queue was full.
    pub dropped: usize,
    /// The largest number of forms queued at once.
    pub peak_queue_len: usize,
}

/// Breadth-first search over the sentential forms of a grammar.
#[derive(Clone, Debug)]
pub struct DerivationSearch<'a> {
    grammar: &'a Grammar,
    limits: SearchLimits,
    stats: SearchStats,
}

impl<'a> DerivationSearch<'a> {
    /// Creates a search over the given grammar.
    pub fn new(grammar: &'a Grammar, limits: &SearchLimits) -> Self {
        DerivationSearch {
            grammar,
            limits: *limits,
            stats: SearchStats::default(),
        }
    }

    /// Counters of the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches for a derivation of `target` from the start symbol.
    pub fn search(&mut self, target: &str) -> Derivation {
        self.stats = SearchStats::default();
        let outcome = match self.target_symbols(target) {
            Some(target_syms) => self.breadth_first(&target_syms),
            None => Derivation::Rejected,
        };
        debug!("search for {:?}: {:?}, {:?}", target, outcome, self.stats);
        outcome
    }

    /// Converts the target to terminals, or returns `None` if any character
    /// is not a terminal of the grammar.
    fn target_symbols(&self, target: &str) -> Option<Vec<Symbol>> {
        target
            .chars()
            .map(|c| {
                let rejected = c == EPSILON_GLYPH
                    || c == END_MARKER_GLYPH
                    || self.grammar.is_non_terminal(c)
                    || !self.grammar.is_terminal(c);
                if rejected {
                    None
                } else {
                    Some(Symbol::Terminal(c))
                }
            })
            .collect()
    }

    fn breadth_first(&mut self, target: &[Symbol]) -> Derivation {
        let max_form_len = self.limits.max_form_len(target.len());

        let mut queue = VecDeque::new();
        queue.push_back(vec![self.grammar.start_symbol()]);
        self.stats.enqueued = 1;
        self.stats.peak_queue_len = 1;

        while self.stats.expansions < self.limits.max_expansions {
            let Some(form) = queue.pop_front() else {
                return self.exhausted();
            };
            self.stats.expansions += 1;

            let leftmost = form
                .iter()
                .enumerate()
                .find_map(|(pos, sym)| sym.non_terminal().map(|nt| (pos, nt)));
            let Some((pos, nt)) = leftmost else {
                if &form[..] == target {
                    return Derivation::Derived;
                }
                continue;
            };

            let num_terminals = form.iter().filter(|sym| sym.is_terminal()).count();
            if num_terminals > target.len() || !target.starts_with(&form[..pos]) {
                self.stats.pruned += 1;
                continue;
            }
            if form.len() > max_form_len {
                self.stats.slack_pruned += 1;
                continue;
            }

            for rule in self.grammar.rules_for(nt) {
                let added_terminals = rule.expansion().filter(|sym| sym.is_terminal()).count();
                if num_terminals + added_terminals > target.len() {
                    self.stats.pruned += 1;
                    continue;
                }
                if queue.len() >= self.limits.max_queue {
                    self.stats.dropped += 1;
                    continue;
                }
                let successor: Vec<Symbol> = form[..pos]
                    .iter()
                    .copied()
                    .chain(rule.expansion())
                    .chain(form[pos + 1..].iter().copied())
                    .collect();
                queue.push_back(successor);
                self.stats.enqueued += 1;
                self.stats.peak_queue_len = self.stats.peak_queue_len.max(queue.len());
            }
        }

        if queue.is_empty() {
            self.exhausted()
        } else {
            Derivation::BoundReached
        }
    }

    fn exhausted(&self) -> Derivation {
        if self.stats.dropped > 0 || self.stats.slack_pruned > 0 {
            Derivation::BoundReached
        } else {
            Derivation::Exhausted
        }
    }
}

/// Reports whether `target` is derivable within the limits. Collapses
/// everything but [`Derivation::Derived`] to `false`.
pub fn can_derive(grammar: &Grammar, target: &str, limits: &SearchLimits) -> bool {
    DerivationSearch::new(grammar, limits).search(target).is_derived()
}
