//! One-stop analysis of a loaded grammar.

use crate::classification::{find_conflict, Conflict};
use crate::derivation::{Derivation, DerivationSearch, SearchLimits, SearchStats};
use crate::grammar::Grammar;
use crate::prediction::{FirstSets, FollowSets, PredictSetsExt};
use crate::symbol::{Symbol, SymbolSet};

/// A grammar together with its converged FIRST and FOLLOW sets.
///
/// Sets are computed once, when the analysis is created. Queries only read
/// them.
#[derive(Clone, Debug)]
pub struct Analysis {
    grammar: Grammar,
    first: FirstSets,
    follow: FollowSets,
    limits: SearchLimits,
}

impl Analysis {
    /// Analyzes the grammar with the default search limits.
    pub fn new(grammar: Grammar) -> Self {
        Self::with_limits(grammar, SearchLimits::default())
    }

    /// Analyzes the grammar. `limits` bound later derivation searches.
    pub fn with_limits(grammar: Grammar, limits: SearchLimits) -> Self {
        let first = grammar.first_sets();
        let follow = grammar.follow_sets_with_first(&first);
        Analysis {
            grammar,
            first,
            follow,
            limits,
        }
    }

    /// The analyzed grammar.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// FIRST sets of all nonterminals.
    pub fn first_sets(&self) -> &FirstSets {
        &self.first
    }

    /// FOLLOW sets of all nonterminals.
    pub fn follow_sets(&self) -> &FollowSets {
        &self.follow
    }

    /// Limits used by `derivable` and `derivation`.
    pub fn search_limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// FIRST(sym). See [`FirstSets::first_of`].
    pub fn first_of(&self, sym: Symbol) -> SymbolSet {
        self.first.first_of(sym)
    }

    /// FOLLOW(sym). Empty for anything but a nonterminal of the grammar.
    pub fn follow_of(&self, sym: Symbol) -> SymbolSet {
        self.follow.follow_of(sym)
    }

    /// Whether two alternatives of some nonterminal share a leading symbol.
    pub fn is_ambiguous(&self) -> bool {
        self.conflict().is_some()
    }

    /// The first conflicting pair of alternatives, if any.
    pub fn conflict(&self) -> Option<Conflict> {
        find_conflict(&self.grammar, &self.first)
    }

    /// Whether `target` is derivable within the search limits.
    pub fn derivable(&self, target: &str) -> bool {
        self.derivation(target).0.is_derived()
    }

    /// Searches for a derivation of `target` and returns the outcome with
    /// the search counters.
    pub fn derivation(&self, target: &str) -> (Derivation, SearchStats) {
        let mut search = DerivationSearch::new(&self.grammar, &self.limits);
        let outcome = search.search(target);
        (outcome, search.stats())
    }
}
