//! Predict sets: FIRST and FOLLOW set computation.

mod first;
mod follow;

use std::collections::BTreeMap;

use crate::grammar::Grammar;
use crate::symbol::{Symbol, SymbolSet};

pub use self::first::FirstSets;
pub use self::follow::FollowSets;

/// The representation of FIRST and FOLLOW sets, keyed by nonterminal.
pub type PerSymbolSets = BTreeMap<char, SymbolSet>;

/// Access to a converged table of per-nonterminal sets.
pub trait PredictSets {
    /// Returns a reference to the sets.
    fn predict_sets(&self) -> &PerSymbolSets;

    /// Returns the set of a nonterminal, or `None` for any other symbol.
    fn get(&self, sym: Symbol) -> Option<&SymbolSet> {
        sym.non_terminal()
            .and_then(|nt| self.predict_sets().get(&nt))
    }
}

/// Extension trait for computing predict sets of a grammar.
pub trait PredictSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes FIRST sets, then FOLLOW sets.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from already converged FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
}

impl PredictSetsExt for Grammar {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }
}
