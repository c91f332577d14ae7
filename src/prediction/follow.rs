//! FOLLOW sets.

use std::rc::Rc;

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::prediction::{FirstSets, PerSymbolSets, PredictSets};
use crate::rule::Production;
use crate::symbol::{Alphabet, Symbol, SymbolSet};

/// FOLLOW sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
    alphabet: Rc<Alphabet>,
    passes: usize,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar from its converged FIRST sets.
    ///
    /// FOLLOW of the start symbol is seeded with the end marker. For every
    /// occurrence of a nonterminal `B` in a rule `A ⸬= α B β`, FOLLOW(B)
    /// receives FIRST(β) without `Epsilon`, and also FOLLOW(A) when β is
    /// nullable or empty. Passes repeat until nothing changes.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let alphabet = grammar.terminal_alphabet();
        let mut map: PerSymbolSets = grammar
            .non_terminals()
            .iter()
            .map(|&nt| (nt, SymbolSet::new(alphabet.clone())))
            .collect();
        if let Some(follow_set) = map.get_mut(&grammar.start()) {
            follow_set.insert(Symbol::EndMarker);
        }
        let mut this = FollowSets {
            map,
            alphabet,
            passes: 0,
        };

        this.collect_from(grammar, first_sets);
        this
    }

    /// Returns a copy of FOLLOW(sym), or an empty set if `sym` is not one of
    /// the grammar's nonterminals.
    pub fn follow_of(&self, sym: Symbol) -> SymbolSet {
        self.get(sym)
            .cloned()
            .unwrap_or_else(|| SymbolSet::new(self.alphabet.clone()))
    }

    /// Number of passes over the rules it took to reach the fixed point.
    pub fn passes(&self) -> usize {
        self.passes
    }

    fn collect_from(&mut self, grammar: &Grammar, first_sets: &FirstSets) {
        let mut lookahead = SymbolSet::new(self.alphabet.clone());
        let mut changed = true;
        while changed {
            changed = false;
            self.passes += 1;
            for rule in grammar.rules() {
                changed |= self.process_rule(rule, first_sets, &mut lookahead);
            }
            trace!("FOLLOW pass {}: changed = {}", self.passes, changed);
        }
        debug!("FOLLOW sets converged after {} passes", self.passes);
    }

    fn process_rule(
        &mut self,
        rule: &Production,
        first_sets: &FirstSets,
        lookahead: &mut SymbolSet,
    ) -> bool {
        let Some(lhs) = rule.lhs.non_terminal() else {
            return false;
        };
        let mut changed = false;
        for (pos, &sym) in rule.rhs.iter().enumerate() {
            let Symbol::NonTerminal(followed) = sym else {
                continue;
            };
            lookahead.clear();
            let rest = &rule.rhs[pos + 1..];
            if first_sets.first_set_collect(rest, lookahead) {
                // `followed` can end the rule, so whatever follows the LHS
                // follows it too.
                if let Some(lhs_follow) = self.map.get(&lhs) {
                    lookahead.union(lhs_follow);
                }
            }
            match self.map.get_mut(&followed) {
                Some(follow_set) => changed |= follow_set.union(lookahead),
                None => trace!("skipping unknown nonterminal {}", followed),
            }
        }
        changed
    }
}

impl PredictSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
