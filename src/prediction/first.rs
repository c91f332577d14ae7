//! FIRST sets.

use std::rc::Rc;

use log::{debug, trace};

use crate::grammar::Grammar;
use crate::prediction::{PerSymbolSets, PredictSets};
use crate::rule::Production;
use crate::symbol::{Alphabet, Symbol, SymbolSet};

/// FIRST sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FirstSets {
    map: PerSymbolSets,
    alphabet: Rc<Alphabet>,
    passes: usize,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// Every set starts empty. We make full passes over the rules until a
    /// pass changes nothing. Sets only grow and are bounded by the terminal
    /// alphabet, so this terminates, left recursion included.
    pub fn new(grammar: &Grammar) -> Self {
        let alphabet = grammar.terminal_alphabet();
        let map = grammar
            .non_terminals()
            .iter()
            .map(|&nt| (nt, SymbolSet::new(alphabet.clone())))
            .collect();
        let mut this = FirstSets {
            map,
            alphabet,
            passes: 0,
        };

        this.collect_from(grammar);
        this
    }

    /// Calculates a FIRST set for a string of symbols. Contains `Epsilon`
    /// if the whole string is nullable.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> SymbolSet {
        let mut result = SymbolSet::new(self.alphabet.clone());
        if self.first_set_collect(string, &mut result) {
            result.insert(Symbol::Epsilon);
        }
        result
    }

    /// Returns a copy of FIRST(sym).
    ///
    /// For a nonterminal this is its converged set, or an empty set if the
    /// grammar does not know it. A terminal's FIRST set is the terminal
    /// itself and `Epsilon`'s is `{ε}`.
    pub fn first_of(&self, sym: Symbol) -> SymbolSet {
        let mut result = SymbolSet::new(self.alphabet.clone());
        match sym {
            Symbol::NonTerminal(nt) => {
                if let Some(first_set) = self.map.get(&nt) {
                    result.union(first_set);
                }
            }
            Symbol::Terminal(_) | Symbol::Epsilon => {
                result.insert(sym);
            }
            Symbol::EndMarker => {}
        }
        result
    }

    /// Number of passes over the rules it took to reach the fixed point,
    /// including the final pass that changed nothing.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Collects FIRST(string) without `Epsilon` into `dest`. Returns whether
    /// the string is nullable.
    ///
    /// Nonterminals missing from the table are skipped.
    pub(crate) fn first_set_collect(&self, string: &[Symbol], dest: &mut SymbolSet) -> bool {
        for &sym in string {
            match sym {
                Symbol::Terminal(_) | Symbol::EndMarker => {
                    dest.insert(sym);
                    return false;
                }
                Symbol::Epsilon => {}
                Symbol::NonTerminal(nt) => match self.map.get(&nt) {
                    None => {
                        trace!("skipping unknown nonterminal {}", nt);
                    }
                    Some(first_set) => {
                        dest.union_terminals(first_set);
                        if !first_set.has_epsilon() {
                            return false;
                        }
                    }
                },
            }
        }
        true
    }

    fn collect_from(&mut self, grammar: &Grammar) {
        let mut lookahead = SymbolSet::new(self.alphabet.clone());
        let mut changed = true;
        while changed {
            changed = false;
            self.passes += 1;
            for rule in grammar.rules() {
                let set_changed = self.process_rule(rule, &mut lookahead);
                changed |= set_changed;
            }
            trace!("FIRST pass {}: changed = {}", self.passes, changed);
        }
        debug!("FIRST sets converged after {} passes", self.passes);
    }

    fn process_rule(&mut self, rule: &Production, lookahead: &mut SymbolSet) -> bool {
        lookahead.clear();
        // `lhs -> ε` falls out of this: the scan runs off the end.
        if self.first_set_collect(&rule.rhs[..], lookahead) {
            lookahead.insert(Symbol::Epsilon);
        }
        match rule.lhs.non_terminal().and_then(|lhs| self.map.get_mut(&lhs)) {
            Some(first_set) => first_set.union(lookahead),
            None => false,
        }
    }
}

impl PredictSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
