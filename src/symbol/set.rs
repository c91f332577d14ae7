//! Sets of terminals, with flags for the empty string and the end marker.

use std::collections::{btree_set, BTreeSet};
use std::rc::Rc;
use std::{fmt, iter};

use bit_vec::BitVec;

use crate::symbol::{Alphabet, Symbol};

/// A set of symbols in the form of a bit vector over a terminal alphabet.
///
/// The two markers are kept outside the bit vector, and so are terminals
/// that the alphabet does not know. FIRST sets may contain `Epsilon`,
/// FOLLOW sets may contain `EndMarker`; neither kind of set ever contains a
/// nonterminal.
#[derive(Clone, Eq, PartialEq)]
pub struct SymbolSet {
    alphabet: Rc<Alphabet>,
    bit_vec: BitVec,
    overflow: BTreeSet<char>,
    epsilon: bool,
    end_marker: bool,
}

/// An iterator over a symbol set.
///
/// Yields terminals in alphabet order, then terminals outside the alphabet
/// in character order, then `Epsilon`, then `EndMarker`.
pub struct Iter<'a> {
    alphabet: &'a Alphabet,
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
    overflow: btree_set::Iter<'a, char>,
    epsilon: bool,
    end_marker: bool,
}

impl SymbolSet {
    /// Constructs an empty set over the given terminal alphabet.
    pub fn new(alphabet: Rc<Alphabet>) -> Self {
        let bit_vec = BitVec::from_elem(alphabet.len(), false);
        SymbolSet {
            alphabet,
            bit_vec,
            overflow: BTreeSet::new(),
            epsilon: false,
            end_marker: false,
        }
    }

    /// Checks whether a given symbol is in this set.
    pub fn contains(&self, sym: Symbol) -> bool {
        match sym {
            Symbol::Terminal(c) => match self.alphabet.index(c) {
                Some(id) => self.bit_vec.get(id).unwrap_or(false),
                None => self.overflow.contains(&c),
            },
            Symbol::Epsilon => self.epsilon,
            Symbol::EndMarker => self.end_marker,
            Symbol::NonTerminal(_) => false,
        }
    }

    /// Whether the set contains the empty string.
    #[inline]
    pub fn has_epsilon(&self) -> bool {
        self.epsilon
    }

    /// Whether the set contains the end marker.
    #[inline]
    pub fn has_end_marker(&self) -> bool {
        self.end_marker
    }

    /// Number of symbols in the set, markers included.
    pub fn len(&self) -> usize {
        self.bit_vec.iter().filter(|&present| present).count()
            + self.overflow.len()
            + self.epsilon as usize
            + self.end_marker as usize
    }

    /// Whether the set has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.none() && self.overflow.is_empty() && !self.epsilon && !self.end_marker
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            alphabet: &self.alphabet,
            iter: self.bit_vec.iter().enumerate(),
            overflow: self.overflow.iter(),
            epsilon: self.epsilon,
            end_marker: self.end_marker,
        }
    }

    /// Returns the symbols present in both sets, in iteration order.
    pub fn intersection(&self, other: &SymbolSet) -> Vec<Symbol> {
        self.iter().filter(|&sym| other.contains(sym)).collect()
    }

    /// Copies the set into an ordered set of symbols.
    pub fn to_btree_set(&self) -> BTreeSet<Symbol> {
        self.iter().collect()
    }

    /// Inserts a symbol. Nonterminals are ignored. Returns whether the set
    /// changed.
    pub(crate) fn insert(&mut self, sym: Symbol) -> bool {
        match sym {
            Symbol::Terminal(c) => match self.alphabet.index(c) {
                Some(id) => {
                    let was_present = self.bit_vec.get(id).unwrap_or(false);
                    self.bit_vec.set(id, true);
                    !was_present
                }
                None => self.overflow.insert(c),
            },
            Symbol::Epsilon => !std::mem::replace(&mut self.epsilon, true),
            Symbol::EndMarker => !std::mem::replace(&mut self.end_marker, true),
            Symbol::NonTerminal(_) => false,
        }
    }

    /// Adds every terminal of `other`, leaving out its markers.
    pub(crate) fn union_terminals(&mut self, other: &SymbolSet) -> bool {
        if !Rc::ptr_eq(&self.alphabet, &other.alphabet) && self.alphabet != other.alphabet {
            let mut changed = false;
            for sym in other.iter().filter(|sym| sym.is_terminal()) {
                changed |= self.insert(sym);
            }
            return changed;
        }
        let mut changed = self.bit_vec.or(&other.bit_vec);
        for &c in &other.overflow {
            changed |= self.overflow.insert(c);
        }
        changed
    }

    /// Adds every symbol of `other`, markers included.
    pub(crate) fn union(&mut self, other: &SymbolSet) -> bool {
        let mut changed = self.union_terminals(other);
        if other.epsilon {
            changed |= self.insert(Symbol::Epsilon);
        }
        if other.end_marker {
            changed |= self.insert(Symbol::EndMarker);
        }
        changed
    }

    /// Empties the set, keeping its alphabet.
    pub(crate) fn clear(&mut self) {
        self.bit_vec.clear();
        self.overflow.clear();
        self.epsilon = false;
        self.end_marker = false;
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                if let Some(c) = self.alphabet.glyph(id) {
                    return Some(Symbol::Terminal(c));
                }
            }
        }
        if let Some(&c) = self.overflow.next() {
            return Some(Symbol::Terminal(c));
        }
        if self.epsilon {
            self.epsilon = false;
            return Some(Symbol::Epsilon);
        }
        if self.end_marker {
            self.end_marker = false;
            return Some(Symbol::EndMarker);
        }
        None
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = Symbol;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, sym) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", sym)?;
        }
        f.write_str("}")
    }
}
