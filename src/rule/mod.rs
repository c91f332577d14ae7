//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single nonterminal on its left-hand side and a sequence of
//! symbols on its right-hand side.

pub mod builder;

use std::fmt;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Standard grammar rule representation.
///
/// An empty right-hand side is written as the single symbol `Epsilon`, never
/// as an empty sequence.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Production {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Rc<[Symbol]>,
}

impl Production {
    /// Creates a new rule.
    pub fn new<S>(lhs: Symbol, rhs: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        Production {
            lhs,
            rhs: rhs.as_ref().into(),
        }
    }

    /// Creates a rule of the form `lhs -> ε`.
    pub fn epsilon(lhs: Symbol) -> Self {
        Production::new(lhs, [Symbol::Epsilon])
    }

    /// Whether this rule is exactly `lhs -> ε`.
    pub fn is_epsilon(&self) -> bool {
        self.rhs[..] == [Symbol::Epsilon]
    }

    /// The right-hand side with every `Epsilon` left out. Empty for
    /// `lhs -> ε`.
    pub fn expansion(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rhs.iter().copied().filter(|sym| !sym.is_epsilon())
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> ", self.lhs)?;
        for sym in self.rhs.iter() {
            write!(f, "{}", sym)?;
        }
        Ok(())
    }
}
