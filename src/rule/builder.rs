//! Grammar rules can be built with the builder pattern.
//!
//! ```
//! use cfg_inspect::rule::builder::RuleBuilder;
//! use cfg_inspect::GrammarLimits;
//!
//! let grammar = RuleBuilder::new('S')
//!     .rhs("aA")
//!     .rule('A')
//!     .rhs("b")
//!     .rhs("ε")
//!     .build(&GrammarLimits::default())
//!     .unwrap();
//! assert_eq!(grammar.num_rules(), 3);
//! ```

use crate::error::InvalidGrammar;
use crate::grammar::{Grammar, GrammarLimits};
use crate::rule::Production;
use crate::symbol::{self, Symbol};

/// The rule builder.
#[derive(Clone, Debug)]
pub struct RuleBuilder {
    lhs: Symbol,
    rules: Vec<Production>,
}

impl RuleBuilder {
    /// Creates a rule builder and starts building a rule with the given LHS.
    pub fn new(lhs: char) -> Self {
        RuleBuilder {
            lhs: Symbol::NonTerminal(lhs),
            rules: vec![],
        }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: char) -> Self {
        self.lhs = Symbol::NonTerminal(lhs);
        self
    }

    /// Adds a rule alternative written in rule text glyphs, such as `"aB"`
    /// or `"ε"`.
    pub fn rhs(self, glyphs: &str) -> Self {
        let syms = symbol::symbols(glyphs);
        self.rhs_symbols(syms)
    }

    /// Adds a rule alternative given as symbols.
    pub fn rhs_symbols<S>(mut self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        self.rules.push(Production::new(self.lhs, syms));
        self
    }

    /// Loads the rules into a grammar.
    pub fn build(self, limits: &GrammarLimits) -> Result<Grammar, InvalidGrammar> {
        Grammar::load(self.rules, limits)
    }
}
