//! Analysis of small context-free grammars over single-character symbols.
//!
//! Grammars are loaded from rule text such as `S->aS|b`, or built from
//! rules in code. For a loaded grammar the library computes FIRST and
//! FOLLOW sets, checks alternatives for a shared leading symbol, and
//! searches for derivations of terminal strings under explicit limits.
//!
//! ```
//! use cfg_inspect::{Analysis, Grammar, GrammarLoadExt, Symbol};
//!
//! let grammar = Grammar::from_text("S->aS|b").unwrap();
//! let analysis = Analysis::new(grammar);
//! let first: Vec<_> = analysis.first_of(Symbol::NonTerminal('S')).iter().collect();
//! assert_eq!(first, [Symbol::Terminal('a'), Symbol::Terminal('b')]);
//! assert!(!analysis.is_ambiguous());
//! assert!(analysis.derivable("aab"));
//! ```

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![warn(missing_docs)]
#![cfg_attr(test, allow(missing_docs))]

pub mod analysis;
pub mod classification;
pub mod derivation;
pub mod error;
pub mod grammar;
pub mod load;
pub mod prediction;
pub mod rule;
pub mod symbol;

pub use crate::analysis::Analysis;
pub use crate::classification::{detect_ambiguity, find_conflict, Conflict};
pub use crate::derivation::{can_derive, Derivation, DerivationSearch, SearchLimits, SearchStats};
pub use crate::error::{InvalidGrammar, LoadError};
pub use crate::grammar::{load_grammar, Grammar, GrammarLimits};
pub use crate::load::GrammarLoadExt;
pub use crate::prediction::{FirstSets, FollowSets, PredictSets, PredictSetsExt};
pub use crate::rule::Production;
pub use crate::symbol::{Alphabet, Symbol, SymbolSet};
