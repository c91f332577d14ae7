//! Classification of grammars.

pub mod ambiguity;

pub use self::ambiguity::{detect_ambiguity, find_conflict, Conflict};
