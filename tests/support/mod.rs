#![allow(dead_code)]

use std::collections::BTreeSet;

use cfg_inspect::{Grammar, GrammarLoadExt, Symbol, SymbolSet};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn grammar(text: &str) -> Grammar {
    init_logging();
    match Grammar::from_text(text) {
        Ok(grammar) => grammar,
        Err(error) => panic!("failed to load {:?}: {}", text, error),
    }
}

/// Reads a set written in rule glyphs, e.g. `"ab$"` or `"bε"`.
pub fn glyph_set(glyphs: &str) -> BTreeSet<Symbol> {
    glyphs
        .chars()
        .map(|c| match c {
            'ε' => Symbol::Epsilon,
            '$' => Symbol::EndMarker,
            c => Symbol::Terminal(c),
        })
        .collect()
}

pub fn assert_set(set: &SymbolSet, glyphs: &str) {
    assert_eq!(set.to_btree_set(), glyph_set(glyphs), "set was {}", set);
}

pub fn nt(c: char) -> Symbol {
    Symbol::NonTerminal(c)
}

pub fn t(c: char) -> Symbol {
    Symbol::Terminal(c)
}
