//! Ordered alphabets of symbol glyphs.

use std::collections::BTreeMap;

/// Glyphs in order of first insertion, each with a dense index.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Alphabet {
    glyphs: Vec<char>,
    ids: BTreeMap<char, usize>,
}

impl Alphabet {
    /// Constructs an empty alphabet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a glyph unless already present. Returns whether it was added.
    pub fn insert(&mut self, glyph: char) -> bool {
        if self.ids.contains_key(&glyph) {
            return false;
        }
        self.ids.insert(glyph, self.glyphs.len());
        self.glyphs.push(glyph);
        true
    }

    /// Index of the glyph.
    #[inline]
    pub fn index(&self, glyph: char) -> Option<usize> {
        self.ids.get(&glyph).copied()
    }

    /// Whether the glyph is in the alphabet.
    #[inline]
    pub fn contains(&self, glyph: char) -> bool {
        self.ids.contains_key(&glyph)
    }

    /// The glyph at the given index.
    pub fn glyph(&self, id: usize) -> Option<char> {
        self.glyphs.get(id).copied()
    }

    /// All glyphs, in index order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs[..]
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the alphabet has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
