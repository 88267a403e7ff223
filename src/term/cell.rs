//! Attributed cells and strings.

use crate::term::Attr;

/// The "no glyph" sentinel. Writing a NUL cell updates only the
/// attribute of the target cell, leaving its glyph in place.
pub const NUL: char = '\0';

/// One terminal cell: a glyph plus its display attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ACell {
    pub glyph: char,
    pub attr: Attr,
}

impl ACell {
    pub const fn new(glyph: char, attr: Attr) -> Self {
        Self { glyph, attr }
    }

    /// A blank cell in the given attribute.
    pub const fn blank(attr: Attr) -> Self {
        Self { glyph: ' ', attr }
    }
}

impl Default for ACell {
    fn default() -> Self {
        ACell::blank(Attr::DEFAULT)
    }
}

/// An ordered run of attributed cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AString {
    cells: Vec<ACell>,
}

impl AString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a run from plain text, giving every cell the same attribute.
    pub fn from_text(text: &str, attr: Attr) -> Self {
        Self {
            cells: text.chars().map(|glyph| ACell { glyph, attr }).collect(),
        }
    }

    /// `count` copies of `cell`.
    pub fn filled(count: usize, cell: ACell) -> Self {
        Self {
            cells: vec![cell; count],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn push(&mut self, cell: ACell) {
        self.cells.push(cell);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn cells(&self) -> &[ACell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [ACell] {
        &mut self.cells
    }

    /// Drop the attributes, keeping the text.
    pub fn to_text(&self) -> String {
        self.cells.iter().map(|c| c.glyph).collect()
    }
}

impl std::ops::Index<usize> for AString {
    type Output = ACell;

    fn index(&self, index: usize) -> &ACell {
        &self.cells[index]
    }
}

impl std::ops::IndexMut<usize> for AString {
    fn index_mut(&mut self, index: usize) -> &mut ACell {
        &mut self.cells[index]
    }
}

impl<'a> IntoIterator for &'a AString {
    type Item = &'a ACell;
    type IntoIter = std::slice::Iter<'a, ACell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl FromIterator<ACell> for AString {
    fn from_iter<I: IntoIterator<Item = ACell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
