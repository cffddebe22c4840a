//! Lazy character iteration over rope trees.

use std::iter::FusedIterator;
use std::str::Chars as StrChars;

use super::rope::{Repr, Text};

/// Iterator over the characters of a [`Text`] in logical order.
///
/// Walks the tree with an explicit stack instead of flattening it into one
/// buffer first, so iteration works on arbitrarily long concatenations.
/// Created by [`Text::chars`].
pub struct Chars<'a> {
    /// Subtrees not yet visited; top of stack is next.
    stack: Vec<&'a Text>,
    /// Characters of the leaf currently being drained.
    current: StrChars<'a>,
    /// Characters left across the whole walk.
    remaining: usize,
}

impl<'a> Chars<'a> {
    pub(crate) fn new(text: &'a Text) -> Self {
        Self {
            stack: vec![text],
            current: "".chars(),
            remaining: text.len(),
        }
    }
}

impl<'a> Iterator for Chars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.current.next() {
                self.remaining -= 1;
                return Some(c);
            }
            match self.stack.pop()?.repr() {
                Repr::Leaf(leaf) => self.current = leaf.as_str().chars(),
                Repr::Composite { children, .. } => {
                    self.stack.extend(children.iter().rev());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Chars<'_> {}

impl FusedIterator for Chars<'_> {}

impl<'a> IntoIterator for &'a Text {
    type Item = char;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Chars<'a> {
        self.chars()
    }
}
