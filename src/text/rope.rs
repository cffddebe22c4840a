//! The rope value type: leaves, composites, and the operations over them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use once_cell::unsync::OnceCell;
use tracing::trace;

use super::error::TextError;
use super::iter::Chars;
use super::leaf::{self, Leaf};
use super::split::SplitText;

/// An immutable rope of characters.
///
/// A `Text` is a cheap handle over one of two shapes: a *leaf* viewing a
/// slice of a shared source buffer, or a *composite* concatenating two or
/// more children. Cloning bumps a reference count; no operation copies
/// buffer contents or mutates an existing value. Two texts compare equal
/// whenever their character sequences are equal, regardless of internal
/// shape, so values with different construction histories are freely
/// interchangeable.
///
/// Lengths and indices are measured in `char`s.
#[derive(Clone)]
pub struct Text {
    node: Rc<Node>,
}

struct Node {
    /// Char count, fixed at construction.
    len: usize,
    repr: Repr,
}

pub(crate) enum Repr {
    Leaf(Leaf),
    Composite {
        /// Normalized: at least two children, none empty, nested
        /// composites spliced into the list at construction.
        children: Vec<Text>,
        /// Materialized concatenation, computed at most once.
        evaluated: OnceCell<String>,
    },
}

thread_local! {
    /// The one shared empty value.
    static EMPTY: Text = Text::from_leaf(Leaf::new(Rc::from("")));
}

impl Text {
    /// The shared empty text (`len == 0`).
    pub fn empty() -> Text {
        EMPTY.with(Text::clone)
    }

    fn from_leaf(leaf: Leaf) -> Text {
        let len = leaf.char_len();
        Text {
            node: Rc::new(Node {
                len,
                repr: Repr::Leaf(leaf),
            }),
        }
    }

    fn from_children(children: Vec<Text>) -> Text {
        debug_assert!(children.len() >= 2);
        debug_assert!(children.iter().all(|c| !c.is_empty()));
        let len = children.iter().map(Text::len).sum();
        Text {
            node: Rc::new(Node {
                len,
                repr: Repr::Composite {
                    children,
                    evaluated: OnceCell::new(),
                },
            }),
        }
    }

    pub(crate) fn repr(&self) -> &Repr {
        &self.node.repr
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.node.len
    }

    pub fn is_empty(&self) -> bool {
        self.node.len == 0
    }

    /// The character at `index`, or a range error outside `[0, len)`.
    pub fn char_at(&self, index: usize) -> Result<char, TextError> {
        self.char_at_opt(index).ok_or(TextError::IndexOutOfBounds {
            index,
            len: self.node.len,
        })
    }

    fn char_at_opt(&self, index: usize) -> Option<char> {
        match &self.node.repr {
            Repr::Leaf(leaf) => leaf.as_str().chars().nth(index),
            Repr::Composite { children, .. } => {
                // Walk children accumulating lengths to find the owner
                let mut rest = index;
                for child in children {
                    if rest < child.len() {
                        return child.char_at_opt(rest);
                    }
                    rest -= child.len();
                }
                None
            }
        }
    }

    /// Concatenates `self` and `tail` into a new value.
    ///
    /// Empty operands are returned unchanged: the other handle is cloned,
    /// nothing is allocated. Otherwise the operands are renormalized
    /// together, so contiguous leaf views fuse into one wider leaf and
    /// composite child lists are spliced rather than nested. Neither
    /// operand is ever modified, and the result always materializes to the
    /// plain concatenation of the operands' contents.
    pub fn append(&self, tail: &Text) -> Text {
        if self.is_empty() {
            return tail.clone();
        }
        if tail.is_empty() {
            return self.clone();
        }
        compose([self.clone(), tail.clone()])
    }

    /// Joins a sequence of texts into one value.
    ///
    /// Equivalent to folding [`Text::append`] left to right, but builds
    /// the normalized composite directly: empty inputs are dropped,
    /// adjacent contiguous leaves fuse, zero survivors yield the empty
    /// text, and a single survivor is returned as-is.
    pub fn join<I>(texts: I) -> Text
    where
        I: IntoIterator<Item = Text>,
    {
        compose(texts)
    }

    /// Splits into the prefix of `index` characters and the remainder,
    /// or a range error outside `[0, len]`.
    ///
    /// Children wholly on one side of the boundary are shared, not copied;
    /// only the straddling child is split, and leaf splits reslice the
    /// shared buffer. `before.append(&after)` always materializes to the
    /// same sequence as `self`.
    pub fn split(&self, index: usize) -> Result<SplitText, TextError> {
        if index > self.node.len {
            return Err(TextError::SplitOutOfRange {
                index,
                len: self.node.len,
            });
        }
        Ok(self.split_unchecked(index))
    }

    fn split_unchecked(&self, index: usize) -> SplitText {
        if index == 0 {
            return SplitText {
                before: Text::empty(),
                after: self.clone(),
            };
        }
        if index == self.node.len {
            return SplitText {
                before: self.clone(),
                after: Text::empty(),
            };
        }
        match &self.node.repr {
            Repr::Leaf(leaf) => {
                let (head, tail) = leaf.split_at_char(index);
                SplitText {
                    before: Text::from_leaf(head),
                    after: Text::from_leaf(tail),
                }
            }
            Repr::Composite { children, .. } => {
                trace!(index, len = self.node.len, "splitting composite");
                let mut before = Vec::new();
                let mut after = Vec::new();
                let mut rest = index;
                for child in children {
                    if rest >= child.len() {
                        rest -= child.len();
                        before.push(child.clone());
                    } else if rest == 0 {
                        after.push(child.clone());
                    } else {
                        let halves = child.split_unchecked(rest);
                        rest = 0;
                        before.push(halves.before);
                        after.push(halves.after);
                    }
                }
                SplitText {
                    before: compose(before),
                    after: compose(after),
                }
            }
        }
    }

    /// Iterates the characters in logical order without materializing.
    ///
    /// The rope is immutable, so the sequence is restartable: calling
    /// `chars` again yields the same characters from the start.
    pub fn chars(&self) -> Chars<'_> {
        Chars::new(self)
    }

    /// The materialized character sequence.
    ///
    /// A leaf borrows straight from its backing buffer. A composite
    /// concatenates its children on first call and memoizes the result
    /// for the lifetime of the value; later calls return the cached
    /// string without recomputation.
    pub fn as_str(&self) -> &str {
        match &self.node.repr {
            Repr::Leaf(leaf) => leaf.as_str(),
            Repr::Composite {
                children,
                evaluated,
            } => evaluated.get_or_init(|| {
                let mut out = String::new();
                for child in children {
                    out.push_str(child.as_str());
                }
                out
            }),
        }
    }

    /// True when the two handles share one underlying node.
    ///
    /// This is identity, not content equality: appending the empty text
    /// hands back the other operand itself, which this observes.
    pub fn ptr_eq(&self, other: &Text) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

/// Builds a normalized value from an ordered sequence of texts.
///
/// Normalization drops empty inputs, splices composite inputs' child lists
/// one level, and fuses adjacent contiguous leaf views. Zero surviving
/// children collapse to the empty text and one survivor is returned as
/// that child, so callers must never assume a composite comes back.
fn compose<I>(parts: I) -> Text
where
    I: IntoIterator<Item = Text>,
{
    let mut children: Vec<Text> = Vec::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        match &part.node.repr {
            Repr::Composite { children: inner, .. } => {
                for child in inner {
                    push_fused(&mut children, child.clone());
                }
            }
            Repr::Leaf(_) => push_fused(&mut children, part),
        }
    }
    if children.len() > 1 {
        return Text::from_children(children);
    }
    match children.pop() {
        Some(only) => only,
        None => Text::empty(),
    }
}

/// Pushes `next` onto the child list, fusing with the trailing child when
/// both are contiguous views of the same buffer.
fn push_fused(children: &mut Vec<Text>, next: Text) {
    let fused = match (children.last(), &next.node.repr) {
        (Some(prev), Repr::Leaf(tail)) => match &prev.node.repr {
            Repr::Leaf(head) => leaf::fuse(head, tail).map(Text::from_leaf),
            Repr::Composite { .. } => None,
        },
        _ => None,
    };
    match fused {
        Some(wider) => {
            trace!(len = wider.len(), "fused contiguous leaves");
            children.pop();
            children.push(wider);
        }
        None => children.push(next),
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            return Text::empty();
        }
        Text::from_leaf(Leaf::new(Rc::from(value)))
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        if value.is_empty() {
            return Text::empty();
        }
        Text::from_leaf(Leaf::new(Rc::from(value)))
    }
}

impl From<char> for Text {
    fn from(value: char) -> Self {
        let mut buf = [0u8; 4];
        Text::from_leaf(Leaf::new(Rc::from(&*value.encode_utf8(&mut buf))))
    }
}

impl FromIterator<Text> for Text {
    fn from_iter<I: IntoIterator<Item = Text>>(iter: I) -> Self {
        Text::join(iter)
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::empty()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Structural, so diagnostics can see the tree shape without forcing
// materialization of composites.
impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node.repr {
            Repr::Leaf(leaf) => f.debug_tuple("Leaf").field(&leaf.as_str()).finish(),
            Repr::Composite { children, .. } => f.debug_list().entries(children).finish(),
        }
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.node, &other.node) {
            return true;
        }
        self.node.len == other.node.len && self.chars().eq(other.chars())
    }
}

impl Eq for Text {}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.chars() {
            c.hash(state);
        }
    }
}
