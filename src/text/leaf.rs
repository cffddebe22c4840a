//! Leaf segments: contiguous views into a shared source buffer.

use std::rc::Rc;

use text_size::{TextRange, TextSize};

/// A view over a contiguous run of characters in a shared backing buffer.
///
/// Leaves never copy the buffer; splitting and fusing only adjust the byte
/// span. Spans always lie on `char` boundaries because they are produced
/// either from a whole buffer or from a char-indexed split of an existing
/// leaf.
#[derive(Debug, Clone)]
pub(crate) struct Leaf {
    buffer: Rc<str>,
    span: TextRange,
}

impl Leaf {
    /// A leaf spanning the whole of `buffer`.
    pub(crate) fn new(buffer: Rc<str>) -> Self {
        let span = TextRange::up_to(TextSize::of(&*buffer));
        Self { buffer, span }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buffer[self.span]
    }

    /// Number of characters in the view. O(bytes); callers cache it.
    pub(crate) fn char_len(&self) -> usize {
        self.as_str().chars().count()
    }

    /// Splits at char index `k`, yielding two views of the same buffer
    /// with adjacent, disjoint spans. Requires `0 <= k <= char_len`.
    pub(crate) fn split_at_char(&self, k: usize) -> (Leaf, Leaf) {
        let mid = self.span.start() + byte_offset_of_char(self.as_str(), k);
        let head = Leaf {
            buffer: Rc::clone(&self.buffer),
            span: TextRange::new(self.span.start(), mid),
        };
        let tail = Leaf {
            buffer: Rc::clone(&self.buffer),
            span: TextRange::new(mid, self.span.end()),
        };
        (head, tail)
    }
}

/// Two leaves are directly appendable when they view the same backing
/// buffer and their spans are contiguous; the fused leaf is a single wider
/// view, with no allocation and no change in content. Fusing anything else
/// requires a composite, which is the caller's job.
pub(crate) fn fuse(head: &Leaf, tail: &Leaf) -> Option<Leaf> {
    if Rc::ptr_eq(&head.buffer, &tail.buffer) && head.span.end() == tail.span.start() {
        Some(Leaf {
            buffer: Rc::clone(&head.buffer),
            span: TextRange::new(head.span.start(), tail.span.end()),
        })
    } else {
        None
    }
}

/// Byte offset of char index `k` within `s`. Requires `k <= char count`.
fn byte_offset_of_char(s: &str, k: usize) -> TextSize {
    let mut chars = s.chars();
    for _ in 0..k {
        chars.next();
    }
    TextSize::of(s) - TextSize::of(chars.as_str())
}
