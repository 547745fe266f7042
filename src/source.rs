//! Source adapters, which bridge external data into the enumerator abstraction.
//! These are the only enumerators that do not wrap another enumerator.

use crate::enumerator::Enumerator;

/// A position marker in some external sequence.
/// Two cursors compare equal when they denote the same position.
pub trait Cursor: PartialEq {
    type Item;

    /// Returns the element at this position.
    fn get(&self) -> Self::Item;

    /// Moves this position forward by one.
    fn step(&mut self);
}

/// A position within a borrowed slice, yielding clones of its elements.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn begin(slice: &'a [T]) -> Self {
        Self { slice, pos: 0 }
    }

    pub fn end(slice: &'a [T]) -> Self {
        Self { slice, pos: slice.len() }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
}

// Manual impls, deriving would needlessly require `T: Clone` and `T: PartialEq`.
impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        Self { slice: self.slice, pos: self.pos }
    }
}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<'a, T: Clone> Cursor for SliceCursor<'a, T> {
    type Item = T;

    fn get(&self) -> Self::Item {
        self.slice[self.pos].clone()
    }

    fn step(&mut self) {
        self.pos += 1;
    }
}

macro_rules! integer_cursor {
    ($($int:ty),* $(,)?) => {
        $(
            impl Cursor for $int {
                type Item = $int;

                fn get(&self) -> Self::Item {
                    *self
                }

                fn step(&mut self) {
                    *self += 1;
                }
            }
        )*
    };
}

integer_cursor!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Enumerates the half-open range of positions `[begin, end)`.
#[derive(Debug, Clone)]
pub struct RangeEnumerator<C: Cursor> {
    begin: C,
    end: C,
}

impl<C: Cursor> RangeEnumerator<C> {
    pub fn new(begin: C, end: C) -> Self {
        Self { begin, end }
    }

    /// The position of the current element.
    pub fn position(&self) -> &C {
        &self.begin
    }
}

impl<C: Cursor> Enumerator for RangeEnumerator<C> {
    type Item = C::Item;

    fn has_more(&self) -> bool {
        self.begin != self.end
    }

    fn current(&self) -> Self::Item {
        assert!(self.has_more(), "current element requested from an exhausted enumerator");
        self.begin.get()
    }

    fn advance(&mut self) {
        assert!(self.has_more(), "advance called on an exhausted enumerator");
        self.begin.step();
    }
}

/// Enumerates the items of any iterator, keeping the next item peeked.
#[derive(Debug, Clone)]
pub struct IterEnumerator<I: Iterator> {
    iter: I,
    head: Option<I::Item>,
}

impl<I: Iterator> IterEnumerator<I> {
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self { iter, head }
    }
}

impl<I> Enumerator for IterEnumerator<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn has_more(&self) -> bool {
        self.head.is_some()
    }

    fn current(&self) -> Self::Item {
        match self.head {
            Some(ref item) => item.clone(),
            None => panic!("current element requested from an exhausted enumerator"),
        }
    }

    fn advance(&mut self) {
        assert!(self.head.is_some(), "advance called on an exhausted enumerator");
        self.head = self.iter.next();
    }
}

/// Builds a source enumerator over the positions `[begin, end)`.
pub fn from<C: Cursor>(begin: C, end: C) -> RangeEnumerator<C> {
    RangeEnumerator::new(begin, end)
}

/// Builds a source enumerator over clones of the elements of a slice.
pub fn from_slice<T: Clone>(slice: &[T]) -> RangeEnumerator<SliceCursor<'_, T>> {
    from(SliceCursor::begin(slice), SliceCursor::end(slice))
}

/// Builds a source enumerator over the items of an iterable.
pub fn from_iter<I>(iterable: I) -> IterEnumerator<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    IterEnumerator::new(iterable.into_iter())
}
