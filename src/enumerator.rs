//! The lazy, pull-based enumerator capability that every chain stage implements.

use std::iter::FusedIterator;

use tracing::trace;

use crate::combinators::DropEnumerator;
use crate::combinators::SelectEnumerator;
use crate::combinators::TakeEnumerator;
use crate::combinators::UntilEnumerator;
use crate::combinators::WhereEnumerator;
use crate::destination::Destination;
use crate::error::Error;
use crate::predicate::EqualTo;
use crate::predicate::NotEqualTo;
use crate::predicate::Predicate;

/// A single-pass sequence position: either active (a current element exists) or exhausted.
///
/// Calling `current` or `advance` while exhausted is a contract violation and panics.
/// Chain builders borrow the enumerator mutably, so the parent must outlive every stage
/// built on it, and must not be touched independently while the chain is alive.
/// Enumerators are not meant to be shared across threads.
pub trait Enumerator {
    type Item;

    /// Returns `true` if a current element exists. Calling this repeatedly has no side effects.
    fn has_more(&self) -> bool;

    /// Returns the current element by value.
    fn current(&self) -> Self::Item;

    /// Moves to the next element, or to the exhausted state.
    fn advance(&mut self);

    /// Checked form of `current`.
    fn try_current(&self) -> Result<Self::Item, Error> {
        if self.has_more() {
            Ok(self.current())
        }
        else {
            Err(Error::Exhausted)
        }
    }

    /// Skips up to `count` elements immediately, then passes everything else through.
    fn drop(&mut self, count: usize) -> DropEnumerator<'_, Self>
    where
        Self: Sized,
    {
        DropEnumerator::new(self, count)
    }

    /// Yields at most `count` elements.
    fn take(&mut self, count: usize) -> TakeEnumerator<'_, Self>
    where
        Self: Sized,
    {
        TakeEnumerator::new(self, count)
    }

    /// Lazily maps each element through `func`, which is re-run on every `current` call.
    fn select<U, F>(&mut self, func: F) -> SelectEnumerator<'_, Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        SelectEnumerator::new(self, func)
    }

    /// Stops before the first element that satisfies `pred`.
    fn until<P>(&mut self, pred: P) -> UntilEnumerator<'_, Self, P>
    where
        Self: Sized,
        P: Predicate<Self::Item>,
    {
        UntilEnumerator::new(self, pred)
    }

    /// Stops before the first element equal to `value`.
    fn until_eq(&mut self, value: Self::Item) -> UntilEnumerator<'_, Self, EqualTo<Self::Item>>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        UntilEnumerator::new(self, EqualTo(value))
    }

    /// Keeps only the elements that satisfy `pred`.
    fn where_<P>(&mut self, pred: P) -> WhereEnumerator<'_, Self, P>
    where
        Self: Sized,
        P: Predicate<Self::Item>,
    {
        WhereEnumerator::new(self, pred)
    }

    /// Drops every element equal to `value`.
    fn where_neq(&mut self, value: Self::Item) -> WhereEnumerator<'_, Self, NotEqualTo<Self::Item>>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        WhereEnumerator::new(self, NotEqualTo(value))
    }

    /// Drives the enumerator to exhaustion, collecting every remaining element in order.
    fn to_vec(&mut self) -> Vec<Self::Item> {
        let mut result = Vec::new();

        while self.has_more() {
            result.push(self.current());
            self.advance();
        }

        trace!(count = result.len(), "collected enumerator");
        result
    }

    /// Drives the enumerator to exhaustion, writing each remaining element into `dest`.
    /// Returns the destination, positioned just past the last written element.
    fn copy_to<D>(&mut self, mut dest: D) -> D
    where
        Self: Sized,
        D: Destination<Self::Item>,
    {
        let mut count: usize = 0;

        while self.has_more() {
            dest.put(self.current());
            self.advance();
            count += 1;
        }

        trace!(count, "copied enumerator into destination");
        dest
    }

    /// Adapts this enumerator into a standard iterator.
    fn iter(&mut self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter(self)
    }
}

/// Iterator over the remaining elements of an enumerator, created by `Enumerator::iter`.
pub struct Iter<'p, E>(&'p mut E)
where
    E: Enumerator + ?Sized,
;

impl<'p, E> Iterator for Iter<'p, E>
where
    E: Enumerator + ?Sized,
{
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.0.has_more() {
            return None
        }

        let item = self.0.current();
        self.0.advance();
        Some(item)
    }
}

impl<'p, E> FusedIterator for Iter<'p, E>
where
    E: Enumerator + ?Sized,
{}
