use crate::enumerator::Enumerator;

/// Bounds its parent to at most a fixed number of elements.
///
/// The parent is never advanced past the last element taken: once the limit is reached,
/// the parent is left positioned *at* that element rather than after it.
pub struct TakeEnumerator<'p, E>
where
    E: Enumerator + ?Sized,
{
    parent: &'p mut E,
    remaining: usize,
}

impl<'p, E> TakeEnumerator<'p, E>
where
    E: Enumerator + ?Sized,
{
    pub fn new(parent: &'p mut E, count: usize) -> Self {
        Self { parent, remaining: count }
    }

    /// How many more elements this enumerator may yield, at most.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'p, E> Enumerator for TakeEnumerator<'p, E>
where
    E: Enumerator + ?Sized,
{
    type Item = E::Item;

    fn has_more(&self) -> bool {
        self.parent.has_more() && self.remaining > 0
    }

    fn current(&self) -> Self::Item {
        assert!(self.remaining > 0, "current element requested from an exhausted enumerator");
        self.parent.current()
    }

    fn advance(&mut self) {
        assert!(self.remaining > 0, "advance called on an exhausted enumerator");
        self.remaining -= 1;

        if self.remaining > 0 {
            self.parent.advance();
        }
    }
}
