use tracing::trace;

use crate::enumerator::Enumerator;

/// Skips a fixed number of leading elements when constructed, then passes everything through.
pub struct DropEnumerator<'p, E>(&'p mut E)
where
    E: Enumerator + ?Sized,
;

impl<'p, E> DropEnumerator<'p, E>
where
    E: Enumerator + ?Sized,
{
    /// Advances `parent` up to `count` times right away.
    /// A parent shorter than `count` simply ends up exhausted.
    pub fn new(parent: &'p mut E, count: usize) -> Self {
        let mut skipped: usize = 0;

        while skipped < count && parent.has_more() {
            parent.advance();
            skipped += 1;
        }

        trace!(requested = count, skipped, "dropped leading elements");
        Self(parent)
    }
}

impl<'p, E> Enumerator for DropEnumerator<'p, E>
where
    E: Enumerator + ?Sized,
{
    type Item = E::Item;

    fn has_more(&self) -> bool {
        self.0.has_more()
    }

    fn current(&self) -> Self::Item {
        self.0.current()
    }

    fn advance(&mut self) {
        self.0.advance()
    }
}
