use crate::enumerator::Enumerator;
use crate::predicate::Predicate;

/// Lazily filters its parent, keeping only the elements that satisfy a predicate.
///
/// Whenever the parent has more elements, its current element satisfies the predicate:
/// non-matching elements are skipped on construction and on every advance.
pub struct WhereEnumerator<'p, E, P>(&'p mut E, P)
where
    E: Enumerator + ?Sized,
;

impl<'p, E, P> WhereEnumerator<'p, E, P>
where
    E: Enumerator + ?Sized,
    P: Predicate<E::Item>,
{
    pub fn new(parent: &'p mut E, pred: P) -> Self {
        let mut filtered = Self(parent, pred);

        if filtered.0.has_more() && !filtered.1.test(&filtered.0.current()) {
            filtered.advance();
        }

        filtered
    }
}

impl<'p, E, P> Enumerator for WhereEnumerator<'p, E, P>
where
    E: Enumerator + ?Sized,
    P: Predicate<E::Item>,
{
    type Item = E::Item;

    fn has_more(&self) -> bool {
        self.0.has_more()
    }

    fn current(&self) -> Self::Item {
        self.0.current()
    }

    fn advance(&mut self) {
        self.0.advance();

        // Skip to the next qualifying element, if any.
        while self.0.has_more() && !self.1.test(&self.0.current()) {
            self.0.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::enumerator::Enumerator;
    use crate::source::from_iter;
    use crate::source::from_slice;
    use crate::test_util::TestUtil;

    #[test]
    fn where_() {
        let seq = vec![1, 2, 3, 4, 5];

        assert_eq!(vec![2, 4], from_slice(&seq).where_(|x: &i32| x % 2 == 0).to_vec());
        assert_eq!(Vec::<i32>::new(), from_slice(&seq).where_(|x: &i32| *x > 5).to_vec());
        assert_eq!(seq, from_slice(&seq).where_(|_: &i32| true).to_vec());

        for seq in TestUtil::random_sequences() {
            let pred = |x: &i32| x % 3 != 0;
            let expected = seq.iter().copied().filter(|x| pred(x)).collect::<Vec<_>>();
            assert_eq!(expected, from_slice(&seq).where_(pred).to_vec());
        }
    }

    #[test]
    fn where_neq() {
        let seq = vec![0, 1, 0, 0, 2, 0];
        assert_eq!(vec![1, 2], from_slice(&seq).where_neq(0).to_vec());
        assert_eq!(Vec::<i32>::new(), from_slice(&[0, 0]).where_neq(0).to_vec());
    }

    #[test]
    fn where_positions_on_construction() {
        let seq = vec![1, 3, 5, 6, 7];
        let mut e = from_slice(&seq);

        {
            let w = e.where_(|x: &i32| x % 2 == 0);
            assert!(w.has_more());
            assert_eq!(6, w.current());
        }

        // Non-matching leading elements were consumed from the parent.
        assert_eq!(6, e.current());
    }

    #[test]
    fn where_is_lazy() {
        let tested = Cell::new(0);
        let seq = vec![2, 4, 5, 6, 8];
        let mut e = from_slice(&seq);
        let mut w = e.where_(|x: &i32| { tested.set(tested.get() + 1); x % 2 == 0 });

        // Only the first element has been examined so far.
        assert_eq!(1, tested.get());
        w.advance();
        assert_eq!(2, tested.get());
        w.advance();
        assert_eq!(4, tested.get());
        assert_eq!(6, w.current());
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn current_when_nothing_matches() {
        let seq = vec![1, 3, 5];
        let mut e = from_slice(&seq);
        let w = e.where_(|x: &i32| x % 2 == 0);

        w.current();
    }

    #[test]
    fn where_over_infinite_source() {
        let mut e = from_iter(1u64..);
        let mut evens = e.where_(|x: &u64| x % 2 == 0);
        let mut t = evens.take(4);

        assert_eq!(vec![2, 4, 6, 8], t.to_vec());
    }
}
