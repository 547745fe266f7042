use crate::enumerator::Enumerator;
use crate::predicate::Predicate;

/// Ends its parent's sequence just before the first element satisfying a stop predicate.
/// The parent is never advanced past that stopping element.
pub struct UntilEnumerator<'p, E, P>(&'p mut E, P)
where
    E: Enumerator + ?Sized,
;

impl<'p, E, P> UntilEnumerator<'p, E, P>
where
    E: Enumerator + ?Sized,
{
    pub fn new(parent: &'p mut E, pred: P) -> Self {
        Self(parent, pred)
    }
}

impl<'p, E, P> Enumerator for UntilEnumerator<'p, E, P>
where
    E: Enumerator + ?Sized,
    P: Predicate<E::Item>,
{
    type Item = E::Item;

    fn has_more(&self) -> bool {
        self.0.has_more() && !self.1.test(&self.0.current())
    }

    fn current(&self) -> Self::Item {
        assert!(self.has_more(), "current element requested from an exhausted enumerator");
        self.0.current()
    }

    // A no-op at the stopping element, so the parent stays there.
    fn advance(&mut self) {
        if self.has_more() {
            self.0.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use str_macro::str;

    use crate::enumerator::Enumerator;
    use crate::source::from_slice;
    use crate::test_util::TestUtil;

    #[test]
    fn until() {
        let seq = vec![1, 2, 3, 4, 5];

        assert_eq!(vec![1, 2, 3], from_slice(&seq).until(|x: &i32| *x == 4).to_vec());
        assert_eq!(Vec::<i32>::new(), from_slice(&seq).until(|x: &i32| *x == 1).to_vec());
        assert_eq!(seq, from_slice(&seq).until(|x: &i32| *x > 10).to_vec());

        for seq in TestUtil::random_sequences() {
            let pred = |x: &i32| x % 5 == 0;
            let expected = seq.iter().copied().take_while(|x| !pred(x)).collect::<Vec<_>>();
            assert_eq!(expected, from_slice(&seq).until(pred).to_vec());
        }
    }

    #[test]
    fn until_eq() {
        let seq = vec![str!("a"), str!("b"), str!(""), str!("c")];
        assert_eq!(vec![str!("a"), str!("b")], from_slice(&seq).until_eq(str!("")).to_vec());
        assert_eq!(seq, from_slice(&seq).until_eq(str!("z")).to_vec());
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn current_at_stop() {
        let seq = vec![1, 2, 3];
        let mut e = from_slice(&seq);
        let u = e.until_eq(1);

        u.current();
    }

    #[test]
    fn until_holds_parent_at_stop() {
        let seq = vec![1, 2, 3, 4, 5];
        let mut e = from_slice(&seq);

        {
            let mut u = e.until_eq(3);
            assert_eq!(vec![1, 2], u.to_vec());

            // Advancing at the stopping point is a no-op.
            u.advance();
            assert!(!u.has_more());
        }

        assert_eq!(3, e.current());
        assert_eq!(vec![3, 4, 5], e.to_vec());
    }
}
