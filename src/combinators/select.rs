use crate::enumerator::Enumerator;

/// Lazily maps each element of its parent through a transform, possibly changing the element type.
/// The transform is not cached: it runs again on every `current` call.
pub struct SelectEnumerator<'p, E, F>(&'p mut E, F)
where
    E: Enumerator + ?Sized,
;

impl<'p, E, F> SelectEnumerator<'p, E, F>
where
    E: Enumerator + ?Sized,
{
    pub fn new(parent: &'p mut E, func: F) -> Self {
        Self(parent, func)
    }
}

impl<'p, E, F, U> Enumerator for SelectEnumerator<'p, E, F>
where
    E: Enumerator + ?Sized,
    F: Fn(E::Item) -> U,
{
    type Item = U;

    fn has_more(&self) -> bool {
        self.0.has_more()
    }

    fn current(&self) -> Self::Item {
        (self.1)(self.0.current())
    }

    fn advance(&mut self) {
        self.0.advance()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use str_macro::str;

    use crate::enumerator::Enumerator;
    use crate::source::from_slice;
    use crate::test_util::TestUtil;

    #[test]
    fn select() {
        let seq = vec![1, 2, 3];
        assert_eq!(vec![1, 4, 9], from_slice(&seq).select(|x| x * x).to_vec());

        for seq in TestUtil::random_sequences() {
            let expected = seq.iter().map(|x| x - 7).collect::<Vec<_>>();
            assert_eq!(expected, from_slice(&seq).select(|x| x - 7).to_vec());
        }
    }

    #[test]
    fn select_changes_type() {
        let seq = vec![1, 22, 333];
        let produced = from_slice(&seq).select(|x: i32| x.to_string()).to_vec();
        assert_eq!(vec![str!("1"), str!("22"), str!("333")], produced);

        let lengths = from_slice(&produced).select(|s: String| s.len()).to_vec();
        assert_eq!(vec![1usize, 2, 3], lengths);
    }

    #[test]
    fn select_reruns_transform() {
        let calls = Cell::new(0);
        let seq = vec![5, 6];
        let mut e = from_slice(&seq);
        let s = e.select(|x| { calls.set(calls.get() + 1); x + 1 });

        assert_eq!(6, s.current());
        assert_eq!(6, s.current());
        assert_eq!(2, calls.get());
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn current_past_end() {
        let seq = vec![1];
        let mut e = from_slice(&seq);
        let mut s = e.select(|x| x * 2);

        s.advance();
        s.current();
    }

    #[test]
    fn select_then_filter() {
        let seq = vec![1, 2, 3, 4, 5, 6];
        let produced = from_slice(&seq)
            .select(|x| x * 3)
            .where_(|x: &i32| x % 2 == 0)
            .to_vec();

        assert_eq!(vec![6, 12, 18], produced);
    }
}
