//! Predicates used by the `until` and `where` combinators.

/// Trait for types that can take a reference to an element and return a boolean.
/// Any `Fn(&T) -> bool` closure is a predicate.
pub trait Predicate<T> {
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Holds for elements equal to the captured value.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualTo<T>(pub T);

impl<T: PartialEq> Predicate<T> for EqualTo<T> {
    fn test(&self, item: &T) -> bool {
        *item == self.0
    }
}

/// Holds for elements not equal to the captured value.
#[derive(Debug, Clone, PartialEq)]
pub struct NotEqualTo<T>(pub T);

impl<T: PartialEq> Predicate<T> for NotEqualTo<T> {
    fn test(&self, item: &T) -> bool {
        *item != self.0
    }
}
