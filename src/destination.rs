//! Sinks that `copy_to` writes into.

use std::collections::VecDeque;

/// An output position that accepts one element at a time, moving forward after each write.
pub trait Destination<T> {
    fn put(&mut self, value: T);
}

/// Writes over the slots of a mutable slice, in order.
/// The caller is responsible for providing enough slots; running out is a contract violation.
impl<'d, T> Destination<T> for std::slice::IterMut<'d, T> {
    fn put(&mut self, value: T) {
        match self.next() {
            Some(slot) => *slot = value,
            None => panic!("destination has no remaining slots"),
        }
    }
}

impl<'d, T> Destination<T> for &'d mut Vec<T> {
    fn put(&mut self, value: T) {
        self.push(value);
    }
}

impl<'d, T> Destination<T> for &'d mut VecDeque<T> {
    fn put(&mut self, value: T) {
        self.push_back(value);
    }
}
