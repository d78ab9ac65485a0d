use super::Position;
use crate::buffer::storage::Storage;
use std::iter::FusedIterator;

/// Unbounded walk along the links, starting at a given position.
///
/// Never ends on its own; pair it with `take` or `nth`.
pub struct Walk<'a, T, const N: usize> {
    storage: &'a Storage<T, N>,
    pos: Position,
}

impl<'a, T, const N: usize> Walk<'a, T, N> {
    pub(crate) fn new(storage: &'a Storage<T, N>, from: Position) -> Self {
        Self { storage, pos: from }
    }

    pub fn position(&self) -> Position {
        self.pos
    }
}

impl<'a, T, const N: usize> Iterator for Walk<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let storage = self.storage;
        let value = &storage.cell(self.pos.cursor()).value;
        self.pos = self.pos.stepped(storage);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, const N: usize> FusedIterator for Walk<'_, T, N> {}
