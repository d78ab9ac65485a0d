use super::Position;
use crate::buffer::storage::{Cell, Storage};
use crate::buffer::Cursor;
use std::iter::FusedIterator;

/// Shared traversal between two positions of the same buffer.
///
/// Stops once its step count reaches the one of `to`, so `begin()..end()`
/// always yields exactly `N` values.
pub struct Iter<'a, T, const N: usize> {
    storage: &'a Storage<T, N>,
    pos: Position,
    end: Position,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(crate) fn new(storage: &'a Storage<T, N>, from: Position, to: Position) -> Self {
        Self {
            storage,
            pos: from,
            end: to,
        }
    }

    /// Position of the next value this iterator yields.
    pub fn position(&self) -> Position {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.end.steps().saturating_sub(self.pos.steps())
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let storage = self.storage;
        let value = &storage.cell(self.pos.cursor()).value;
        self.pos = self.pos.stepped(storage);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}

/// Mutable traversal between two positions of the same buffer.
///
/// Never covers more than one lap, so each cell is handed out at most once.
pub struct IterMut<'a, T, const N: usize> {
    // From the starting slot to the end of storage, then from the start of
    // storage up to the starting slot. This is the order the links follow.
    tail: &'a mut [Cell<T>],
    head: &'a mut [Cell<T>],
    pos: Position,
    remaining: usize,
}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(crate) fn new(cells: &'a mut [Cell<T>; N], from: Position, to: Position) -> Self {
        let (head, tail) = cells.split_at_mut(from.slot());
        Self {
            tail,
            head,
            pos: from,
            remaining: to.steps().saturating_sub(from.steps()).min(N),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        if self.tail.is_empty() {
            self.tail = std::mem::take(&mut self.head);
        }
        let tail = std::mem::take(&mut self.tail);
        let (cell, rest) = tail.split_first_mut()?;
        self.tail = rest;
        self.remaining -= 1;
        self.pos = self.pos.followed(Cursor::at(cell.next));
        Some(&mut cell.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for IterMut<'_, T, N> {}

impl<T, const N: usize> FusedIterator for IterMut<'_, T, N> {}
