use crate::buffer::CircularBuffer;
use std::iter::FusedIterator;

/// Consumes unread values through `get` until the read cursor hits a read cell.
pub struct Drain<'a, T, const N: usize> {
    buffer: &'a mut CircularBuffer<T, N>,
}

impl<'a, T, const N: usize> Drain<'a, T, N> {
    pub(crate) fn new(buffer: &'a mut CircularBuffer<T, N>) -> Self {
        Self { buffer }
    }
}

impl<T: Clone, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.try_get()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unread = self.buffer.len();
        (unread, Some(unread))
    }
}

impl<T: Clone, const N: usize> ExactSizeIterator for Drain<'_, T, N> {}

impl<T: Clone, const N: usize> FusedIterator for Drain<'_, T, N> {}
