use crate::buffer::storage::Storage;
use crate::buffer::{BufferId, Cursor};

/// A traversal handle into one specific buffer.
///
/// A position is a cursor plus the number of steps taken to reach it. Two
/// positions are equal only when they belong to the same buffer, sit on the
/// same cell and have taken the same number of steps. The step count is what
/// tells `begin()` apart from `end()` when both sit on the same cell, which is
/// the case for a fresh buffer and for a full one.
///
/// Positions hold no borrow. Reading or writing through one goes through the
/// owning buffer (`value`, `value_mut`), and moving one forward goes through
/// `step`/`advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    owner: BufferId,
    cursor: Cursor,
    steps: usize,
}

impl Position {
    pub(crate) const fn new(owner: BufferId, cursor: Cursor, steps: usize) -> Self {
        Self {
            owner,
            cursor,
            steps,
        }
    }

    pub fn owner(&self) -> BufferId {
        self.owner
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn slot(&self) -> usize {
        self.cursor.slot()
    }

    /// Steps taken since the traversal started; `end()` always reports the
    /// buffer capacity.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub(crate) fn followed(self, next: Cursor) -> Self {
        Self {
            cursor: next,
            steps: self.steps.saturating_add(1),
            ..self
        }
    }

    pub(crate) fn stepped<T, const N: usize>(self, storage: &Storage<T, N>) -> Self {
        self.followed(storage.successor(self.cursor))
    }

    pub(crate) fn jumped(self, landing: Cursor, k: usize) -> Self {
        Self {
            cursor: landing,
            steps: self.steps.saturating_add(k),
            ..self
        }
    }
}
