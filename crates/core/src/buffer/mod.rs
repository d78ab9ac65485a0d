mod cursor;
pub(crate) mod storage;

use crate::config::OverwritePolicy;
use crate::iter::{Drain, Iter, IterMut, Position, Walk};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use storage::Storage;
use tracing::trace;

pub use cursor::Cursor;

static NEXT_BUFFER_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of one buffer instance, carried by every [`Position`] it hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferId(usize);

impl BufferId {
    fn fresh() -> Self {
        Self(NEXT_BUFFER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    #[error("expected exactly {expected} initial values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("expected exactly {expected} initial values, got more")]
    TooMany { expected: usize },
}

/// A ring of exactly `N` cells stored inline, with overwrite-on-full writes.
///
/// The cells are linked into a cycle once, at construction. A read cursor and a
/// write cursor move independently along the links; each cell carries a read
/// flag that tells an empty buffer from a full one when both cursors sit on the
/// same cell.
///
/// ```
/// use ringlink_core::CircularBuffer;
///
/// let mut cb: CircularBuffer<char, 3> = CircularBuffer::new();
/// cb.put('a');
/// cb.put('b');
/// assert!(cb.has_unread_data());
/// assert_eq!(cb.get(), 'a');
/// assert_eq!(cb.get(), 'b');
/// assert!(cb.is_empty());
/// ```
///
/// The buffer cannot be cloned. To duplicate one, build a new buffer and copy
/// the values over through iteration.
///
/// ```compile_fail
/// use ringlink_core::CircularBuffer;
///
/// let cb: CircularBuffer<u8, 4> = CircularBuffer::new();
/// let copy = cb.clone();
/// ```
pub struct CircularBuffer<T, const N: usize> {
    storage: Storage<T, N>,
    read: Cursor,
    write: Cursor,
    id: BufferId,
    policy: OverwritePolicy,
}

impl<T, const N: usize> CircularBuffer<T, N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "CircularBuffer capacity must be > 0");

    fn from_storage(storage: Storage<T, N>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        Self {
            storage,
            read: Cursor::head(),
            write: Cursor::head(),
            id: BufferId::fresh(),
            policy: OverwritePolicy::default(),
        }
    }

    /// Creates an empty buffer; every cell holds `T::default()` and is marked read.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::from_storage(Storage::linked(std::array::from_fn(|_| T::default()), true))
    }

    /// Creates a buffer from exactly `N` values, leaving it full and unread.
    ///
    /// # Errors
    /// Returns [`CapacityError::LengthMismatch`] when `values` runs out early and
    /// [`CapacityError::TooMany`] when it yields an item past the `N`th. At most
    /// `N + 1` items are pulled, so endless iterators are rejected too.
    pub fn try_from_iter<I>(values: I) -> Result<Self, CapacityError>
    where
        T: Default,
        I: IntoIterator<Item = T>,
    {
        let mut buffer = Self::new();
        let mut values = values.into_iter();
        for written in 0..N {
            match values.next() {
                Some(value) => buffer.put(value),
                None => {
                    return Err(CapacityError::LengthMismatch {
                        expected: N,
                        actual: written,
                    })
                }
            }
        }
        if values.next().is_some() {
            return Err(CapacityError::TooMany { expected: N });
        }
        Ok(buffer)
    }

    /// Like [`try_from_iter`](Self::try_from_iter), for callers that treat a
    /// length mismatch as a bug.
    ///
    /// # Panics
    /// Panics if `values` does not yield exactly `N` items.
    pub fn with_values<I>(values: I) -> Self
    where
        T: Default,
        I: IntoIterator<Item = T>,
    {
        match Self::try_from_iter(values) {
            Ok(buffer) => buffer,
            Err(err) => panic!("{err}"),
        }
    }

    /// # Panics
    /// Panics if the unread cells are not exactly the run from the read cursor
    /// up to the write cursor. That state only arises after a `put` lapped the
    /// ring under [`OverwritePolicy::KeepReadCursor`], and no policy can restore
    /// FIFO order from it.
    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        assert!(
            self.unread_run_matches_cursors(),
            "cannot switch overwrite policy after the read cursor was lapped"
        );
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OverwritePolicy {
        self.policy
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn read_cursor(&self) -> Cursor {
        self.read
    }

    pub fn write_cursor(&self) -> Cursor {
        self.write
    }

    /// Writes `value` at the write cursor and moves the cursor on.
    ///
    /// Never fails: when the target cell still holds unread data it is
    /// overwritten. Whether the read cursor moves along is decided by the
    /// buffer's [`OverwritePolicy`].
    pub fn put(&mut self, value: T) {
        let lapping = self.is_full();
        let cell = self.storage.cell_mut(self.write);
        if !cell.read {
            trace!(
                slot = self.write.slot(),
                policy = %self.policy,
                "overwriting unread slot"
            );
        }
        cell.value = value;
        cell.read = false;
        self.write = self.storage.successor(self.write);
        if lapping && self.policy == OverwritePolicy::DropOldest {
            self.read = self.write;
        }
    }

    /// Returns a copy of the value at the read cursor, marks it read and moves
    /// the cursor on.
    ///
    /// The caller is expected to check [`has_unread_data`](Self::has_unread_data)
    /// first; on an empty buffer this returns whatever stale value the cell
    /// still holds. [`try_get`](Self::try_get) is the checked variant.
    pub fn get(&mut self) -> T
    where
        T: Clone,
    {
        let cell = self.storage.cell_mut(self.read);
        if cell.read {
            trace!(slot = self.read.slot(), "get on a cell without unread data");
        }
        cell.read = true;
        let value = cell.value.clone();
        self.read = self.storage.successor(self.read);
        value
    }

    pub fn try_get(&mut self) -> Option<T>
    where
        T: Clone,
    {
        if self.has_unread_data() {
            Some(self.get())
        } else {
            None
        }
    }

    /// The value `get` would return next, if there is one.
    pub fn peek(&self) -> Option<&T> {
        let cell = self.storage.cell(self.read);
        (!cell.read).then_some(&cell.value)
    }

    pub fn is_empty(&self) -> bool {
        self.read == self.write && self.storage.cell(self.read).read
    }

    pub fn is_full(&self) -> bool {
        self.read == self.write && !self.storage.cell(self.read).read
    }

    pub fn has_unread_data(&self) -> bool {
        !self.storage.cell(self.read).read
    }

    /// Number of unread values `get` can return in a row. Linear in `N`.
    pub fn len(&self) -> usize {
        self.unread().count()
    }

    /// Unread values in the order `get` would return them, without consuming them.
    pub fn unread(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = self.read;
        (0..N).map_while(move |_| {
            let cell = self.storage.cell(cursor);
            cursor = self.storage.successor(cursor);
            (!cell.read).then_some(&cell.value)
        })
    }

    /// Marks every cell read and puts both cursors back on the first cell.
    ///
    /// Stored values are kept until overwritten or until the buffer is dropped.
    pub fn clear(&mut self) {
        self.storage.mark_all_read();
        self.read = Cursor::head();
        self.write = Cursor::head();
    }

    /// Start of a full sweep: the read cursor, zero steps taken.
    pub fn begin(&self) -> Position {
        Position::new(self.id, self.read, 0)
    }

    /// End of a full sweep: the write cursor, `N` steps taken.
    pub fn end(&self) -> Position {
        Position::new(self.id, self.write, N)
    }

    /// One step forward along the links. Valid past `end()`.
    pub fn step(&self, pos: Position) -> Position {
        self.check_owner(pos);
        pos.stepped(&self.storage)
    }

    /// `k` steps forward along the links. Valid past `end()`.
    ///
    /// Follows at most `N - 1` links; whole laps only add to the step count.
    pub fn advance(&self, pos: Position, k: usize) -> Position {
        self.check_owner(pos);
        let mut cursor = pos.cursor();
        for _ in 0..k % N {
            cursor = self.storage.successor(cursor);
        }
        pos.jumped(cursor, k)
    }

    /// Reads the cell under `pos` directly, whatever its read flag.
    ///
    /// # Panics
    /// Panics if `pos` was handed out by another buffer. The same holds for
    /// every method taking a [`Position`].
    pub fn value(&self, pos: Position) -> &T {
        self.check_owner(pos);
        &self.storage.cell(pos.cursor()).value
    }

    /// Writes the cell under `pos` directly. Cursors and read flags stay as they are.
    pub fn value_mut(&mut self, pos: Position) -> &mut T {
        self.check_owner(pos);
        &mut self.storage.cell_mut(pos.cursor()).value
    }

    /// Every cell once, starting at the read cursor.
    pub fn iter(&self) -> Iter<'_, T, N> {
        self.range(self.begin(), self.end())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        let (from, to) = (self.begin(), self.end());
        self.range_mut(from, to)
    }

    pub fn range(&self, from: Position, to: Position) -> Iter<'_, T, N> {
        self.check_owner(from);
        self.check_owner(to);
        Iter::new(&self.storage, from, to)
    }

    /// Mutable counterpart of [`range`](Self::range); stops after one lap.
    pub fn range_mut(&mut self, from: Position, to: Position) -> IterMut<'_, T, N> {
        self.check_owner(from);
        self.check_owner(to);
        IterMut::new(self.storage.cells_mut(), from, to)
    }

    pub fn walk(&self, from: Position) -> Walk<'_, T, N> {
        self.check_owner(from);
        Walk::new(&self.storage, from)
    }

    pub fn drain(&mut self) -> Drain<'_, T, N> {
        Drain::new(self)
    }

    /// Assigns `value` to every cell of a full sweep. Cursors and read flags
    /// stay as they are.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for slot in self.iter_mut() {
            *slot = value.clone();
        }
    }

    /// First position of a full sweep whose value matches `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<Position>
    where
        P: FnMut(&T) -> bool,
    {
        let mut it = self.iter();
        loop {
            let pos = it.position();
            if predicate(it.next()?) {
                return Some(pos);
            }
        }
    }

    fn check_owner(&self, pos: Position) {
        assert_eq!(pos.owner(), self.id, "position belongs to another buffer");
    }

    fn unread_run_matches_cursors(&self) -> bool {
        let mut cursor = self.read;
        let mut in_run = self.read != self.write || !self.storage.cell(cursor).read;
        for _ in 0..N {
            if in_run != !self.storage.cell(cursor).read {
                return false;
            }
            cursor = self.storage.successor(cursor);
            if cursor == self.write {
                in_run = false;
            }
        }
        true
    }
}

impl<T: Default, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for CircularBuffer<T, N> {
    /// Same state as `N` consecutive `put`s into an empty buffer.
    fn from(values: [T; N]) -> Self {
        Self::from_storage(Storage::linked(values, false))
    }
}

impl<T: Clone + Default, const N: usize> TryFrom<&[T]> for CircularBuffer<T, N> {
    type Error = CapacityError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_iter(values.iter().cloned())
    }
}

impl<T: Default, const N: usize> FromIterator<T> for CircularBuffer<T, N> {
    /// # Panics
    /// Panics if the iterator does not yield exactly `N` items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_values(iter)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a CircularBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut CircularBuffer<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for CircularBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularBuffer")
            .field("capacity", &N)
            .field("read", &self.read.slot())
            .field("write", &self.write.slot())
            .field("policy", &self.policy)
            .field("cells", &self.storage)
            .finish()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, const N: usize> serde::Serialize for CircularBuffer<T, N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.unread())
    }
}
