use super::cursor::Cursor;
use std::fmt;

/// One slot of the ring.
#[derive(Debug)]
pub(crate) struct Cell<T> {
    pub(crate) value: T,
    /// `true` once consumed, or when never written.
    pub(crate) read: bool,
    pub(crate) next: usize,
}

pub(crate) const fn successor_slot(slot: usize, len: usize) -> usize {
    if slot + 1 == len {
        0
    } else {
        slot + 1
    }
}

/// Fixed array of cells, pre-linked into a single cycle.
pub(crate) struct Storage<T, const N: usize> {
    cells: [Cell<T>; N],
}

impl<T, const N: usize> Storage<T, N> {
    /// Links cell `i` to `i + 1` and the last cell back to the first.
    pub(crate) fn linked(values: [T; N], read: bool) -> Self {
        let mut slot = 0;
        let cells = values.map(|value| {
            let cell = Cell {
                value,
                read,
                next: successor_slot(slot, N),
            };
            slot += 1;
            cell
        });
        Self { cells }
    }

    pub(crate) fn cell(&self, cursor: Cursor) -> &Cell<T> {
        &self.cells[cursor.slot()]
    }

    pub(crate) fn cell_mut(&mut self, cursor: Cursor) -> &mut Cell<T> {
        &mut self.cells[cursor.slot()]
    }

    pub(crate) fn successor(&self, cursor: Cursor) -> Cursor {
        Cursor::at(self.cell(cursor).next)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell<T>; N] {
        &mut self.cells
    }

    pub(crate) fn mark_all_read(&mut self) {
        for cell in &mut self.cells {
            cell.read = true;
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Storage<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_from_head<const N: usize>(storage: &Storage<u8, N>, steps: usize) -> Vec<usize> {
        let mut cursor = Cursor::head();
        let mut seen = Vec::with_capacity(steps);
        for _ in 0..steps {
            seen.push(cursor.slot());
            cursor = storage.successor(cursor);
        }
        seen
    }

    #[test]
    fn cycle_visits_every_cell_once_per_lap() {
        let storage: Storage<u8, 5> = Storage::linked([0; 5], true);
        assert_eq!(slots_from_head(&storage, 10), vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn single_cell_links_to_itself() {
        let storage: Storage<u8, 1> = Storage::linked([7], true);
        assert_eq!(storage.successor(Cursor::head()), Cursor::head());
    }

    #[test]
    fn last_cell_wraps_to_first() {
        assert_eq!(successor_slot(3, 4), 0);
        assert_eq!(successor_slot(2, 4), 3);
        assert_eq!(successor_slot(0, 1), 0);
    }

    #[test]
    fn linked_keeps_values_and_flags() {
        let mut storage: Storage<char, 3> = Storage::linked(['a', 'b', 'c'], false);
        assert!(storage.cells_mut().iter().all(|cell| !cell.read));
        assert_eq!(storage.cell(Cursor::at(1)).value, 'b');

        storage.mark_all_read();
        assert!(storage.cell(Cursor::at(2)).read);
        assert_eq!(storage.cell_mut(Cursor::at(2)).value, 'c');
    }
}
