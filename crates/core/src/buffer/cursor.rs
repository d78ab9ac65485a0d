/// A slot on the cycle of cells: where the next read or write lands.
///
/// Cursors are only produced by the buffer that owns the cells, so the slot is
/// always in range. They move forward by following the successor link; there
/// is no way to step backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    slot: usize,
}

impl Cursor {
    pub(crate) const fn head() -> Self {
        Self { slot: 0 }
    }

    pub(crate) const fn at(slot: usize) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }
}
