//! Traversal over a [`CircularBuffer`](crate::CircularBuffer).
//!
//! Two contracts share the [`Position`] handle:
//!
//! * bounded: [`Iter`] and [`IterMut`] go from one position until their step
//!   count reaches another's. `begin()..end()` is exactly one lap.
//! * unbounded: [`Walk`], `step` and `advance` keep cycling past `end()`.
//!
//! Neither touches the read/write cursors or the read flags. [`Drain`] is the
//! consuming counterpart that goes through `get`.

mod bounded;
mod drain;
mod position;
mod walk;

pub use bounded::{Iter, IterMut};
pub use drain::Drain;
pub use position::Position;
pub use walk::Walk;
