#![deny(warnings)]
//! Fixed-capacity ring buffer with inline storage.
//!
//! [`CircularBuffer`] keeps `N` cells in a single array, linked into a cycle at
//! construction. Writes never fail: once the ring is full they overwrite
//! unread data. Reads are checked by the caller through
//! [`has_unread_data`](CircularBuffer::has_unread_data) or
//! [`is_empty`](CircularBuffer::is_empty).
//!
//! ```
//! use ringlink_core::CircularBuffer;
//!
//! let mut cb: CircularBuffer<char, 5> = CircularBuffer::from(['H', 'E', 'L', 'L', 'O']);
//! for ch in &mut cb {
//!     *ch = ch.to_ascii_lowercase();
//! }
//! assert_eq!(cb.iter().collect::<String>(), "hello");
//! assert_eq!(cb.drain().collect::<String>(), "hello");
//! ```

pub mod buffer;
pub mod config;
pub mod iter;

pub use buffer::{BufferId, CapacityError, CircularBuffer, Cursor};
pub use config::{ConfigError, OverwritePolicy, DEFAULT_OVERWRITE_POLICY};
pub use iter::{Drain, Iter, IterMut, Position, Walk};
