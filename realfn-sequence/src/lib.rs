//! Owning, contiguous containers with checked indexing.
//!
//! [`OwningSequence`] is a growable array that owns every element it holds.
//! Each growth or shrink step allocates exactly-sized fresh storage, so the
//! backing storage never carries spare capacity. Copying a sequence is always
//! a deep copy.
//!
//! [`OwningGrid`] is a rows by columns matrix built out of one sequence per
//! row.
mod error;
mod grid;
mod sequence;

pub use error::{IndexError, Result};
pub use grid::OwningGrid;
pub use sequence::OwningSequence;
