use crate::error::Result;
use crate::sequence::OwningSequence;

/// A rows by columns matrix that owns its cells.
///
/// Every row is its own [`OwningSequence`], so cloning a grid deep-copies
/// every cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OwningGrid<T> {
    rows: OwningSequence<OwningSequence<T>>,
    cols: usize,
}

impl<T: Default> OwningGrid<T> {
    /// Create a grid of default values.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| OwningSequence::with_len(cols)).collect(),
            cols,
        }
    }
}

impl<T> OwningGrid<T> {
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow a cell. A bad row is reported before a bad column.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.rows.get(row)?.get(col)
    }

    pub fn at(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.rows.at(row)?.at(col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.at(row, col)? = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;

    #[test]
    fn test_new_grid_is_default() {
        let grid = OwningGrid::<i32>::new(2, 3);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 2), Ok(&0));
    }

    #[test]
    fn test_set_and_assign_through_at() {
        let mut grid = OwningGrid::<i32>::new(5, 5);
        grid.set(2, 3, 10).unwrap();
        *grid.at(2, 2).unwrap() = 10;
        assert_eq!(grid.get(2, 3), Ok(&10));
        assert_eq!(grid.get(2, 2), Ok(&10));
        assert_eq!(grid.get(3, 3), Ok(&0));
    }

    #[test]
    fn test_bad_row() {
        let grid = OwningGrid::<i32>::new(2, 2);
        assert_eq!(grid.get(2, 0), Err(IndexError { index: 2, len: 2 }));
    }

    #[test]
    fn test_bad_column() {
        let mut grid = OwningGrid::<i32>::new(2, 4);
        assert_eq!(grid.set(0, 4, 1), Err(IndexError { index: 4, len: 4 }));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = OwningGrid::<i32>::new(1, 1);
        let mut copy = original.clone();
        copy.set(0, 0, 9).unwrap();
        assert_eq!(original.get(0, 0), Ok(&0));
    }
}
