use tracing::trace;

use crate::error::{IndexError, Result};

/// A growable array that owns its elements.
///
/// The backing storage is always exactly as long as the sequence: appending
/// or removing an element allocates fresh storage of the new length, moves
/// the surviving elements over and only then releases the old storage.
/// Element moves cannot fail, so a sequence is never observed half-way
/// through a resize.
///
/// Cloning a sequence clones every element; two sequences never share
/// storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OwningSequence<T> {
    items: Box<[T]>,
}

impl<T> Default for OwningSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> OwningSequence<T> {
    /// Create a sequence of `len` default values.
    ///
    /// A length of zero gives a valid, empty sequence with no backing
    /// allocation.
    pub fn with_len(len: usize) -> Self {
        Self {
            items: std::iter::repeat_with(T::default).take(len).collect(),
        }
    }
}

impl<T> OwningSequence<T> {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self {
            items: Box::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items.get(index).ok_or(IndexError { index, len })
    }

    /// Mutably borrow the element at `index`.
    pub fn at(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or(IndexError { index, len })
    }

    /// Add `value` at the end of the sequence.
    pub fn append(&mut self, value: T) {
        let old = std::mem::take(&mut self.items).into_vec();
        let old_len = old.len();
        let mut extended = Vec::with_capacity(old_len + 1);
        extended.extend(old);
        extended.push(value);
        self.items = extended.into_boxed_slice();
        trace!(old_len, new_len = self.items.len(), "sequence grown");
    }

    /// Remove the element at `index` and hand it back.
    ///
    /// The sequence is left untouched when `index` is out of bounds, which
    /// includes every index of an empty sequence.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.items.len();
        if index >= len {
            return Err(IndexError { index, len });
        }
        let mut shrunken = std::mem::take(&mut self.items).into_vec();
        let removed = shrunken.remove(index);
        // into_boxed_slice drops the spare slot
        self.items = shrunken.into_boxed_slice();
        trace!(old_len = len, new_len = self.items.len(), "sequence shrunk");
        Ok(removed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for OwningSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_boxed_slice(),
        }
    }
}

impl<T> FromIterator<T> for OwningSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OwningSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OwningSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
