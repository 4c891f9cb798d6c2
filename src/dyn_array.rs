//! Growable array over a manually managed buffer.
//!
//! The buffer is a boxed slice of slots. Slots `[0, len)` are live, the rest are unused.
//! Capacity doubles when a write finds the buffer full and halves when a removal leaves it less
//! than a quarter occupied; both reallocate and move the live elements over.

use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::{Settings, DEFAULT_CAPACITY};
use crate::element::Element;
use crate::errors::{ContainerError, ContainerResult};

#[derive(Debug, Clone)]
pub struct DynamicArray<V> {
    buffer: Box<[Option<V>]>,
    len: usize,
}

fn allocate<V>(capacity: usize) -> Box<[Option<V>]> {
    (0..capacity).map(|_| None).collect()
}

impl<V> Default for DynamicArray<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DynamicArray<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Empty array with the configured default capacity.
    pub fn with_settings(settings: &Settings) -> Self {
        Self::with_capacity(settings.array.default_capacity)
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: allocate(capacity.max(1)),
            len: 0,
        }
    }

    /// Array holding `values`, with room for as many again.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let values: Vec<V> = values.into_iter().collect();
        if values.is_empty() {
            return Self::new();
        }

        let len = values.len();
        let buffer = values
            .into_iter()
            .map(Some)
            .chain(std::iter::repeat_with(|| None).take(len))
            .collect();
        Self { buffer, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Maps a possibly negative index onto `[0, len)`.
    fn normalize(&self, index: isize) -> ContainerResult<usize> {
        let len = self.len as isize;
        let idx = if index < 0 { len + index } else { index };
        if (0..len).contains(&idx) {
            Ok(idx as usize)
        } else {
            Err(ContainerError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn out_of_range(&self, index: isize) -> ContainerError {
        ContainerError::OutOfRange {
            index,
            len: self.len,
        }
    }

    pub fn get(&self, index: isize) -> ContainerResult<&V> {
        let idx = self.normalize(index)?;
        self.buffer[idx]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: isize) -> ContainerResult<&mut V> {
        let idx = self.normalize(index)?;
        let err = self.out_of_range(index);
        self.buffer[idx].as_mut().ok_or(err)
    }

    /// Overwrites the element at `index`, returning the previous one.
    pub fn set(&mut self, index: isize, value: V) -> ContainerResult<V> {
        let idx = self.normalize(index)?;
        let err = self.out_of_range(index);
        self.buffer[idx].replace(value).ok_or(err)
    }

    /// Inserts `value` before the element at `index`.
    ///
    /// `index` must address an existing element; use [`DynamicArray::append`] to add at the end.
    #[instrument(level = "trace", skip(self, value))]
    pub fn insert(&mut self, index: isize, value: V) -> ContainerResult<()> {
        let idx = self.normalize(index)?;
        self.grow_if_full();

        // slot `len` is free after growing; rotate it down to `idx`
        self.buffer[idx..=self.len].rotate_right(1);
        self.buffer[idx] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, index: isize) -> ContainerResult<V> {
        let idx = self.normalize(index)?;
        let value = self.buffer[idx]
            .take()
            .ok_or_else(|| self.out_of_range(index))?;

        self.buffer[idx..self.len].rotate_left(1);
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    pub fn append(&mut self, value: V) {
        self.grow_if_full();
        self.buffer[self.len] = Some(value);
        self.len += 1;
    }

    /// Same as `insert(0, value)`, so it fails on an empty array.
    pub fn prepend(&mut self, value: V) -> ContainerResult<()> {
        self.insert(0, value)
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> ContainerResult<V> {
        if self.len == 0 {
            return Err(ContainerError::EmptyCollection("pop"));
        }
        self.len -= 1;
        let value = self.buffer[self.len].take();
        self.shrink_if_sparse();
        value.ok_or(ContainerError::EmptyCollection("pop"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.buffer[..self.len].iter().flatten()
    }

    fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.resize(self.capacity() * 2);
        }
    }

    fn shrink_if_sparse(&mut self) {
        if self.len < self.capacity() / 4 {
            self.resize(self.capacity() / 2);
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        debug!(
            "resizing dynamic array: {} -> {} (len {})",
            self.capacity(),
            new_capacity,
            self.len
        );
        let mut buffer = allocate(new_capacity);
        for (slot, live) in buffer.iter_mut().zip(self.buffer[..self.len].iter_mut()) {
            *slot = live.take();
        }
        self.buffer = buffer;
    }
}

impl<V: Clone> DynamicArray<V> {
    pub fn to_vec(&self) -> Vec<V> {
        self.iter().cloned().collect()
    }
}

impl<V: Element> DynamicArray<V> {
    fn matches(element: &V, value: &V) -> bool {
        element.kind() == value.kind() && element == value
    }

    /// Index of the first element equal to `value` and of the same kind.
    pub fn find(&self, value: &V) -> Option<usize> {
        self.iter().position(|element| Self::matches(element, value))
    }

    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }

    /// Removes every element matching `value` (see [`DynamicArray::find`]).
    /// Returns how many were removed.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, value: &V) -> usize {
        let positions: Vec<usize> = self
            .iter()
            .positions(|element| Self::matches(element, value))
            .collect();

        // highest first, so earlier positions stay valid
        let mut removed = 0;
        for idx in positions.into_iter().rev() {
            if self.delete(idx as isize).is_ok() {
                removed += 1;
            }
        }
        removed
    }
}

impl<V> FromIterator<V> for DynamicArray<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<V: fmt::Display> fmt::Display for DynamicArray<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicArray([{}])", self.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_array_when_created_then_empty_with_default_capacity() {
        let a: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 8);
    }

    #[test]
    fn given_values_when_created_then_capacity_is_double() {
        let a = DynamicArray::from_values([1, 2]);
        assert_eq!(a.len(), 2);
        assert_eq!(a.capacity(), 4);
    }

    #[test]
    fn given_empty_values_when_created_then_default_capacity() {
        let a = DynamicArray::from_values(Vec::<i32>::new());
        assert_eq!(a.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn given_negative_index_when_normalized_then_counts_from_end() {
        let a = DynamicArray::from_values([10, 20, 30]);
        assert_eq!(a.normalize(-1).unwrap(), 2);
        assert_eq!(a.normalize(-3).unwrap(), 0);
        assert!(a.normalize(-4).is_err());
        assert!(a.normalize(3).is_err());
    }

    #[test]
    fn given_empty_array_when_index_checked_then_out_of_range() {
        let a: DynamicArray<i32> = DynamicArray::new();
        let err = a.normalize(0).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn given_resize_when_growing_then_keeps_elements() {
        let mut a = DynamicArray::from_values([1, 2]);
        a.resize(8);
        assert_eq!(a.capacity(), 8);
        assert_eq!(a.len(), 2);
        assert_eq!(a.to_string(), "DynamicArray([1,2])");
    }

    #[test]
    fn given_full_array_when_inserting_then_grows_before_shift() {
        let mut a = DynamicArray::from_values([1, 2]);
        a.append(3);
        a.append(4);
        assert_eq!(a.capacity(), 4);
        a.insert(1, 9).unwrap();
        assert_eq!(a.capacity(), 8);
        assert_eq!(a.to_vec(), vec![1, 9, 2, 3, 4]);
    }
}
