//! Binary max-heap stored in a vector, plus in-place heap sort.

use crate::errors::{ContainerError, ContainerResult};

fn left_child(idx: usize) -> usize {
    2 * idx + 1
}

fn right_child(idx: usize) -> usize {
    2 * idx + 2
}

fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

fn sift_up<T: Ord>(store: &mut [T], mut idx: usize) {
    while idx > 0 {
        let up = parent(idx);
        if store[idx] <= store[up] {
            break;
        }
        store.swap(idx, up);
        idx = up;
    }
}

/// Moves `store[idx]` down until both children are not larger.
fn sift_down<T: Ord>(store: &mut [T], mut idx: usize) {
    loop {
        let mut largest = idx;
        for child in [left_child(idx), right_child(idx)] {
            if child < store.len() && store[child] > store[largest] {
                largest = child;
            }
        }
        if largest == idx {
            return;
        }
        store.swap(idx, largest);
        idx = largest;
    }
}

fn heapify<T: Ord>(store: &mut [T]) {
    for idx in (0..store.len() / 2).rev() {
        sift_down(store, idx);
    }
}

#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    store: Vec<T>,
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self { store: Vec::new() }
    }
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a heap bottom-up in linear time.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut store: Vec<T> = values.into_iter().collect();
        heapify(&mut store);
        Self { store }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn insert(&mut self, value: T) {
        self.store.push(value);
        let last = self.store.len() - 1;
        sift_up(&mut self.store, last);
    }

    pub fn peek_max(&self) -> ContainerResult<&T> {
        self.store
            .first()
            .ok_or(ContainerError::EmptyCollection("peek_max"))
    }

    pub fn extract_max(&mut self) -> ContainerResult<T> {
        if self.store.is_empty() {
            return Err(ContainerError::EmptyCollection("extract_max"));
        }
        let max = self.store.swap_remove(0);
        sift_down(&mut self.store, 0);
        Ok(max)
    }

    /// Checks that no child is larger than its parent.
    pub fn is_max_heap(&self) -> bool {
        (1..self.store.len()).all(|idx| self.store[parent(idx)] >= self.store[idx])
    }

    /// Consumes the heap, returning its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        heap_sort(&mut self.store);
        self.store
    }
}

/// Sorts `arr` ascending in place.
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    heapify(arr);
    for end in (1..arr.len()).rev() {
        arr.swap(0, end);
        sift_down(&mut arr[..end], 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_index_when_navigating_then_parent_and_children_agree() {
        assert_eq!(left_child(0), 1);
        assert_eq!(right_child(0), 2);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(6), 2);
    }

    #[test]
    fn given_broken_store_when_checked_then_not_max_heap() {
        let heap = MaxHeap {
            store: vec![10, 3, 20],
        };
        assert!(!heap.is_max_heap());
    }

    #[test]
    fn given_equal_siblings_when_checked_then_max_heap() {
        let heap = MaxHeap {
            store: vec![10, 8, 10, 7, 4, 8, 5, 3],
        };
        assert!(heap.is_max_heap());
    }

    #[test]
    fn given_violation_at_leaf_when_checked_then_not_max_heap() {
        let heap = MaxHeap {
            store: vec![10, 8, 10, 7, 4, 9, 2, 100],
        };
        assert!(!heap.is_max_heap());
    }
}
