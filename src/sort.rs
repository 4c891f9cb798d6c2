//! Comparison sorts. All sort ascending.

use rand::Rng;

/// Stable merge sort into a new vector.
pub fn merge_sort<T: PartialOrd + Clone>(arr: &[T]) -> Vec<T> {
    if arr.len() < 2 {
        return arr.to_vec();
    }
    let (left, right) = arr.split_at(arr.len() / 2);
    merge(&merge_sort(left), &merge_sort(right))
}

/// Merges two sorted slices, taking from `left` on ties.
pub fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// In-place quick sort with a uniformly random pivot.
pub fn quick_sort<T: PartialOrd>(arr: &mut [T]) {
    quick_sort_with_rng(arr, &mut rand::thread_rng());
}

/// Quick sort drawing pivots from `rng`, for reproducible runs.
pub fn quick_sort_with_rng<T: PartialOrd, R: Rng + ?Sized>(arr: &mut [T], rng: &mut R) {
    if arr.len() < 2 {
        return;
    }
    let pivot = partition(arr, rng);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort_with_rng(left, rng);
    quick_sort_with_rng(&mut right[1..], rng);
}

/// Lomuto partition around a random pivot. Returns the pivot's final position; everything
/// before it is not greater than the pivot.
fn partition<T: PartialOrd, R: Rng + ?Sized>(arr: &mut [T], rng: &mut R) -> usize {
    let last = arr.len() - 1;
    arr.swap(rng.gen_range(0..=last), last);

    let mut store = 0;
    for scan in 0..last {
        if arr[scan] <= arr[last] {
            arr.swap(store, scan);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}

pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j] < arr[j - 1] {
            arr.swap(j, j - 1);
            j -= 1;
        }
    }
}

pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    for end in (1..arr.len()).rev() {
        for start in 0..end {
            if arr[start] > arr[start + 1] {
                arr.swap(start, start + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_sorted_halves_when_merged_then_interleaved() {
        assert_eq!(merge(&[1, 4, 9], &[2, 3, 10, 11]), vec![1, 2, 3, 4, 9, 10, 11]);
        assert_eq!(merge::<i32>(&[], &[5]), vec![5]);
    }

    #[test]
    fn given_single_element_when_partitioned_then_pivot_stays() {
        let mut arr = [7];
        assert_eq!(partition(&mut arr, &mut rand::thread_rng()), 0);
    }
}
