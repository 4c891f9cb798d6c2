//! Singly linked list.
//!
//! Only the head is stored, so `push_back`, `pop_back` and indexed access walk the list.

use std::fmt;

use itertools::Itertools;

use crate::errors::{ContainerError, ContainerResult};

#[derive(Debug)]
pub struct ListNode<T> {
    pub value: T,
    pub next: Option<Box<ListNode<T>>>,
}

impl<T> ListNode<T> {
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<ListNode<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn normalize(&self, index: isize) -> isize {
        if index < 0 {
            self.len as isize + index
        } else {
            index
        }
    }

    fn checked_index(&self, index: isize) -> ContainerResult<usize> {
        let idx = self.normalize(index);
        if (0..self.len as isize).contains(&idx) {
            Ok(idx as usize)
        } else {
            Err(ContainerError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn node(&self, idx: usize) -> Option<&ListNode<T>> {
        let mut node = self.head.as_deref();
        for _ in 0..idx {
            node = node?.next.as_deref();
        }
        node
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut ListNode<T>> {
        let mut node = self.head.as_deref_mut();
        for _ in 0..idx {
            node = node?.next.as_deref_mut();
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        let node = Box::new(ListNode {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> ContainerResult<T> {
        let node = self
            .head
            .take()
            .ok_or(ContainerError::EmptyCollection("pop_front"))?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode::new(value)));
        self.len += 1;
    }

    pub fn pop_back(&mut self) -> ContainerResult<T> {
        let last = match self.len {
            0 => None,
            1 => self.head.take(),
            n => self.node_mut(n - 2).and_then(|before| before.next.take()),
        }
        .ok_or(ContainerError::EmptyCollection("pop_back"))?;
        self.len -= 1;
        Ok(last.value)
    }

    pub fn peek_front(&self) -> ContainerResult<&T> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or(ContainerError::EmptyCollection("peek_front"))
    }

    pub fn peek_back(&self) -> ContainerResult<&T> {
        self.len
            .checked_sub(1)
            .and_then(|last| self.node(last))
            .map(|node| &node.value)
            .ok_or(ContainerError::EmptyCollection("peek_back"))
    }

    pub fn get(&self, index: isize) -> ContainerResult<&T> {
        let idx = self.checked_index(index)?;
        self.node(idx)
            .map(|node| &node.value)
            .ok_or(ContainerError::OutOfRange {
                index,
                len: self.len,
            })
    }

    /// Overwrites the value at `index`, returning the previous one.
    pub fn set(&mut self, index: isize, value: T) -> ContainerResult<T> {
        let idx = self.checked_index(index)?;
        let len = self.len;
        let node = self
            .node_mut(idx)
            .ok_or(ContainerError::OutOfRange { index, len })?;
        Ok(std::mem::replace(&mut node.value, value))
    }

    /// Unlinks and returns the value at `index`.
    pub fn delete(&mut self, index: isize) -> ContainerResult<T> {
        let idx = self.checked_index(index)?;
        if idx == 0 {
            return self.pop_front();
        }

        let len = self.len;
        let before = self
            .node_mut(idx - 1)
            .ok_or(ContainerError::OutOfRange { index, len })?;
        let mut removed = before
            .next
            .take()
            .ok_or(ContainerError::OutOfRange { index, len })?;
        before.next = removed.next.take();
        self.len -= 1;
        Ok(removed.value)
    }

    /// Inserts `value` before `index`. Indices past the end append, indices before the start
    /// prepend.
    pub fn insert(&mut self, index: isize, value: T) {
        let idx = self.normalize(index);
        if idx >= self.len as isize {
            self.push_back(value);
        } else if idx <= 0 {
            self.push_front(value);
        } else if let Some(before) = self.node_mut(idx as usize - 1) {
            let node = Box::new(ListNode {
                value,
                next: before.next.take(),
            });
            before.next = Some(node);
            self.len += 1;
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for LinkedList<T> {
    // iterative, a long chain of boxes would otherwise drop recursively
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList([{}])", self.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_push_back_on_empty_when_peeking_then_front_and_back_agree() {
        let mut list = LinkedList::new();
        list.push_back(1);
        assert_eq!(list.peek_front().unwrap(), &1);
        assert_eq!(list.peek_back().unwrap(), &1);
    }

    #[test]
    fn given_two_elements_when_pop_back_then_head_remains() {
        let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.pop_back().unwrap(), 2);
        assert_eq!(list.peek_back().unwrap(), &1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn given_long_list_when_dropped_then_no_stack_overflow() {
        let list: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
