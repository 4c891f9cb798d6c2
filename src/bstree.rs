//! Unbalanced binary search tree over a single element kind.
//!
//! Structural changes walk a `&mut Link<V>` cursor down to the slot they affect and reassign that
//! slot in place. Walks, checks and teardown are loops over an explicit stack, so a degenerate
//! (sorted-input) tree is bounded by heap memory, not by the call stack.

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::{debug, instrument, warn};

use crate::element::Element;
use crate::errors::{ContainerError, ContainerResult};

/// Owning link to a subtree.
pub type Link<V> = Option<Box<TreeNode<V>>>;

/// Tree node. Owns both children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<V> {
    pub value: V,
    pub left: Link<V>,
    pub right: Link<V>,
}

impl<V> TreeNode<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: TreeNode<V>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: TreeNode<V>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Leftmost node of this subtree.
    pub fn first(&self) -> &TreeNode<V> {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// Rightmost node of this subtree.
    pub fn last(&self) -> &TreeNode<V> {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    /// Edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        height
    }

    fn children(&self) -> impl Iterator<Item = &TreeNode<V>> {
        [self.left.as_deref(), self.right.as_deref()]
            .into_iter()
            .flatten()
    }

    fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}

/// Binary search tree holding values of one kind, without duplicates.
///
/// The kind of the first inserted value is recorded; later values of another kind are rejected
/// by `insert`, `delete` and `find` without touching the tree.
#[derive(Debug)]
pub struct OrderedTree<V> {
    root: Link<V>,
    element_kind: Option<&'static str>,
    size: usize,
}

impl<V> Default for OrderedTree<V> {
    fn default() -> Self {
        Self {
            root: None,
            element_kind: None,
            size: 0,
        }
    }
}

impl<V: Element> OrderedTree<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting `values` one after another.
    ///
    /// Duplicates and values of a foreign kind are skipped. A value without a usable ordering
    /// aborts the build with [`ContainerError::NotComparable`].
    #[instrument(level = "debug", skip(values))]
    pub fn from_values<I>(values: I) -> ContainerResult<Self>
    where
        I: IntoIterator<Item = V>,
    {
        let mut tree = Self::new();
        for value in values {
            match tree.try_insert(value) {
                Ok(()) => {}
                Err(e @ ContainerError::NotComparable(_)) => return Err(e),
                Err(e) => debug!("skipping value during bulk load: {}", e),
            }
        }
        Ok(tree)
    }

    /// Wraps a hand-assembled node structure without checking it.
    ///
    /// Intended for exercising [`OrderedTree::is_valid`] on trees that break the ordering.
    pub fn from_root(root: TreeNode<V>) -> Self {
        Self {
            element_kind: Some(root.value.kind()),
            size: root.count(),
            root: Some(Box::new(root)),
        }
    }

    pub fn root(&self) -> Option<&TreeNode<V>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Kind fixed by the first insert, `None` while the tree has never held a value.
    pub fn element_kind(&self) -> Option<&'static str> {
        self.element_kind
    }

    fn check_kind(&self, value: &V) -> ContainerResult<()> {
        match self.element_kind {
            Some(expected) if expected != value.kind() => Err(ContainerError::TypeMismatch {
                expected,
                found: value.kind(),
            }),
            _ => Ok(()),
        }
    }

    /// Inserts `value`, reporting why it was rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn try_insert(&mut self, value: V) -> ContainerResult<()> {
        self.check_kind(&value)?;
        if !value.is_comparable() {
            return Err(ContainerError::NotComparable(format!("{value:?}")));
        }
        if self.find(&value).is_some() {
            return Err(ContainerError::Duplicate(format!("{value:?}")));
        }

        let kind = value.kind();
        insert_node(&mut self.root, value);
        self.element_kind.get_or_insert(kind);
        self.size += 1;
        Ok(())
    }

    /// Inserts `value`. Returns `false` if it was rejected (foreign kind, not comparable,
    /// or already present).
    pub fn insert(&mut self, value: V) -> bool {
        match self.try_insert(value) {
            Ok(()) => true,
            Err(e @ ContainerError::Duplicate(_)) => {
                debug!("insert rejected: {}", e);
                false
            }
            Err(e) => {
                warn!("insert rejected: {}", e);
                false
            }
        }
    }

    /// Deletes `value`, reporting why nothing was removed.
    #[instrument(level = "debug", skip(self))]
    pub fn try_delete(&mut self, value: &V) -> ContainerResult<()> {
        self.check_kind(value)?;
        if self.find(value).is_none() {
            return Err(ContainerError::NotFound(format!("{value:?}")));
        }

        delete_node(&mut self.root, value);
        self.size -= 1;
        Ok(())
    }

    /// Deletes `value`. Returns `false` if it was of a foreign kind or not present.
    pub fn delete(&mut self, value: &V) -> bool {
        match self.try_delete(value) {
            Ok(()) => true,
            Err(e @ ContainerError::TypeMismatch { .. }) => {
                warn!("delete rejected: {}", e);
                false
            }
            Err(e) => {
                debug!("delete rejected: {}", e);
                false
            }
        }
    }

    /// Node holding `value`. Values of a foreign kind are never found.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, value: &V) -> Option<&TreeNode<V>> {
        if let Err(e) = self.check_kind(value) {
            warn!("find: {}", e);
            return None;
        }

        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.partial_cmp(&node.value) {
                Some(Ordering::Equal) => return Some(node),
                Some(Ordering::Less) => node.left.as_deref(),
                _ => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains(&self, value: &V) -> bool {
        self.find(value).is_some()
    }

    pub fn min(&self) -> Option<&V> {
        self.root.as_deref().map(|root| &root.first().value)
    }

    pub fn max(&self) -> Option<&V> {
        self.root.as_deref().map(|root| &root.last().value)
    }

    /// Next larger value, `None` if `value` is absent or the maximum.
    pub fn successor(&self, value: &V) -> Option<&V> {
        if self.check_kind(value).is_err() {
            return None;
        }

        // lowest ancestor whose left subtree holds `value`
        let mut ancestor: Option<&TreeNode<V>> = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.partial_cmp(&node.value) {
                Some(Ordering::Equal) => {
                    return match node.right.as_deref() {
                        Some(right) => Some(&right.first().value),
                        None => ancestor.map(|a| &a.value),
                    };
                }
                Some(Ordering::Less) => {
                    ancestor = Some(node);
                    current = node.left.as_deref();
                }
                _ => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Edges on the longest root-to-leaf path. Empty and single-node trees have height 0.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, TreeNode::height)
    }

    /// Checks the ordering of every node against all of its ancestors.
    pub fn is_valid(&self) -> bool {
        is_ordered(self.root.as_deref())
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root.as_deref())
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&V> {
        self.iter().collect()
    }

    /// Values breadth-first, root first.
    pub fn level_order(&self) -> Vec<&V> {
        level_traverse(self.root.as_deref())
    }

    /// Drops every node and forgets the element kind.
    pub fn clear(&mut self) {
        drop_links(self.root.take());
        self.element_kind = None;
        self.size = 0;
    }
}

fn insert_node<V: PartialOrd>(root: &mut Link<V>, value: V) {
    let mut cursor = root;
    while let Some(node) = cursor {
        cursor = if value < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    *cursor = Some(Box::new(TreeNode::new(value)));
}

fn delete_node<V: PartialOrd>(root: &mut Link<V>, value: &V) {
    let mut cursor = root;
    loop {
        let ord = match cursor.as_deref() {
            Some(node) => value.partial_cmp(&node.value),
            None => return,
        };
        match ord {
            Some(Ordering::Equal) => break,
            Some(Ordering::Less) => {
                if let Some(node) = cursor {
                    cursor = &mut node.left;
                }
            }
            _ => {
                if let Some(node) = cursor {
                    cursor = &mut node.right;
                }
            }
        }
    }

    let Some(mut node) = cursor.take() else {
        return;
    };
    *cursor = match (node.left.is_some(), node.right.is_some()) {
        (true, true) => {
            if let Some(successor) = take_min(&mut node.right) {
                node.value = successor;
            }
            Some(node)
        }
        (true, false) => node.left.take(),
        (false, _) => node.right.take(),
    };
}

/// Detaches the leftmost node below `slot`, splicing its right subtree into its place.
fn take_min<V>(slot: &mut Link<V>) -> Option<V> {
    let mut cursor = slot;
    while cursor.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = cursor {
            cursor = &mut node.left;
        }
    }

    let node = cursor.take()?;
    let TreeNode { value, right, .. } = *node;
    *cursor = right;
    Some(value)
}

fn is_ordered<V: PartialOrd>(root: Option<&TreeNode<V>>) -> bool {
    let mut stack: Vec<(&TreeNode<V>, Option<&V>, Option<&V>)> = root
        .map(|node| (node, None, None))
        .into_iter()
        .collect();

    while let Some((node, lower, upper)) = stack.pop() {
        let above_lower = lower.map_or(true, |lo| node.value > *lo);
        let below_upper = upper.map_or(true, |hi| node.value < *hi);
        if !(above_lower && below_upper) {
            return false;
        }
        stack.extend(node.left.as_deref().map(|left| (left, lower, Some(&node.value))));
        stack.extend(node.right.as_deref().map(|right| (right, Some(&node.value), upper)));
    }
    true
}

/// Tears down a subtree one node at a time.
fn drop_links<V>(root: Link<V>) {
    let mut stack: Vec<Box<TreeNode<V>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<V> Drop for OrderedTree<V> {
    fn drop(&mut self) {
        drop_links(self.root.take());
    }
}

/// Breadth-first walk over the subtree rooted at `root`.
pub fn level_traverse<V>(root: Option<&TreeNode<V>>) -> Vec<&V> {
    let mut values = Vec::new();
    let mut queue = VecDeque::new();
    queue.extend(root);

    while let Some(node) = queue.pop_front() {
        values.push(&node.value);
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
    values
}

/// In-order iterator driven by an explicit stack of pending ancestors.
pub struct Iter<'a, V> {
    stack: Vec<&'a TreeNode<V>>,
}

impl<'a, V> Iter<'a, V> {
    fn new(root: Option<&'a TreeNode<V>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, V: Element> IntoIterator for &'a OrderedTree<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
