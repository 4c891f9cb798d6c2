//! # dsrs
//!
//! Containers built from first principles, with exact semantics on the edge cases.
//!
//! - [`bstree::OrderedTree`] – unbalanced binary search tree over a single element kind:
//!   duplicate rejection, three-case deletion, successor, height, structural self-check,
//!   in-order and level-order traversal
//! - [`dyn_array::DynamicArray`] – growable array over a manually managed buffer with
//!   negative indexing and a ×2 / ÷2 capacity policy
//! - [`linked_list::LinkedList`], [`heap::MaxHeap`], [`sort`], [`graph`] – supporting structures
//!   and algorithms
//!
//! ```rust
//! use dsrs::bstree::OrderedTree;
//!
//! let mut tree = OrderedTree::from_values([8, 3, 12, 10, 18, 17, 11, 9]).unwrap();
//! assert!(tree.delete(&12));
//! let values: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(values, vec![3, 8, 9, 10, 11, 17, 18]);
//! ```

pub mod bstree;
pub mod config;
pub mod dyn_array;
pub mod element;
pub mod errors;
pub mod graph;
pub mod heap;
pub mod linked_list;
pub mod sort;
pub mod tree_traits;
pub mod util;

pub use bstree::{level_traverse, OrderedTree, TreeNode};
pub use config::Settings;
pub use dyn_array::DynamicArray;
pub use element::{Element, Value};
pub use errors::{ConfigError, ContainerError, ContainerResult};
pub use heap::MaxHeap;
pub use linked_list::LinkedList;
pub use tree_traits::TreeDisplay;
