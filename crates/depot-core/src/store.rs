//! Ordered shelf store
//!
//! An unbalanced binary search tree of [`Item`]s keyed by `Item::id`
//! (lexicographic byte order). Each node exclusively owns its two children.
//!
//! There is no rebalancing: insertion order decides the shape, and inserting
//! ids in strictly monotonic order degrades the tree into a chain whose depth
//! equals its length. Every operation is O(depth). All walks (insert, lookup,
//! in-order traversal, depth, drop) are iterative so a degenerate chain cannot
//! exhaust the call stack.

use std::cmp::Ordering;

use crate::item::Item;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    item: Item,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(item: Item) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }
}

/// Binary search tree keyed by item id
#[derive(Debug, Default)]
pub struct OrderedStore {
    root: Link,
    len: usize,
}

impl OrderedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item by id.
    ///
    /// Returns `false` when an item with the same id is already stored; the
    /// stored item is kept and the new one is dropped.
    pub fn insert(&mut self, item: Item) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match item.id.as_str().cmp(node.item.id.as_str()) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => {
                    tracing::debug!(id = %item.id, "duplicate id, keeping first item");
                    return false;
                }
            }
        }
        *cursor = Some(Node::leaf(item));
        self.len += 1;
        true
    }

    /// Look up an item by id
    pub fn find(&self, id: &str) -> Option<&Item> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match id.cmp(node.item.id.as_str()) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return Some(&node.item),
            }
        }
        None
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Iterate items in ascending id order
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Snapshot of all items in ascending id order
    pub fn in_order_vec(&self) -> Vec<Item> {
        self.in_order().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree)
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, level + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, level + 1));
            }
        }
        max
    }
}

impl Drop for OrderedStore {
    fn drop(&mut self) {
        // Detach children before each node drops so the default recursive
        // Box drop never sees more than one level.
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Extend<Item> for OrderedStore {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl FromIterator<Item> for OrderedStore {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut store = OrderedStore::new();
        store.extend(iter);
        store
    }
}

/// In-order (left, node, right) iterator driven by an explicit stack
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut cursor: Option<&'a Node>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.item)
    }
}
