//! Explicit-stack traversal over tree nodes
//!
//! Both iterators keep their own stack instead of recursing, so traversal
//! depth cannot overflow the call stack even on a degenerate tree. Each is
//! lazy, finite, and restartable by constructing it again.

use spmat_core::CoordKey;

use super::node::{Link, Node};

/// Lazy ascending in-order traversal of every stored entry.
pub(super) struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(super) fn new(root: &'a Link<T>) -> Self {
        Self {
            stack: Vec::new(),
            cursor: root.as_deref(),
        }
    }
}

impl<'a, T: Copy> Iterator for InOrder<'a, T> {
    type Item = (CoordKey, T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.cursor = node.right.as_deref();
        Some((node.key, node.value))
    }
}

/// Lazy ascending traversal of the inclusive key interval `[lo, hi]`.
///
/// Left descent stops at nodes whose key is already below `lo`, and a
/// right subtree is only entered while the popped key is at most `hi`, so
/// subtrees entirely outside the interval are pruned.
pub(super) struct KeyRange<'a, T> {
    stack: Vec<&'a Node<T>>,
    cursor: Option<&'a Node<T>>,
    lo: CoordKey,
    hi: CoordKey,
}

impl<'a, T> KeyRange<'a, T> {
    pub(super) fn new(root: &'a Link<T>, lo: CoordKey, hi: CoordKey) -> Self {
        Self {
            stack: Vec::new(),
            cursor: root.as_deref(),
            lo,
            hi,
        }
    }
}

impl<'a, T: Copy> Iterator for KeyRange<'a, T> {
    type Item = (CoordKey, T);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(node) = self.cursor {
                self.stack.push(node);
                self.cursor = if node.key >= self.lo {
                    node.left.as_deref()
                } else {
                    None
                };
            }
            let node = self.stack.pop()?;
            self.cursor = if node.key <= self.hi {
                node.right.as_deref()
            } else {
                None
            };
            if node.key >= self.lo && node.key <= self.hi {
                return Some((node.key, node.value));
            }
        }
    }
}
