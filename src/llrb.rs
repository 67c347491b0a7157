use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    mem,
    ops::Deref,
};

use log::debug;

use crate::error::Error;
use crate::node::{is_black, is_red, size, Link, Node};
use crate::validate::Stats;

/// Default number of entries collected by range iterators for every
/// descent from the root.
pub const ITER_LIMIT: usize = 100;

/// Llrb manage a single instance of in-memory ordered map using
/// [left-leaning-red-black][llrb] tree.
///
/// Apart from the usual map operations, every node caches the size
/// of its sub-tree, which makes order statistics like [`Llrb::rank`]
/// and [`Llrb::select`] O(log n).
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct Llrb<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    pub(crate) name: String,
    pub(crate) root: Link<K, V>,
    pub(crate) batch_size: usize,
}

/// Different ways to construct a new Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Create an empty instance of Llrb, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Llrb<K, V>
    where
        S: AsRef<str>,
    {
        Llrb {
            name: name.as_ref().to_string(),
            root: Default::default(),
            batch_size: ITER_LIMIT,
        }
    }

    /// Create a new instance of Llrb tree and load it with entries
    /// from `iter`. Iterator should return (key, value) tuples, where
    /// key must be unique, a repeated key fails with InvalidArgument.
    pub fn load_from<S, I>(name: S, iter: I) -> Result<Llrb<K, V>, Error>
    where
        S: AsRef<str>,
        I: Iterator<Item = (K, V)>,
    {
        let mut llrb = Llrb::new(name);
        for (key, value) in iter {
            if llrb.put(key, value).is_some() {
                let msg = format!("{}: duplicate key in load_from()", llrb.name);
                return Err(Error::InvalidArgument(msg));
            }
        }
        debug!("{}: loaded {} entries", llrb.name, llrb.len());
        Ok(llrb)
    }
}

/// Maintenance API.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating Llrb instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        size(self.root_deref())
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of entries collected by range iterators in a single
    /// descent from the root, must be at least 1.
    pub fn set_batch_size(&mut self, batch_size: usize) -> Result<(), Error> {
        if batch_size == 0 {
            let msg = format!("{}: batch size must be > 0", self.name);
            return Err(Error::InvalidArgument(msg));
        }
        self.batch_size = batch_size;
        Ok(())
    }

    /// Return the number of entries collected by range iterators per descent.
    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Return quickly with basic statistics, only entries() and node_size()
    /// are valid with this statistics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K, V>>())
    }

    #[inline]
    pub(crate) fn root_deref(&self) -> Option<&Node<K, V>> {
        self.root.as_ref().map(Deref::deref)
    }

    fn set_root(&mut self, root: Link<K, V>) {
        self.root = root.map(|mut root| {
            root.set_black();
            root
        });
    }
}

type Upsert<K, V> = (Box<Node<K, V>>, Option<V>);

type Delete<K, V> = (Link<K, V>, Option<V>);

type Delmin<K, V> = (Link<K, V>, Option<Box<Node<K, V>>>);

/// Write operations on Llrb instance.
impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let (root, old_value) = Llrb::upsert(self.root.take(), key, value);
        self.set_root(Some(root));
        old_value
    }

    /// Delete key from this instance and return its value. If key is
    /// not present, then delete is effectively a no-op.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.contains(key) {
            return None;
        }
        let mut root = self.root.take()?;
        if is_black(root.left_deref()) && is_black(root.right_deref()) {
            root.set_red();
        }
        let (root, old_value) = Llrb::do_delete(root, key);
        self.set_root(root);
        old_value
    }

    /// Delete the entry with smallest key and return it.
    pub fn delete_min(&mut self) -> Result<(K, V), Error> {
        let mut root = match self.root.take() {
            Some(root) => root,
            None => {
                let msg = format!("{}: delete_min() on empty tree", self.name);
                return Err(Error::EmptyCollection(msg));
            }
        };
        if is_black(root.left_deref()) && is_black(root.right_deref()) {
            root.set_red();
        }
        let (root, old_node) = Llrb::do_delete_min(Some(root));
        self.set_root(root);
        Llrb::into_entry(old_node, "delete_min()")
    }

    /// Delete the entry with largest key and return it.
    pub fn delete_max(&mut self) -> Result<(K, V), Error> {
        let mut root = match self.root.take() {
            Some(root) => root,
            None => {
                let msg = format!("{}: delete_max() on empty tree", self.name);
                return Err(Error::EmptyCollection(msg));
            }
        };
        if is_black(root.left_deref()) && is_black(root.right_deref()) {
            root.set_red();
        }
        let (root, old_node) = Llrb::do_delete_max(Some(root));
        self.set_root(root);
        Llrb::into_entry(old_node, "delete_max()")
    }
}

impl<K, V> Llrb<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    fn upsert(node: Link<K, V>, key: K, value: V) -> Upsert<K, V> {
        let mut node = match node {
            None => return (Node::new(key, value), None),
            Some(node) => node,
        };

        match node.key.cmp(&key) {
            Ordering::Greater => {
                let (left, o) = Llrb::upsert(node.left.take(), key, value);
                node.left = Some(left);
                (Node::walkuprot_23(node), o)
            }
            Ordering::Less => {
                let (right, o) = Llrb::upsert(node.right.take(), key, value);
                node.right = Some(right);
                (Node::walkuprot_23(node), o)
            }
            Ordering::Equal => {
                let old_value = mem::replace(&mut node.value, value);
                (Node::walkuprot_23(node), Some(old_value))
            }
        }
    }

    // caller must make sure that key is present in the sub-tree.
    fn do_delete<Q>(mut node: Box<Node<K, V>>, key: &Q) -> Delete<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if key.cmp(node.key.borrow()) == Ordering::Less {
            let left = node.left_deref();
            if left.is_some() && is_black(left) && is_black(left.and_then(Node::left_deref)) {
                node = Node::move_red_left(node);
            }
            let old_value = match node.left.take() {
                Some(left) => {
                    let (left, old_value) = Llrb::do_delete(left, key);
                    node.left = left;
                    old_value
                }
                None => None,
            };
            return (Some(Node::balance(node)), old_value);
        }

        if is_red(node.left_deref()) {
            node = Node::rotate_right(node);
        }

        if key.cmp(node.key.borrow()) == Ordering::Equal && node.right.is_none() {
            let node = *node;
            return (None, Some(node.value));
        }

        let right = node.right_deref();
        if right.is_some() && is_black(right) && is_black(right.and_then(Node::left_deref)) {
            node = Node::move_red_right(node);
        }

        if key.cmp(node.key.borrow()) == Ordering::Equal {
            let (right, old_node) = Llrb::do_delete_min(node.right.take());
            node.right = right;
            let old_value = match old_node {
                Some(successor) => {
                    let successor = *successor;
                    node.key = successor.key;
                    mem::replace(&mut node.value, successor.value)
                }
                None => panic!("do_delete(): fatal logic, call the programmer"),
            };
            (Some(Node::balance(node)), Some(old_value))
        } else {
            let old_value = match node.right.take() {
                Some(right) => {
                    let (right, old_value) = Llrb::do_delete(right, key);
                    node.right = right;
                    old_value
                }
                None => None,
            };
            (Some(Node::balance(node)), old_value)
        }
    }

    fn do_delete_min(node: Link<K, V>) -> Delmin<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if node.left.is_none() {
            return (node.right.take(), Some(node));
        }
        let left = node.left_deref();
        if is_black(left) && is_black(left.and_then(Node::left_deref)) {
            node = Node::move_red_left(node);
        }
        let (left, old_node) = Llrb::do_delete_min(node.left.take());
        node.left = left;
        (Some(Node::balance(node)), old_node)
    }

    fn do_delete_max(node: Link<K, V>) -> Delmin<K, V> {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if is_red(node.left_deref()) {
            node = Node::rotate_right(node);
        }
        if node.right.is_none() {
            return (node.left.take(), Some(node));
        }
        let right = node.right_deref();
        if is_black(right) && is_black(right.and_then(Node::left_deref)) {
            node = Node::move_red_right(node);
        }
        let (right, old_node) = Llrb::do_delete_max(node.right.take());
        node.right = right;
        (Some(Node::balance(node)), old_node)
    }

    fn into_entry(node: Option<Box<Node<K, V>>>, op: &str) -> Result<(K, V), Error> {
        match node {
            Some(node) => {
                let node = *node;
                Ok((node.key, node.value))
            }
            None => Err(Error::EmptyCollection(format!("{} found no entry", op))),
        }
    }
}
