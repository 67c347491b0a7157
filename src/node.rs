use std::ops::Deref;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Node corresponds to a single entry in Llrb instance. Color is
/// that of the link pointing to this node from its parent.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) black: bool,       // store: color of incoming link
    pub(crate) size: usize,       // store: number of nodes in sub-tree
    pub(crate) left: Link<K, V>,  // store: left child
    pub(crate) right: Link<K, V>, // store: right child
}

impl<K, V> Node<K, V> {
    // New entries always come in as a red leaf.
    pub(crate) fn new(key: K, value: V) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
            black: false,
            size: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub(crate) fn left_deref(&self) -> Option<&Node<K, V>> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    pub(crate) fn right_deref(&self) -> Option<&Node<K, V>> {
        self.right.as_ref().map(Deref::deref)
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.black = !self.black
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.black
    }

    #[inline]
    pub(crate) fn update_size(&mut self) {
        self.size = 1 + size(self.left_deref()) + size(self.right_deref());
    }
}

/// Local restructuring on a single node, all of them O(1).
impl<K, V> Node<K, V> {
    //              (i)                       (i)
    //               |                         |
    //               h                         x
    //              / \                       / \
    //             /   (r)                  (r)  \
    //            /      \                  /     \
    //          left      x                h      xr
    //                   / \              / \
    //                 xl   xr         left  xl
    //
    pub(crate) fn rotate_left(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = match h.right.take() {
            Some(x) if !x.is_black() => x,
            _ => panic!("rotate_left(): rotating a black link ? call the programmer"),
        };
        h.right = x.left.take();
        x.black = h.black;
        x.size = h.size;
        h.set_red();
        h.update_size();
        x.left = Some(h);
        x
    }

    //              (i)                       (i)
    //               |                         |
    //               h                         x
    //              / \                       / \
    //            (r)  \                     /  (r)
    //            /     \                   /     \
    //           x      right             xl       h
    //          / \                               / \
    //        xl   xr                           xr   right
    //
    pub(crate) fn rotate_right(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let mut x = match h.left.take() {
            Some(x) if !x.is_black() => x,
            _ => panic!("rotate_right(): rotating a black link ? call the programmer"),
        };
        h.left = x.right.take();
        x.black = h.black;
        x.size = h.size;
        h.set_red();
        h.update_size();
        x.right = Some(h);
        x
    }

    //        (x)                   (!x)
    //         |                     |
    //         h                     h
    //        / \                   / \
    //      (y) (z)              (!y) (!z)
    //
    pub(crate) fn flip_colors(&mut self) {
        if let Some(left) = self.left.as_mut() {
            left.toggle_link();
        }
        if let Some(right) = self.right.as_mut() {
            right.toggle_link();
        }
        self.toggle_link();
    }

    // Make sure h.left or one of its children is red, before walking
    // down the left link. Borrows from the right sibling when it is a
    // 3-node, otherwise merges into a 4-node.
    pub(crate) fn move_red_left(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        h.flip_colors();
        if is_red(h.right_deref().and_then(Node::left_deref)) {
            if let Some(right) = h.right.take() {
                h.right = Some(Node::rotate_right(right));
            }
            h = Node::rotate_left(h);
            h.flip_colors();
        }
        h
    }

    // Mirror of move_red_left, for walking down the right link.
    pub(crate) fn move_red_right(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        h.flip_colors();
        if is_red(h.left_deref().and_then(Node::left_deref)) {
            h = Node::rotate_right(h);
            h.flip_colors();
        }
        h
    }

    // Fixup while walking up from an insert.
    pub(crate) fn walkuprot_23(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(h.right_deref()) && !is_red(h.left_deref()) {
            h = Node::rotate_left(h);
        }
        if is_red(h.left_deref()) && is_red(h.left_deref().and_then(Node::left_deref)) {
            h = Node::rotate_right(h);
        }
        if is_red(h.left_deref()) && is_red(h.right_deref()) {
            h.flip_colors();
        }
        h.update_size();
        h
    }

    // Fixup while walking up from a delete, restores left-leaning
    // 2-3 shape left behind by move_red_left/move_red_right.
    pub(crate) fn balance(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(h.right_deref()) {
            h = Node::rotate_left(h);
        }
        if is_red(h.left_deref()) && is_red(h.left_deref().and_then(Node::left_deref)) {
            h = Node::rotate_right(h);
        }
        if is_red(h.left_deref()) && is_red(h.right_deref()) {
            h.flip_colors();
        }
        h.update_size();
        h
    }
}

#[inline]
pub(crate) fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

#[inline]
pub(crate) fn is_black<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(true, |node| node.is_black())
}

#[inline]
pub(crate) fn size<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, |node| node.size)
}
