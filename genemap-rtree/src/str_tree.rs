use std::ops::Range;

use genemap_core::models::{Entry, Rect};

/// Maximum number of children (or leaf entries) per node.
const NODE_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy)]
enum Children {
    /// A leaf node owning a contiguous run of the entry array.
    Entries { start: usize, len: usize },
    /// An inner node owning a contiguous run of the node array.
    Nodes { start: usize, len: usize },
}

#[derive(Debug, Clone)]
struct Node {
    rect: Rect,
    children: Children,
}

/// A Sort-Tile-Recursive packed rectangle tree.
///
/// STR bulk loading (Leutenegger et al., "STR: A Simple and Efficient
/// Algorithm for R-Tree Packing") sorts the entries into vertical slices by
/// x, orders each slice by y, and packs consecutive runs into fully occupied
/// leaves; upper levels are packed the same way over the leaf bounding
/// rectangles. The result is a balanced tree with near-minimal overlap
/// between sibling rectangles, which suits a build-once read-many workload.
///
/// Entries are not required to be unique: identical or overlapping
/// rectangles are all retained and all reported by a covering query.
///
/// # Examples
///
/// ```
/// use genemap_rtree::{Entry, Rect, StrTree};
///
/// let entries = vec![
///     Entry { rect: Rect::from_corners([1, 100], [1, 200]), value: "a" },
///     Entry { rect: Rect::from_corners([1, 150], [1, 300]), value: "b" },
///     Entry { rect: Rect::from_corners([2, 100], [2, 200]), value: "c" },
/// ];
/// let tree = StrTree::build(entries);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.find(&Rect::from_corners([1, 180], [1, 250])).len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StrTree<T> {
    /// Entries in leaf-packed order.
    entries: Vec<Entry<T>>,
    /// All tree nodes, leaves first, each level packed contiguously.
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl<T> StrTree<T> {
    /// Bulk-load a tree from a finite set of entries in a single pass.
    ///
    /// Build order is the only mutation this structure ever sees; the
    /// returned tree is immutable.
    pub fn build(mut entries: Vec<Entry<T>>) -> Self {
        if entries.is_empty() {
            return StrTree {
                entries,
                nodes: Vec::new(),
                root: None,
            };
        }

        // STR packing: order by x, slice, order each slice by y.
        entries.sort_by_key(|e| (e.rect.center(0), e.rect.center(1)));
        let leaf_count = entries.len().div_ceil(NODE_CAPACITY);
        let slice_count = (leaf_count as f64).sqrt().ceil() as usize;
        let slice_len = slice_count * NODE_CAPACITY;
        for slice in entries.chunks_mut(slice_len) {
            slice.sort_by_key(|e| e.rect.center(1));
        }

        // pack leaves over consecutive entry runs
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaf_count);
        for (i, chunk) in entries.chunks(NODE_CAPACITY).enumerate() {
            let rect = bounding_rect(chunk.iter().map(|e| &e.rect));
            nodes.push(Node {
                rect,
                children: Children::Entries {
                    start: i * NODE_CAPACITY,
                    len: chunk.len(),
                },
            });
        }

        // pack upper levels until a single root remains
        let mut level: Range<usize> = 0..nodes.len();
        while level.len() > 1 {
            let next_start = nodes.len();
            let mut i = level.start;
            while i < level.end {
                let end = (i + NODE_CAPACITY).min(level.end);
                let rect = bounding_rect(nodes[i..end].iter().map(|n| &n.rect));
                nodes.push(Node {
                    rect,
                    children: Children::Nodes {
                        start: i,
                        len: end - i,
                    },
                });
                i = end;
            }
            level = next_start..nodes.len();
        }

        let root = Some(level.start);
        StrTree {
            entries,
            nodes,
            root,
        }
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over every stored entry, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    /// Iterate over every entry whose rectangle intersects `query`.
    ///
    /// Intersection is closed on both axes, so a point query on a stored
    /// rectangle's edge is a hit. Result order is unspecified and callers
    /// must not depend on it.
    pub fn find_iter<'a>(&'a self, query: &Rect) -> IterFind<'a, T> {
        IterFind {
            tree: self,
            query: *query,
            stack: self.root.into_iter().collect(),
            entry_range: 0..0,
        }
    }

    /// Collect every intersecting entry into a vector.
    ///
    /// Prefer [`find_iter`](Self::find_iter) when the hits are consumed
    /// immediately.
    pub fn find(&self, query: &Rect) -> Vec<Entry<T>>
    where
        T: Clone,
    {
        self.find_iter(query).cloned().collect()
    }
}

fn bounding_rect<'a>(mut rects: impl Iterator<Item = &'a Rect>) -> Rect {
    // callers never pass an empty chunk
    let first = *rects.next().unwrap();
    rects.fold(first, |acc, r| acc.envelope(r))
}

/// Iterator over the entries intersecting a query rectangle.
///
/// Created by [`StrTree::find_iter`]. Performs a depth-first walk of the
/// packed tree, pruning every subtree whose bounding rectangle misses the
/// query, and yields entry references without allocating the result set.
#[derive(Debug)]
pub struct IterFind<'a, T> {
    tree: &'a StrTree<T>,
    query: Rect,
    stack: Vec<usize>,
    entry_range: Range<usize>,
}

impl<'a, T> Iterator for IterFind<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            // drain the current leaf run first
            for i in self.entry_range.by_ref() {
                let entry = &tree.entries[i];
                if entry.rect.intersects(&self.query) {
                    return Some(entry);
                }
            }

            let node = &tree.nodes[self.stack.pop()?];
            if !node.rect.intersects(&self.query) {
                continue;
            }
            match node.children {
                Children::Entries { start, len } => self.entry_range = start..start + len,
                Children::Nodes { start, len } => self.stack.extend(start..start + len),
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a StrTree<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> std::slice::Iter<'a, Entry<T>> {
        self.entries.iter()
    }
}
