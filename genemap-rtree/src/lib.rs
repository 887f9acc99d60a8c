//! 2-D spatial indexing for genomic point and range queries.
//!
//! This crate provides [`StrTree`], a bulk-loaded rectangle tree (R-tree
//! family) over the (chromosome axis, signed position) plane. It is built
//! once from the full set of gene annotations and then queried many times;
//! there is no insertion or removal after build, which keeps the structure
//! tightly packed and safe to share across threads without locking.
//!
//! ## Quick Start
//!
//! ```rust
//! use genemap_rtree::{Entry, Rect, StrTree};
//!
//! // one zero-width rectangle per gene: x = chromosome axis, y = signed span
//! let genes = vec![
//!     Entry { rect: Rect::from_corners([17, 43044295], [17, 43170245]), value: "BRCA1" },
//!     Entry { rect: Rect::from_corners([17, 7661779], [17, 7687550]), value: "TP53" },
//! ];
//!
//! let tree = StrTree::build(genes);
//!
//! // a point query is just a degenerate rectangle
//! let hits: Vec<_> = tree.find_iter(&Rect::point(17, 43100000)).collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].value, "BRCA1");
//! ```
//!
//! Queries return every stored entry whose rectangle intersects the query
//! region, in unspecified order; zero matches is an empty result, not an
//! error. Degenerate query rectangles (points, zero-width boxes) are
//! first-class.
pub mod str_tree;

// re-exports
pub use self::str_tree::StrTree;
pub use genemap_core::models::{Entry, Rect};
