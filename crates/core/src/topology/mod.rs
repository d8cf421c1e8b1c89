//! Topology generator for structured-quad grids
//!
//! Every connectivity array of a `(rows, cols)` grid is derived here by
//! closed-form index arithmetic: one pass over the output, no search and no
//! stored graph. Generators come in two forms:
//!
//! - `fill_*((rows, cols), out)` validates the shape and the caller's buffer,
//!   then fills it. Nothing is written when validation fails.
//! - the allocating form (`nodes_at_link(shape)`, ...) returns a fresh array
//!   for an already-validated [`GridShape`](crate::GridShape).
//!
//! Fixed-arity arrays use [`BAD_INDEX`](crate::index::BAD_INDEX) for slots that
//! fall off the grid.

mod at_cell;
mod at_face;
mod at_link;
mod at_node;
mod at_patch;

pub use at_cell::{cell_at_node, fill_cell_at_node, fill_node_at_cell, node_at_cell};
pub use at_face::{
    face_at_link, fill_face_at_link, fill_link_at_face, fill_nodes_at_face, link_at_face,
    nodes_at_face,
};
pub use at_link::{fill_nodes_at_link, fill_patches_at_link, nodes_at_link, patches_at_link};
pub use at_node::{
    fill_link_dirs_at_node, fill_links_at_node, fill_patches_at_node, link_dirs_at_node,
    links_at_node, patches_at_node,
};
pub use at_patch::{fill_links_at_patch, fill_nodes_at_patch, links_at_patch, nodes_at_patch};
