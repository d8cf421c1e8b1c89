//! # gridkit Core
//!
//! Topology and geometry of structured-quad (raster) grids.
//!
//! This crate provides:
//! - `GridShape`, `UniformSpacing`, `Origin`: the description of a uniform rectilinear grid
//! - `topology`: closed-form generation of every connectivity array
//!   (`nodes_at_link`, `links_at_node`, `patches_at_link`, ...)
//! - `quantity`: link midpoints and lengths, patch areas and centroids
//! - `UniformRectilinearGraph`: all of the above for one grid, behind the
//!   `Connectivity` trait consumed by the finite-difference operators
//!
//! Connectivity arrays are dense `ndarray` arrays of [`index::Id`] with a fixed
//! number of slots per element; absent neighbors hold [`index::BAD_INDEX`].

pub mod buffer;
pub mod error;
pub mod graph;
pub mod index;
pub mod quantity;
pub mod shape;
pub mod spacing;
pub mod topology;

pub use error::{Error, Result};
pub use graph::{Connectivity, GridSpec, UniformRectilinearGraph};
pub use index::{as_index, Id, LinkDir, BAD_INDEX};
pub use shape::GridShape;
pub use spacing::{xy_of_node, Origin, UniformSpacing};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::graph::{Connectivity, GridSpec, UniformRectilinearGraph};
    pub use crate::index::{as_index, Id, LinkDir, BAD_INDEX};
    pub use crate::shape::GridShape;
    pub use crate::spacing::{Origin, UniformSpacing};
}
