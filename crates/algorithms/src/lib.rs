//! # gridkit Algorithms
//!
//! Finite-difference operators on structured-quad grids.
//!
//! ## Operators
//!
//! - **gradients**: difference and gradient of a node field along each link
//! - **divergence**: net flux and flux divergence of a link field at each node
//! - **raster**: the same operators computed from the grid shape alone
//!
//! [`FiniteDifference`] puts both implementations behind one interface and
//! [`OperatorPath`] picks between them.

pub mod divergence;
pub mod gradients;
pub mod operator;
pub mod raster;

pub use operator::{FiniteDifference, GraphOperators, OperatorPath, RasterOperators};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::divergence::{calc_flux_div_at_node, calc_net_flux_at_node};
    pub use crate::gradients::{calc_diff_at_link, calc_grad_at_link};
    pub use crate::operator::{FiniteDifference, GraphOperators, OperatorPath, RasterOperators};
    pub use gridkit_core::prelude::*;
}
