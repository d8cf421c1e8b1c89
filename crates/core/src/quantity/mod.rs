//! Geometric quantities derived from node coordinates and connectivity
//!
//! Each kernel reads a connectivity array plus coordinate arrays and writes a
//! caller-supplied buffer in one pass. Buffer shapes are checked before any
//! write; id ranges inside connectivity arrays are not.

mod of_link;
mod of_patch;

pub use of_link::{calc_length_of_link, calc_midpoint_of_link};
pub use of_patch::{calc_area_at_patch, calc_centroid_at_patch};
