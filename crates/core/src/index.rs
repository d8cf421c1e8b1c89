//! Sentinel convention for fixed-arity connectivity arrays
//!
//! Connectivity arrays keep a fixed number of slots per element so kernels can
//! walk them as dense 2D arrays. A slot with no neighbor (the grid boundary)
//! holds [`BAD_INDEX`]; read slots through [`as_index`] rather than relying on
//! the sentinel being arithmetically neutral.

/// Id type stored in connectivity arrays
pub type Id = i64;

/// Sentinel for a structurally absent neighbor
pub const BAD_INDEX: Id = -1;

/// Link direction type stored in `link_dirs_at_node`
pub type LinkDir = i8;

/// The node is the link's tail (the link points away from it)
pub const OUTGOING: LinkDir = 1;

/// The node is the link's head (the link points toward it)
pub const INCOMING: LinkDir = -1;

/// No link in this slot
pub const ABSENT: LinkDir = 0;

/// Interpret a connectivity slot, returning `None` for the sentinel
#[inline]
pub fn as_index(id: Id) -> Option<usize> {
    usize::try_from(id).ok()
}

#[inline]
pub(crate) fn to_id(index: usize) -> Id {
    index as Id
}
