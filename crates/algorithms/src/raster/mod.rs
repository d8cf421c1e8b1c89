//! Raster fast path
//!
//! The same operators as [`crate::gradients`] and [`crate::divergence`], but
//! written against [`GridShape`] and
//! [`UniformSpacing`](gridkit_core::UniformSpacing) alone: no connectivity
//! arrays are read. Node fields are viewed as `(rows, cols)` grids and link
//! fields are split into their `(rows, cols - 1)` horizontal and
//! `(rows - 1, cols)` vertical blocks.
//!
//! Strided inputs and outputs are accepted. A node field that is not
//! contiguous is copied into a `(rows, cols)` grid first, and a strided link
//! output is filled through a scratch buffer.

mod divergence;
mod gradients;

pub use divergence::calc_flux_div_at_node;
pub use gradients::{calc_diff_at_link, calc_grad_at_link};

use gridkit_core::{Error, GridShape, Result};
use ndarray::{Array1, ArrayView1, ArrayViewMut1, ArrayViewMut2, Axis, CowArray, Ix2};

/// Run a `Zip` on rayon's pool when the `parallel` feature is on
macro_rules! zip_for_each {
    ($zip:expr, $f:expr) => {{
        #[cfg(feature = "parallel")]
        $zip.par_for_each($f);
        #[cfg(not(feature = "parallel"))]
        $zip.for_each($f);
    }};
}
pub(crate) use zip_for_each;

fn block_mismatch(array: &'static str, expected: &[usize], actual: &[usize]) -> Error {
    Error::ShapeMismatch {
        array,
        expected: expected.to_vec(),
        actual: actual.to_vec(),
    }
}

/// View a node field as a `(rows, cols)` grid, copying only if it is strided
fn node_grid<'a>(
    values: &'a ArrayView1<'_, f64>,
    shape: GridShape,
) -> Result<CowArray<'a, f64, Ix2>> {
    values
        .to_shape(shape.dim())
        .map_err(|_| block_mismatch("value_at_node", &[shape.number_of_nodes()], values.shape()))
}

/// Hand `write` a contiguous link buffer: `out` itself when it already is,
/// otherwise a scratch buffer that is copied into `out` afterwards
fn write_contiguous<F>(mut out: ArrayViewMut1<'_, f64>, write: F) -> Result<()>
where
    F: FnOnce(ArrayViewMut1<'_, f64>) -> Result<()>,
{
    if out.is_standard_layout() {
        return write(out);
    }
    let mut scratch = Array1::zeros(out.len());
    write(scratch.view_mut())?;
    out.assign(&scratch);
    Ok(())
}

/// Split a contiguous link buffer into its horizontal and vertical blocks
fn link_blocks_mut<'a>(
    values: ArrayViewMut1<'a, f64>,
    shape: GridShape,
) -> Result<(ArrayViewMut2<'a, f64>, ArrayViewMut2<'a, f64>)> {
    let (rows, cols) = shape.dim();
    let n_horizontal = shape.number_of_horizontal_links();
    let n_vertical = shape.number_of_vertical_links();
    let (horizontal, vertical) = values.split_at(Axis(0), n_horizontal);

    let horizontal = horizontal
        .into_shape_with_order((rows, cols - 1))
        .map_err(|_| block_mismatch("out", &[rows, cols - 1], &[n_horizontal]))?;
    let vertical = vertical
        .into_shape_with_order((rows - 1, cols))
        .map_err(|_| block_mismatch("out", &[rows - 1, cols], &[n_vertical]))?;

    Ok((horizontal, vertical))
}
