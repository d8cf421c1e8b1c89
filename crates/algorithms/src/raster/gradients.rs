//! Link differences and gradients on a uniform raster

use super::{link_blocks_mut, node_grid, write_contiguous, zip_for_each};
use gridkit_core::buffer::expect_shape;
use gridkit_core::{GridShape, Result, UniformSpacing};
use ndarray::{s, ArrayView1, ArrayViewMut1, Zip};

/// `(head - tail) / length` over both link blocks
fn write_scaled_differences(
    shape: GridShape,
    value_at_node: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
    dx: f64,
    dy: f64,
) -> Result<()> {
    expect_shape("value_at_node", value_at_node.shape(), &[shape.number_of_nodes()])?;
    expect_shape("out", out.shape(), &[shape.number_of_links()])?;

    let values = node_grid(&value_at_node, shape)?;

    write_contiguous(out, |out| {
        let (horizontal, vertical) = link_blocks_mut(out, shape)?;
        zip_for_each!(
            Zip::from(horizontal)
                .and(values.slice(s![.., 1..]))
                .and(values.slice(s![.., ..-1])),
            |d, &head, &tail| *d = (head - tail) / dx
        );
        zip_for_each!(
            Zip::from(vertical)
                .and(values.slice(s![1.., ..]))
                .and(values.slice(s![..-1, ..])),
            |d, &head, &tail| *d = (head - tail) / dy
        );
        Ok(())
    })
}

/// Difference of a node field across each link (`head - tail`)
pub fn calc_diff_at_link(
    shape: GridShape,
    value_at_node: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    write_scaled_differences(shape, value_at_node, out, 1.0, 1.0)
}

/// Gradient of a node field along each link: `dx` divides horizontal links,
/// `dy` vertical ones
pub fn calc_grad_at_link(
    shape: GridShape,
    spacing: UniformSpacing,
    value_at_node: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    write_scaled_differences(shape, value_at_node, out, spacing.dx(), spacing.dy())
}
