//! Differences and gradients along links, generic over any [`Connectivity`]
//!
//! Sign convention: a link's value is `head - tail`, so on a raster grid
//! horizontal links measure change in +x and vertical links change in +y.

use gridkit_core::buffer::{expect_shape, fill_values};
use gridkit_core::{Connectivity, Result};
use ndarray::{ArrayView1, ArrayViewMut1};

fn check_node_to_link<G: Connectivity + ?Sized>(
    graph: &G,
    value_at_node: &ArrayView1<'_, f64>,
    out: &ArrayViewMut1<'_, f64>,
) -> Result<()> {
    expect_shape("value_at_node", value_at_node.shape(), &[graph.number_of_nodes()])?;
    expect_shape("out", out.shape(), &[graph.number_of_links()])
}

/// Difference of a node field across each link.
///
/// ```text
/// out[link] = value_at_node[head] - value_at_node[tail]
/// ```
///
/// # Panics
/// If `nodes_at_link` holds an id outside `value_at_node`.
pub fn calc_diff_at_link<G: Connectivity + ?Sized>(
    graph: &G,
    value_at_node: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    check_node_to_link(graph, &value_at_node, &out)?;

    let nodes_at_link = graph.nodes_at_link();
    fill_values(out, |link| {
        let tail = nodes_at_link[[link, 0]] as usize;
        let head = nodes_at_link[[link, 1]] as usize;
        value_at_node[head] - value_at_node[tail]
    });
    Ok(())
}

/// Gradient of a node field along each link: the difference divided by the
/// link's length.
pub fn calc_grad_at_link<G: Connectivity + ?Sized>(
    graph: &G,
    value_at_node: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    check_node_to_link(graph, &value_at_node, &out)?;

    let nodes_at_link = graph.nodes_at_link();
    let length_of_link = graph.length_of_link();
    fill_values(out, |link| {
        let tail = nodes_at_link[[link, 0]] as usize;
        let head = nodes_at_link[[link, 1]] as usize;
        (value_at_node[head] - value_at_node[tail]) / length_of_link[link]
    });
    Ok(())
}
