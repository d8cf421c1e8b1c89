//! Net flux and flux divergence at nodes, generic over any [`Connectivity`]

use gridkit_core::buffer::{expect_shape, fill_values};
use gridkit_core::{as_index, Connectivity, Result};
use ndarray::{ArrayView1, ArrayViewMut1};

fn check_link_to_node<G: Connectivity + ?Sized>(
    graph: &G,
    value_at_link: &ArrayView1<'_, f64>,
    out: &ArrayViewMut1<'_, f64>,
) -> Result<()> {
    expect_shape("value_at_link", value_at_link.shape(), &[graph.number_of_links()])?;
    expect_shape("out", out.shape(), &[graph.number_of_nodes()])
}

/// Signed sum of `flux * dir * face_width` over the links at `node`.
///
/// Sentinel slots are skipped, so perimeter nodes sum only the links they have.
#[inline]
fn net_flux<G: Connectivity + ?Sized>(
    graph: &G,
    flux_at_link: &ArrayView1<'_, f64>,
    node: usize,
) -> f64 {
    let links = graph.links_at_node();
    let dirs = graph.link_dirs_at_node();
    let width = graph.width_of_face_at_link();

    let mut net = 0.0;
    for (&link, &dir) in links.row(node).iter().zip(dirs.row(node)) {
        if let Some(link) = as_index(link) {
            net += f64::from(dir) * flux_at_link[link] * width[link];
        }
    }
    net
}

/// Net outflow at each node: the sum of the fluxes leaving through each face
/// minus those entering, weighted by face width.
pub fn calc_net_flux_at_node<G: Connectivity + Sync + ?Sized>(
    graph: &G,
    flux_at_link: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    check_link_to_node(graph, &flux_at_link, &out)?;
    fill_values(out, |node| net_flux(graph, &flux_at_link, node));
    Ok(())
}

/// Divergence of a link flux at each node.
///
/// The net outflow (see [`calc_net_flux_at_node`]) divided by the node's cell
/// area. On a raster grid an interior node gets
/// ```text
/// (q_E - q_W) / dx + (q_N - q_S) / dy
/// ```
/// Perimeter nodes get the partial sum over the links they have; this is a
/// raster-specific discrete divergence, not a conservative boundary balance.
pub fn calc_flux_div_at_node<G: Connectivity + Sync + ?Sized>(
    graph: &G,
    flux_at_link: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    check_link_to_node(graph, &flux_at_link, &out)?;

    let area = graph.area_of_cell_at_node();
    fill_values(out, |node| net_flux(graph, &flux_at_link, node) / area[node]);
    Ok(())
}
