//! Finite-difference operators behind one interface
//!
//! [`GraphOperators`] reads connectivity arrays and works for any quad mesh
//! that implements [`Connectivity`]. [`RasterOperators`] needs only the grid
//! shape and spacing. Both produce the same numbers for the same raster grid;
//! which one runs is chosen by [`OperatorPath`].

use crate::{divergence, gradients, raster};
use gridkit_core::{Connectivity, GridShape, Result, UniformRectilinearGraph, UniformSpacing};
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use serde::{Deserialize, Serialize};

/// Differences, gradients and divergence between node and link fields
pub trait FiniteDifference {
    /// Returns the operator set's name
    fn name(&self) -> &'static str;

    /// Returns a short description of how the operators are computed
    fn description(&self) -> &'static str;

    fn number_of_nodes(&self) -> usize;

    fn number_of_links(&self) -> usize;

    /// `head - tail` of a node field on each link
    fn calc_diff_at_link(
        &self,
        value_at_node: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()>;

    /// Difference divided by link length
    fn calc_grad_at_link(
        &self,
        value_at_node: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()>;

    /// Net outflow of a link flux per unit cell area at each node
    fn calc_flux_div_at_node(
        &self,
        flux_at_link: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()>;

    /// Allocating form of [`calc_diff_at_link`](Self::calc_diff_at_link)
    fn diff_at_link(&self, value_at_node: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        let mut out = Array1::zeros(self.number_of_links());
        self.calc_diff_at_link(value_at_node, out.view_mut())?;
        Ok(out)
    }

    /// Allocating form of [`calc_grad_at_link`](Self::calc_grad_at_link)
    fn grad_at_link(&self, value_at_node: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        let mut out = Array1::zeros(self.number_of_links());
        self.calc_grad_at_link(value_at_node, out.view_mut())?;
        Ok(out)
    }

    /// Allocating form of [`calc_flux_div_at_node`](Self::calc_flux_div_at_node)
    fn flux_div_at_node(&self, flux_at_link: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        let mut out = Array1::zeros(self.number_of_nodes());
        self.calc_flux_div_at_node(flux_at_link, out.view_mut())?;
        Ok(out)
    }
}

/// Generic operators over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct GraphOperators<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: Connectivity + Sync + ?Sized> GraphOperators<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

impl<G: Connectivity + Sync + ?Sized> FiniteDifference for GraphOperators<'_, G> {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn description(&self) -> &'static str {
        "Reads endpoints, link directions and lengths from the connectivity arrays"
    }

    fn number_of_nodes(&self) -> usize {
        self.graph.number_of_nodes()
    }

    fn number_of_links(&self) -> usize {
        self.graph.number_of_links()
    }

    fn calc_diff_at_link(
        &self,
        value_at_node: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()> {
        gradients::calc_diff_at_link(self.graph, value_at_node, out)
    }

    fn calc_grad_at_link(
        &self,
        value_at_node: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()> {
        gradients::calc_grad_at_link(self.graph, value_at_node, out)
    }

    fn calc_flux_div_at_node(
        &self,
        flux_at_link: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()> {
        divergence::calc_flux_div_at_node(self.graph, flux_at_link, out)
    }
}

/// Raster fast-path operators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOperators {
    shape: GridShape,
    spacing: UniformSpacing,
}

impl RasterOperators {
    pub fn new(shape: GridShape, spacing: UniformSpacing) -> Self {
        Self { shape, spacing }
    }

    pub fn from_graph(graph: &UniformRectilinearGraph) -> Self {
        Self::new(graph.shape(), graph.spacing())
    }
}

impl FiniteDifference for RasterOperators {
    fn name(&self) -> &'static str {
        "raster"
    }

    fn description(&self) -> &'static str {
        "Closed-form strided differences over the (rows, cols) node grid"
    }

    fn number_of_nodes(&self) -> usize {
        self.shape.number_of_nodes()
    }

    fn number_of_links(&self) -> usize {
        self.shape.number_of_links()
    }

    fn calc_diff_at_link(
        &self,
        value_at_node: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()> {
        raster::calc_diff_at_link(self.shape, value_at_node, out)
    }

    fn calc_grad_at_link(
        &self,
        value_at_node: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()> {
        raster::calc_grad_at_link(self.shape, self.spacing, value_at_node, out)
    }

    fn calc_flux_div_at_node(
        &self,
        flux_at_link: ArrayView1<'_, f64>,
        out: ArrayViewMut1<'_, f64>,
    ) -> Result<()> {
        raster::calc_flux_div_at_node(self.shape, self.spacing, flux_at_link, out)
    }
}

/// Which operator implementation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorPath {
    /// Generic path reading the graph's connectivity arrays
    Graph,
    /// Closed-form raster path
    #[default]
    Raster,
}

impl OperatorPath {
    /// Operators for `graph` along this path
    pub fn build<'g>(
        self,
        graph: &'g UniformRectilinearGraph,
    ) -> Box<dyn FiniteDifference + Send + Sync + 'g> {
        tracing::debug!(
            path = ?self,
            rows = graph.shape().rows(),
            cols = graph.shape().cols(),
            "selected finite-difference operators"
        );
        match self {
            OperatorPath::Graph => Box::new(GraphOperators::new(graph)),
            OperatorPath::Raster => Box::new(RasterOperators::from_graph(graph)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridkit_core::Origin;

    fn graph() -> UniformRectilinearGraph {
        UniformRectilinearGraph::new(
            GridShape::new(3, 4).unwrap(),
            UniformSpacing::new(1.0, 2.0).unwrap(),
            Origin::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_build_selects_path() {
        let g = graph();
        assert_eq!(OperatorPath::Graph.build(&g).name(), "graph");
        assert_eq!(OperatorPath::Raster.build(&g).name(), "raster");
        assert_eq!(OperatorPath::default(), OperatorPath::Raster);
    }

    #[test]
    fn test_path_serde() {
        let path: OperatorPath = serde_json::from_str(r#""graph""#).unwrap();
        assert_eq!(path, OperatorPath::Graph);
        assert_eq!(serde_json::to_string(&OperatorPath::Raster).unwrap(), r#""raster""#);
    }

    #[test]
    fn test_allocating_forms() {
        let g = graph();
        let ops = OperatorPath::Graph.build(&g);

        let grad = ops.grad_at_link(g.x_of_node()).unwrap();
        assert_eq!(grad.len(), g.number_of_links());
        assert_eq!(grad[0], 1.0);

        let div = ops.flux_div_at_node(grad.view()).unwrap();
        assert_eq!(div.len(), g.number_of_nodes());

        assert!(ops.diff_at_link(grad.view()).is_err());
    }
}
