//! Uniform rectilinear graph: one grid's connectivity and geometry in one value

use crate::error::Result;
use crate::index::{Id, LinkDir};
use crate::quantity::{
    calc_area_at_patch, calc_centroid_at_patch, calc_length_of_link, calc_midpoint_of_link,
};
use crate::shape::GridShape;
use crate::spacing::{xy_of_node, Origin, UniformSpacing};
use crate::topology;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// Read access to the link structure of a quad mesh.
///
/// This is the surface the generic finite-difference operators are written
/// against; nothing here assumes uniform spacing.
pub trait Connectivity {
    fn number_of_nodes(&self) -> usize;

    fn number_of_links(&self) -> usize;

    /// (tail, head) of each link
    fn nodes_at_link(&self) -> ArrayView2<'_, Id>;

    /// Fixed-arity links at each node, sentinel-padded
    fn links_at_node(&self) -> ArrayView2<'_, Id>;

    /// Direction of each entry of [`links_at_node`](Connectivity::links_at_node)
    fn link_dirs_at_node(&self) -> ArrayView2<'_, LinkDir>;

    fn length_of_link(&self) -> ArrayView1<'_, f64>;

    /// Width of the face crossing each link, including a representative width
    /// for perimeter links that have no face
    fn width_of_face_at_link(&self) -> ArrayView1<'_, f64>;

    /// Control-volume area used to normalize divergence at each node
    fn area_of_cell_at_node(&self) -> ArrayView1<'_, f64>;
}

/// Configuration record describing a uniform rectilinear grid.
///
/// ```ignore
/// let spec: GridSpec = serde_json::from_str(r#"{"shape": [400, 5000], "spacing": [1.0, 2.0]}"#)?;
/// let graph = UniformRectilinearGraph::from_spec(&spec)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub shape: GridShape,
    #[serde(default)]
    pub spacing: UniformSpacing,
    #[serde(default)]
    pub origin: Origin,
}

/// Connectivity and geometry of a uniform rectilinear grid.
///
/// Every array is derived once in [`new`](Self::new) and never changes.
#[derive(Debug, Clone)]
pub struct UniformRectilinearGraph {
    shape: GridShape,
    spacing: UniformSpacing,
    origin: Origin,

    x_of_node: Array1<f64>,
    y_of_node: Array1<f64>,

    nodes_at_link: Array2<Id>,
    patches_at_link: Array2<Id>,
    links_at_node: Array2<Id>,
    link_dirs_at_node: Array2<LinkDir>,
    patches_at_node: Array2<Id>,
    nodes_at_patch: Array2<Id>,
    links_at_patch: Array2<Id>,
    nodes_at_face: Array2<Id>,
    link_at_face: Array1<Id>,
    face_at_link: Array1<Id>,
    node_at_cell: Array1<Id>,
    cell_at_node: Array1<Id>,

    xy_of_link: Array2<f64>,
    length_of_link: Array1<f64>,
    width_of_face_at_link: Array1<f64>,
    area_of_patch: Array1<f64>,
    xy_of_patch: Array2<f64>,
    area_of_cell_at_node: Array1<f64>,
}

impl UniformRectilinearGraph {
    /// Build the graph for `shape` with node 0 at `origin`
    pub fn new(shape: GridShape, spacing: UniformSpacing, origin: Origin) -> Result<Self> {
        let (x_of_node, y_of_node) = xy_of_node(shape, spacing, origin);
        let nodes_at_link = topology::nodes_at_link(shape);
        let nodes_at_patch = topology::nodes_at_patch(shape);
        let links_at_patch = topology::links_at_patch(shape);

        let mut xy_of_link = Array2::zeros((shape.number_of_links(), 2));
        calc_midpoint_of_link(
            nodes_at_link.view(),
            x_of_node.view(),
            y_of_node.view(),
            xy_of_link.view_mut(),
        )?;

        let mut length_of_link = Array1::zeros(shape.number_of_links());
        calc_length_of_link(
            nodes_at_link.view(),
            x_of_node.view(),
            y_of_node.view(),
            length_of_link.view_mut(),
        )?;

        let mut area_of_patch = Array1::zeros(shape.number_of_patches());
        calc_area_at_patch(
            nodes_at_patch.view(),
            x_of_node.view(),
            y_of_node.view(),
            area_of_patch.view_mut(),
        )?;

        let mut xy_of_patch = Array2::zeros((shape.number_of_patches(), 2));
        calc_centroid_at_patch(
            links_at_patch.view(),
            xy_of_link.column(0),
            xy_of_link.column(1),
            xy_of_patch.view_mut(),
        )?;

        let width_of_face_at_link = Array1::from_shape_fn(shape.number_of_links(), |link| {
            if shape.is_horizontal(link) {
                spacing.dy()
            } else {
                spacing.dx()
            }
        });
        let area_of_cell_at_node = Array1::from_elem(shape.number_of_nodes(), spacing.cell_area());

        tracing::debug!(
            rows = shape.rows(),
            cols = shape.cols(),
            nodes = shape.number_of_nodes(),
            links = shape.number_of_links(),
            patches = shape.number_of_patches(),
            "built uniform rectilinear graph"
        );

        Ok(Self {
            shape,
            spacing,
            origin,
            x_of_node,
            y_of_node,
            nodes_at_link,
            patches_at_link: topology::patches_at_link(shape),
            links_at_node: topology::links_at_node(shape),
            link_dirs_at_node: topology::link_dirs_at_node(shape),
            patches_at_node: topology::patches_at_node(shape),
            nodes_at_patch,
            links_at_patch,
            nodes_at_face: topology::nodes_at_face(shape),
            link_at_face: topology::link_at_face(shape),
            face_at_link: topology::face_at_link(shape),
            node_at_cell: topology::node_at_cell(shape),
            cell_at_node: topology::cell_at_node(shape),
            xy_of_link,
            length_of_link,
            width_of_face_at_link,
            area_of_patch,
            xy_of_patch,
            area_of_cell_at_node,
        })
    }

    /// Build from a [`GridSpec`]
    pub fn from_spec(spec: &GridSpec) -> Result<Self> {
        Self::new(spec.shape, spec.spacing, spec.origin)
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn spacing(&self) -> UniformSpacing {
        self.spacing
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn number_of_patches(&self) -> usize {
        self.shape.number_of_patches()
    }

    pub fn number_of_faces(&self) -> usize {
        self.shape.number_of_faces()
    }

    pub fn number_of_cells(&self) -> usize {
        self.shape.number_of_cells()
    }

    // Nodes

    pub fn x_of_node(&self) -> ArrayView1<'_, f64> {
        self.x_of_node.view()
    }

    pub fn y_of_node(&self) -> ArrayView1<'_, f64> {
        self.y_of_node.view()
    }

    /// Patches touching each node, [NE, NW, SW, SE]
    pub fn patches_at_node(&self) -> ArrayView2<'_, Id> {
        self.patches_at_node.view()
    }

    pub fn cell_at_node(&self) -> ArrayView1<'_, Id> {
        self.cell_at_node.view()
    }

    // Links

    /// Patches to the (right, left) of each link
    pub fn patches_at_link(&self) -> ArrayView2<'_, Id> {
        self.patches_at_link.view()
    }

    pub fn face_at_link(&self) -> ArrayView1<'_, Id> {
        self.face_at_link.view()
    }

    /// Midpoint `(x, y)` of each link
    pub fn xy_of_link(&self) -> ArrayView2<'_, f64> {
        self.xy_of_link.view()
    }

    // Patches

    /// Corners of each patch, [NE, NW, SW, SE]
    pub fn nodes_at_patch(&self) -> ArrayView2<'_, Id> {
        self.nodes_at_patch.view()
    }

    /// Sides of each patch, [E, N, W, S]
    pub fn links_at_patch(&self) -> ArrayView2<'_, Id> {
        self.links_at_patch.view()
    }

    pub fn area_of_patch(&self) -> ArrayView1<'_, f64> {
        self.area_of_patch.view()
    }

    /// Centroid `(x, y)` of each patch
    pub fn xy_of_patch(&self) -> ArrayView2<'_, f64> {
        self.xy_of_patch.view()
    }

    // Faces and cells

    pub fn nodes_at_face(&self) -> ArrayView2<'_, Id> {
        self.nodes_at_face.view()
    }

    pub fn link_at_face(&self) -> ArrayView1<'_, Id> {
        self.link_at_face.view()
    }

    pub fn node_at_cell(&self) -> ArrayView1<'_, Id> {
        self.node_at_cell.view()
    }
}

impl Connectivity for UniformRectilinearGraph {
    fn number_of_nodes(&self) -> usize {
        self.shape.number_of_nodes()
    }

    fn number_of_links(&self) -> usize {
        self.shape.number_of_links()
    }

    fn nodes_at_link(&self) -> ArrayView2<'_, Id> {
        self.nodes_at_link.view()
    }

    fn links_at_node(&self) -> ArrayView2<'_, Id> {
        self.links_at_node.view()
    }

    fn link_dirs_at_node(&self) -> ArrayView2<'_, LinkDir> {
        self.link_dirs_at_node.view()
    }

    fn length_of_link(&self) -> ArrayView1<'_, f64> {
        self.length_of_link.view()
    }

    fn width_of_face_at_link(&self) -> ArrayView1<'_, f64> {
        self.width_of_face_at_link.view()
    }

    fn area_of_cell_at_node(&self) -> ArrayView1<'_, f64> {
        self.area_of_cell_at_node.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn graph(rows: usize, cols: usize, dy: f64, dx: f64) -> UniformRectilinearGraph {
        UniformRectilinearGraph::new(
            GridShape::new(rows, cols).unwrap(),
            UniformSpacing::new(dy, dx).unwrap(),
            Origin::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_3x3_counts() {
        let g = graph(3, 3, 1.0, 1.0);
        assert_eq!(g.number_of_nodes(), 9);
        assert_eq!(g.number_of_links(), 12);
        assert_eq!(g.number_of_patches(), 4);
        assert_eq!(g.number_of_faces(), 4);
        assert_eq!(g.number_of_cells(), 1);
        assert_eq!(g.link_dirs_at_node().row(4).to_vec(), vec![1, 1, -1, -1]);
    }

    #[test]
    fn test_link_geometry() {
        let g = graph(3, 4, 1.0, 2.0);
        let lengths = g.length_of_link();
        let widths = g.width_of_face_at_link();

        for link in 0..g.number_of_links() {
            if g.shape().is_horizontal(link) {
                assert_eq!(lengths[link], 2.0);
                assert_eq!(widths[link], 1.0);
            } else {
                assert_eq!(lengths[link], 1.0);
                assert_eq!(widths[link], 2.0);
            }
        }
    }

    #[test]
    fn test_patch_geometry() {
        let g = graph(3, 4, 0.5, 2.0);
        for &area in g.area_of_patch() {
            assert_relative_eq!(area, 1.0, epsilon = 1e-12);
        }

        // Patch 4 has its lower-left corner at node (1, 1) = (2.0, 0.5)
        let xy = g.xy_of_patch();
        assert_relative_eq!(xy[[4, 0]], 3.0, epsilon = 1e-12);
        assert_relative_eq!(xy[[4, 1]], 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_origin_shifts_coordinates() {
        let g = UniformRectilinearGraph::new(
            GridShape::new(2, 2).unwrap(),
            UniformSpacing::default(),
            Origin::new(-5.0, 10.0),
        )
        .unwrap();
        assert_eq!(g.x_of_node().to_vec(), vec![10.0, 11.0, 10.0, 11.0]);
        assert_eq!(g.y_of_node().to_vec(), vec![-5.0, -5.0, -4.0, -4.0]);
        assert_eq!(g.xy_of_patch().row(0).to_vec(), vec![10.5, -4.5]);
    }

    #[test]
    fn test_from_spec() {
        let spec: GridSpec =
            serde_json::from_str(r#"{"shape": [4, 6], "spacing": [1.0, 2.0]}"#).unwrap();
        let g = UniformRectilinearGraph::from_spec(&spec).unwrap();
        assert_eq!(g.shape().dim(), (4, 6));
        assert_eq!(g.spacing().dx(), 2.0);
        assert_eq!(g.origin(), Origin::default());

        assert!(serde_json::from_str::<GridSpec>(r#"{"shape": [1, 6]}"#).is_err());
    }
}
