//! Geometric quantities of links

use crate::buffer::{expect_shape, fill_rows, fill_values};
use crate::error::Result;
use crate::index::Id;
use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2};

fn check_link_inputs(
    nodes_at_link: &ArrayView2<'_, Id>,
    x_of_node: &ArrayView1<'_, f64>,
    y_of_node: &ArrayView1<'_, f64>,
) -> Result<()> {
    expect_shape("nodes_at_link", &[nodes_at_link.ncols()], &[2])?;
    expect_shape("y_of_node", y_of_node.shape(), x_of_node.shape())
}

/// Midpoint of every link: the mean of its endpoint coordinates.
///
/// `out` must be `(n_links, 2)` and receives `(x, y)` per link.
///
/// # Panics
/// If `nodes_at_link` holds an id outside `x_of_node`.
pub fn calc_midpoint_of_link(
    nodes_at_link: ArrayView2<'_, Id>,
    x_of_node: ArrayView1<'_, f64>,
    y_of_node: ArrayView1<'_, f64>,
    out: ArrayViewMut2<'_, f64>,
) -> Result<()> {
    check_link_inputs(&nodes_at_link, &x_of_node, &y_of_node)?;
    expect_shape("xy_of_link", out.shape(), &[nodes_at_link.nrows(), 2])?;

    fill_rows(out, |link, mut xy| {
        let tail = nodes_at_link[[link, 0]] as usize;
        let head = nodes_at_link[[link, 1]] as usize;
        xy[0] = (x_of_node[tail] + x_of_node[head]) * 0.5;
        xy[1] = (y_of_node[tail] + y_of_node[head]) * 0.5;
    });
    Ok(())
}

/// Euclidean length of every link
///
/// # Panics
/// If `nodes_at_link` holds an id outside `x_of_node`.
pub fn calc_length_of_link(
    nodes_at_link: ArrayView2<'_, Id>,
    x_of_node: ArrayView1<'_, f64>,
    y_of_node: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    check_link_inputs(&nodes_at_link, &x_of_node, &y_of_node)?;
    expect_shape("length_of_link", out.shape(), &[nodes_at_link.nrows()])?;

    fill_values(out, |link| {
        let tail = nodes_at_link[[link, 0]] as usize;
        let head = nodes_at_link[[link, 1]] as usize;
        (x_of_node[head] - x_of_node[tail]).hypot(y_of_node[head] - y_of_node[tail])
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::nodes_at_link;
    use crate::{xy_of_node, GridShape, Origin, UniformSpacing};
    use approx::assert_relative_eq;
    use ndarray::{array, Array1, Array2};

    #[test]
    fn test_midpoint_of_link() {
        let shape = GridShape::new(2, 3).unwrap();
        let spacing = UniformSpacing::new(1.0, 2.0).unwrap();
        let (x, y) = xy_of_node(shape, spacing, Origin::default());
        let links = nodes_at_link(shape);

        let mut out = Array2::zeros((shape.number_of_links(), 2));
        calc_midpoint_of_link(links.view(), x.view(), y.view(), out.view_mut()).unwrap();

        let expected = array![
            [1.0, 0.0], [3.0, 0.0], [1.0, 1.0], [3.0, 1.0],
            [0.0, 0.5], [2.0, 0.5], [4.0, 0.5],
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn test_length_of_link() {
        let links = array![[0, 1], [1, 2], [0, 2]];
        let x = array![0.0, 3.0, 3.0];
        let y = array![0.0, 0.0, 4.0];

        let mut out = Array1::zeros(3);
        calc_length_of_link(links.view(), x.view(), y.view(), out.view_mut()).unwrap();

        assert_relative_eq!(out[0], 3.0);
        assert_relative_eq!(out[1], 4.0);
        assert_relative_eq!(out[2], 5.0);
    }

    #[test]
    fn test_midpoint_rejects_wrong_buffer() {
        let links = array![[0, 1]];
        let x = array![0.0, 1.0];
        let y = array![0.0, 0.0];

        let mut out = Array2::zeros((2, 2));
        assert!(calc_midpoint_of_link(links.view(), x.view(), y.view(), out.view_mut()).is_err());

        let y = array![0.0];
        let mut out = Array2::zeros((1, 2));
        assert!(calc_midpoint_of_link(links.view(), x.view(), y.view(), out.view_mut()).is_err());
    }
}
