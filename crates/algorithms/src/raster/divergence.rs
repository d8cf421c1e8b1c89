//! Flux divergence on a uniform raster

use gridkit_core::buffer::{expect_shape, fill_values};
use gridkit_core::{GridShape, Result, UniformSpacing};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Divergence of a link flux at each node.
///
/// Reads each node's east, north, west and south links by their closed-form
/// ids. Faces crossing horizontal links are `dy` wide and those crossing
/// vertical links `dx` wide; the sum is divided by the cell area `dx * dy`.
/// Perimeter nodes sum only the links they have.
pub fn calc_flux_div_at_node(
    shape: GridShape,
    spacing: UniformSpacing,
    flux_at_link: ArrayView1<'_, f64>,
    out: ArrayViewMut1<'_, f64>,
) -> Result<()> {
    expect_shape("value_at_link", flux_at_link.shape(), &[shape.number_of_links()])?;
    expect_shape("out", out.shape(), &[shape.number_of_nodes()])?;

    let (rows, cols) = shape.dim();
    let (dx, dy) = (spacing.dx(), spacing.dy());
    let cell_area = spacing.cell_area();

    fill_values(out, |node| {
        let (row, col) = shape.row_col(node);
        let mut net = 0.0;
        if col < cols - 1 {
            net += flux_at_link[shape.horizontal_link(row, col)] * dy;
        }
        if row < rows - 1 {
            net += flux_at_link[shape.vertical_link(row, col)] * dx;
        }
        if col > 0 {
            net -= flux_at_link[shape.horizontal_link(row, col - 1)] * dy;
        }
        if row > 0 {
            net -= flux_at_link[shape.vertical_link(row - 1, col)] * dx;
        }
        net / cell_area
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array1, Array2};

    #[test]
    fn test_center_node_3x3() {
        let shape = GridShape::new(3, 3).unwrap();
        let spacing = UniformSpacing::new(0.5, 4.0).unwrap();

        let mut flux = Array1::zeros(shape.number_of_links());
        flux[3] = 1.0; // E
        flux[10] = 1.0; // N
        flux[2] = -1.0; // W
        flux[7] = 3.0; // S

        let mut out = Array1::zeros(shape.number_of_nodes());
        calc_flux_div_at_node(shape, spacing, flux.view(), out.view_mut()).unwrap();

        // (1 - -1) / 4 + (1 - 3) / 0.5
        assert_relative_eq!(out[4], 0.5 - 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_flux() {
        let shape = GridShape::new(4, 4).unwrap();
        let spacing = UniformSpacing::default();
        let flux = Array1::from_elem(shape.number_of_links(), 1.0);

        let mut out = Array1::zeros(shape.number_of_nodes());
        calc_flux_div_at_node(shape, spacing, flux.view(), out.view_mut()).unwrap();

        // interior nodes balance; the lower-left corner only has outgoing links
        assert_eq!(out[5], 0.0);
        assert_eq!(out[0], 2.0);
        assert_eq!(out[15], -2.0);
        assert_eq!(out[1], 1.0);
    }

    #[test]
    fn test_strided_flux_and_output() {
        let shape = GridShape::new(4, 4).unwrap();
        let spacing = UniformSpacing::default();
        let flux = Array2::from_elem((shape.number_of_links(), 3), 1.0);

        let mut out = Array2::<f64>::zeros((shape.number_of_nodes(), 2));
        calc_flux_div_at_node(shape, spacing, flux.column(2), out.column_mut(1)).unwrap();

        assert_eq!(out[[5, 1]], 0.0);
        assert_eq!(out[[0, 1]], 2.0);
        assert_eq!(out[[15, 1]], -2.0);
        assert!(out.column(0).iter().all(|&v| v == 0.0));
    }
}
