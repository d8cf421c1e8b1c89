//! Uniform node spacing and origin of a rectilinear grid

use crate::error::{Error, Result};
use crate::shape::GridShape;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Distance between node rows (`dy`) and node columns (`dx`).
///
/// Node coordinates follow
/// ```text
/// x = origin.x + col * dx
/// y = origin.y + row * dy
/// ```
/// so horizontal links point +x and vertical links point +y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct UniformSpacing {
    dy: f64,
    dx: f64,
}

impl UniformSpacing {
    /// Create a spacing from `(dy, dx)`; both must be finite and positive
    pub fn new(dy: f64, dx: f64) -> Result<Self> {
        check_positive("dy", dy)?;
        check_positive("dx", dx)?;
        Ok(Self { dy, dx })
    }

    /// Row spacing
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Column spacing
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Area of the rectangle around a node
    pub fn cell_area(&self) -> f64 {
        self.dx * self.dy
    }
}

impl Default for UniformSpacing {
    fn default() -> Self {
        Self { dy: 1.0, dx: 1.0 }
    }
}

impl TryFrom<(f64, f64)> for UniformSpacing {
    type Error = Error;

    fn try_from((dy, dx): (f64, f64)) -> Result<Self> {
        Self::new(dy, dx)
    }
}

impl From<UniformSpacing> for (f64, f64) {
    fn from(spacing: UniformSpacing) -> Self {
        (spacing.dy, spacing.dx)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: "spacing must be finite and positive".into(),
        });
    }
    Ok(())
}

/// Coordinates of node 0 (lower-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Origin {
    pub y: f64,
    pub x: f64,
}

impl Origin {
    pub fn new(y: f64, x: f64) -> Self {
        Self { y, x }
    }
}

impl From<(f64, f64)> for Origin {
    fn from((y, x): (f64, f64)) -> Self {
        Self { y, x }
    }
}

impl From<Origin> for (f64, f64) {
    fn from(origin: Origin) -> Self {
        (origin.y, origin.x)
    }
}

/// Node coordinates `(x_of_node, y_of_node)` of a uniform rectilinear grid
pub fn xy_of_node(
    shape: GridShape,
    spacing: UniformSpacing,
    origin: Origin,
) -> (Array1<f64>, Array1<f64>) {
    let cols = shape.cols();
    let n = shape.number_of_nodes();

    let x = Array1::from_shape_fn(n, |node| origin.x + (node % cols) as f64 * spacing.dx);
    let y = Array1::from_shape_fn(n, |node| origin.y + (node / cols) as f64 * spacing.dy);

    (x, y)
}
