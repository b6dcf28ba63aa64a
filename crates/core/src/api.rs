//! The public surface for callers that don't want to deal with the grid types
//! directly, plus the request/response types that front ends (CLI, HTTP, etc.)
//! can pass straight through.
//!
//! The bare `compute_*` functions trust their input completely. The request
//! types are the boundary: [CoordinatesRequest::process] and
//! [GridValueRequest::process] validate everything before any math happens.

use crate::grid::{self, Coordinate, Grid, GridAddress, Triangle};
use crate::shape::ShapeKind;
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Calculate the three vertices of the triangle at `(row, column)` in a grid
/// of the given cell size. Vertices are returned in role order: top left,
/// outer, bottom right. See [Triangle] for what the roles mean.
///
/// `cell_size` must be positive and `row`/`column` must be at least 1. None
/// of that is checked here.
pub fn compute_triangle(
    cell_size: i32,
    row: i32,
    column: i32,
) -> (Coordinate, Coordinate, Coordinate) {
    grid::address_to_triangle(
        Grid::new(cell_size),
        GridAddress::new(row, column),
    )
    .into()
}

/// Calculate the `(row, column)` of the triangle with the given vertices,
/// which must be in role order. Inverse of [compute_triangle].
///
/// `cell_size` must be positive, and the vertices must describe a triangle
/// that [compute_triangle] could have produced. Anything else gives a
/// meaningless answer.
pub fn compute_grid_address(
    cell_size: i32,
    vertices: (Coordinate, Coordinate, Coordinate),
) -> (i32, i32) {
    let address =
        grid::triangle_to_address(Grid::new(cell_size), Triangle::from(vertices));
    (address.row, address.column)
}

/// A request to calculate the vertices of a shape from its grid address
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesRequest {
    pub grid: Grid,
    /// Accepts either `{"row": _, "column": _}` or a label like `"A2"`
    pub grid_value: GridAddress,
    pub shape_type: ShapeKind,
}

/// Vertices of a computed shape, in role order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinatesResponse {
    pub coordinates: Vec<Coordinate>,
}

/// A request to calculate the grid address of a shape from its vertices
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridValueRequest {
    pub grid: Grid,
    pub shape_type: ShapeKind,
    /// Vertices in role order. For a triangle that's top left, outer, bottom
    /// right.
    pub vertices: Vec<Coordinate>,
}

/// The grid address of a computed shape
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridValueResponse {
    pub row: i32,
    pub column: i32,
}

impl CoordinatesRequest {
    /// Validate this request, then compute the vertices it asks for. Returns
    /// an error if the grid is invalid, the address is out of bounds, or the
    /// shape isn't supported. The error can be downcast to
    /// [validator::ValidationErrors] or [crate::ShapeError] to tell these
    /// apart.
    pub fn process(&self) -> anyhow::Result<CoordinatesResponse> {
        info!(
            "Calculating {} coordinates for {} in {}",
            self.shape_type, self.grid_value, self.grid
        );
        self.grid.validate().context("invalid grid")?;
        self.grid_value.check_bounds().context("invalid grid value")?;

        let triangle =
            self.shape_type.compute_vertices(self.grid, self.grid_value)?;
        Ok(CoordinatesResponse {
            coordinates: triangle.vertices().to_vec(),
        })
    }

    /// Deserialize a request from JSON
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing request")
    }
}

impl GridValueRequest {
    /// Validate this request, then compute the address it asks for. Returns
    /// an error if the grid is invalid, the shape isn't supported, or the
    /// vertex count is wrong for the shape.
    pub fn process(&self) -> anyhow::Result<GridValueResponse> {
        info!(
            "Calculating {} grid value for {} vertices in {}",
            self.shape_type,
            self.vertices.len(),
            self.grid
        );
        self.grid.validate().context("invalid grid")?;

        let address =
            self.shape_type.compute_address(self.grid, &self.vertices)?;
        Ok(GridValueResponse {
            row: address.row,
            column: address.column,
        })
    }

    /// Deserialize a request from JSON
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing request")
    }
}

#[cfg(feature = "json")]
impl CoordinatesResponse {
    /// Serialize this response to JSON
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing response")
    }
}

#[cfg(feature = "json")]
impl GridValueResponse {
    /// Serialize this response to JSON
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing response")
    }
}
