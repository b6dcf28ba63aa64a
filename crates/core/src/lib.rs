//! Trigrid is a coordinate codec for square grids where every cell is cut
//! into two right triangles. It converts between a triangle's grid address
//! (a 1-based row and column) and the Cartesian coordinates of its three
//! vertices.
//!
//! ```
//! use trigrid::{compute_grid_address, compute_triangle};
//!
//! let vertices = compute_triangle(10, 1, 2);
//! assert_eq!(compute_grid_address(10, vertices), (1, 2));
//! ```
//!
//! See the [grid] module for a description of the coordinate system, and
//! [CoordinatesRequest]/[GridValueRequest] for the validated entry points
//! that front ends should use.

mod api;
mod config;
pub mod grid;
mod shape;

pub use crate::{
    api::{
        compute_grid_address, compute_triangle, CoordinatesRequest,
        CoordinatesResponse, GridValueRequest, GridValueResponse,
    },
    config::ShapeConfig,
    grid::{Coordinate, Grid, GridAddress, Triangle},
    shape::{ShapeError, ShapeKind},
};
