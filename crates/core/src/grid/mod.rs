//! This module holds the types and transforms that make up the grid
//! coordinate system.
//!
//! ## Coordinate System
//!
//! The plane is tiled with squares of side [Grid::cell_size], starting at the
//! origin and growing in the positive x and y directions. Each square is cut
//! along its diagonal from `(left, top)` to `(right, bottom)`, giving two
//! right triangles. Rows count squares along y, starting at 1. Columns count
//! *triangles* along x, starting at 1, so every square covers two columns:
//!
//! ```text
//!   x: 0      10     20
//! y:0  +------+------+
//!      |\  2  |\  4  |
//!      |  \   |  \   |    row 1 (A)
//!      | 1  \ | 3  \ |
//!   10 +------+------+
//! ```
//!
//! Odd columns are the lower-left ("left-oriented") halves, even columns the
//! upper-right ("right-oriented") halves. See [Triangle] for how vertex roles
//! are assigned in each case.

pub mod label;
mod transform;
mod unit;

pub use transform::{address_to_triangle, triangle_to_address};
pub use unit::{Coordinate, Grid, GridAddress, Triangle};
