//! The two halves of the coordinate codec. All math here is integer math with
//! truncating division, and wraps on overflow rather than panicking. Neither
//! function validates its input: an address below `(1, 1)` or a value big
//! enough to overflow gives a meaningless (but deterministic) result, so
//! check those at the boundary. A zero cell size still panics on division.

use crate::grid::{Coordinate, Grid, GridAddress, Triangle};

/// Calculate the vertices of the triangle at the given address.
///
/// Even columns give a right-oriented triangle whose `top_left` and `outer`
/// vertices share a y value. Odd columns give a left-oriented triangle whose
/// `top_left` and `outer` vertices share an x value. Either way, the triangle
/// has two legs of length `cell_size` meeting at `outer`.
pub fn address_to_triangle(grid: Grid, address: GridAddress) -> Triangle {
    let size = grid.cell_size;
    let GridAddress { row, column } = address;

    if address.is_left() {
        let left = column.wrapping_sub(1).wrapping_mul(size) / 2;
        let right = left.wrapping_add(size);
        let bottom = row.wrapping_mul(size);
        let top = row.wrapping_sub(1).wrapping_mul(size);
        Triangle::new(
            Coordinate::new(left, top),
            Coordinate::new(left, bottom),
            Coordinate::new(right, bottom),
        )
    } else {
        let left = (column / 2).wrapping_sub(1).wrapping_mul(size);
        let top = row.wrapping_sub(1).wrapping_mul(size);
        let right = left.wrapping_add(size);
        let bottom = top.wrapping_add(size);
        Triangle::new(
            Coordinate::new(left, top),
            Coordinate::new(right, top),
            Coordinate::new(right, bottom),
        )
    }
}

/// Calculate the address of the given triangle. This is the inverse of
/// [address_to_triangle], and only gives a meaningful answer for triangles
/// that function could have produced. The `bottom_right` vertex never
/// factors in.
pub fn triangle_to_address(grid: Grid, triangle: Triangle) -> GridAddress {
    let size = grid.cell_size;
    let Triangle {
        top_left, outer, ..
    } = triangle;

    // A shared y means a right-oriented triangle, whose outer vertex is on the
    // top edge of its row rather than the bottom
    let mut row = outer.y.wrapping_div(size);
    if top_left.y == outer.y {
        row = row.wrapping_add(1);
    }

    // A shared x means a left-oriented triangle, which is the odd column
    let mut column = outer.x.wrapping_div(size).wrapping_mul(2);
    if top_left.x == outer.x {
        column = column.wrapping_add(1);
    }

    GridAddress::new(row, column)
}
