use assert_approx_eq::assert_approx_eq;
use trigrid::{compute_grid_address, compute_triangle, Coordinate};

const CELL_SIZES: &[i32] = &[1, 2, 3, 7, 10, 64, 1000];

/// Every address should survive a trip through both transforms, for odd and
/// even cell sizes alike
#[test]
fn test_round_trip() {
    for &cell_size in CELL_SIZES {
        for row in 1..=30 {
            for column in 1..=30 {
                let vertices = compute_triangle(cell_size, row, column);
                assert_eq!(
                    compute_grid_address(cell_size, vertices),
                    (row, column),
                    "cell size {} produced {:?}",
                    cell_size,
                    vertices
                );
            }
        }
    }
}

/// Even columns share a y between top left and outer, odd columns share an x
#[test]
fn test_orientation_parity() {
    for &cell_size in CELL_SIZES {
        for row in 1..=10 {
            for column in 1..=10 {
                let (top_left, outer, _) =
                    compute_triangle(cell_size, row, column);
                if column % 2 == 0 {
                    assert_eq!(outer.y, top_left.y);
                    assert_ne!(outer.x, top_left.x);
                } else {
                    assert_eq!(outer.x, top_left.x);
                    assert_ne!(outer.y, top_left.y);
                }
            }
        }
    }
}

fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

/// Two axis-aligned legs of length `cell_size` and a hypotenuse of
/// `cell_size * sqrt(2)`
#[test]
fn test_leg_length() {
    for &cell_size in CELL_SIZES {
        for row in 1..=10 {
            for column in 1..=10 {
                let (top_left, outer, bottom_right) =
                    compute_triangle(cell_size, row, column);
                let size = f64::from(cell_size);

                // Both legs meet at the outer vertex and run along an axis
                assert_approx_eq!(distance(outer, top_left), size);
                assert_approx_eq!(distance(outer, bottom_right), size);
                assert!(outer.x == top_left.x || outer.y == top_left.y);
                assert!(
                    outer.x == bottom_right.x || outer.y == bottom_right.y
                );

                assert_approx_eq!(
                    distance(top_left, bottom_right),
                    size * 2f64.sqrt()
                );
            }
        }
    }
}

#[test]
fn test_determinism() {
    for column in 1..=6 {
        assert_eq!(
            compute_triangle(10, 3, column),
            compute_triangle(10, 3, column)
        );
    }
}

/// The round trip holds right up to the top of the i32 range, as long as the
/// vertices themselves fit
#[test]
fn test_round_trip_near_max() {
    let max = i32::MAX;
    for row in (max - 10)..=max {
        for column in 1..=4 {
            let vertices = compute_triangle(1, row, column);
            assert_eq!(compute_grid_address(1, vertices), (row, column));
        }
    }
    for column in (max - 10)..max {
        let vertices = compute_triangle(1, 1, column);
        assert_eq!(compute_grid_address(1, vertices), (1, column));
    }
}
