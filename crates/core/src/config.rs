use crate::{grid::Grid, shape::ShapeKind};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines the grid and shape that computations run
/// against. Any field missing from a config file falls back to its default.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ShapeConfig {
    /// The grid that addresses and coordinates are measured in
    #[validate]
    pub grid: Grid,

    /// The kind of shape the grid is cut into. Only
    /// [ShapeKind::Triangle] can actually be computed, but other kinds are
    /// allowed here so they can be rejected with a useful error later.
    pub shape: ShapeKind,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            shape: ShapeKind::Triangle,
        }
    }
}
