//! Dispatch over the different kinds of shape a grid could be cut into. Only
//! triangles have an actual algorithm, every other kind is rejected up front.

use crate::grid::{self, Coordinate, Grid, GridAddress, Triangle};
use derive_more::Display;
use log::debug;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString};

/// The kinds of shape that a request can ask for. This is a closed set, so
/// adding a new shape forces every match on it to be updated.
///
/// Serialized as a snake_case name. When deserializing, either the name or
/// the numeric shape code is accepted (see [ShapeKind::code]).
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    EnumString,
    EnumIter,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShapeKind {
    // If you add a variant here, make sure you update `code`/`from_code`
    Triangle,
    Square,
    Hexagon,
}

impl ShapeKind {
    /// Get the numeric code for this shape. Codes start at 1.
    pub fn code(self) -> i64 {
        match self {
            Self::Triangle => 1,
            Self::Square => 2,
            Self::Hexagon => 3,
        }
    }

    /// Inverse of [Self::code]. Returns `None` for unknown codes.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Triangle),
            2 => Some(Self::Square),
            3 => Some(Self::Hexagon),
            _ => None,
        }
    }

    /// Calculate the vertices of the shape at the given address. Fails
    /// immediately for any shape other than [ShapeKind::Triangle].
    pub fn compute_vertices(
        self,
        grid: Grid,
        address: GridAddress,
    ) -> Result<Triangle, ShapeError> {
        match self {
            Self::Triangle => {
                let triangle = grid::address_to_triangle(grid, address);
                debug!("{} in {} is {}", address, grid, triangle);
                Ok(triangle)
            }
            Self::Square | Self::Hexagon => {
                Err(ShapeError::Unsupported { kind: self })
            }
        }
    }

    /// Calculate the address of the shape with the given vertices, which must
    /// be in role order (see [Triangle]). Fails immediately for any shape
    /// other than [ShapeKind::Triangle], or if there aren't exactly 3
    /// vertices.
    pub fn compute_address(
        self,
        grid: Grid,
        vertices: &[Coordinate],
    ) -> Result<GridAddress, ShapeError> {
        match self {
            Self::Triangle => {
                let triangle = Triangle::from_vertices(vertices).ok_or(
                    ShapeError::VertexCount {
                        kind: self,
                        expected: 3,
                        actual: vertices.len(),
                    },
                )?;
                let address = grid::triangle_to_address(grid, triangle);
                debug!("{} in {} is {}", triangle, grid, address);
                Ok(address)
            }
            Self::Square | Self::Hexagon => {
                Err(ShapeError::Unsupported { kind: self })
            }
        }
    }
}

/// An error that rejects a shape computation before it starts
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum ShapeError {
    /// The requested kind has no algorithm
    #[display(
        fmt = "shape type {} is not supported, only triangles are configured",
        kind
    )]
    Unsupported { kind: ShapeKind },

    /// The wrong number of vertices were supplied for the shape
    #[display(
        fmt = "a {} must have exactly {} vertices, got {}",
        kind,
        expected,
        actual
    )]
    VertexCount {
        kind: ShapeKind,
        expected: usize,
        actual: usize,
    },
}

impl std::error::Error for ShapeError {}

// Custom deserialization to handle both name and code variants
impl<'de> Deserialize<'de> for ShapeKind {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ShapeKindVisitor)
    }
}

/// Macro to make it easier to implement visit logic for different int types
macro_rules! impl_visit {
    ($fname:ident, $type:ty) => {
        fn $fname<E>(self, value: $type) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let code: Option<i64> = value.try_into().ok();
            code.and_then(ShapeKind::from_code).ok_or_else(|| {
                E::custom(format!("unknown shape code: {}", value))
            })
        }
    };
}

struct ShapeKindVisitor;

impl<'de> Visitor<'de> for ShapeKindVisitor {
    type Value = ShapeKind;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a shape name or numeric shape code")
    }

    impl_visit!(visit_u8, u8);
    impl_visit!(visit_u16, u16);
    impl_visit!(visit_u32, u32);
    impl_visit!(visit_u64, u64);
    impl_visit!(visit_i8, i8);
    impl_visit!(visit_i16, i16);
    impl_visit!(visit_i32, i32);
    impl_visit!(visit_i64, i64);

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        value
            .parse()
            .map_err(|_| E::custom(format!("unknown shape type: {}", value)))
    }
}
