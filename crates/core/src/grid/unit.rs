//! Value types that make up the grid coordinate system. See the parent module
//! documentation for a description of how cells and triangles are laid out.

use crate::grid::label;
use anyhow::{anyhow, bail, Context};
use derive_more::Display;
use serde::{
    de::{value::MapAccessDeserializer, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use std::{fmt, str::FromStr};
use validator::Validate;

/// A point on the plane, in the same units as [Grid::cell_size].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Parse a coordinate from the form `x,y`. Whitespace around either component
/// is ignored, and the parens from the [Display] form are optional.
impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = match inner.split_once(',') {
            Some(parts) => parts,
            None => bail!("expected coordinate in the form x,y, got {:?}", s),
        };
        Ok(Self::new(
            x.trim()
                .parse()
                .with_context(|| format!("invalid x component in {:?}", s))?,
            y.trim()
                .parse()
                .with_context(|| format!("invalid y component in {:?}", s))?,
        ))
    }
}

/// The plane, tiled in squares of `cell_size × cell_size`. Every square is
/// split along a diagonal into two triangles, so each row of squares holds two
/// grid columns per square.
///
/// The transforms divide by `cell_size`, so it must be positive. Nothing in
/// [crate::grid::transform] checks that; call [Validate::validate] at the
/// boundary before using a grid that came from outside.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
    Validate,
)]
#[display(fmt = "grid of {}-unit cells", cell_size)]
pub struct Grid {
    /// Length of one side of a square cell, which is also the length of each
    /// leg of every triangle in the grid.
    #[serde(alias = "size")]
    #[validate(range(min = 1))]
    pub cell_size: i32,
}

impl Grid {
    pub const fn new(cell_size: i32) -> Self {
        Self { cell_size }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A 1-based `(row, column)` address of a single triangle within a [Grid].
///
/// Odd columns hold the "left" triangle of a square and even columns hold the
/// "right" triangle, so columns `2n - 1` and `2n` share the `n`th square of
/// their row.
///
/// On the wire this is always written as `{"row": _, "column": _}`, but it
/// can be read either from that form or from a label string like `"B3"`. See
/// [crate::grid::label] for how row letters work.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
)]
#[display(fmt = "(row {}, column {})", row, column)]
pub struct GridAddress {
    pub row: i32,
    pub column: i32,
}

impl GridAddress {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Is this address in the left-oriented (odd column) orientation?
    pub fn is_left(&self) -> bool {
        self.column % 2 != 0
    }

    /// Render this address as a label, e.g. row 2 column 3 becomes `B3`.
    /// Fails if either component is below 1, since those have no label.
    pub fn label(&self) -> anyhow::Result<String> {
        if self.column < 1 {
            bail!("column must be at least 1, got {}", self.column);
        }
        Ok(format!("{}{}", label::row_to_label(self.row)?, self.column))
    }

    /// Ensure both components are 1 or greater. The transforms will happily
    /// compute garbage for out-of-range addresses, so anything coming from
    /// outside the library should go through this first.
    pub fn check_bounds(&self) -> anyhow::Result<()> {
        if self.row < 1 || self.column < 1 {
            bail!("row and column must both be at least 1, got {}", self);
        }
        Ok(())
    }
}

/// Parse an address label such as `A1` or `ab12`. The leading letters are the
/// row and the trailing digits are the column.
impl FromStr for GridAddress {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .ok_or_else(|| anyhow!("missing column number in {:?}", s))?;
        let (row_label, column) = s.split_at(split);
        let row = label::label_to_row(row_label)
            .with_context(|| format!("invalid row in address {:?}", s))?;
        let column: i32 = column
            .parse()
            .with_context(|| format!("invalid column in address {:?}", s))?;
        let address = Self::new(row, column);
        address.check_bounds()?;
        Ok(address)
    }
}

// Custom deserialization to handle both label and struct forms
impl<'de> Deserialize<'de> for GridAddress {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_any(GridAddressVisitor)
    }
}

/// The struct form of an address, which has no extra rules beyond the
/// field types
#[derive(Deserialize)]
struct GridAddressFields {
    row: i32,
    column: i32,
}

struct GridAddressVisitor;

impl<'de> Visitor<'de> for GridAddressVisitor {
    type Value = GridAddress;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an address label or a row/column struct")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        // Alternate format keeps the whole context chain in the message
        value.parse().map_err(|err| E::custom(format!("{:#}", err)))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let GridAddressFields { row, column } =
            GridAddressFields::deserialize(MapAccessDeserializer::new(map))?;
        Ok(GridAddress::new(row, column))
    }
}

/// A right triangle in the grid, described by the role each vertex plays.
///
/// **The field names are roles, not screen positions.** `outer` is the vertex
/// at the right angle, `top_left` is the vertex that shares exactly one axis
/// with `outer` and tells the two orientations apart, and `bottom_right` is
/// what's left. For a left-oriented triangle `top_left` actually sits at the
/// *smaller* y of the two, depending on which way you consider y to point.
/// Keep the roles straight and the inverse transform will work; mix them up
/// and it will silently produce a wrong address.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}, {}]", top_left, outer, bottom_right)]
pub struct Triangle {
    pub top_left: Coordinate,
    pub outer: Coordinate,
    pub bottom_right: Coordinate,
}

impl Triangle {
    pub const fn new(
        top_left: Coordinate,
        outer: Coordinate,
        bottom_right: Coordinate,
    ) -> Self {
        Self {
            top_left,
            outer,
            bottom_right,
        }
    }

    /// Build a triangle from a positional list, in role order: top left,
    /// outer, bottom right. Returns `None` if there aren't exactly 3 vertices.
    pub fn from_vertices(vertices: &[Coordinate]) -> Option<Self> {
        match *vertices {
            [top_left, outer, bottom_right] => {
                Some(Self::new(top_left, outer, bottom_right))
            }
            _ => None,
        }
    }

    /// Get all three vertices in role order
    pub fn vertices(&self) -> [Coordinate; 3] {
        [self.top_left, self.outer, self.bottom_right]
    }
}

impl From<(Coordinate, Coordinate, Coordinate)> for Triangle {
    fn from(
        (top_left, outer, bottom_right): (Coordinate, Coordinate, Coordinate),
    ) -> Self {
        Self::new(top_left, outer, bottom_right)
    }
}

impl From<Triangle> for (Coordinate, Coordinate, Coordinate) {
    fn from(triangle: Triangle) -> Self {
        (triangle.top_left, triangle.outer, triangle.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{
        assert_de_tokens, assert_de_tokens_error, assert_ser_tokens, Token,
    };

    #[test]
    fn test_parse_coordinate() {
        assert_eq!("0,0".parse::<Coordinate>().unwrap(), Coordinate::ORIGIN);
        assert_eq!(
            " 10 , -20 ".parse::<Coordinate>().unwrap(),
            Coordinate::new(10, -20)
        );
        // Display form is accepted too
        let coord = Coordinate::new(3, 4);
        assert_eq!(coord.to_string().parse::<Coordinate>().unwrap(), coord);

        assert!("10".parse::<Coordinate>().is_err());
        assert!("a,1".parse::<Coordinate>().is_err());
        assert!("1,".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(
            "A1".parse::<GridAddress>().unwrap(),
            GridAddress::new(1, 1)
        );
        assert_eq!(
            "b3".parse::<GridAddress>().unwrap(),
            GridAddress::new(2, 3)
        );
        assert_eq!(
            " AA12 ".parse::<GridAddress>().unwrap(),
            GridAddress::new(27, 12)
        );

        // Missing pieces
        assert!("A".parse::<GridAddress>().is_err());
        assert!("12".parse::<GridAddress>().is_err());
        // Column 0 doesn't exist
        assert!("A0".parse::<GridAddress>().is_err());
        assert!("A-1".parse::<GridAddress>().is_err());
        assert!("A1B".parse::<GridAddress>().is_err());
    }

    #[test]
    fn test_address_label() {
        assert_eq!(GridAddress::new(1, 2).label().unwrap(), "A2");
        assert_eq!(GridAddress::new(28, 7).label().unwrap(), "AB7");
        assert!(GridAddress::new(0, 1).label().is_err());
        assert!(GridAddress::new(1, 0).label().is_err());
    }

    #[test]
    fn test_address_orientation() {
        assert!(GridAddress::new(1, 1).is_left());
        assert!(!GridAddress::new(1, 2).is_left());
        assert!(GridAddress::new(4, 9).is_left());
    }

    /// Addresses always serialize as a struct, but can come in as a label
    #[test]
    fn test_address_serde() {
        let address = GridAddress::new(2, 5);
        assert_ser_tokens(
            &address,
            &[
                Token::Struct {
                    name: "GridAddress",
                    len: 2,
                },
                Token::Str("row"),
                Token::I32(2),
                Token::Str("column"),
                Token::I32(5),
                Token::StructEnd,
            ],
        );
        assert_de_tokens(&address, &[Token::Str("B5")]);
        assert_de_tokens(
            &address,
            &[
                Token::Map { len: Some(2) },
                Token::Str("row"),
                Token::I32(2),
                Token::Str("column"),
                Token::I32(5),
                Token::MapEnd,
            ],
        );
    }

    /// Label errors should make it through deserialization intact
    #[test]
    fn test_address_de_errors() {
        assert_de_tokens_error::<GridAddress>(
            &[Token::Str("A0")],
            "row and column must both be at least 1, got (row 1, column 0)",
        );
        assert_de_tokens_error::<GridAddress>(
            &[Token::Str("A1B")],
            "invalid column in address \"A1B\": invalid digit found in string",
        );
        assert_de_tokens_error::<GridAddress>(
            &[Token::Bool(false)],
            "invalid type: boolean `false`, expected an address label or a \
            row/column struct",
        );

        let err = serde_json::from_str::<GridAddress>(r#""1A""#).unwrap_err();
        assert!(
            err.to_string().contains("invalid row in address \"1A\""),
            "{}",
            err
        );
    }

    #[test]
    fn test_grid_alias() {
        let grid: Grid = serde_json::from_str(r#"{"size": 7}"#).unwrap();
        assert_eq!(grid, Grid::new(7));
        let grid: Grid = serde_json::from_str(r#"{"cell_size": 3}"#).unwrap();
        assert_eq!(grid, Grid::new(3));
    }

    #[test]
    fn test_grid_validation() {
        assert!(Grid::new(1).validate().is_ok());
        assert!(Grid::new(0).validate().is_err());
        assert!(Grid::new(-10).validate().is_err());
    }

    #[test]
    fn test_triangle_from_vertices() {
        let a = Coordinate::new(0, 0);
        let b = Coordinate::new(10, 0);
        let c = Coordinate::new(10, 10);
        let triangle = Triangle::from_vertices(&[a, b, c]).unwrap();
        assert_eq!(triangle.top_left, a);
        assert_eq!(triangle.outer, b);
        assert_eq!(triangle.bottom_right, c);
        assert_eq!(triangle.vertices(), [a, b, c]);

        assert_eq!(Triangle::from_vertices(&[a, b]), None);
        assert_eq!(Triangle::from_vertices(&[a, b, c, a]), None);
        assert_eq!(Triangle::from_vertices(&[]), None);
    }
}
