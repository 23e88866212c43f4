#![forbid(unsafe_code)]

//! JSON grid input.
//!
//! The input is an array of rows, each an array of cells. Scalars become
//! cell content (`null` is empty); `{"merge": "left"}` and friends are merge
//! directives.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tablerone::{Cell, Direction, Grid, TableError};

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MergeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl From<MergeDirection> for Direction {
    fn from(d: MergeDirection) -> Self {
        match d {
            MergeDirection::Up => Direction::Up,
            MergeDirection::Down => Direction::Down,
            MergeDirection::Left => Direction::Left,
            MergeDirection::Right => Direction::Right,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MergeDirective {
    merge: MergeDirection,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCell {
    Merge(MergeDirective),
    Value(Value),
}

/// Input that is not a grid.
#[derive(Debug)]
pub enum InputError {
    Json(serde_json::Error),
    /// An array or an object that is not a merge directive.
    UnsupportedCell {
        row: usize,
        col: usize,
        kind: &'static str,
    },
    Table(TableError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid JSON input: {err}"),
            Self::UnsupportedCell { row, col, kind } => write!(
                f,
                "invalid cell at row {row}, column {col}: expected a scalar or a merge directive, found {kind}"
            ),
            Self::Table(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Table(err) => Some(err),
            Self::UnsupportedCell { .. } => None,
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<TableError> for InputError {
    fn from(err: TableError) -> Self {
        Self::Table(err)
    }
}

fn to_cell(row: usize, col: usize, cell: JsonCell) -> Result<Cell, InputError> {
    let unsupported = |kind| InputError::UnsupportedCell { row, col, kind };
    Ok(match cell {
        JsonCell::Merge(directive) => Cell::Merge(directive.merge.into()),
        JsonCell::Value(Value::Null) => Cell::default(),
        JsonCell::Value(Value::Bool(b)) => Cell::from(b),
        JsonCell::Value(Value::Number(n)) => Cell::from(n.to_string()),
        JsonCell::Value(Value::String(s)) => Cell::from(s),
        JsonCell::Value(Value::Array(_)) => return Err(unsupported("an array")),
        JsonCell::Value(Value::Object(_)) => return Err(unsupported("an object")),
    })
}

/// Parse a JSON array of rows into a grid.
pub fn parse_grid(text: &str) -> Result<Grid, InputError> {
    let rows: Vec<Vec<JsonCell>> = serde_json::from_str(text)?;
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(r, row)| {
            row.into_iter()
                .enumerate()
                .map(|(c, cell)| to_cell(r, c, cell))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(rows = rows.len(), "parsed input grid");
    Ok(Grid::new(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_and_merges() {
        let grid = parse_grid(
            r#"[["name", {"merge": "left"}], [1.5, null], [true, {"merge": "up"}]]"#,
        )
        .unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 2));
        assert_eq!(grid.get(0, 0), Some(&Cell::from("name")));
        assert_eq!(grid.get(0, 1), Some(&Cell::Merge(Direction::Left)));
        assert_eq!(grid.get(1, 0), Some(&Cell::from("1.5")));
        assert_eq!(grid.get(1, 1), Some(&Cell::from("")));
        assert_eq!(grid.get(2, 0), Some(&Cell::from("true")));
        assert_eq!(grid.get(2, 1), Some(&Cell::Merge(Direction::Up)));
    }

    #[test]
    fn unknown_objects_are_rejected_with_position() {
        let err = parse_grid(r#"[["a", {"merge": "sideways"}]]"#).unwrap_err();
        assert!(matches!(
            err,
            InputError::UnsupportedCell {
                row: 0,
                col: 1,
                kind: "an object"
            }
        ));
        let err = parse_grid(r#"[[[1, 2]]]"#).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedCell { kind: "an array", .. }));
    }

    #[test]
    fn ragged_input() {
        let err = parse_grid(r#"[["a", "b"], ["c"]]"#).unwrap_err();
        assert!(matches!(
            err,
            InputError::Table(TableError::NonRectangular { row: 1, .. })
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(parse_grid("[[1,"), Err(InputError::Json(_))));
        assert!(matches!(parse_grid(r#"{"a": 1}"#), Err(InputError::Json(_))));
    }

    #[test]
    fn empty_array_is_empty_grid() {
        assert!(parse_grid("[]").unwrap().is_empty());
    }
}
