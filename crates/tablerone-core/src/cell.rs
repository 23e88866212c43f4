#![forbid(unsafe_code)]

//! Grid cells: either displayable content or a merge directive.

use std::fmt;

/// Anything that can be shown inside a table cell.
///
/// Blanket-implemented for every [`fmt::Display`] type, so numbers, strings
/// and user types with a `Display` impl can all be placed in a grid.
pub trait DisplayContent {
    /// Text shown for this value. May contain `\n` to produce several lines.
    fn to_display_string(&self) -> String;
}

impl<T: fmt::Display + ?Sized> DisplayContent for T {
    fn to_display_string(&self) -> String {
        self.to_string()
    }
}

/// Direction of a merge directive.
///
/// A cell holding `Direction::Left` takes its content from the cell to its
/// left, extending that cell's span one column to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Borrow content from the cell above.
    Up,
    /// Borrow content from the cell below.
    Down,
    /// Borrow content from the cell to the left.
    Left,
    /// Borrow content from the cell to the right.
    Right,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row/column delta of the cell this directive points at.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The direction pointing back the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name, as used by the CLI's JSON input.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single grid position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Text owned by this position.
    Content(String),
    /// This position is covered by the neighbouring cell in `Direction`.
    Merge(Direction),
}

impl Cell {
    /// Create a content cell from any displayable value.
    pub fn content(value: impl DisplayContent) -> Self {
        Self::Content(value.to_display_string())
    }

    /// Create a merge directive.
    pub const fn merge(direction: Direction) -> Self {
        Self::Merge(direction)
    }

    /// The content text, if this is not a merge directive.
    pub fn as_content(&self) -> Option<&str> {
        match self {
            Self::Content(text) => Some(text),
            Self::Merge(_) => None,
        }
    }

    /// The merge direction, if this is a merge directive.
    pub const fn as_merge(&self) -> Option<Direction> {
        match self {
            Self::Content(_) => None,
            Self::Merge(direction) => Some(*direction),
        }
    }

    /// Whether this cell is a merge directive.
    #[inline]
    pub const fn is_merge(&self) -> bool {
        matches!(self, Self::Merge(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Content(String::new())
    }
}

impl From<Direction> for Cell {
    fn from(direction: Direction) -> Self {
        Self::Merge(direction)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Content(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Content(text.to_owned())
    }
}

impl From<&String> for Cell {
    fn from(text: &String) -> Self {
        Self::Content(text.clone())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Self::content(value)
                }
            }
        )*
    };
}

impl_from_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_become_content() {
        assert_eq!(Cell::from(42), Cell::Content("42".into()));
        assert_eq!(Cell::from(1.5), Cell::Content("1.5".into()));
        assert_eq!(Cell::from(true), Cell::Content("true".into()));
        assert_eq!(Cell::from('x'), Cell::Content("x".into()));
        assert_eq!(Cell::from("abc"), Cell::Content("abc".into()));
    }

    #[test]
    fn direction_becomes_merge() {
        let cell = Cell::from(Direction::Left);
        assert!(cell.is_merge());
        assert_eq!(cell.as_merge(), Some(Direction::Left));
        assert_eq!(cell.as_content(), None);
    }

    #[test]
    fn user_display_types_are_content() {
        struct Celsius(i32);
        impl fmt::Display for Celsius {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}°C", self.0)
            }
        }
        assert_eq!(Cell::content(Celsius(21)).as_content(), Some("21°C"));
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (dr, dc) = d.delta();
            let (or, oc) = d.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn default_cell_is_empty_content() {
        assert_eq!(Cell::default().as_content(), Some(""));
    }
}
