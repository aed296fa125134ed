use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use crate::grid::Grid;
use crate::piece::{Direction, Shape};

const SHAPE_CHARS: [char; 6] = ['E', 'N', 'S', 'C', 'T', 'X'];
const DIR_CHARS: [char; 4] = ['N', 'E', 'S', 'W'];

/// Reasons a persisted grid snapshot cannot be read or written.
#[derive(Debug)]
pub enum FormatError {
    /// The underlying file could not be read or written.
    Io(std::io::Error),
    /// The first line is not `<rows> <cols> <wrapping:0|1>`.
    MalformedHeader,
    /// The header declares a zero row or column count.
    ZeroDimension,
    /// The body ends before `rows * cols` cells have been read.
    Truncated,
    /// A cell token is not exactly one shape character and one direction
    /// character.
    BadCell(String),
    /// A shape character outside `E N S C T X`.
    UnknownShape(char),
    /// A direction character outside `N E S W`.
    UnknownDirection(char),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::MalformedHeader => write!(f, "malformed header line"),
            Self::ZeroDimension => write!(f, "grid dimensions must be at least 1x1"),
            Self::Truncated => write!(f, "snapshot ends before the declared grid is complete"),
            Self::BadCell(token) => write!(f, "malformed cell token {token:?}"),
            Self::UnknownShape(c) => write!(f, "unknown shape character {c:?}"),
            Self::UnknownDirection(c) => write!(f, "unknown direction character {c:?}"),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FormatError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

fn shape_from_char(c: char) -> Result<Shape, FormatError> {
    match c {
        'E' => Ok(Shape::Empty),
        'N' => Ok(Shape::Endpoint),
        'S' => Ok(Shape::Segment),
        'C' => Ok(Shape::Corner),
        'T' => Ok(Shape::Tee),
        'X' => Ok(Shape::Cross),
        _ => Err(FormatError::UnknownShape(c)),
    }
}

fn direction_from_char(c: char) -> Result<Direction, FormatError> {
    match c {
        'N' => Ok(Direction::North),
        'E' => Ok(Direction::East),
        'S' => Ok(Direction::South),
        'W' => Ok(Direction::West),
        _ => Err(FormatError::UnknownDirection(c)),
    }
}

impl Grid {
    /// Render this grid in the persisted text format:
    /// a `<rows> <cols> <wrapping:0|1>` header line, then one line per row of
    /// space-separated two-character `<shape><direction>` cells.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(16 + self.rows() * self.cols() * 3);
        out.push_str(&format!(
            "{} {} {}\n",
            self.rows(),
            self.cols(),
            self.is_wrapping() as u8
        ));
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                out.push(SHAPE_CHARS[self.shape_at(i, j) as usize]);
                out.push(DIR_CHARS[self.orientation_at(i, j) as usize]);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Parse a grid from the persisted text format. All format violations are
    /// reported as recoverable [`FormatError`]s, never panics.
    pub fn from_text(text: &str) -> Result<Self, FormatError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(FormatError::MalformedHeader)?;
        let mut fields = header.split_whitespace();
        let rows: usize = fields
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(FormatError::MalformedHeader)?;
        let cols: usize = fields
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(FormatError::MalformedHeader)?;
        let wrapping = match fields.next() {
            Some("0") => false,
            Some("1") => true,
            _ => return Err(FormatError::MalformedHeader),
        };
        if fields.next().is_some() {
            return Err(FormatError::MalformedHeader);
        }
        if rows == 0 || cols == 0 {
            return Err(FormatError::ZeroDimension);
        }

        let mut grid = Self::new_empty(rows, cols, wrapping);
        for i in 0..rows {
            let line = lines.next().ok_or(FormatError::Truncated)?;
            let mut cells = line.split_whitespace();
            for j in 0..cols {
                let token = cells.next().ok_or(FormatError::Truncated)?;
                let mut chars = token.chars();
                let (Some(c_s), Some(c_d), None) = (chars.next(), chars.next(), chars.next())
                else {
                    return Err(FormatError::BadCell(token.to_string()));
                };
                grid.set_shape(i, j, shape_from_char(c_s)?);
                grid.set_orientation(i, j, direction_from_char(c_d)?);
            }
        }
        Ok(grid)
    }

    /// Write this grid to `path` in the persisted text format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FormatError> {
        fs::write(path, self.to_text())?;
        Ok(())
    }

    /// Read a grid from the snapshot file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FormatError> {
        Self::from_text(&fs::read_to_string(path)?)
    }
}
