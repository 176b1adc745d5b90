/// Cell states and their integer encoding.
///
/// The encoding is the wire format read by the simulation: `1` healthy,
/// `0` empty, `-1` contaminated.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Healthy,
    Empty,
    Contaminated,
}

impl Cell {
    /// Integer code written to the grid file.
    pub fn code(self) -> i8 {
        match self {
            Cell::Healthy => 1,
            Cell::Empty => 0,
            Cell::Contaminated => -1,
        }
    }

    /// Textual token for this cell.
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Healthy => "1",
            Cell::Empty => "0",
            Cell::Contaminated => "-1",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An integer that is not one of the three cell codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCellCode(pub i64);

impl fmt::Display for UnknownCellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cell code: {}", self.0)
    }
}

impl std::error::Error for UnknownCellCode {}

impl TryFrom<i64> for Cell {
    type Error = UnknownCellCode;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Cell::Healthy),
            0 => Ok(Cell::Empty),
            -1 => Ok(Cell::Contaminated),
            other => Err(UnknownCellCode(other)),
        }
    }
}
