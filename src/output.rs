/// Grid text serialization.
///
/// Writes directly to a `Write` sink with no intermediate `String`. The
/// first line holds the dimensions as given by the caller, then one line
/// per row with cell codes separated by single spaces.
use std::io::{self, Write};

use crate::grid::Grid;

/// Write the header line `rows cols` followed by every grid row.
///
/// `header` is echoed verbatim, so a negative dimension is printed as-is
/// even though the grid has no cells for it.
pub fn write_grid<W: Write>(w: &mut W, header: (i64, i64), grid: &Grid) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    w.write_all(buf.format(header.0).as_bytes())?;
    w.write_all(b" ")?;
    w.write_all(buf.format(header.1).as_bytes())?;
    w.write_all(b"\n")?;

    for row in grid.rows_iter() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                w.write_all(b" ")?;
            }
            w.write_all(cell.as_str().as_bytes())?;
        }
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Render a grid to a `String`.
pub fn render(header: (i64, i64), grid: &Grid) -> String {
    let mut buf = Vec::new();
    write_grid(&mut buf, header, grid).expect("writing to a Vec cannot fail");
    // Only ASCII digits, '-', ' ' and '\n' are ever written.
    String::from_utf8(buf).expect("grid text is ASCII")
}
