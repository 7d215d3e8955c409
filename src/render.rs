use std::io::{self, Write};

use crate::grid::Grid;
use crate::solve::Placement;

/// Writes the grid back out with the winning square drawn in.
///
/// Cells inside the placement's footprint come out as the full marker,
/// everything else as stored; each row ends in a newline. A zero-sized
/// placement covers nothing, so the grid comes out unchanged.
pub fn render<W: Write>(grid: &Grid, best: Placement, out: &mut W) -> io::Result<()> {
    let full = grid.markers().full;
    let mut line = Vec::with_capacity(grid.width() + 1);
    for (i, row) in grid.rows().iter().enumerate() {
        line.clear();
        for (j, &cell) in row.iter().enumerate() {
            line.push(if best.covers(i, j) { full } else { cell });
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(())
}
