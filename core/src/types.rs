/// Single coordinate axis used for board rows, columns and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates the clamped 3x3 neighborhood of a cell, excluding the cell itself.
///
/// The neighborhood is truncated at the edges and never wraps around, so a
/// corner yields 3 coordinates, an edge 5 and an interior cell 8.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    rows: core::ops::RangeInclusive<Coord>,
    cols: core::ops::RangeInclusive<Coord>,
    center: Coord2,
    row: Coord,
    col: Coord,
    done: bool,
}

impl NeighborIter {
    pub fn new((row, col): Coord2, (rows, cols): Coord2) -> Self {
        let row_span = row.saturating_sub(1)..=row.saturating_add(1).min(rows.saturating_sub(1));
        let col_span = col.saturating_sub(1)..=col.saturating_add(1).min(cols.saturating_sub(1));
        Self {
            row: *row_span.start(),
            col: *col_span.start(),
            done: row_span.is_empty() || col_span.is_empty(),
            rows: row_span,
            cols: col_span,
            center: (row, col),
        }
    }

    fn advance(&mut self) {
        if self.col < *self.cols.end() {
            self.col += 1;
        } else if self.row < *self.rows.end() {
            self.row += 1;
            self.col = *self.cols.start();
        } else {
            self.done = true;
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let current = (self.row, self.col);
            self.advance();
            if current != self.center {
                return Some(current);
            }
        }
        None
    }
}
