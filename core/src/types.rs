/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for cell counts and move counts.
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

/// Maps a row-major flat index back onto `(row, col)` for a grid `cols` wide.
pub const fn project(index: CellCount, cols: Coord) -> Coord2 {
    let cols = cols as CellCount;
    ((index / cols) as Coord, (index % cols) as Coord)
}

/// Inverse of [`project`].
pub const fn flatten((row, col): Coord2, cols: Coord) -> CellCount {
    row as CellCount * cols as CellCount + col as CellCount
}
