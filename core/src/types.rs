use ndarray::Array2;

/// Single grid axis, used for row/column counts and positions.
pub type Coord = u8;

/// Count type for mine counts, accounted cells and total cells.
pub type CellCount = u16;

/// Grid position as `(row, col)`.
pub type Pos = (Coord, Coord);

/// Smallest allowed number of rows and of columns.
pub const MIN_SIDE: Coord = 5;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Pos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(rows: Coord, cols: Coord) -> CellCount {
    (rows as CellCount) * (cols as CellCount)
}

/// Converts signed player/seed coordinates into a position inside `size`.
pub fn checked_pos(row: i64, col: i64, (rows, cols): Pos) -> Option<Pos> {
    let row = Coord::try_from(row).ok().filter(|&row| row < rows)?;
    let col = Coord::try_from(col).ok().filter(|&col| col < cols)?;
    Some((row, col))
}

pub trait NeighborsExt {
    fn neighbors(&self, pos: Pos) -> Neighbors;
}

impl<T> NeighborsExt for Array2<T> {
    fn neighbors(&self, pos: Pos) -> Neighbors {
        let (rows, cols) = self.dim();
        // dimensions always come from a `Pos`, so they fit
        Neighbors::new(pos, (rows as Coord, cols as Coord))
    }
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds neighbours of a cell, without wraparound.
#[derive(Debug)]
pub struct Neighbors {
    center: Pos,
    size: Pos,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Pos, size: Pos) -> Self {
        Self {
            center,
            size,
            next: 0,
        }
    }

    fn shift(&self, (dr, dc): (i8, i8)) -> Option<Pos> {
        let row = self.center.0.checked_add_signed(dr)?;
        let col = self.center.1.checked_add_signed(dc)?;
        (row < self.size.0 && col < self.size.1).then_some((row, col))
    }
}

impl Iterator for Neighbors {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(pos) = self.shift(offset) {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<_> = Neighbors::new((0, 0), (5, 5)).collect();
        assert_eq!(found, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn far_corner_does_not_wrap() {
        let found: Vec<_> = Neighbors::new((4, 4), (5, 5)).collect();
        assert_eq!(found, vec![(3, 3), (3, 4), (4, 3)]);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(Neighbors::new((2, 3), (5, 6)).count(), 8);
    }

    #[test]
    fn checked_pos_rejects_negative_and_oversized() {
        assert_eq!(checked_pos(4, 0, (5, 5)), Some((4, 0)));
        assert_eq!(checked_pos(-1, 0, (5, 5)), None);
        assert_eq!(checked_pos(0, 5, (5, 5)), None);
        assert_eq!(checked_pos(99, 99, (5, 5)), None);
        assert_eq!(checked_pos(300, 0, (255, 255)), None);
    }
}
