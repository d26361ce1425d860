use std::fmt;

use bit_set::BitSet;

/// A fixed size `rows * columns` grid of boolean flags, stored row major in a bit set.
///
/// Used for the visited marks and for both wall opening grids of a maze. The grid never
/// grows or shrinks after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct FlagGrid {
    rows: usize,
    columns: usize,
    flags: BitSet,
}

impl FlagGrid {
    /// All flags start `false`. Either count may be zero, e.g. the vertical openings of a
    /// single column maze.
    pub fn new(rows: usize, columns: usize) -> FlagGrid {
        FlagGrid {
            rows,
            columns,
            flags: BitSet::with_capacity(rows * columns),
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The flag at `[row][column]`; out of range positions read as `false`.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.index(row, column)
            .map_or(false, |bit_index| self.flags.contains(bit_index))
    }

    /// Sets the flag at `[row][column]`.
    ///
    /// Panics if the position is outside the grid.
    #[inline]
    pub fn set(&mut self, row: usize, column: usize) {
        let bit_index = self.index(row, column).unwrap_or_else(|| {
            panic!(
                "flag position [{}][{}] outside a {}x{} grid",
                row, column, self.rows, self.columns
            )
        });
        self.flags.insert(bit_index);
    }

    /// Number of `true` flags.
    #[inline]
    pub fn count(&self) -> usize {
        self.flags.len()
    }

    #[inline]
    pub fn all_set(&self) -> bool {
        self.count() == self.rows * self.columns
    }

    /// The grid as nested rows, the shape a renderer usually wants.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows)
            .map(|row| (0..self.columns).map(|column| self.get(row, column)).collect())
            .collect()
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }
}

impl fmt::Debug for FlagGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FlagGrid {}x{} :: {:?}", self.rows, self.columns, self.to_rows())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn starts_all_false() {
        let g = FlagGrid::new(3, 4);
        assert_eq!(g.count(), 0);
        assert!(!g.all_set());
        assert_eq!(g.to_rows(), vec![vec![false; 4]; 3]);
    }

    #[test]
    fn set_and_get() {
        let mut g = FlagGrid::new(2, 3);
        g.set(0, 2);
        g.set(1, 0);
        g.set(1, 0);
        assert!(g.get(0, 2));
        assert!(g.get(1, 0));
        assert!(!g.get(0, 0));
        assert_eq!(g.count(), 2);
        assert_eq!(g.to_rows(), vec![vec![false, false, true], vec![true, false, false]]);
    }

    #[test]
    fn out_of_range_reads_false() {
        let mut g = FlagGrid::new(2, 2);
        g.set(1, 1);
        assert!(!g.get(2, 1));
        assert!(!g.get(1, 2));
        // [0][2] would alias [1][0] if the column bound were not checked
        g.set(1, 0);
        assert!(!g.get(0, 2));
    }

    #[test]
    #[should_panic]
    fn set_out_of_range_panics() {
        let mut g = FlagGrid::new(2, 2);
        g.set(0, 2);
    }

    #[test]
    fn empty_grid() {
        let g = FlagGrid::new(3, 0);
        assert_eq!(g.count(), 0);
        assert!(g.all_set());
        assert_eq!(g.to_rows(), vec![Vec::<bool>::new(); 3]);
    }

    #[test]
    fn all_set() {
        let mut g = FlagGrid::new(2, 2);
        for row in 0..2 {
            for column in 0..2 {
                g.set(row, column);
            }
        }
        assert!(g.all_set());
    }
}
