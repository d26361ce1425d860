use std::convert::TryFrom;

use smallvec::SmallVec;

use crate::errors::*;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub column: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, column: usize) -> GridCoordinate {
        GridCoordinate { row, column }
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_column_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_column_pair.0, row_column_pair.1)
    }
}

/// The four passage directions out of a square cell.
///
/// The declaration order (North, East, South, West) is the order neighbours are
/// listed in before they are shuffled by a generator.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    East,
    South,
    West,
}

impl CompassPrimary {
    pub const ALL: [CompassPrimary; 4] = [
        CompassPrimary::North,
        CompassPrimary::East,
        CompassPrimary::South,
        CompassPrimary::West,
    ];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::West => CompassPrimary::East,
        }
    }
}

/// Validated size of a rectangular maze grid.
///
/// Both counts are at least 1 and `rows * columns` fits in a `usize`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Dimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl Dimensions {
    /// Checks the requested size before any grid storage is allocated.
    pub fn new(rows: i64, columns: i64) -> Result<Dimensions> {
        let invalid = || Error::from(ErrorKind::InvalidDimensions(rows, columns));

        if rows <= 0 || columns <= 0 {
            return Err(invalid());
        }
        let row_count = usize::try_from(rows).map_err(|_| invalid())?;
        let column_count = usize::try_from(columns).map_err(|_| invalid())?;
        row_count.checked_mul(column_count).ok_or_else(invalid)?;

        Ok(Dimensions {
            rows: RowsCount(row_count),
            columns: ColumnsCount(column_count),
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    /// Node and edge counts of a perfect maze on this grid.
    pub fn spanning_tree_size(&self) -> (NodesCount, EdgesCount) {
        let nodes = self.size();
        (nodes, EdgesCount(nodes.0 - 1))
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.column < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0..size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_to_coordinate(&self, one_dimensional_index: usize) -> GridCoordinate {
        let row = one_dimensional_index / self.columns.0;
        let column = one_dimensional_index - (row * self.columns.0);
        GridCoordinate { row, column }
    }

    /// The cell one step away in `direction`, if it is inside the grid.
    pub fn neighbour_at_direction(
        &self,
        coord: GridCoordinate,
        direction: CompassPrimary,
    ) -> Option<GridCoordinate> {
        let (row, column) = (coord.row, coord.column);
        let neighbour = match direction {
            CompassPrimary::North => {
                if row > 0 {
                    GridCoordinate::new(row - 1, column)
                } else {
                    return None;
                }
            }
            CompassPrimary::South => GridCoordinate::new(row + 1, column),
            CompassPrimary::East => GridCoordinate::new(row, column + 1),
            CompassPrimary::West => {
                if column > 0 {
                    GridCoordinate::new(row, column - 1)
                } else {
                    return None;
                }
            }
        };

        if self.is_valid_coordinate(neighbour) {
            Some(neighbour)
        } else {
            None
        }
    }

    /// Cells to the North, East, South or West of a cell, but not necessarily linked by a passage.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            dimensions: *self,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    dimensions: Dimensions,
}

impl Iterator for CellIter {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.dimensions.size().0 {
            let coord = self.dimensions.index_to_coordinate(self.current_cell_number);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.dimensions.size().0 - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()

#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;

    fn dims(rows: i64, columns: i64) -> Dimensions {
        Dimensions::new(rows, columns).expect("valid dimensions")
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for &(rows, columns) in &[(0, 1), (1, 0), (0, 0), (-1, 5), (5, -1), (i64::MIN, 3)] {
            match Dimensions::new(rows, columns) {
                Err(Error(ErrorKind::InvalidDimensions(r, c), _)) => {
                    assert_eq!((r, c), (rows, columns));
                }
                other => panic!("expected InvalidDimensions, got {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_overflowing_cell_count() {
        assert!(Dimensions::new(i64::MAX, i64::MAX).is_err());
    }

    #[test]
    fn grid_size() {
        let d = dims(3, 7);
        assert_eq!(d.rows(), RowsCount(3));
        assert_eq!(d.columns(), ColumnsCount(7));
        assert_eq!(d.size(), NodesCount(21));
        assert_eq!(d.spanning_tree_size(), (NodesCount(21), EdgesCount(20)));
    }

    #[test]
    fn grid_coordinate_as_index() {
        let d = dims(2, 3);
        let gc = |r, c| GridCoordinate::new(r, c);
        let coords = [gc(0, 0), gc(0, 1), gc(0, 2), gc(1, 0), gc(1, 1), gc(1, 2)];
        let indices: Vec<Option<usize>> =
            coords.iter().map(|coord| d.coordinate_to_index(*coord)).collect();
        let expected = (0..6).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        for (i, coord) in coords.iter().enumerate() {
            assert_eq!(d.index_to_coordinate(i), *coord);
        }

        assert_eq!(d.coordinate_to_index(gc(2, 0)), None);
        assert_eq!(d.coordinate_to_index(gc(0, 3)), None);
        assert_eq!(d.coordinate_to_index(gc(usize::MAX, usize::MAX)), None);
    }

    #[test]
    fn neighbour_cells() {
        let d = dims(10, 10);

        let check_expected_neighbours = |coord, expected_neighbours: &[GridCoordinate]| {
            let neighbours: Vec<GridCoordinate> =
                d.neighbours(coord).iter().cloned().sorted().collect();
            let expected: Vec<GridCoordinate> =
                expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(neighbours, expected);
        };
        let gc = |r, c| GridCoordinate::new(r, c);

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(0, 1), gc(1, 0)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(9, 9), &[gc(8, 9), gc(9, 8)]);

        // sides
        check_expected_neighbours(gc(0, 1), &[gc(0, 0), gc(1, 1), gc(0, 2)]);
        check_expected_neighbours(gc(8, 9), &[gc(7, 9), gc(9, 9), gc(8, 8)]);

        // inside the grid
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbour_at_dir() {
        let d = dims(2, 2);
        let gc = |r, c| GridCoordinate::new(r, c);
        let check_neighbour = |coord, dir: CompassPrimary, expected| {
            assert_eq!(d.neighbour_at_direction(coord, dir), expected);
        };
        check_neighbour(gc(0, 0), CompassPrimary::North, None);
        check_neighbour(gc(0, 0), CompassPrimary::South, Some(gc(1, 0)));
        check_neighbour(gc(0, 0), CompassPrimary::East, Some(gc(0, 1)));
        check_neighbour(gc(0, 0), CompassPrimary::West, None);

        check_neighbour(gc(1, 1), CompassPrimary::North, Some(gc(0, 1)));
        check_neighbour(gc(1, 1), CompassPrimary::South, None);
        check_neighbour(gc(1, 1), CompassPrimary::East, None);
        check_neighbour(gc(1, 1), CompassPrimary::West, Some(gc(1, 0)));
    }

    #[test]
    fn opposite_directions() {
        for dir in CompassPrimary::ALL.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn cell_iter() {
        let d = dims(2, 2);
        assert_eq!(d.iter().len(), 4);
        assert_eq!(d.iter().last(), Some(GridCoordinate::from((1, 1))));
        assert_eq!(
            d.iter().collect::<Vec<GridCoordinate>>(),
            &[
                GridCoordinate::new(0, 0),
                GridCoordinate::new(0, 1),
                GridCoordinate::new(1, 0),
                GridCoordinate::new(1, 1)
            ]
        );
    }
}
