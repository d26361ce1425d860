use std::fmt;

use crate::cells::{CellIter, CompassPrimary, CoordinateSmallVec, Dimensions, GridCoordinate};
use crate::flag_grid::FlagGrid;

// Each passage is seen once when scanning cells in row major order.
static FORWARD_DIRECTIONS: [CompassPrimary; 2] = [CompassPrimary::East, CompassPrimary::South];

/// A generated maze: which cells were visited and which internal walls were removed.
///
/// `vertical_openings` is `rows x (columns - 1)`; entry `[r][c]` is the wall between cells
/// `(r, c)` and `(r, c + 1)`. `horizontal_openings` is `(rows - 1) x columns`; entry `[r][c]`
/// is the wall between cells `(r, c)` and `(r + 1, c)`. A `true` entry is a passage.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Maze {
    dimensions: Dimensions,
    visited: FlagGrid,
    vertical_openings: FlagGrid,
    horizontal_openings: FlagGrid,
    start: GridCoordinate,
}

impl Maze {
    /// An unvisited maze with every internal wall in place.
    pub(crate) fn closed(dimensions: Dimensions, start: GridCoordinate) -> Maze {
        let rows = dimensions.rows().0;
        let columns = dimensions.columns().0;
        Maze {
            dimensions,
            visited: FlagGrid::new(rows, columns),
            vertical_openings: FlagGrid::new(rows, columns - 1),
            horizontal_openings: FlagGrid::new(rows - 1, columns),
            start,
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.visited.get(coord.row, coord.column)
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self, coord: GridCoordinate) {
        self.visited.set(coord.row, coord.column);
    }

    /// Remove the wall on the `direction` side of `coord`.
    ///
    /// Panics if that wall is on the grid boundary.
    pub(crate) fn open(&mut self, coord: GridCoordinate, direction: CompassPrimary) {
        let (row, column) = (coord.row, coord.column);
        match direction {
            CompassPrimary::North => self.horizontal_openings.set(row - 1, column),
            CompassPrimary::South => self.horizontal_openings.set(row, column),
            CompassPrimary::West => self.vertical_openings.set(row, column - 1),
            CompassPrimary::East => self.vertical_openings.set(row, column),
        }
    }

    #[inline(always)]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.dimensions.rows().0
    }

    #[inline(always)]
    pub fn columns(&self) -> usize {
        self.dimensions.columns().0
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline(always)]
    pub fn visited(&self) -> &FlagGrid {
        &self.visited
    }

    #[inline(always)]
    pub fn vertical_openings(&self) -> &FlagGrid {
        &self.vertical_openings
    }

    #[inline(always)]
    pub fn horizontal_openings(&self) -> &FlagGrid {
        &self.horizontal_openings
    }

    /// Where a movable agent begins.
    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start
    }

    /// The corner opposite the origin, the conventional goal cell.
    #[inline]
    pub fn goal(&self) -> GridCoordinate {
        GridCoordinate::new(self.rows() - 1, self.columns() - 1)
    }

    /// Total passages carved, `rows * columns - 1` for a perfect maze.
    pub fn openings_count(&self) -> usize {
        self.vertical_openings.count() + self.horizontal_openings.count()
    }

    /// Is there a passage leaving `coord` towards `direction`?
    /// Walls on the grid boundary are always closed.
    pub fn is_open(&self, coord: GridCoordinate, direction: CompassPrimary) -> bool {
        if self.dimensions.neighbour_at_direction(coord, direction).is_none() {
            return false;
        }
        let (row, column) = (coord.row, coord.column);
        match direction {
            CompassPrimary::North => self.horizontal_openings.get(row - 1, column),
            CompassPrimary::South => self.horizontal_openings.get(row, column),
            CompassPrimary::West => self.vertical_openings.get(row, column - 1),
            CompassPrimary::East => self.vertical_openings.get(row, column),
        }
    }

    /// Cells that are linked to a particular cell by a passage.
    pub fn links(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter(|dir| self.is_open(coord, **dir))
            .filter_map(|dir| self.dimensions.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Every passage as a pair of cells, the first always North or West of the second.
    pub fn iter_links(&self) -> impl Iterator<Item = (GridCoordinate, GridCoordinate)> + '_ {
        self.iter().flat_map(move |coord| {
            FORWARD_DIRECTIONS.iter().filter_map(move |dir| {
                if self.is_open(coord, *dir) {
                    self.dimensions
                        .neighbour_at_direction(coord, *dir)
                        .map(|neighbour| (coord, neighbour))
                } else {
                    None
                }
            })
        })
    }

    pub fn iter(&self) -> CellIter {
        self.dimensions.iter()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let rows_count = self.rows();
        let columns_count = self.columns();

        // The north most boundary is special cased, each later row draws its own south side
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            let is_east_open = self.is_open(GridCoordinate::new(0, column), CompassPrimary::East);
            if is_east_open {
                output.push_str(WALL_LR);
            } else if column == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for row in 0..rows_count {
            let is_last_row = row == rows_count - 1;

            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for column in 0..columns_count {
                let cell_coord = GridCoordinate::new(row, column);
                let is_last_column = column == columns_count - 1;
                let east_open = self.is_open(cell_coord, CompassPrimary::East);
                let south_open = self.is_open(cell_coord, CompassPrimary::South);

                let body = if cell_coord == self.start {
                    " S "
                } else if cell_coord == self.goal() {
                    " E "
                } else {
                    "   "
                };
                row_middle_section_render.push_str(body);
                row_middle_section_render.push_str(if east_open { " " } else { WALL_UD });

                if column == 0 {
                    row_bottom_section_render.push_str(if is_last_row {
                        WALL_RU
                    } else if south_open {
                        WALL_UD
                    } else {
                        WALL_RUD
                    });
                }
                row_bottom_section_render.push_str(if south_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => {
                        if east_open {
                            WALL_LR
                        } else {
                            WALL_LRU
                        }
                    }
                    (false, true) => {
                        if south_open {
                            WALL_UD
                        } else {
                            WALL_LUD
                        }
                    }
                    (false, false) => {
                        let east = GridCoordinate::new(row, column + 1);
                        let south = GridCoordinate::new(row + 1, column);
                        let show_right_section = !self.is_open(east, CompassPrimary::South);
                        let show_down_section = !self.is_open(south, CompassPrimary::East);
                        let show_up_section = !east_open;
                        let show_left_section = !south_open;

                        match (
                            show_left_section,
                            show_right_section,
                            show_up_section,
                            show_down_section,
                        ) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            _ => " ",
                        }
                    }
                };
                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
