//! Pixel geometry of a maze for a rendering or physics collaborator.
//!
//! Every shape is described by its centre and full extent, the form static rectangle and
//! circle bodies are usually created from. Closed internal walls, the four outer walls, the
//! goal marker and the agent's starting circle are all placed here; nothing is drawn.

use error_chain::bail;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::maze::Maze;
use crate::units::{Height, Width};

pub const WALL_THICKNESS: f32 = 10.0;
pub const BORDER_THICKNESS: f32 = 10.0;
const GOAL_SCALE: f32 = 0.5;
const AGENT_RADIUS_SCALE: f32 = 0.3;

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Rectangle {
    pub centre: Point,
    pub width: f32,
    pub height: f32,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Circle {
    pub centre: Point,
    pub radius: f32,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum WallOrientation {
    /// Runs along a row, separating a cell from the one below it.
    Horizontal,
    /// Runs down a column, separating a cell from the one to its right.
    Vertical,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub struct WallSegment {
    pub orientation: WallOrientation,
    /// The cell above or to the left of the wall.
    pub cell: GridCoordinate,
    pub shape: Rectangle,
}

#[derive(PartialEq, Clone, Debug)]
pub struct MazeLayout {
    pub unit_width: f32,
    pub unit_height: f32,
    pub borders: [Rectangle; 4],
    pub walls: Vec<WallSegment>,
    pub goal: Rectangle,
    pub agent: Circle,
}

impl MazeLayout {
    /// Fits the maze into a `width` by `height` pixel area.
    ///
    /// Fails with `InvalidArea` unless both extents are positive and finite.
    pub fn new(maze: &Maze, width: Width, height: Height) -> Result<MazeLayout> {
        let (Width(w), Height(h)) = (width, height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            bail!(ErrorKind::InvalidArea(w, h));
        }

        let unit_width = w / maze.columns() as f32;
        let unit_height = h / maze.rows() as f32;
        let smallest_unit = unit_width.min(unit_height);

        let cell_centre = |coord: GridCoordinate| Point {
            x: coord.column as f32 * unit_width + unit_width / 2.0,
            y: coord.row as f32 * unit_height + unit_height / 2.0,
        };

        let borders = [
            // north, south, west, east
            Rectangle { centre: Point { x: w / 2.0, y: 0.0 }, width: w, height: BORDER_THICKNESS },
            Rectangle { centre: Point { x: w / 2.0, y: h }, width: w, height: BORDER_THICKNESS },
            Rectangle { centre: Point { x: 0.0, y: h / 2.0 }, width: BORDER_THICKNESS, height: h },
            Rectangle { centre: Point { x: w, y: h / 2.0 }, width: BORDER_THICKNESS, height: h },
        ];

        let horizontals = maze.horizontal_openings();
        let verticals = maze.vertical_openings();
        let internal_walls = horizontals.rows() * horizontals.columns() +
                             verticals.rows() * verticals.columns();
        let mut walls = Vec::with_capacity(internal_walls - maze.openings_count());

        for row in 0..horizontals.rows() {
            for column in 0..horizontals.columns() {
                if horizontals.get(row, column) {
                    continue;
                }
                walls.push(WallSegment {
                    orientation: WallOrientation::Horizontal,
                    cell: GridCoordinate::new(row, column),
                    shape: Rectangle {
                        centre: Point {
                            x: column as f32 * unit_width + unit_width / 2.0,
                            y: row as f32 * unit_height + unit_height,
                        },
                        width: unit_width,
                        height: WALL_THICKNESS,
                    },
                });
            }
        }

        for row in 0..verticals.rows() {
            for column in 0..verticals.columns() {
                if verticals.get(row, column) {
                    continue;
                }
                walls.push(WallSegment {
                    orientation: WallOrientation::Vertical,
                    cell: GridCoordinate::new(row, column),
                    shape: Rectangle {
                        centre: Point {
                            x: column as f32 * unit_width + unit_width,
                            y: row as f32 * unit_height + unit_height / 2.0,
                        },
                        width: WALL_THICKNESS,
                        height: unit_height,
                    },
                });
            }
        }

        let goal_side = smallest_unit * GOAL_SCALE;
        Ok(MazeLayout {
            unit_width,
            unit_height,
            borders,
            walls,
            goal: Rectangle {
                centre: cell_centre(maze.goal()),
                width: goal_side,
                height: goal_side,
            },
            agent: Circle {
                centre: cell_centre(maze.start()),
                radius: smallest_unit * AGENT_RADIUS_SCALE,
            },
        })
    }

    /// The cell containing a pixel position, if it is inside the maze area.
    ///
    /// Negative, infinite or NaN positions are outside every cell.
    pub fn cell_at(&self, maze: &Maze, point: Point) -> Option<GridCoordinate> {
        let in_range = |v: f32| v.is_finite() && v >= 0.0;
        if !(in_range(point.x) && in_range(point.y)) {
            return None;
        }
        let coord = GridCoordinate::new((point.y / self.unit_height) as usize,
                                        (point.x / self.unit_width) as usize);
        if maze.dimensions().is_valid_coordinate(coord) {
            Some(coord)
        } else {
            None
        }
    }
}
