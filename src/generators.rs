use log::{debug, trace};

use crate::cells::{CompassPrimary, Dimensions, GridCoordinate};
use crate::errors::*;
use crate::maze::Maze;
use crate::random::{self, RandomSource};

/// Generate a perfect maze of `rows * columns` cells with the recursive backtracker.
///
/// Fails with `InvalidDimensions` before allocating anything if either count is not positive.
pub fn generate<R>(rows: i64, columns: i64, rng: &mut R) -> Result<Maze>
    where R: RandomSource + ?Sized
{
    let dimensions = Dimensions::new(rows, columns)?;
    Ok(recursive_backtracker(dimensions, rng))
}

/// Apply the recursive backtracker maze generation algorithm to a fresh grid.
///
/// A randomised depth first walk from a random start cell. On entering a cell the four
/// directions out of it are shuffled; each in turn that leads to an unvisited cell inside the
/// grid has its wall knocked down and is walked into before the next direction is tried.
/// When every direction is used up the walk backs out to the previous cell.
///
/// A passage is only carved into a cell that has never been visited and that cell is marked
/// visited before anything else can reach it, so the passages form a spanning tree: every
/// cell reachable, no loops, `rows * columns - 1` openings.
///
/// The walk keeps its own stack of partially explored cells rather than recursing, so a
/// single long corridor through a large grid cannot overflow the call stack. The random
/// draws happen in the same order a recursive walk would make them: start row, start column,
/// then one shuffle per cell as it is entered.
pub fn recursive_backtracker<R>(dimensions: Dimensions, rng: &mut R) -> Maze
    where R: RandomSource + ?Sized
{
    let start = GridCoordinate::new(rng.index_below(dimensions.rows().0),
                                    rng.index_below(dimensions.columns().0));
    debug!("Recursive backtracker on {}x{} grid from {:?}",
           dimensions.rows().0,
           dimensions.columns().0,
           start);

    let mut maze = Maze::closed(dimensions, start);
    let mut stack = vec![];

    maze.mark_visited(start);
    stack.push(WalkFrame::enter(start, rng));

    loop {
        let step = match stack.last_mut() {
            Some(frame) => frame.next_unvisited(&maze),
            None => break,
        };

        match step {
            Some((from, direction, into)) => {
                trace!("Carving {:?} from {:?} into {:?}", direction, from, into);
                maze.open(from, direction);
                maze.mark_visited(into);
                stack.push(WalkFrame::enter(into, rng));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("Carved {} passages", maze.openings_count());
    maze
}

/// Owns a random source so that new mazes can be rolled on demand, each independent of the
/// last.
#[derive(Debug)]
pub struct MazeGenerator<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> MazeGenerator<R> {
    pub fn new(rng: R) -> MazeGenerator<R> {
        MazeGenerator { rng }
    }

    pub fn generate(&mut self, rows: i64, columns: i64) -> Result<Maze> {
        generate(rows, columns, &mut self.rng)
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

/// A cell on the walk's stack with the directions still left to try.
#[derive(Debug)]
struct WalkFrame {
    coord: GridCoordinate,
    directions: [CompassPrimary; 4],
    next_direction: usize,
}

impl WalkFrame {
    fn enter<R>(coord: GridCoordinate, rng: &mut R) -> WalkFrame
        where R: RandomSource + ?Sized
    {
        let mut directions = CompassPrimary::ALL;
        random::shuffle(&mut directions, rng);
        WalkFrame {
            coord,
            directions,
            next_direction: 0,
        }
    }

    /// Consume directions until one leads to an unvisited cell inside the grid.
    fn next_unvisited(&mut self, maze: &Maze)
                      -> Option<(GridCoordinate, CompassPrimary, GridCoordinate)> {
        let dimensions = maze.dimensions();
        while self.next_direction < self.directions.len() {
            let direction = self.directions[self.next_direction];
            self.next_direction += 1;

            if let Some(neighbour) = dimensions.neighbour_at_direction(self.coord, direction) {
                if !maze.is_visited(neighbour) {
                    return Some((self.coord, direction, neighbour));
                }
            }
        }
        None
    }
}
