// Flood fill distances over a maze's passages.
//
// The distances are stored in a flat vector indexed by the row major cell index, so a
// `Distances` only makes sense for the maze (or an identically sized one) it was built from.

use crate::cells::{Dimensions, GridCoordinate};
use crate::maze::Maze;

#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    dimensions: Dimensions,
    distances: Vec<Option<u32>>,
    max_distance: u32,
    reachable: usize,
}

impl Distances {
    /// Breadth first steps from `start_coordinate` to every cell reachable through openings.
    /// Returns None if the start is not inside the maze.
    pub fn new(maze: &Maze, start_coordinate: GridCoordinate) -> Option<Distances> {
        let dimensions = maze.dimensions();
        let start_index = dimensions.coordinate_to_index(start_coordinate)?;

        let mut distances = vec![None; maze.size()];
        distances[start_index] = Some(0);
        let mut max = 0;
        let mut reachable = 1;

        // Every step is one from the previous cell, so the first distance written to a cell
        // is already the shortest. The distances vec doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        let mut distance_to_frontier = 0;
        while !frontier.is_empty() {
            let mut new_frontier = vec![];
            for cell_coord in &frontier {
                for link_coordinate in maze.links(*cell_coord).iter() {
                    // links only yields coordinates inside the maze
                    if let Some(link_index) = dimensions.coordinate_to_index(*link_coordinate) {
                        if distances[link_index].is_none() {
                            distances[link_index] = Some(distance_to_frontier + 1);
                            reachable += 1;
                            new_frontier.push(*link_coordinate);
                        }
                    }
                }
            }
            if !new_frontier.is_empty() {
                distance_to_frontier += 1;
                max = distance_to_frontier;
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            dimensions,
            distances,
            max_distance: max,
            reachable,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// How many cells, the start included, have a route from the start.
    #[inline(always)]
    pub fn reachable_count(&self) -> usize {
        self.reachable
    }

    /// None if the coordinate is outside the maze or there is no route to it.
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.dimensions
            .coordinate_to_index(coord)
            .and_then(|index| self.distances[index])
    }

    /// Every cell at the maximum distance from the start, in row major order.
    pub fn furthest_points(&self) -> Vec<GridCoordinate> {
        self.distances
            .iter()
            .enumerate()
            .filter(|&(_, distance)| *distance == Some(self.max_distance))
            .map(|(index, _)| self.dimensions.index_to_coordinate(index))
            .collect()
    }
}

/// The route from the start of `distances` to `end_point`, both ends included.
///
/// Walks back from the end always stepping to a linked cell one closer to the start.
/// None if the end is outside the maze or unreachable.
pub fn shortest_path(maze: &Maze,
                     distances: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {
    let mut current_distance = distances.distance_from_start_to(end_point)?;
    let mut path = vec![end_point];
    let mut current = end_point;

    while current_distance > 0 {
        let closer = maze.links(current)
            .iter()
            .cloned()
            .find(|link| distances.distance_from_start_to(*link) == Some(current_distance - 1))?;
        path.push(closer);
        current = closer;
        current_distance -= 1;
    }

    path.reverse();
    Some(path)
}

/// The route between the maze's start cell and its goal cell.
pub fn solution(maze: &Maze) -> Option<Vec<GridCoordinate>> {
    let distances = Distances::new(maze, maze.start())?;
    shortest_path(maze, &distances, maze.goal())
}

/// The longest route through a perfect maze.
///
/// The cell furthest from any cell is one end of the longest path; the cell furthest from
/// that end is the other.
pub fn longest_path(maze: &Maze) -> Vec<GridCoordinate> {
    let first_distances = match Distances::new(maze, maze.start()) {
        Some(distances) => distances,
        None => return vec![],
    };
    let long_path_start = first_distances.furthest_points()[0];

    let distances_from_start = match Distances::new(maze, long_path_start) {
        Some(distances) => distances,
        None => return vec![],
    };
    let end_point = distances_from_start.furthest_points()[0];

    shortest_path(maze, &distances_from_start, end_point).unwrap_or_else(Vec::new)
}

#[cfg(test)]
mod tests {

    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::cells::CompassPrimary;
    use crate::generators;

    static OUT_OF_GRID_COORDINATE: GridCoordinate = GridCoordinate {
        row: usize::MAX,
        column: usize::MAX,
    };

    fn closed_maze(rows: i64, columns: i64) -> Maze {
        let dimensions = Dimensions::new(rows, columns).expect("valid dimensions");
        Maze::closed(dimensions, GridCoordinate::new(0, 0))
    }

    // (0,0) - (0,1) - (0,2)
    //                   |
    // (1,0) - (1,1) - (1,2)
    fn s_bend_maze() -> Maze {
        let mut m = closed_maze(2, 3);
        let gc = |r, c| GridCoordinate::new(r, c);
        m.open(gc(0, 0), CompassPrimary::East);
        m.open(gc(0, 1), CompassPrimary::East);
        m.open(gc(0, 2), CompassPrimary::South);
        m.open(gc(1, 2), CompassPrimary::West);
        m.open(gc(1, 1), CompassPrimary::West);
        m
    }

    #[test]
    fn distances_construction_requires_valid_start_coordinate() {
        let m = closed_maze(3, 3);
        assert!(Distances::new(&m, OUT_OF_GRID_COORDINATE).is_none());
    }

    #[test]
    fn start() {
        let m = closed_maze(3, 3);
        let start_coordinate = GridCoordinate::new(1, 1);
        let distances = Distances::new(&m, start_coordinate).unwrap();
        assert_eq!(start_coordinate, distances.start());
    }

    #[test]
    fn distances_to_unreachable_cells_is_none() {
        let m = closed_maze(3, 3);
        let start_coordinate = GridCoordinate::new(0, 0);
        let distances = Distances::new(&m, start_coordinate).unwrap();
        for coord in m.iter() {
            let d = distances.distance_from_start_to(coord);
            if coord != start_coordinate {
                assert!(d.is_none());
            } else {
                assert_eq!(d, Some(0));
            }
        }
        assert_eq!(distances.reachable_count(), 1);
        assert_eq!(distances.max(), 0);
    }

    #[test]
    fn distance_to_invalid_coordinate_is_none() {
        let m = closed_maze(3, 3);
        let distances = Distances::new(&m, GridCoordinate::new(0, 0)).unwrap();
        assert_eq!(distances.distance_from_start_to(OUT_OF_GRID_COORDINATE), None);
    }

    #[test]
    fn distances_along_passages() {
        let m = s_bend_maze();
        let distances = Distances::new(&m, GridCoordinate::new(0, 0)).unwrap();
        let along: Vec<Option<u32>> = [(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]
            .iter()
            .map(|&(r, c)| distances.distance_from_start_to(GridCoordinate::new(r, c)))
            .collect();
        assert_eq!(along, (0..6).map(Some).collect::<Vec<_>>());
        assert_eq!(distances.max(), 5);
        assert_eq!(distances.reachable_count(), 6);
        assert_eq!(distances.furthest_points(), vec![GridCoordinate::new(1, 0)]);
    }

    #[test]
    fn path_follows_the_bend() {
        let m = s_bend_maze();
        let gc = |r, c| GridCoordinate::new(r, c);
        let distances = Distances::new(&m, gc(0, 0)).unwrap();
        assert_eq!(shortest_path(&m, &distances, gc(1, 1)),
                   Some(vec![gc(0, 0), gc(0, 1), gc(0, 2), gc(1, 2), gc(1, 1)]));
        assert_eq!(shortest_path(&m, &distances, gc(0, 0)), Some(vec![gc(0, 0)]));
        assert_eq!(shortest_path(&m, &distances, OUT_OF_GRID_COORDINATE), None);
    }

    #[test]
    fn no_path_to_unreachable_cell() {
        let m = closed_maze(2, 2);
        let distances = Distances::new(&m, GridCoordinate::new(0, 0)).unwrap();
        assert_eq!(shortest_path(&m, &distances, GridCoordinate::new(1, 1)), None);
    }

    #[test]
    fn solution_joins_start_and_goal() {
        let m = s_bend_maze();
        let path = solution(&m).expect("start and goal are connected");
        assert_eq!(path.first(), Some(&m.start()));
        assert_eq!(path.last(), Some(&m.goal()));
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn longest_path_spans_the_corridor() {
        let m = s_bend_maze();
        let path = longest_path(&m);
        assert_eq!(path.len(), 6);
        let ends = [path[0], path[5]];
        assert!(ends.contains(&GridCoordinate::new(0, 0)));
        assert!(ends.contains(&GridCoordinate::new(1, 0)));
    }

    #[test]
    fn generated_paths_step_through_open_walls() {
        fn p(seed: u64) -> bool {
            let mut rng = XorShiftRng::seed_from_u64(seed);
            let maze = generators::generate(9, 13, &mut rng).expect("valid dimensions");
            let path = match solution(&maze) {
                Some(path) => path,
                None => return false,
            };
            path.windows(2).all(|pair| maze.links(pair[0]).contains(&pair[1]))
        }
        quickcheck(p as fn(u64) -> bool)
    }
}
