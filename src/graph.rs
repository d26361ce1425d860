use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::GridCoordinate;
use crate::maze::Maze;
use crate::units::{EdgesCount, NodesCount};

/// The maze's passages as an undirected graph.
///
/// Node `i` is the cell with row major index `i`; there is one edge per opening.
pub fn to_graph(maze: &Maze) -> UnGraph<GridCoordinate, ()> {
    let dimensions = maze.dimensions();
    let mut graph = UnGraph::with_capacity(maze.size(), maze.openings_count());
    for coord in maze.iter() {
        let _ = graph.add_node(coord);
    }

    for (a, b) in maze.iter_links() {
        if let (Some(a_index), Some(b_index)) = (dimensions.coordinate_to_index(a),
                                                 dimensions.coordinate_to_index(b)) {
            let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
        }
    }

    graph
}

/// Is the maze a spanning tree of its grid: one route between any two cells, no loops?
pub fn is_perfect(maze: &Maze) -> bool {
    let (NodesCount(nodes), EdgesCount(edges)) = maze.dimensions().spanning_tree_size();
    let graph = to_graph(maze);
    graph.node_count() == nodes &&
    graph.edge_count() == edges &&
    connected_components(&graph) == 1 &&
    !is_cyclic_undirected(&graph)
}
