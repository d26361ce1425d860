#![recursion_limit = "1024"] // error_chain! expands deeply

use docopt::Docopt;
use log::{debug, info};
use mazes::{
    generators,
    layout::{MazeLayout, WallOrientation},
    pathing,
    units::{Height, Width},
    Maze,
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde::Deserialize;
use std::{fs::File, io, io::prelude::*};

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver [options]

Options:
    -h --help              Show this screen.
    --rows=<n>             Number of rows of cells [default: 12].
    --columns=<n>          Number of columns of cells [default: 12].
    --seed=<n>             Seed the random number generator to reproduce a maze.
    --text-out=<path>      Output file path for a textual rendering of a maze. Printed to stdout if not given.
    --show-path            Show the path from the start cell to the goal cell in the opposite corner.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based vertex indices.
    --layout               Print the wall geometry of the maze fitted to a width * height pixel area.
    --width=<px>           Layout area width in pixels [default: 600].
    --height=<px>          Layout area height in pixels [default: 600].
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: i64,
    flag_columns: i64,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_show_path: bool,
    flag_save_edges: String,
    flag_layout: bool,
    flag_width: f32,
    flag_height: f32,
}

mod errors {
    use error_chain::*;
    error_chain! {
        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    debug!("{:?}", args);

    // Always run from a known seed so any maze can be regenerated
    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Maze seed {}", seed);
    let mut rng = XorShiftRng::seed_from_u64(seed);

    let maze = generators::generate(args.flag_rows, args.flag_columns, &mut rng)?;

    if args.flag_text_out.is_empty() {
        println!("{}", maze);
    } else {
        write_text_to_file(&format!("{}", maze), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
        info!("Wrote maze text to {}", args.flag_text_out);
    }

    if args.flag_show_path {
        match pathing::solution(&maze) {
            Some(path) => println!("{}", describe_path(&path)),
            None => println!("No path from start to goal"),
        }
    }

    if !args.flag_save_edges.is_empty() {
        save_maze_graph(&maze, &args.flag_save_edges)?;
        info!("Wrote maze edges to {}", args.flag_save_edges);
    }

    if args.flag_layout {
        let layout = MazeLayout::new(&maze, Width(args.flag_width), Height(args.flag_height))?;
        print!("{}", describe_layout(&layout));
    }

    Ok(())
}

fn describe_path(path: &[mazes::cells::GridCoordinate]) -> String {
    let steps = path.iter()
        .map(|coord| format!("({},{})", coord.row, coord.column))
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("Path of {} cells: {}", path.len(), steps)
}

fn describe_layout(layout: &MazeLayout) -> String {
    let mut text = format!("cell {} x {}\n", layout.unit_width, layout.unit_height);
    for border in &layout.borders {
        text.push_str(&format!("border centre ({}, {}) size {} x {}\n",
                               border.centre.x,
                               border.centre.y,
                               border.width,
                               border.height));
    }
    for wall in &layout.walls {
        let orientation = match wall.orientation {
            WallOrientation::Horizontal => "horizontal",
            WallOrientation::Vertical => "vertical",
        };
        text.push_str(&format!("{} wall [{}][{}] centre ({}, {}) size {} x {}\n",
                               orientation,
                               wall.cell.row,
                               wall.cell.column,
                               wall.shape.centre.x,
                               wall.shape.centre.y,
                               wall.shape.width,
                               wall.shape.height));
    }
    text.push_str(&format!("goal centre ({}, {}) side {}\n",
                           layout.goal.centre.x,
                           layout.goal.centre.y,
                           layout.goal.width));
    text.push_str(&format!("agent centre ({}, {}) radius {}\n",
                           layout.agent.centre.x,
                           layout.agent.centre.y,
                           layout.agent.radius));
    text
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {
    let dimensions = maze.dimensions();

    let mut graph_data = String::new();
    graph_data.push_str(maze.size().to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(maze.openings_count().to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze.iter_links() {
        // iter_links only yields coordinates inside the maze
        if let (Some(index_a), Some(index_b)) = (dimensions.coordinate_to_index(src),
                                                 dimensions.coordinate_to_index(dst)) {
            let src_as_1_based_index = index_a + 1;
            let dst_as_1_based_index = index_b + 1;

            graph_data.push_str(src_as_1_based_index.to_string().as_ref());
            graph_data.push(' ');
            graph_data.push_str(dst_as_1_based_index.to_string().as_ref());
            graph_data.push('\n');
        }
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
