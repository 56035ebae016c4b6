//! Day 10: Pipe Maze
//!
//! The `S` tile hides a pipe whose shape is inferred from the neighbours that
//! connect back to it: of every pair of such neighbours, the first whose pipe
//! closes the loop wins. Enclosed tiles are counted by flood-filling the
//! outside of the loop on a grid of doubled resolution, where the gaps
//! between adjacent pipes become cells the fill can squeeze through.

use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["2023", "grid"])]
pub struct Solver;

/// `(row, col)` of a tile.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// The two openings of a pipe tile.
fn openings(tile: u8) -> Option<[Direction; 2]> {
    use Direction::*;
    match tile {
        b'|' => Some([North, South]),
        b'-' => Some([East, West]),
        b'L' => Some([North, East]),
        b'J' => Some([North, West]),
        b'7' => Some([South, West]),
        b'F' => Some([South, East]),
        _ => None,
    }
}

fn pipe_with_openings(pair: [Direction; 2]) -> Option<u8> {
    b"|-LJ7F".iter().copied().find(|&tile| {
        openings(tile).is_some_and(|open| pair.iter().all(|direction| open.contains(direction)))
    })
}

#[derive(Debug, Clone)]
pub struct PipeMaze {
    tiles: Vec<Vec<u8>>,
    start: Position,
    main_loop: Option<Vec<Position>>,
}

impl PipeMaze {
    pub fn start(&self) -> Position {
        self.start
    }

    /// Tile at `position`, with `S` already replaced by its pipe.
    pub fn tile(&self, (row, col): Position) -> Option<u8> {
        self.tiles.get(row)?.get(col).copied()
    }

    fn height(&self) -> usize {
        self.tiles.len()
    }

    fn width(&self) -> usize {
        self.tiles.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn step(&self, (row, col): Position, direction: Direction) -> Option<Position> {
        let next = match direction {
            Direction::North => (row.checked_sub(1)?, col),
            Direction::East => (row, col + 1),
            Direction::South => (row + 1, col),
            Direction::West => (row, col.checked_sub(1)?),
        };
        self.tile(next).map(|_| next)
    }

    fn connects(&self, position: Position, direction: Direction) -> bool {
        self.tile(position)
            .and_then(openings)
            .is_some_and(|open| open.contains(&direction))
    }

    /// Tiles of the loop through `S`, in walking order starting at `S`.
    pub fn trace_loop(&self) -> anyhow::Result<Vec<Position>> {
        let [mut heading, _] = self
            .tile(self.start)
            .and_then(openings)
            .ok_or_else(|| anyhow!("start tile is not a pipe"))?;
        let mut position = self.start;
        let mut path = Vec::new();

        loop {
            path.push(position);
            let next = self
                .step(position, heading)
                .ok_or_else(|| anyhow!("pipe at {:?} leads off the map", position))?;
            if next == self.start {
                ensure!(
                    self.connects(self.start, heading.opposite()),
                    "loop re-enters the start tile from {:?}",
                    heading.opposite()
                );
                return Ok(path);
            }
            ensure!(
                path.len() <= self.height() * self.width(),
                "loop does not close"
            );

            let open = openings(self.tile(next).unwrap_or(b'.'))
                .ok_or_else(|| anyhow!("pipe at {:?} leads into ground at {:?}", position, next))?;
            let came_from = heading.opposite();
            heading = match open {
                [a, b] if a == came_from => b,
                [a, b] if b == came_from => a,
                _ => bail!("pipe at {:?} does not connect back to {:?}", next, position),
            };
            position = next;
        }
    }

    /// Count tiles enclosed by `main_loop`.
    pub fn enclosed_tiles(&self, main_loop: &[Position]) -> usize {
        let height = 2 * self.height() + 1;
        let width = 2 * self.width() + 1;
        let scaled = |(row, col): Position| (2 * row + 1, 2 * col + 1);

        let mut wall = vec![vec![false; width]; height];
        for (index, &tile) in main_loop.iter().enumerate() {
            let next = main_loop[(index + 1) % main_loop.len()];
            let (r1, c1) = scaled(tile);
            let (r2, c2) = scaled(next);
            wall[r1][c1] = true;
            wall[(r1 + r2) / 2][(c1 + c2) / 2] = true;
        }

        let mut outside = vec![vec![false; width]; height];
        let mut queue: VecDeque<Position> = VecDeque::from([(0, 0)]);
        outside[0][0] = true;
        while let Some((row, col)) = queue.pop_front() {
            let neighbours = [
                row.checked_sub(1).map(|r| (r, col)),
                (row + 1 < height).then_some((row + 1, col)),
                col.checked_sub(1).map(|c| (row, c)),
                (col + 1 < width).then_some((row, col + 1)),
            ];
            for (r, c) in neighbours.into_iter().flatten() {
                if !wall[r][c] && !outside[r][c] {
                    outside[r][c] = true;
                    queue.push_back((r, c));
                }
            }
        }

        (0..self.height())
            .flat_map(|row| (0..self.width()).map(move |col| (row, col)))
            .map(scaled)
            .filter(|&(r, c)| !wall[r][c] && !outside[r][c])
            .count()
    }
}

fn parse_maze(input: &str) -> anyhow::Result<PipeMaze> {
    let tiles: Vec<Vec<u8>> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.bytes().collect())
        .collect();

    let start = {
        let mut starts = tiles.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|&(_, &tile)| tile == b'S')
                .map(move |(col, _)| (row, col))
        });
        let start = starts.next().ok_or_else(|| anyhow!("no 'S' tile"))?;
        ensure!(starts.next().is_none(), "more than one 'S' tile");
        start
    };

    let mut maze = PipeMaze {
        tiles,
        start,
        main_loop: None,
    };

    let connected: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|&direction| {
            maze.step(start, direction)
                .is_some_and(|neighbour| maze.connects(neighbour, direction.opposite()))
        })
        .collect();
    let candidates = connected
        .iter()
        .copied()
        .tuple_combinations()
        .filter_map(|(a, b)| pipe_with_openings([a, b]));
    for pipe in candidates {
        maze.tiles[start.0][start.1] = pipe;
        if maze.trace_loop().is_ok() {
            return Ok(maze);
        }
    }

    bail!(
        "cannot infer the start pipe: no pair of its {} connecting neighbours closes a loop",
        connected.len()
    )
}

fn main_loop(maze: &mut PipeMaze) -> Result<&[Position], SolveError> {
    if maze.main_loop.is_none() {
        let found = maze
            .trace_loop()
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        tracing::debug!(length = found.len(), "pipe loop traced");
        maze.main_loop = Some(found);
    }
    Ok(maze.main_loop.as_deref().unwrap_or_default())
}

impl AocParser for Solver {
    type SharedData<'a> = PipeMaze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_maze(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((main_loop(shared)?.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let path = main_loop(shared)?.to_vec();
        Ok(shared.enclosed_tiles(&path).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SQUARE: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....
";

    const TANGLED: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

    const OPEN_POCKETS: &str = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    const SQUEEZE: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........
";

    const LARGER: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    const JUNK: &str = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L
";

    fn solve(input: &str, part: u8) -> String {
        let mut maze = Solver::parse(input).unwrap();
        Solver::solve_part(&mut maze, part).unwrap()
    }

    #[test]
    fn example_part_1() {
        assert_eq!(solve(SQUARE, 1), "4");
        assert_eq!(solve(TANGLED, 1), "8");
    }

    #[test]
    fn example_part_2() {
        assert_eq!(solve(OPEN_POCKETS, 2), "4");
        assert_eq!(solve(SQUEEZE, 2), "4");
        assert_eq!(solve(LARGER, 2), "8");
        assert_eq!(solve(JUNK, 2), "10");
    }

    #[test]
    fn start_pipe_is_inferred() {
        let maze = Solver::parse(SQUARE).unwrap();
        assert_eq!(maze.start(), (1, 1));
        assert_eq!(maze.tile((1, 1)), Some(b'F'));

        let maze = Solver::parse(TANGLED).unwrap();
        assert_eq!(maze.tile(maze.start()), Some(b'F'));

        let maze = Solver::parse(JUNK).unwrap();
        assert_eq!(maze.tile(maze.start()), Some(b'7'));
    }

    #[test]
    fn loop_starts_at_start_tile() {
        let maze = Solver::parse(SQUARE).unwrap();
        let path = maze.trace_loop().unwrap();
        assert_eq!(path.len(), 8);
        assert_eq!(path[0], (1, 1));
    }

    #[test]
    fn missing_start_is_rejected() {
        assert!(Solver::parse(".F7\n.LJ\n").is_err());
    }

    #[test]
    fn start_pipe_is_chosen_by_the_closing_loop() {
        // Three neighbours connect to S; only `7` closes the loop
        let input = "\
......
.F-S-.
.|.|..
.L-J..
";
        let maze = Solver::parse(input).unwrap();
        assert_eq!(maze.tile((1, 3)), Some(b'7'));
        assert_eq!(solve(input, 1), "4");
        assert_eq!(solve(input, 2), "1");
    }

    #[test]
    fn enclosed_tiles_of_a_traced_loop() {
        let maze = Solver::parse(OPEN_POCKETS).unwrap();
        let path = maze.trace_loop().unwrap();
        assert_eq!(maze.enclosed_tiles(&path), 4);
    }

    #[test]
    fn isolated_start_is_rejected() {
        assert!(Solver::parse("...\n.S.\n...\n").is_err());
    }
}
