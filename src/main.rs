use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;

use rush_hour::{parse_board, search, Board, Heuristic, Strategy};

const PUZZLES: &[(&str, &str)] = &[
    (
        "beginner",
        "
..A...
..A...
XXA...
...BBB
......
......
",
    ),
    (
        "intermediate",
        "
AA...B
C..D.B
CXXD.B
C..D..
E...FF
E.GGG.
",
    ),
    (
        "boxed",
        "
..A...
..A...
XXB...
..B...
..C...
..C...
",
    ),
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Dfs,
    AStar,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Dfs => Strategy::Dfs,
            StrategyArg::AStar => Strategy::AStar,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Zero,
    Blocking,
    Advanced,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Zero => Heuristic::Zero,
            HeuristicArg::Blocking => Heuristic::Blocking,
            HeuristicArg::Advanced => Heuristic::Advanced,
        }
    }
}

#[derive(Parser)]
#[command(name = "rush-hour")]
#[command(about = "Solve Rush Hour sliding-car puzzles")]
struct Args {
    /// Built-in puzzle to start from (beginner, intermediate, boxed)
    #[arg(long, default_value = "beginner")]
    puzzle: String,

    #[arg(long, value_enum, default_value_t = StrategyArg::AStar)]
    strategy: StrategyArg,

    /// Ignored by dfs
    #[arg(long, value_enum, default_value_t = HeuristicArg::Advanced)]
    heuristic: HeuristicArg,

    /// Number of random slides applied to the puzzle before solving
    #[arg(long, default_value_t = 0)]
    scramble: usize,

    /// Seed for --scramble
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the summary
    #[arg(long)]
    quiet: bool,
}

fn print_board(board: &Board) {
    let goal: Vec<(usize, usize)> = board.goal_car().cells().collect();

    for (r, row) in board.grid().iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if goal.contains(&(r, c)) {
                print!("{}", cell.red().bold());
            } else if cell == '.' {
                print!("{}", cell.dark_grey());
            } else {
                print!("{}", cell);
            }
        }
        println!();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let (name, source) = PUZZLES
        .iter()
        .find(|(name, _)| *name == args.puzzle)
        .ok_or_else(|| format!("unknown puzzle '{}'", args.puzzle))?;
    let mut board = parse_board(name, source)?;

    if args.scramble > 0 {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        board = board.scramble(args.scramble, &mut rng);
    }

    println!("Initial board:");
    print_board(&board);

    let result = search(board.clone(), args.strategy.into(), Some(args.heuristic.into()));
    if !result.is_solved() {
        println!("No solution found ({} states expanded)", result.expanded);
        return Ok(());
    }

    println!(
        "Found a solution with {} moves ({} states expanded)",
        result.cost, result.expanded
    );

    if args.quiet {
        return Ok(());
    }

    let mut current = board;
    for item in result.moves() {
        current = current
            .apply_move(item)
            .ok_or("solution contains an illegal move")?;
        println!("{}", item);
        print_board(&current);
        println!();
    }

    Ok(())
}
