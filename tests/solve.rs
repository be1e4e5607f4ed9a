use rush_hour::{
    a_star, dfs, parse_board, search, Board, Car, Heuristic, Move, Orientation, Strategy,
    NO_SOLUTION,
};

fn lone_goal_car() -> Board {
    Board::new(
        "lone",
        6,
        vec![Car::goal(Orientation::Horizontal, 2, 0, 2)],
    )
    .unwrap()
}

fn boxed_in() -> Board {
    Board::new(
        "boxed",
        6,
        vec![
            Car::goal(Orientation::Horizontal, 2, 0, 2),
            Car::vertical(2, 0, 2),
            Car::vertical(2, 2, 2),
            Car::vertical(2, 4, 2),
        ],
    )
    .unwrap()
}

/// Goal car in mid-row between two length-2 vertical cars, each wedged in a
/// column filled by cars above and below it.
fn flanked() -> Board {
    Board::new(
        "flanked",
        6,
        vec![
            Car::vertical(1, 0, 2),
            Car::vertical(1, 2, 2),
            Car::vertical(1, 4, 2),
            Car::goal(Orientation::Horizontal, 2, 2, 2),
            Car::vertical(4, 0, 2),
            Car::vertical(4, 2, 2),
            Car::vertical(4, 4, 2),
        ],
    )
    .unwrap()
}

fn rush_hour() -> Board {
    parse_board(
        "rush",
        "
        AA...B
        C..D.B
        CXXD.B
        C..D..
        E...FF
        E.GGG.
        ",
    )
    .unwrap()
}

fn check_solution(board: &Board, strategy: Strategy, heuristic: Option<Heuristic>) -> i64 {
    let result = search(board.clone(), strategy, heuristic);
    assert!(result.is_solved());
    assert_eq!(result.cost, result.path.len() as i64 - 1);
    assert!(result.path.last().unwrap().board().is_solved());
    assert_eq!(result.path[0].board(), board);

    for (i, state) in result.path.iter().enumerate() {
        assert_eq!(state.depth() as usize, i);
        assert_eq!(state.parent().is_none(), i == 0);
    }

    // Replaying the projected moves lands on the same boards.
    let mut current = board.clone();
    for (m, state) in result.moves().into_iter().zip(&result.path[1..]) {
        current = current.apply_move(m).unwrap();
        assert_eq!(&current, state.board());
    }

    result.cost
}

#[test]
fn a_star_solves_lone_goal_car_in_one_move() {
    for h in [Heuristic::Zero, Heuristic::Blocking, Heuristic::Advanced] {
        let result = a_star(lone_goal_car(), h);
        assert_eq!(result.cost, 1);
        assert_eq!(result.path.len(), 2);
        assert_eq!(result.moves(), vec![Move { car: 0, to: 4 }]);
    }
}

#[test]
fn dfs_solves_lone_goal_car() {
    let cost = check_solution(&lone_goal_car(), Strategy::Dfs, None);
    // Nearest slides are tried first, one cell at a time.
    assert_eq!(cost, 4);
}

#[test]
fn boxed_in_goal_car_has_no_solution() {
    for result in [
        dfs(boxed_in()),
        a_star(boxed_in(), Heuristic::Blocking),
        a_star(boxed_in(), Heuristic::Advanced),
    ] {
        assert!(result.path.is_empty());
        assert_eq!(result.cost, NO_SOLUTION);
        assert_eq!(result.expanded, 1);
    }
}

#[test]
fn flanked_goal_car_has_no_solution() {
    let board = flanked();
    assert_eq!(board.to_string(), ".^..^.\n.v..v.\n.^<>^.\n.v..v.\n.^..^.\n.v..v.\n");
    assert_eq!(board.reach(1), Some((2, 2)));
    assert_eq!(board.reach(5), Some((2, 2)));

    for result in [
        dfs(flanked()),
        a_star(flanked(), Heuristic::Zero),
        a_star(flanked(), Heuristic::Blocking),
        a_star(flanked(), Heuristic::Advanced),
    ] {
        assert!(result.path.is_empty());
        assert_eq!(result.cost, NO_SOLUTION);
        assert_eq!(result.expanded, 1);
    }
}

#[test]
fn parallel_blocker_exhausts_frontier() {
    let board = parse_board(
        "stuck",
        "
        ..A...
        ..A...
        XX..BB
        ......
        .C....
        .C....
        ",
    )
    .unwrap();

    let dfs_result = dfs(board.clone());
    let a_star_result = a_star(board, Heuristic::Advanced);
    assert_eq!(dfs_result.cost, -1);
    assert_eq!(a_star_result.cost, -1);
    assert!(dfs_result.expanded > 1);
    assert_eq!(dfs_result.expanded, a_star_result.expanded);
}

#[test]
fn all_strategies_solve_rush_hour() {
    let board = rush_hour();
    let optimal = check_solution(&board, Strategy::AStar, Some(Heuristic::Zero));

    check_solution(&board, Strategy::Dfs, None);
    for h in [Heuristic::Blocking, Heuristic::Advanced] {
        assert!(check_solution(&board, Strategy::AStar, Some(h)) >= optimal);
    }
}

#[test]
fn search_is_repeatable() {
    for strategy in [Strategy::Dfs, Strategy::AStar] {
        let first = search(rush_hour(), strategy, Some(Heuristic::Advanced));
        let second = search(rush_hour(), strategy, Some(Heuristic::Advanced));
        assert_eq!(first.cost, second.cost);
        assert!(first.boards().eq(second.boards()));
    }
}
