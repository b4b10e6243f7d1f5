//! End-to-end games on small grid boards.

use tda_territory::{
    betti, betti_with_config, closure, edges_from_cycles, face_from_cycle, BettiNumbers, Board,
    BoardConfig, Complex, Game, HomologyConfig, Player, TopologyError,
};

fn board(n: usize) -> Board {
    Board::square_grid(n, &BoardConfig::default()).unwrap()
}

/// Cell index of column i, row j on an n × n grid
fn cell(n: usize, i: usize, j: usize) -> usize {
    j * n + i
}

#[test]
fn blue_wins_with_a_bent_path() {
    let n = 3;
    let mut game = Game::new(board(n));

    // Blue: (0,0) → (0,1) → (1,1) → (1,2); red never reaches the left strip
    let blue_path = [cell(n, 0, 0), cell(n, 0, 1), cell(n, 1, 1), cell(n, 1, 2)];
    let red_moves = [cell(n, 2, 0), cell(n, 2, 1), cell(n, 2, 2), cell(n, 0, 2)];

    for turn in 0..blue_path.len() {
        assert_eq!(game.play(red_moves[turn]).unwrap(), Player::Red);
        let summary = game.refresh_summary().unwrap().unwrap();
        assert_eq!(summary.winner(), None, "premature win on turn {turn}");

        assert_eq!(game.play(blue_path[turn]).unwrap(), Player::Blue);
    }

    let summary = game.refresh_summary().unwrap().unwrap();
    assert_eq!(summary.winner(), Some(Player::Blue));
    assert_eq!(summary.blue.absolute.beta_0, 1);
    assert_eq!(summary.blue.relative.beta_1, summary.blue.absolute.beta_1 + 1);
}

#[test]
fn ring_of_cells_creates_absolute_loop_without_winning() {
    // Eight cells around the centre of a 5x5 board, away from every border
    let n = 5;
    let b = board(n);
    let ring: Vec<usize> = [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3), (1, 2)]
        .iter()
        .map(|&(i, j)| cell(n, i, j))
        .collect();

    let mut game = Game::new(b);
    for &c in &ring {
        let cycle = game.board().cycle(c).unwrap().clone();
        game.claim(Player::Red, &cycle).unwrap();
    }

    let summary = game.summary().unwrap();
    // Two base strips plus one floating annulus
    assert_eq!(summary.red.absolute.beta_0, 3);
    assert_eq!(summary.red.absolute.beta_1, 1);
    // The annulus loop survives relative to the base, nothing new appears
    assert_eq!(summary.red.relative.beta_1, 1);
    assert_eq!(summary.winner(), None);
}

#[test]
fn territories_only_grow() {
    let mut game = Game::new(board(2));
    let before = game.territory(Player::Blue).complex().clone();
    let base = game.territory(Player::Blue).base().clone();
    game.play(0).unwrap(); // red
    game.play(1).unwrap(); // blue

    let after = game.territory(Player::Blue).complex();
    assert!(before.iter().all(|s| after.contains(s)));
    assert!(after.len() > before.len());
    assert_eq!(game.territory(Player::Blue).base(), &base);
    assert_eq!(game.board().blue_base(), &base);
}

#[test]
fn betti_matches_hand_built_complexes() {
    let cycles: [Vec<usize>; 2] = [vec![0, 1, 4, 3], vec![1, 2, 5, 4]];
    let edges = edges_from_cycles(&cycles).unwrap();
    // Two squares sharing an edge: one component, two loops
    assert_eq!(betti(0, &edges, None).unwrap(), 1);
    assert_eq!(betti(1, &edges, None).unwrap(), 2);

    let filled = cycles
        .iter()
        .map(|c| closure(&face_from_cycle(c).unwrap()))
        .fold(Complex::empty(), |acc, cell| acc.union(&cell));
    assert_eq!(betti(1, &filled, None).unwrap(), 0);
}

#[test]
fn malformed_cells_are_rejected() {
    let mut game = Game::new(board(2));
    let err = game.claim(Player::Blue, &[7]).unwrap_err();
    assert!(matches!(err, TopologyError::InvalidComplex(_)));
    assert!(matches!(game.play(99), Err(TopologyError::UnknownCell(99))));
}

#[test]
fn config_from_json_drives_game() {
    let config = HomologyConfig::from_json(r#"{ "tolerance": 1e-9 }"#).unwrap();
    let mut game = Game::with_config(board(1), config).unwrap();
    game.play(0).unwrap();
    let summary = game.summary().unwrap();
    // Single red cell touches both red strips
    assert_eq!(summary.winner(), Some(Player::Red));
}

#[test]
fn non_positive_tolerance_is_rejected_everywhere() {
    let hollow = Complex::from_cells([[0, 1], [1, 2], [2, 0]]);
    let zero = HomologyConfig::with_tolerance(0.0);
    assert!(matches!(
        betti_with_config(1, &hollow, None, &zero),
        Err(TopologyError::InvalidConfig(_))
    ));

    let negative = HomologyConfig::with_tolerance(-1.0);
    assert!(matches!(
        BettiNumbers::compute(&hollow, None, &negative),
        Err(TopologyError::InvalidConfig(_))
    ));
    assert!(matches!(
        Game::with_config(board(2), negative),
        Err(TopologyError::InvalidConfig(_))
    ));
}
