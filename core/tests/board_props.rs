use proptest::prelude::*;
use sweeper_core::{Board, Coord, Coord2, GameConfig, GameSession, RevealEngine, SessionStatus};

fn config_strategy() -> impl Strategy<Value = GameConfig> {
    (1..=16 as Coord, 1..=16 as Coord)
        .prop_flat_map(|(rows, cols)| {
            let cells = u16::from(rows) * u16::from(cols);
            (Just(rows), Just(cols), 0..cells)
        })
        .prop_map(|(rows, cols, mines)| GameConfig::new(rows, cols, mines).unwrap())
}

fn board_strategy() -> impl Strategy<Value = Board> {
    (config_strategy(), any::<u64>())
        .prop_map(|(config, seed)| Board::generate(config, Some(seed)).unwrap())
}

fn coords_in(board: &Board, pick: (u8, u8)) -> Coord2 {
    let (rows, cols) = board.size();
    (pick.0 % rows, pick.1 % cols)
}

/// Cells reachable from `start` through zero cells, computed without the engine.
fn expected_region(board: &Board, start: Coord2) -> Vec<Coord2> {
    let mut seen = vec![start];
    let mut frontier = vec![start];
    while let Some(coords) = frontier.pop() {
        if board[coords].adjacent_mines() != 0 {
            continue;
        }
        for next in board.iter_neighbors(coords) {
            if !seen.contains(&next) {
                seen.push(next);
                frontier.push(next);
            }
        }
    }
    seen.sort_unstable();
    seen
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generate_places_exact_mines(board in board_strategy()) {
        prop_assert_eq!(board.mine_coords().count(), usize::from(board.mine_count()));
    }

    #[test]
    fn adjacency_matches_neighborhood(board in board_strategy()) {
        for coords in board.coords() {
            let neighbors = board.neighbors_of(coords).unwrap();
            prop_assert!(neighbors.len() <= 8);
            if board[coords].is_mine() {
                continue;
            }
            let mines = neighbors.iter().filter(|&&pos| board[pos].is_mine()).count();
            prop_assert_eq!(usize::from(board[coords].adjacent_mines()), mines);
        }
    }

    #[test]
    fn flood_fill_reveals_zero_reachable_region(
        mut board in board_strategy(),
        pick in any::<(u8, u8)>(),
    ) {
        let start = coords_in(&board, pick);
        prop_assume!(!board[start].is_mine());

        let mut engine = RevealEngine::new();
        let outcome = engine.reveal(&mut board, start).unwrap();
        let mut revealed = outcome.changed().to_vec();
        revealed.sort_unstable();

        prop_assert_eq!(&revealed, &expected_region(&board, start));
        prop_assert!(revealed.iter().all(|&coords| !board[coords].is_mine()));

        let snapshot = board.clone();
        prop_assert!(!engine.reveal(&mut board, start).unwrap().has_update());
        prop_assert_eq!(board, snapshot);
    }

    #[test]
    fn win_iff_flags_match_mines(
        board in board_strategy(),
        picks in proptest::collection::vec(any::<(u8, u8)>(), 0..32),
    ) {
        prop_assume!(board.mine_count() > 0);
        let mines: Vec<Coord2> = board.mine_coords().collect();
        let mut game = GameSession::from_board(board);

        let mut placed = Vec::new();
        for pick in picks {
            if game.is_finished() {
                break;
            }
            let coords = coords_in(game.board(), pick);
            if placed.contains(&coords) {
                continue;
            }
            game.toggle_flag(coords).unwrap();
            placed.push(coords);
        }

        if placed.len() < mines.len() {
            prop_assert_eq!(game.status(), SessionStatus::InProgress);
        } else {
            placed.sort_unstable();
            let expected = if placed == mines {
                SessionStatus::Won
            } else {
                SessionStatus::Lost
            };
            prop_assert_eq!(game.status(), expected);
            if expected == SessionStatus::Lost {
                for &coords in &mines {
                    prop_assert!(!game.cell_at(coords).unwrap().is_hidden());
                }
            }
        }
    }
}
