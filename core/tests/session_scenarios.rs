use sweeper_core::{
    Action, Board, CellChange, CellView, Difficulty, GameConfig, GameError, GameSession,
    SessionStatus, Visibility,
};

fn three_by_three() -> GameSession {
    let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
    GameSession::from_board(board)
}

#[test]
fn reveal_next_to_both_mines_opens_single_cell() {
    let mut game = three_by_three();

    let report = game.apply(Action::Reveal((1, 1))).unwrap();

    assert_eq!(report.status, SessionStatus::InProgress);
    assert_eq!(report.changed_cells.len(), 1);
    assert_eq!(report.changed_cells[0].adjacent_mines, Some(2));
    assert_eq!(game.board().revealed_count(), 1);
}

#[test]
fn flagging_every_mine_wins() {
    let mut game = three_by_three();

    let first = game.apply(Action::ToggleFlag((0, 0))).unwrap();
    assert_eq!(first.status, SessionStatus::InProgress);
    assert_eq!(first.flagged_count, 1);

    let second = game.apply(Action::ToggleFlag((2, 2))).unwrap();
    assert_eq!(second.status, SessionStatus::Won);
    assert_eq!(second.flagged_count, 2);
    assert_eq!(game.mines_left(), 0);
    assert_eq!(game.view_at((2, 2)).unwrap(), CellView::CorrectFlag);
}

#[test]
fn wrong_flag_at_budget_loses_and_shows_mines() {
    let mut game = three_by_three();

    game.apply(Action::ToggleFlag((0, 0))).unwrap();
    let report = game.apply(Action::ToggleFlag((1, 0))).unwrap();

    assert_eq!(report.status, SessionStatus::Lost);
    assert!(report.changed_cells.contains(&CellChange {
        row: 2,
        col: 2,
        visibility: Visibility::Revealed,
        adjacent_mines: None,
    }));
    for coords in game.board().mine_coords() {
        assert!(!game.cell_at(coords).unwrap().is_hidden());
    }
}

#[test]
fn single_cell_board_without_mines() {
    let board = Board::generate(GameConfig::new(1, 1, 0).unwrap(), None).unwrap();
    let mut game = GameSession::from_board(board);
    assert!(game.board().neighbors_of((0, 0)).unwrap().is_empty());

    let report = game.apply(Action::Reveal((0, 0))).unwrap();

    assert_eq!(report.changed_cells.len(), 1);
    assert_eq!(report.changed_cells[0].adjacent_mines, Some(0));
    assert!(game.cell_at((0, 0)).unwrap().is_revealed());
    assert_eq!(report.status, SessionStatus::Won);
}

#[test]
fn revealing_flagged_mine_is_noop() {
    let mut game = three_by_three();
    game.apply(Action::ToggleFlag((0, 0))).unwrap();

    let report = game.apply(Action::Reveal((0, 0))).unwrap();

    assert!(!report.has_update());
    assert_eq!(report.status, SessionStatus::InProgress);
    assert!(game.cell_at((0, 0)).unwrap().is_flagged());
}

#[test]
fn finished_game_rejects_moves_until_reset() {
    let mut game = three_by_three();
    game.apply(Action::Reveal((2, 2))).unwrap();
    assert_eq!(game.status(), SessionStatus::Lost);

    let before = game.board().clone();
    let ignored = game.apply(Action::ToggleFlag((0, 1))).unwrap();
    assert!(!ignored.has_update());
    assert_eq!(game.board(), &before);
    assert_eq!(game.reveal((0, 1)), Err(GameError::SessionTerminated));

    let report = game.apply(Action::Reset(Difficulty::Hard.config())).unwrap();
    assert_eq!(report.status, SessionStatus::InProgress);
    assert_eq!(game.config().size(), (20, 20));
    assert!(game.apply(Action::Reveal((0, 1))).unwrap().has_update());
}

#[test]
fn actions_deserialize_from_json() {
    let actions: Vec<Action> = serde_json::from_str(
        r#"[{"Reveal": [1, 1]}, {"ToggleFlag": [0, 0]}, {"Reset": {"rows": 3, "cols": 3, "mines": 2}}]"#,
    )
    .unwrap();

    assert_eq!(
        actions,
        vec![
            Action::Reveal((1, 1)),
            Action::ToggleFlag((0, 0)),
            Action::Reset(GameConfig::new(3, 3, 2).unwrap()),
        ]
    );

    let bad = serde_json::from_str::<Action>(r#"{"Reset": {"rows": 0, "cols": 3, "mines": 0}}"#);
    assert!(bad.is_err());
}

#[test]
fn report_serializes_for_renderer() {
    let mut game = three_by_three();
    let report = game.apply(Action::Reveal((1, 1))).unwrap();

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["flagged_count"], 0);
    assert_eq!(json["changed_cells"][0]["visibility"], "Revealed");
    assert_eq!(json["changed_cells"][0]["adjacent_mines"], 2);
}
