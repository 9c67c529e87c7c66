use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Both terminal states only leave through a reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl SessionStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Input from the collaborator driving the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Reset(GameConfig),
}

/// New state of one cell, as reported to the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub row: Coord,
    pub col: Coord,
    pub visibility: Visibility,
    /// Set only for revealed safe cells.
    pub adjacent_mines: Option<u8>,
}

/// What an action changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReport {
    pub status: SessionStatus,
    pub changed_cells: Vec<CellChange>,
    pub flagged_count: CellCount,
}

impl ActionReport {
    pub fn has_update(&self) -> bool {
        !self.changed_cells.is_empty()
    }
}

/// Represents a game from start to finish
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    flags: FlagTracker,
    reveal_engine: RevealEngine,
    status: SessionStatus,
}

impl GameSession {
    /// Starts a game on a freshly generated random board.
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self::from_board(Board::generate(config, None)?))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self::from_board(Board::generate(config, Some(seed))?))
    }

    pub fn from_board(board: Board) -> Self {
        log::debug!(
            "New game on {:?} board with {} mines, seed {:?}",
            board.size(),
            board.mine_count(),
            board.seed()
        );
        Self {
            board,
            flags: FlagTracker::new(),
            reveal_engine: RevealEngine::new(),
            status: SessionStatus::InProgress,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flags.count()
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.flags.count() as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        self.board.cell_at(coords)
    }

    /// Cell as it should be drawn, including end-of-game decorations.
    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        let cell = self.board.cell_at(coords)?;

        Ok(match (cell.visibility(), cell.is_mine()) {
            (Visibility::Hidden, _) => CellView::Hidden,
            (Visibility::Revealed, false) => CellView::Revealed(cell.adjacent_mines()),
            (Visibility::Revealed, true) if self.board.triggered_mine() == Some(coords) => {
                CellView::TriggeredMine
            }
            (Visibility::Revealed, true) => CellView::Mine,
            (Visibility::Flagged, _) if !self.is_finished() => CellView::Flagged,
            (Visibility::Flagged, true) => CellView::CorrectFlag,
            (Visibility::Flagged, false) => CellView::IncorrectFlag,
        })
    }

    /// Each flag with whether it sits on a mine; empty until the game ends.
    pub fn flag_verdicts(&self) -> Vec<(Coord2, bool)> {
        if self.is_finished() {
            self.flags.flag_verdicts(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Runs one collaborator action.
    ///
    /// Moves on a finished game come back as an empty report instead of an
    /// error; out-of-bounds coordinates and invalid configs still fail.
    pub fn apply(&mut self, action: Action) -> Result<ActionReport> {
        let result = match action {
            Action::Reveal(coords) => self.reveal(coords),
            Action::ToggleFlag(coords) => self.toggle_flag(coords),
            Action::Reset(config) => self.reset(config),
        };

        match result {
            Err(GameError::SessionTerminated) => {
                log::debug!("Ignoring {:?}, game is {:?}", action, self.status);
                Ok(self.report(Vec::new()))
            }
            other => other,
        }
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<ActionReport> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let outcome = self.reveal_engine.reveal(&mut self.board, coords)?;
        match outcome.status() {
            SessionStatus::Lost => self.finish(SessionStatus::Lost),
            // no flag can ever settle a mine-free board, so clearing it wins
            _ if self.board.mine_count() == 0 && self.board.is_cleared() => {
                self.finish(SessionStatus::Won)
            }
            _ => {}
        }

        Ok(self.report(outcome.changed().to_vec()))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<ActionReport> {
        let coords = self.board.validate_coords(coords)?;
        self.check_in_progress()?;

        let outcome = self.flags.toggle_flag(&mut self.board, coords)?;
        let mut changed = Vec::new();
        if outcome.has_update() {
            changed.push(coords);
        }

        if outcome == MarkOutcome::Flagged && self.flags.budget_exhausted(&self.board) {
            let status = self.flags.check_win_condition(&self.board);
            if status == SessionStatus::Lost {
                changed.extend(self.board.reveal_mines());
            }
            self.finish(status);
        }

        Ok(self.report(changed))
    }

    /// Starts over on a new random board. Allowed in any state.
    pub fn reset(&mut self, config: GameConfig) -> Result<ActionReport> {
        let board = Board::generate(config, None)?;
        Ok(self.replace_board(board))
    }

    pub fn reset_with_seed(&mut self, config: GameConfig, seed: u64) -> Result<ActionReport> {
        let board = Board::generate(config, Some(seed))?;
        Ok(self.replace_board(board))
    }

    /// Reports every cell, since the renderer has to redraw the whole grid.
    fn replace_board(&mut self, board: Board) -> ActionReport {
        *self = Self::from_board(board);
        let changed = self.board.coords().collect();
        self.report(changed)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::SessionTerminated)
        } else {
            Ok(())
        }
    }

    fn finish(&mut self, status: SessionStatus) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("Game ended: {:?}", status);
        self.status = status;
    }

    fn report(&self, changed: Vec<Coord2>) -> ActionReport {
        let changed_cells = changed
            .into_iter()
            .map(|coords| {
                let cell = &self.board[coords];
                CellChange {
                    row: coords.0,
                    col: coords.1,
                    visibility: cell.visibility(),
                    adjacent_mines: (cell.is_revealed() && !cell.is_mine())
                        .then_some(cell.adjacent_mines()),
                }
            })
            .collect();

        ActionReport {
            status: self.status,
            changed_cells,
            flagged_count: self.flags.count(),
        }
    }
}
