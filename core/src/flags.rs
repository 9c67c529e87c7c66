use hashbrown::HashSet;

use crate::*;

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    /// True when a flag was placed or removed.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged => true,
            Self::Unflagged => true,
        }
    }
}

/// Coordinates the player has flagged.
///
/// The number of flags is not capped by the mine count; the player may flag
/// any hidden cell. The set is kept in sync with the board's `Flagged` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagTracker {
    flagged: HashSet<Coord2>,
}

impl FlagTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> CellCount {
        self.flagged.len() as CellCount
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flagged.contains(&coords)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.flagged.iter().copied()
    }

    pub fn clear(&mut self) {
        self.flagged.clear();
    }

    /// Flags a hidden cell or clears an existing flag. Revealed cells are left alone.
    pub fn toggle_flag(&mut self, board: &mut Board, coords: Coord2) -> Result<MarkOutcome> {
        let coords = board.validate_coords(coords)?;

        let outcome = match board[coords].visibility() {
            Visibility::Hidden => {
                board.set_visibility(coords, Visibility::Flagged);
                self.flagged.insert(coords);
                MarkOutcome::Flagged
            }
            Visibility::Flagged => {
                board.set_visibility(coords, Visibility::Hidden);
                self.flagged.remove(&coords);
                MarkOutcome::Unflagged
            }
            Visibility::Revealed => MarkOutcome::NoChange,
        };

        log::debug!(
            "Toggle flag at {:?}: {:?}, {} flags placed",
            coords,
            outcome,
            self.count()
        );
        Ok(outcome)
    }

    /// Whether the flag budget is used up, which is when the win check runs.
    pub fn budget_exhausted(&self, board: &Board) -> bool {
        self.count() == board.mine_count()
    }

    /// Decides the game once every flag has been placed.
    ///
    /// Won only if the flags sit exactly on the mines; with equal sizes that
    /// means every flag is on a mine and every mine carries a flag.
    pub fn check_win_condition(&self, board: &Board) -> SessionStatus {
        debug_assert!(self.budget_exhausted(board));

        let flags_on_mines = self.flagged.iter().all(|&coords| board[coords].is_mine());
        let mines_flagged = board.mine_coords().all(|coords| self.is_flagged(coords));

        if flags_on_mines && mines_flagged {
            SessionStatus::Won
        } else {
            SessionStatus::Lost
        }
    }

    /// Each flag with whether it sits on a mine, in row-major order.
    pub fn flag_verdicts(&self, board: &Board) -> Vec<(Coord2, bool)> {
        let mut verdicts: Vec<_> = self
            .flagged
            .iter()
            .map(|&coords| (coords, board[coords].is_mine()))
            .collect();
        verdicts.sort_unstable();
        verdicts
    }
}
