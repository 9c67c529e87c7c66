use crate::*;

/// Result of a reveal action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was flagged or already revealed.
    NoChange,
    /// Safe cells opened, in visit order.
    Revealed(Vec<Coord2>),
    /// A mine was revealed; `shown` lists every mine the answer uncovered,
    /// the triggering one included.
    HitMine { mine: Coord2, shown: Vec<Coord2> },
}

impl RevealOutcome {
    /// False only when the board was left as it was.
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub fn changed(&self) -> &[Coord2] {
        match self {
            Self::NoChange => &[],
            Self::Revealed(revealed) => revealed,
            Self::HitMine { shown, .. } => shown,
        }
    }

    pub const fn status(&self) -> SessionStatus {
        match self {
            Self::HitMine { .. } => SessionStatus::Lost,
            _ => SessionStatus::InProgress,
        }
    }
}

/// Flood-fill reveal over a [`Board`].
///
/// Traversal uses an explicit work stack rather than recursion, so large
/// open regions cannot exhaust the call stack. The stack is kept between
/// calls to reuse its allocation.
#[derive(Clone, Debug, Default)]
pub struct RevealEngine {
    stack: Vec<Coord2>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(&mut self, board: &mut Board, start: Coord2) -> Result<RevealOutcome> {
        let start = board.validate_coords(start)?;
        let cell = board[start];

        if !cell.is_hidden() {
            log::debug!("Reveal at {:?} ignored, cell is {:?}", start, cell.visibility());
            return Ok(RevealOutcome::NoChange);
        }

        if cell.is_mine() {
            log::debug!("Hit mine at {:?}", start);
            board.set_triggered_mine(start);
            let shown = board.reveal_mines();
            return Ok(RevealOutcome::HitMine { mine: start, shown });
        }

        let revealed = self.flood_fill(board, start);
        log::debug!("Reveal at {:?} opened {} cells", start, revealed.len());
        Ok(RevealOutcome::Revealed(revealed))
    }

    /// Depth-first reveal from a hidden safe cell.
    ///
    /// Only cells still `Hidden` when popped get revealed, which both stops
    /// the traversal from cycling between neighboring zero cells and keeps
    /// flagged cells closed.
    fn flood_fill(&mut self, board: &mut Board, start: Coord2) -> Vec<Coord2> {
        let mut revealed = Vec::new();
        self.stack.clear();
        self.stack.push(start);

        while let Some(coords) = self.stack.pop() {
            let cell = board[coords];
            if !cell.is_hidden() {
                log::trace!("Skipping cell at {:?}", coords);
                continue;
            }

            board.set_visibility(coords, Visibility::Revealed);
            revealed.push(coords);
            log::trace!(
                "Flood revealed cell at {:?}, mine count: {}",
                coords,
                cell.adjacent_mines()
            );

            if cell.adjacent_mines() == 0 {
                self.stack.extend(
                    board
                        .iter_neighbors(coords)
                        .filter(|&pos| board[pos].is_hidden()),
                );
            }
        }

        revealed
    }
}
