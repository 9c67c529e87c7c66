use serde::{Deserialize, Serialize};

/// What lies under a cell, fixed when the board is generated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Mine,
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub(crate) kind: CellKind,
    pub(crate) adjacent_mines: u8,
    pub(crate) visibility: Visibility,
}

impl Cell {
    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Mines in the clamped neighborhood. Meaningless for mine cells.
    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self.visibility, Visibility::Hidden)
    }

    pub const fn is_revealed(&self) -> bool {
        matches!(self.visibility, Visibility::Revealed)
    }

    pub const fn is_flagged(&self) -> bool {
        matches!(self.visibility, Visibility::Flagged)
    }
}

/// Renderer-facing state of a cell, including end-of-game decorations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Flagged,
    /// Mine shown by the end-of-game answer.
    Mine,
    /// The mine whose reveal lost the game.
    TriggeredMine,
    /// Flag on a mine, shown once the game is over.
    CorrectFlag,
    /// Flag on a safe cell, shown once the game is over.
    IncorrectFlag,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
