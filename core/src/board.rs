use core::ops::Index;
use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Up to 8 neighbor coordinates, kept inline.
pub type Neighbors = SmallVec<[Coord2; 8]>;

/// Grid of cells with fixed mine positions and precomputed adjacency counts.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    seed: Option<u64>,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Lays out `config.mines()` mines uniformly at random.
    ///
    /// Without a seed one is drawn from the thread RNG; either way the seed
    /// is kept on the board (see [`Board::seed`]) so the layout can be replayed.
    pub fn generate(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let generator = match seed {
            Some(seed) => RandomMineGenerator::new(seed),
            None => RandomMineGenerator::from_entropy(),
        };
        let seed = generator.seed();
        let mut board = Self::with_generator(config, generator)?;
        board.seed = Some(seed);
        Ok(board)
    }

    /// Builds a board with mines at exactly the given coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let (rows, cols) = size;
        let bounds = GameConfig::new(rows, cols, 0)?;
        for &coords in mine_coords {
            bounds.validate_coords(coords)?;
        }

        let mut distinct: Vec<Coord2> = mine_coords.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        let mines = CellCount::try_from(distinct.len()).unwrap_or(CellCount::MAX);

        let config = GameConfig::new(rows, cols, mines)?;
        Self::with_generator(config, FixedMineGenerator::new(&distinct))
    }

    /// Builds a board from a generator's mask, which must match `config`
    /// in both shape and mine count.
    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let mines = generator.generate(&config)?;
        let size = config.size();

        let expected = (usize::from(size.0), usize::from(size.1));
        if mines.dim() != expected {
            return Err(GameError::InvalidBoardShape {
                expected,
                actual: mines.dim(),
            });
        }

        let placed = mines.iter().filter(|&&is_mine| is_mine).count();
        if placed != usize::from(config.mines()) {
            log::warn!("Rejected layout with {placed} mines, expected {}", config.mines());
            return Err(ConfigError::MineCountMismatch {
                expected: config.mines(),
                placed,
            }
            .into());
        }

        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mines[[row, col]] {
                Cell {
                    kind: CellKind::Mine,
                    ..Default::default()
                }
            } else {
                let adjacent_mines = NeighborIter::new(coords, size)
                    .filter(|&pos| mines[pos.to_nd_index()])
                    .count() as u8;
                Cell {
                    kind: CellKind::Empty,
                    adjacent_mines,
                    visibility: Visibility::Hidden,
                }
            }
        });

        Ok(Self {
            config,
            cells,
            seed: None,
            triggered_mine: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    /// Seed of the random layout, `None` for fixed layouts.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The mine whose reveal ended the game, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.config.validate_coords(coords)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn neighbors_of(&self, coords: Coord2) -> Result<Neighbors> {
        let coords = self.validate_coords(coords)?;
        Ok(self.iter_neighbors(coords).collect())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.coords().filter(|&coords| self[coords].is_mine())
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_revealed()).count() as CellCount
    }

    /// Every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_mine() || cell.is_revealed())
    }

    pub(crate) fn set_visibility(&mut self, coords: Coord2, visibility: Visibility) {
        self.cells[coords.to_nd_index()].visibility = visibility;
    }

    pub(crate) fn set_triggered_mine(&mut self, coords: Coord2) {
        self.triggered_mine = Some(coords);
    }

    /// Shows the answer: reveals every hidden mine, leaving flags in place.
    ///
    /// Returns the coordinates that changed.
    pub fn reveal_mines(&mut self) -> Vec<Coord2> {
        let hidden_mines: Vec<Coord2> = self
            .coords()
            .filter(|&coords| {
                let cell = &self[coords];
                cell.is_mine() && cell.is_hidden()
            })
            .collect();

        for &coords in &hidden_mines {
            self.set_visibility(coords, Visibility::Revealed);
        }
        log::debug!("Revealed {} hidden mines", hidden_mines.len());
        hidden_mines
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
