use super::*;

/// Purely random placement: every set of `mines` distinct positions is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Draws a fresh seed from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Array2<bool>> {
        use rand::prelude::*;
        use rand::seq::index::sample;

        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let cols = usize::from(config.cols());

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let picked = sample(
            &mut rng,
            config.total_cells().into(),
            config.mines().into(),
        );
        for index in picked {
            mines[[index / cols, index % cols]] = true;
        }

        log::debug!(
            "Placed {} mines on a {:?} board with seed {}",
            config.mines(),
            config.size(),
            self.seed
        );
        Ok(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_total(mask: &Array2<bool>) -> usize {
        mask.iter().filter(|&&is_mine| is_mine).count()
    }

    #[test]
    fn places_requested_mine_count() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            let mask = RandomMineGenerator::new(7).generate(&config).unwrap();
            assert_eq!(mask.dim(), (config.rows().into(), config.cols().into()));
            assert_eq!(mine_total(&mask), usize::from(config.mines()));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = Difficulty::Normal.config();
        let a = RandomMineGenerator::new(1234).generate(&config).unwrap();
        let b = RandomMineGenerator::new(1234).generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fills_all_but_one_cell() {
        let config = GameConfig::new(3, 4, 11).unwrap();
        let mask = RandomMineGenerator::new(99).generate(&config).unwrap();
        assert_eq!(mine_total(&mask), 11);
    }

    #[test]
    fn zero_mines_leaves_board_empty() {
        let config = GameConfig::new(5, 5, 0).unwrap();
        let mask = RandomMineGenerator::from_entropy().generate(&config).unwrap();
        assert_eq!(mine_total(&mask), 0);
    }
}
