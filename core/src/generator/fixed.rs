use super::*;

/// Places mines at caller-chosen coordinates. Duplicates collapse into one mine.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator<'a> {
    mine_coords: &'a [Coord2],
}

impl<'a> FixedMineGenerator<'a> {
    pub fn new(mine_coords: &'a [Coord2]) -> Self {
        Self { mine_coords }
    }
}

impl MineGenerator for FixedMineGenerator<'_> {
    fn generate(self, config: &GameConfig) -> Result<Array2<bool>> {
        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());

        for &coords in self.mine_coords {
            let coords = config.validate_coords(coords)?;
            mines[coords.to_nd_index()] = true;
        }
        Ok(mines)
    }
}
