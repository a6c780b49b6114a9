use super::*;

/// Replays a fixed sequence of layouts, starting over after the last one.
///
/// Useful to reproduce a known board, or to force the safe-first-move path to reseed a set number of times.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedGenerator {
    config: GameConfig,
    layouts: Vec<Array2<bool>>,
    next: usize,
}

impl ScriptedGenerator {
    /// Every layout must share the board size and the mine count of the first one.
    pub fn from_mine_coords(size: Coord2, layouts: &[&[Coord2]]) -> Result<Self> {
        let mut masks = Vec::with_capacity(layouts.len());
        for mine_coords in layouts {
            let mut mask: Array2<bool> = Array2::default(size.to_nd_index());
            for &coords in *mine_coords {
                if coords.0 >= size.0 || coords.1 >= size.1 {
                    return Err(GameError::OutOfBounds);
                }
                mask[coords.to_nd_index()] = true;
            }
            masks.push(mask);
        }
        Self::from_masks(size, masks)
    }

    pub fn from_masks(size: Coord2, layouts: Vec<Array2<bool>>) -> Result<Self> {
        let expected_dim = (usize::from(size.0), usize::from(size.1));
        let mine_count = layouts.first().map(count_mines).ok_or(GameError::LayoutMismatch)?;
        for layout in &layouts {
            if layout.dim() != expected_dim || count_mines(layout) != mine_count {
                return Err(GameError::LayoutMismatch);
            }
        }
        let config =
            GameConfig::new(size, mine_count.try_into().map_err(|_| GameError::LayoutMismatch)?)?;
        Ok(Self {
            config,
            layouts,
            next: 0,
        })
    }

    /// Board configuration matching the scripted layouts.
    pub fn config(&self) -> GameConfig {
        self.config
    }
}

impl MinefieldGenerator for ScriptedGenerator {
    fn place_mines(&mut self, config: GameConfig) -> Array2<bool> {
        if config != self.config {
            log::warn!("Scripted layouts are {:?}, board asked for {:?}", self.config, config);
        }
        // never empty, checked on construction
        let layout = self.layouts[self.next % self.layouts.len()].clone();
        self.next += 1;
        layout
    }
}

fn count_mines(layout: &Array2<bool>) -> usize {
    layout.iter().filter(|&&mine| mine).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_layouts_in_order_and_cycles() {
        let mut generator =
            ScriptedGenerator::from_mine_coords((2, 2), &[&[(0, 0)], &[(1, 1)]]).unwrap();
        let config = generator.config();
        assert_eq!(config, GameConfig::new_unchecked((2, 2), 1));

        assert!(generator.place_mines(config)[[0, 0]]);
        assert!(generator.place_mines(config)[[1, 1]]);
        assert!(generator.place_mines(config)[[0, 0]]);
    }

    #[test]
    fn rejects_inconsistent_layouts() {
        assert_eq!(
            ScriptedGenerator::from_mine_coords((2, 2), &[&[(2, 0)]]),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            ScriptedGenerator::from_mine_coords((2, 2), &[&[(0, 0)], &[(0, 0), (1, 0)]]),
            Err(GameError::LayoutMismatch)
        );
        assert_eq!(
            ScriptedGenerator::from_mine_coords((2, 2), &[]),
            Err(GameError::LayoutMismatch)
        );
    }
}
