use core::iter;

use rand::prelude::*;

use super::*;

/// Uniform placement: every arrangement of `mines` mines over the board is equally likely.
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    rng: SmallRng,
}

impl RandomGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }
}

impl MinefieldGenerator for RandomGenerator {
    fn place_mines(&mut self, config: GameConfig) -> Array2<bool> {
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines).min(total_cells);
        if mines < usize::from(config.mines) {
            log::warn!(
                "Minefield already full, requested {} mines but only {} fit",
                config.mines,
                total_cells
            );
        }

        let mut cells: Vec<bool> = iter::repeat_n(true, mines)
            .chain(iter::repeat_n(false, total_cells - mines))
            .collect();
        cells.shuffle(&mut self.rng);

        // lay the shuffled multiset out in logical (row-major) order
        let mut cells = cells.into_iter();
        Array2::from_shape_fn(config.size.to_nd_index(), |_| {
            cells.next().unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(mines: &Array2<bool>) -> usize {
        mines.iter().filter(|&&mine| mine).count()
    }

    #[test]
    fn places_exact_mine_count() {
        let mut generator = RandomGenerator::from_seed(7);
        for (size, mines) in [((1, 1), 0), ((1, 1), 1), ((10, 10), 10), ((30, 16), 99), ((3, 3), 9)] {
            let config = GameConfig::new(size, mines).unwrap();
            let layout = generator.place_mines(config);
            assert_eq!(layout.dim(), (usize::from(size.0), usize::from(size.1)));
            assert_eq!(count(&layout), usize::from(mines));
        }
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let config = GameConfig::default();
        let first = RandomGenerator::from_seed(42).place_mines(config);
        let second = RandomGenerator::from_seed(42).place_mines(config);
        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_layouts_differ() {
        let config = GameConfig::new((16, 16), 40).unwrap();
        let mut generator = RandomGenerator::from_seed(3);
        let first = generator.place_mines(config);
        let second = generator.place_mines(config);
        assert_ne!(first, second);
    }

    #[test]
    fn every_cell_can_receive_a_mine() {
        let config = GameConfig::new((4, 4), 1).unwrap();
        let mut generator = RandomGenerator::from_seed(11);
        let mut hits: Array2<u32> = Array2::zeros((4, 4));
        for _ in 0..2000 {
            let layout = generator.place_mines(config);
            hits.zip_mut_with(&layout, |hit, &mine| *hit += u32::from(mine));
        }
        // 125 expected per cell
        assert!(hits.iter().all(|&hit| (50..250).contains(&hit)), "{hits:?}");
    }
}
