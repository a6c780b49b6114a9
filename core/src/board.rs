use ndarray::Array2;

use crate::*;

/// Grid of mines, revealed flags and cached neighbor counts for one game.
///
/// The shape and mine count are fixed at construction. Cells are addressed by `(x, y)` and every accessor panics
/// on coordinates outside the board, so validate them with [`GameConfig::validate_coords`] first.
#[derive(Debug)]
pub struct Board {
    config: GameConfig,
    mines: Array2<bool>,
    revealed: Array2<bool>,
    neighbor_counts: Array2<u8>,
    generator: Box<dyn MinefieldGenerator>,
}

impl Board {
    pub fn new(config: GameConfig) -> Self {
        Self::with_generator(config, RandomGenerator::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomGenerator::from_seed(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MinefieldGenerator + 'static) -> Self {
        let mut board = Self {
            config,
            mines: Array2::default(config.size.to_nd_index()),
            revealed: Array2::default(config.size.to_nd_index()),
            neighbor_counts: Array2::default(config.size.to_nd_index()),
            generator: Box::new(generator),
        };
        board.regenerate();
        board
    }

    /// Fixed layout, mostly for tests. Regenerating replays the same layout.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let generator = ScriptedGenerator::from_mine_coords(size, &[mine_coords])?;
        Ok(Self::with_generator(generator.config(), generator))
    }

    /// Places a fresh set of mines and hides every cell again. Size and mine count are kept.
    pub fn regenerate(&mut self) {
        let mines = self.generator.place_mines(self.config);
        debug_assert_eq!(mines.dim(), self.mines.dim(), "generator returned wrong shape");

        let placed = mines.iter().filter(|&&mine| mine).count();
        if placed != usize::from(self.config.mines) {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                placed,
                self.config.mines
            );
        }

        let size = self.config.size;
        self.neighbor_counts = Array2::from_shape_fn(self.mines.raw_dim(), |(x, y)| {
            // both axes fit in Coord since the board was built from a Coord2
            let coords = (x as Coord, y as Coord);
            Neighbors::new(coords, size)
                .filter(|&pos| mines[pos.to_nd_index()])
                .count() as u8
        });
        self.mines = mines;
        self.revealed.fill(false);
        log::trace!("Minefield generated:\n{}", self.render_mines());
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.config.size)
    }

    pub fn has_mine(&self, coords: Coord2) -> bool {
        self.mines[coords.to_nd_index()]
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn neighbor_count(&self, coords: Coord2) -> u8 {
        self.neighbor_counts[coords.to_nd_index()]
    }

    pub fn hidden_count(&self) -> CellCount {
        // at most 255 * 255 cells, always fits
        self.revealed.iter().filter(|&&revealed| !revealed).count() as CellCount
    }

    /// Marks the cell revealed, returning `true` only when it was hidden before.
    pub fn reveal_cell(&mut self, coords: Coord2) -> bool {
        !core::mem::replace(&mut self.revealed[coords.to_nd_index()], true)
    }

    /// Player-visible snapshot, hidden cells never expose their content.
    pub fn view(&self) -> BoardView {
        BoardView::new(Array2::from_shape_fn(self.mines.raw_dim(), |index| {
            if !self.revealed[index] {
                CellView::Unknown
            } else if self.mines[index] {
                CellView::Mine
            } else {
                CellView::Count(self.neighbor_counts[index])
            }
        }))
    }

    /// Full mine layout, one line per column: `X` for a mine, `-` otherwise. Never send this to a player.
    pub fn render_mines(&self) -> String {
        let mut out = String::with_capacity(self.mines.len() + self.mines.nrows());
        for column in self.mines.outer_iter() {
            for &mine in column {
                out.push(if mine { 'X' } else { '-' });
            }
            out.push('\n');
        }
        out
    }
}
