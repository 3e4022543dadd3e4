use super::*;

/// Places mines uniformly at random over the whole grid.
///
/// The same `rng_seed` and [`GameConfig`] always give the same [`Seed`].
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSeedGenerator {
    rng_seed: u64,
}

impl RandomSeedGenerator {
    pub fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }

    /// Draws the RNG seed from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }
}

impl SeedGenerator for RandomSeedGenerator {
    fn generate(self, config: GameConfig) -> Seed {
        use rand::prelude::*;

        let (rows, cols) = config.size;
        let total = config.total_cells();
        let to_pos = |index: CellCount| -> Pos {
            let cols = CellCount::from(cols);
            ((index / cols) as Coord, (index % cols) as Coord)
        };

        // optimize for full boards
        if config.mines >= total {
            log::debug!("mine field is full, skipping placement");
            return Seed::from_unique_mines(config.size, (0..total).map(to_pos).collect());
        }

        let mut rng = SmallRng::seed_from_u64(self.rng_seed);
        let mut taken = vec![false; usize::from(total)];
        let mut free = total;
        let mut mines = Vec::with_capacity(usize::from(config.mines));

        while mines.len() < usize::from(config.mines) {
            // pick the n-th free cell
            let mut skip = rng.random_range(0..free);
            for (index, cell) in taken.iter_mut().enumerate() {
                if *cell {
                    continue;
                }
                if skip == 0 {
                    *cell = true;
                    mines.push(to_pos(index as CellCount));
                    free -= 1;
                    break;
                }
                skip -= 1;
            }
        }

        log::debug!(
            "placed {} mines on {}x{} with rng seed {}",
            mines.len(),
            rows,
            cols,
            self.rng_seed
        );
        Seed::from_unique_mines(config.size, mines)
    }
}
