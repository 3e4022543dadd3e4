//! Game-state engine for a terminal Minesweeper.
//!
//! A [`Game`] is built from a validated [`Seed`] and driven one [`Command`] at a
//! time; rendering is a separate projection over a [`BoardView`].

use std::ops::Index;

use ndarray::Array2;

pub use cell::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use seed::*;
pub use types::*;

mod cell;
mod command;
mod engine;
mod error;
mod generator;
mod render;
mod seed;
mod types;

/// Requested board shape for seed generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub size: Pos,
    pub mines: CellCount,
}

impl GameConfig {
    /// Validates the same bounds a seed file is held to.
    pub fn new(rows: i64, cols: i64, mines: i64) -> Result<Self> {
        let size = seed::grid_size(rows, cols)?;
        seed::check_mine_count(mines, size)?;
        Ok(Self {
            size,
            // checked against the area above
            mines: mines as CellCount,
        })
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }
}

/// Where the mines are, as an ordered list and as a lookup mask.
#[derive(Clone, Debug, PartialEq)]
pub struct Minefield {
    mask: Array2<bool>,
    mines: Vec<Pos>,
}

impl Minefield {
    pub fn size(&self) -> Pos {
        let (rows, cols) = self.mask.dim();
        // built from a `Pos`
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        area(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    /// Mines in the order the seed listed them.
    pub fn mines(&self) -> &[Pos] {
        &self.mines
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self[pos]
    }

    pub fn adjacent_mine_count(&self, pos: Pos) -> u8 {
        // at most 8 neighbours
        self.mask.neighbors(pos).filter(|&near| self[near]).count() as u8
    }
}

impl From<&Seed> for Minefield {
    fn from(seed: &Seed) -> Self {
        let mut mask: Array2<bool> = Array2::default(seed.size().to_nd_index());
        for &pos in seed.mines() {
            mask[pos.to_nd_index()] = true;
        }
        Self {
            mask,
            mines: seed.mines().to_vec(),
        }
    }
}

impl Index<Pos> for Minefield {
    type Output = bool;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.mask[pos.to_nd_index()]
    }
}

/// What an accepted command did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Safe cell uncovered, with its adjacent mine count.
    Revealed(u8),
    Marked,
    Guessed,
    /// Caller should print [`HELP`].
    Help,
    OverlayToggled,
    Won,
    Lost,
    Quit,
}

impl Outcome {
    /// Whether the session should stop after this outcome.
    pub const fn ends_session(self) -> bool {
        use Outcome::*;
        match self {
            Won | Lost | Quit => true,
            Revealed(_) | Marked | Guessed | Help | OverlayToggled => false,
        }
    }
}
