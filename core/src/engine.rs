use std::mem;

use ndarray::Array2;

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game from seed to win, loss or quit.
///
/// A cell is *accounted for* once it is revealed without a mine or marked while
/// holding one; the game is won when every cell is accounted for. Marking a safe
/// cell or guessing any cell withdraws it from the tally.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    minefield: Minefield,
    cells: Array2<Cell>,
    accounted: Array2<bool>,
    accounted_count: CellCount,
    rounds: u32,
    state: GameState,
    show_mines: bool,
    triggered_mine: Option<Pos>,
}

impl Game {
    pub fn new(seed: &Seed) -> Self {
        let minefield = Minefield::from(seed);
        let size = minefield.size().to_nd_index();
        log::info!(
            "new game: {}x{} with {} mines",
            seed.rows(),
            seed.cols(),
            seed.mine_count()
        );
        Self {
            minefield,
            cells: Array2::default(size),
            accounted: Array2::default(size),
            accounted_count: 0,
            rounds: 0,
            state: GameState::default(),
            show_mines: false,
            triggered_mine: None,
        }
    }

    /// Shorthand for validating a [`Seed`] and starting a game on it.
    pub fn with_mines(
        rows: i64,
        cols: i64,
        mines: impl IntoIterator<Item = (i64, i64)>,
    ) -> Result<Self> {
        Ok(Self::new(&Seed::new(rows, cols, mines)?))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Pos {
        self.minefield.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    /// Rounds played so far; rejected input and quitting do not count.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.cells[pos.to_nd_index()]
    }

    pub fn has_mine_at(&self, pos: Pos) -> bool {
        self.minefield.contains(pos)
    }

    pub fn adjacent_mines(&self, pos: Pos) -> u8 {
        self.minefield.adjacent_mine_count(pos)
    }

    pub fn is_accounted(&self, pos: Pos) -> bool {
        self.accounted[pos.to_nd_index()]
    }

    pub fn accounted_count(&self) -> CellCount {
        self.accounted_count
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Pos> {
        self.triggered_mine
    }

    /// Whether the next [`view`](Self::view) will expose the mines.
    pub fn overlay_pending(&self) -> bool {
        self.show_mines
    }

    /// `100 * cells / rounds`, available once the game is won or lost.
    pub fn score(&self) -> Option<f64> {
        if self.state.is_finished() && self.rounds > 0 {
            Some(100.0 * f64::from(self.minefield.total_cells()) / f64::from(self.rounds))
        } else {
            None
        }
    }

    /// Board for rendering; consumes a pending mine overlay.
    pub fn view(&mut self) -> BoardView<'_> {
        let show_mines = mem::take(&mut self.show_mines);
        BoardView::new(&self.cells, &self.minefield, self.rounds, show_mines)
    }

    /// Board for rendering without touching the overlay.
    pub fn peek(&self) -> BoardView<'_> {
        BoardView::new(&self.cells, &self.minefield, self.rounds, self.show_mines)
    }

    /// Plays one turn.
    ///
    /// Every accepted command except [`Command::Quit`] counts as a round. Rejected
    /// commands leave the game untouched.
    pub fn apply(&mut self, command: Command) -> std::result::Result<Outcome, CommandError> {
        use Command::*;

        let outcome = match command {
            Invalid(err) => return Err(err),
            Quit => return Ok(Outcome::Quit),
            _ if self.state.is_finished() => return Err(CommandError::AlreadyEnded),
            Help => Outcome::Help,
            ToggleMineOverlay => {
                self.show_mines = !self.show_mines;
                Outcome::OverlayToggled
            }
            Reveal { row, col } => {
                let pos = self.locate(row, col)?;
                self.reveal(pos)
            }
            Mark { row, col } => {
                let pos = self.locate(row, col)?;
                self.mark(pos)
            }
            Guess { row, col } => {
                let pos = self.locate(row, col)?;
                self.guess(pos)
            }
        };

        self.rounds += 1;
        log::debug!("round {}: {:?}", self.rounds, outcome);
        Ok(outcome)
    }

    fn locate(&self, row: i64, col: i64) -> std::result::Result<Pos, CommandError> {
        checked_pos(row, col, self.size()).ok_or(CommandError::OutOfBounds { row, col })
    }

    fn reveal(&mut self, pos: Pos) -> Outcome {
        let count = self.minefield.adjacent_mine_count(pos);
        self.cells[pos.to_nd_index()] = Cell::Revealed(count);

        if self.minefield.contains(pos) {
            log::debug!("revealed mine at {:?}", pos);
            self.triggered_mine = Some(pos);
            self.set_accounted(pos, false);
            self.state = GameState::Lost;
            return Outcome::Lost;
        }

        self.set_accounted(pos, true);
        self.check_won().unwrap_or(Outcome::Revealed(count))
    }

    fn mark(&mut self, pos: Pos) -> Outcome {
        self.cells[pos.to_nd_index()] = Cell::Marked;
        self.set_accounted(pos, self.minefield.contains(pos));
        self.check_won().unwrap_or(Outcome::Marked)
    }

    fn guess(&mut self, pos: Pos) -> Outcome {
        self.cells[pos.to_nd_index()] = Cell::Guessed;
        self.set_accounted(pos, false);
        Outcome::Guessed
    }

    fn set_accounted(&mut self, pos: Pos, accounted: bool) {
        let slot = &mut self.accounted[pos.to_nd_index()];
        if *slot == accounted {
            return;
        }
        *slot = accounted;
        if accounted {
            self.accounted_count += 1;
        } else {
            self.accounted_count -= 1;
        }
        log::trace!("{:?} accounted: {}, tally {}", pos, accounted, self.accounted_count);
    }

    fn check_won(&mut self) -> Option<Outcome> {
        if self.accounted_count == self.minefield.total_cells() {
            self.state = GameState::Won;
            Some(Outcome::Won)
        } else {
            None
        }
    }
}
