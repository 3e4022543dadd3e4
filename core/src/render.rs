use std::fmt;

use ndarray::Array2;

use crate::*;

pub const WELCOME: &str = "\n M I N E S W E E P E R   -   A L P H A   E D I T I O N\n";

/// Command reference; `nofog` is deliberately not listed.
pub const HELP: &str = "
Commands Available...
 - Reveal: r/reveal row col
 -   Mark: m/mark   row col
 -  Guess: g/guess  row col
 -   Help: h/help
 -   Quit: q/quit
";

pub const PROMPT: &str = "\nminesweeper-alpha: ";

pub const QUIT_MESSAGE: &str = "\nQuitting the game...\nBye!\n";

pub const LOSS_REPORT: &str = "
 Oh no... You revealed a mine!

 GAME OVER
";

pub fn win_report(score: f64) -> String {
    format!("\n CONGRATULATIONS!\n YOU HAVE WON!\n SCORE: {:.2}\n", score)
}

/// Read-only snapshot of everything the text board needs.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    cells: &'a Array2<Cell>,
    minefield: &'a Minefield,
    rounds: u32,
    show_mines: bool,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(
        cells: &'a Array2<Cell>,
        minefield: &'a Minefield,
        rounds: u32,
        show_mines: bool,
    ) -> Self {
        Self {
            cells,
            minefield,
            rounds,
            show_mines,
        }
    }

    pub fn size(&self) -> Pos {
        self.minefield.size()
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.to_nd_index()]
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn shows_mines(&self) -> bool {
        self.show_mines
    }

    /// Whether `pos` gets the `<x>` mine markers.
    pub fn marks_mine(&self, pos: Pos) -> bool {
        self.show_mines && self.minefield.contains(pos)
    }
}

fn digits(n: Coord) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// ```text
///
///  Rounds Completed: 1
///
///  0 |   |   |   |   |   |
///  1 |   |   |   |   |   |
///  2 |   |   | 0 |   |   |
///  3 |   |   |   |   |   |
///  4 |   |   |   |   |   |
///      0   1   2   3   4
/// ```
impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.size();
        let row_width = digits(rows - 1);
        let col_width = digits(cols - 1);

        writeln!(f)?;
        writeln!(f, " Rounds Completed: {}", self.rounds)?;
        writeln!(f)?;

        for row in 0..rows {
            write!(f, " {:>row_width$}", row)?;
            let mut open = false;
            for col in 0..cols {
                let marked = self.marks_mine((row, col));
                write!(
                    f,
                    "{}|{}{:pad$}{}",
                    if open { '>' } else { ' ' },
                    if marked { '<' } else { ' ' },
                    "",
                    self.cell((row, col)).symbol(),
                    pad = col_width - 1,
                )?;
                open = marked;
            }
            writeln!(f, "{}|", if open { '>' } else { ' ' })?;
        }

        write!(f, " {:row_width$} ", "")?;
        for col in 0..cols {
            write!(f, "  {:>col_width$} ", col)?;
        }
        writeln!(f)
    }
}
