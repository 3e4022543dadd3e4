use std::fmt;
use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use ndarray::Array2;

use crate::*;

/// Validated starting configuration: grid size plus the ordered mine list.
///
/// The text form is a stream of whitespace separated integers:
///
/// ```text
/// ROWS COLS
/// NUM_MINES
/// R0 C0
/// R1 C1
/// ...
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    size: Pos,
    mines: Vec<Pos>,
}

impl Seed {
    /// Builds a seed from raw values, applying the same checks as the file loader.
    pub fn new(
        rows: i64,
        cols: i64,
        mines: impl IntoIterator<Item = (i64, i64)>,
    ) -> Result<Self> {
        let size = grid_size(rows, cols)?;
        let mines: Vec<_> = mines.into_iter().collect();
        check_mine_count(mines.len().try_into().unwrap_or(i64::MAX), size)?;
        Self::from_raw_mines(size, mines)
    }

    /// Reads and parses a seed file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("read seed file {}", path.display());
        text.parse()
    }

    /// Parses the text form.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Tokens(text.split_whitespace());

        let rows = tokens.next_int("the number of rows")?;
        let cols = tokens.next_int("the number of columns")?;
        let count = tokens.next_int("the number of mines")?;

        let size = grid_size(rows, cols)?;
        check_mine_count(count, size)?;

        let mut mines = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let row = tokens.next_int("a mine row")?;
            let col = tokens.next_int("a mine column")?;
            mines.push((row, col));
        }

        let trailing = tokens.0.count();
        if trailing > 0 {
            log::warn!("ignoring {} token(s) after the mine list", trailing);
        }

        Self::from_raw_mines(size, mines)
    }

    /// Caller guarantees every position is in bounds and unique.
    pub(crate) fn from_unique_mines(size: Pos, mines: Vec<Pos>) -> Self {
        debug_assert!(mines.iter().all(|&(row, col)| row < size.0 && col < size.1));
        Self { size, mines }
    }

    fn from_raw_mines(size: Pos, raw: Vec<(i64, i64)>) -> Result<Self> {
        let mines = raw
            .into_iter()
            .map(|(row, col)| {
                checked_pos(row, col, size).ok_or(ConfigError::MineOutOfBounds { row, col })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut seen: Array2<bool> = Array2::default(size.to_nd_index());
        for &pos in &mines {
            let slot = &mut seen[pos.to_nd_index()];
            if *slot {
                return Err(ConfigError::DuplicateMine {
                    row: pos.0.into(),
                    col: pos.1.into(),
                });
            }
            *slot = true;
        }

        Ok(Self { size, mines })
    }

    pub fn size(&self) -> Pos {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn mines(&self) -> &[Pos] {
        &self.mines
    }

    pub fn mine_count(&self) -> CellCount {
        // bounded by the grid area
        self.mines.len() as CellCount
    }
}

impl FromStr for Seed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.size.0, self.size.1)?;
        writeln!(f, "{}", self.mines.len())?;
        for (row, col) in &self.mines {
            writeln!(f, "{} {}", row, col)?;
        }
        Ok(())
    }
}

/// Checks the grid bounds: at least [`MIN_SIDE`] and representable as [`Coord`].
pub(crate) fn grid_size(rows: i64, cols: i64) -> Result<Pos> {
    if rows < i64::from(MIN_SIDE) || cols < i64::from(MIN_SIDE) {
        return Err(ConfigError::GridTooSmall { rows, cols });
    }
    match (Coord::try_from(rows), Coord::try_from(cols)) {
        (Ok(rows), Ok(cols)) => Ok((rows, cols)),
        _ => Err(ConfigError::GridTooLarge { rows, cols }),
    }
}

pub(crate) fn check_mine_count(count: i64, (rows, cols): Pos) -> Result<()> {
    let capacity = area(rows, cols);
    if count < 0 {
        Err(ConfigError::InvalidMineCount { count })
    } else if count > i64::from(capacity) {
        Err(ConfigError::TooManyMines {
            mines: count,
            capacity,
        })
    } else {
        Ok(())
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next_int(&mut self, expected: &'static str) -> Result<i64> {
        let token = self.0.next().ok_or(ConfigError::MissingToken { expected })?;
        token.parse().map_err(|_| ConfigError::NotAnInteger {
            expected,
            token: token.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_file_layout() {
        let seed: Seed = "5 6\n3\n0 0\n4 5\n2 3\n".parse().unwrap();

        assert_eq!(seed.size(), (5, 6));
        assert_eq!(seed.mines(), &[(0, 0), (4, 5), (2, 3)]);
        assert_eq!(seed.mine_count(), 3);
    }

    #[test]
    fn tokens_may_be_split_by_any_whitespace() {
        let seed = Seed::parse("  5\t5 1   \n\n 1\n 2").unwrap();

        assert_eq!(seed.mines(), &[(1, 2)]);
    }

    #[test]
    fn zero_mines_is_allowed() {
        let seed = Seed::parse("5 5 0").unwrap();

        assert!(seed.mines().is_empty());
    }

    #[test]
    fn written_form_reads_back() {
        let seed = Seed::new(7, 9, [(6, 8), (0, 3)]).unwrap();

        assert_eq!(seed.to_string(), "7 9\n2\n6 8\n0 3\n");
        assert_eq!(Seed::parse(&seed.to_string()).unwrap(), seed);
    }

    #[test]
    fn missing_mine_coordinates_is_a_format_error() {
        let err = Seed::parse("5 5\n2\n1 1\n3").unwrap_err();

        assert!(matches!(err, ConfigError::MissingToken { .. }));
        assert_eq!(err.kind(), ConfigErrorKind::Format);
    }

    #[test]
    fn non_integer_is_a_format_error() {
        let err = Seed::parse("5 five\n0").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::NotAnInteger { ref token, .. } if token == "five"
        ));
        assert_eq!(err.kind(), ConfigErrorKind::Format);
    }

    #[test]
    fn small_grid_is_a_value_error() {
        let err = Seed::parse("4 10\n0").unwrap_err();

        assert!(matches!(err, ConfigError::GridTooSmall { rows: 4, cols: 10 }));
        assert_eq!(err.kind(), ConfigErrorKind::Value);
    }

    #[test]
    fn oversized_grid_is_a_value_error() {
        let err = Seed::parse("256 5\n0").unwrap_err();

        assert!(matches!(err, ConfigError::GridTooLarge { .. }));
    }

    #[test]
    fn mine_count_over_capacity_is_rejected_before_coordinates() {
        let err = Seed::parse("5 5\n26\n").unwrap_err();

        assert!(matches!(
            err,
            ConfigError::TooManyMines {
                mines: 26,
                capacity: 25
            }
        ));
    }

    #[test]
    fn negative_mine_count_is_rejected() {
        let err = Seed::parse("5 5\n-1\n").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidMineCount { count: -1 }));
    }

    #[test]
    fn mine_outside_grid_is_a_value_error() {
        let err = Seed::parse("5 5\n2\n0 0\n5 0\n").unwrap_err();

        assert!(matches!(err, ConfigError::MineOutOfBounds { row: 5, col: 0 }));
        assert_eq!(err.kind(), ConfigErrorKind::Value);

        let err = Seed::parse("5 5\n1\n0 -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::MineOutOfBounds { row: 0, col: -1 }));
    }

    #[test]
    fn duplicate_mine_is_rejected() {
        let err = Seed::new(5, 5, [(1, 1), (2, 2), (1, 1)]).unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateMine { row: 1, col: 1 }));
    }

    #[test]
    fn full_grid_fits_but_one_more_does_not() {
        for (rows, cols) in [(5, 5), (5, 8), (11, 6)] {
            let every_cell: Vec<_> = (0..rows)
                .flat_map(|row| (0..cols).map(move |col| (row, col)))
                .collect();
            assert!(Seed::new(rows, cols, every_cell.iter().copied()).is_ok());

            let one_more = every_cell.iter().copied().chain([(0, 0)]);
            let err = Seed::new(rows, cols, one_more).unwrap_err();
            assert!(matches!(err, ConfigError::TooManyMines { .. }));
        }
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        let seed = Seed::parse("5 5\n1\n2 2\n9 9 9\n").unwrap();

        assert_eq!(seed.mines(), &[(2, 2)]);
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = Seed::from_path("this/seed/does/not/exist.txt").unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::Unreadable);
    }
}
