/// Player-visible state of one grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Hidden,
    Revealed(u8),
    Marked,
    Guessed,
}

impl Cell {
    /// Single character shown inside the cell on the text board.
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => ' ',
            // adjacency is at most 8
            Self::Revealed(count) => (b'0' + count) as char,
            Self::Marked => 'F',
            Self::Guessed => '?',
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}
