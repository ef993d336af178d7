use std::fmt;

/// Number of ranks on the board. Rank 1 is White's home edge.
pub const RANKS: u8 = 10;
/// Number of files on the board.
pub const FILES: u8 = 11;
/// Total slot count of the mailbox board.
pub const SQUARES: usize = RANKS as usize * FILES as usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

/// The closed set of piece movement patterns in the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    /// One forward step onto an empty square, captures one step diagonally
    /// forward. No double step, no en passant.
    Pawn,
    /// (1,2)/(2,1) leaper.
    Knight,
    /// Diagonal rider that leaps the adjacent diagonal square and lands no
    /// closer than two squares out.
    Picket,
    /// (1,3)/(3,1) leaper.
    Camel,
    /// (2,2) leaper.
    Elephant,
    /// Orthogonal slider.
    Rook,
    King,
}

impl PieceKind {
    /// Upper-case letter used by the grid board format.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'O',
            PieceKind::Knight => 'L',
            PieceKind::Picket => 'P',
            PieceKind::Camel => 'C',
            PieceKind::Elephant => 'E',
            PieceKind::Rook => 'R',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(ch: char) -> Option<PieceKind> {
        match ch {
            'O' => Some(PieceKind::Pawn),
            'L' => Some(PieceKind::Knight),
            'P' => Some(PieceKind::Picket),
            'C' => Some(PieceKind::Camel),
            'E' => Some(PieceKind::Elephant),
            'R' => Some(PieceKind::Rook),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Grid-format letter: upper case for White, lower case for Black.
    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = PieceKind::from_letter(ch.to_ascii_uppercase())?;
        Some(Piece { color, kind })
    }
}

/// A 1-based (rank, file) board coordinate.
///
/// Any pair of values is representable; `in_bounds` tells whether the
/// position actually addresses a board slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub rank: u8,
    pub file: u8,
}

impl Pos {
    pub const fn new(rank: u8, file: u8) -> Self {
        Self { rank, file }
    }

    pub const fn in_bounds(self) -> bool {
        self.rank >= 1 && self.rank <= RANKS && self.file >= 1 && self.file <= FILES
    }

    /// Step by `(dr, df)`, returning `None` when the result leaves the board.
    /// All move generators walk the board through this.
    pub fn offset(self, dr: i8, df: i8) -> Option<Pos> {
        let rank = self.rank as i8 + dr;
        let file = self.file as i8 + df;
        if (1..=RANKS as i8).contains(&rank) && (1..=FILES as i8).contains(&file) {
            Some(Pos::new(rank as u8, file as u8))
        } else {
            None
        }
    }

    /// Mailbox index. Panics when the position is off the board.
    pub fn index(self) -> usize {
        assert!(self.in_bounds(), "position {self} is off the board");
        (self.rank as usize - 1) * FILES as usize + (self.file as usize - 1)
    }

    pub fn from_index(idx: usize) -> Pos {
        debug_assert!(idx < SQUARES);
        Pos::new((idx / FILES as usize) as u8 + 1, (idx % FILES as usize) as u8 + 1)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.rank, self.file)
    }
}

/// A pure data record describing a transition; carries no behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub promo: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Pos, to: Pos) -> Self {
        Self {
            from,
            to,
            promo: None,
        }
    }

    pub fn promotion(from: Pos, to: Pos, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promo: Some(kind),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        if let Some(kind) = self.promo {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}
