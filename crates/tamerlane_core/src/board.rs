use crate::types::*;

/// Pure piece storage: every slot is empty or holds one piece.
///
/// Cloning produces a fully independent copy, which is what makes the
/// speculative simulation in `movegen::valid_moves` safe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; SQUARES],
        }
    }

    /// The variant starting layout: back rank `R L C E P K P E C L R`
    /// with a full pawn rank in front, mirrored for Black.
    pub fn start() -> Self {
        use PieceKind::*;
        let back = [
            Rook, Knight, Camel, Elephant, Picket, King, Picket, Elephant, Camel, Knight, Rook,
        ];
        let mut board = Board::empty();
        for (i, &kind) in back.iter().enumerate() {
            let file = i as u8 + 1;
            board.set_piece(Pos::new(1, file), Some(Piece::new(Color::White, kind)));
            board.set_piece(Pos::new(RANKS, file), Some(Piece::new(Color::Black, kind)));
        }
        for file in 1..=FILES {
            board.set_piece(Pos::new(2, file), Some(Piece::new(Color::White, Pawn)));
            board.set_piece(Pos::new(RANKS - 1, file), Some(Piece::new(Color::Black, Pawn)));
        }
        board
    }

    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.squares[pos.index()]
    }

    pub fn set_piece(&mut self, pos: Pos, piece: Option<Piece>) {
        self.squares[pos.index()] = piece;
    }

    /// All occupied slots of one side, in index order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(move |(i, &slot)| {
            let piece = slot?;
            (piece.color == color).then_some((Pos::from_index(i), piece))
        })
    }

    /// Locate `color`'s king.
    ///
    /// Precondition of check detection: the side holds exactly one king.
    /// A board that violates it is malformed, so this fails loudly rather
    /// than letting check detection silently report `false`.
    pub fn king_pos(&self, color: Color) -> Pos {
        let mut found = None;
        for (pos, piece) in self.pieces_of(color) {
            if piece.kind == PieceKind::King {
                assert!(
                    found.is_none(),
                    "board holds more than one {color:?} king"
                );
                found = Some(pos);
            }
        }
        found.unwrap_or_else(|| {
            panic!("board holds no {color:?} king; check detection requires exactly one")
        })
    }

    /// Play `mv` on this board: clears the destination (capture), moves the
    /// piece, and applies pawn promotion. The single mutation point shared
    /// by hypothetical simulation and committed moves.
    pub fn apply_move(&mut self, mv: Move) {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        self.set_piece(mv.from, None);
        let kind = match mv.promo {
            Some(kind) if moved.kind == PieceKind::Pawn => kind,
            _ => moved.kind,
        };
        self.set_piece(mv.to, Some(Piece::new(moved.color, kind)));
    }

    /// Parse the `|`-delimited grid format used by scenario fixtures:
    /// one row per rank, top row first, one letter (or space) per file,
    /// upper case for White and lower case for Black.
    pub fn from_grid(grid: &str) -> Board {
        let rows: Vec<&str> = grid
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(
            rows.len() == RANKS as usize,
            "grid must have {RANKS} rows, got {}",
            rows.len()
        );

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = RANKS - row_idx as u8;
            let cells: Vec<&str> = row.split('|').collect();
            assert!(
                cells.len() == FILES as usize + 2
                    && cells[0].is_empty()
                    && cells[FILES as usize + 1].is_empty(),
                "grid row must have {FILES} |-delimited cells: {row:?}"
            );
            for (cell_idx, cell) in cells[1..=FILES as usize].iter().enumerate() {
                let file = cell_idx as u8 + 1;
                assert!(cell.chars().count() == 1, "grid cell must be one char: {cell:?}");
                let ch = cell.chars().next().unwrap();
                if ch == ' ' {
                    continue;
                }
                let piece = Piece::from_char(ch)
                    .unwrap_or_else(|| panic!("invalid piece letter in grid: {ch:?}"));
                board.set_piece(Pos::new(rank, file), Some(piece));
            }
        }
        board
    }

    /// Serialize back to the grid format. Round-trips with `from_grid`.
    pub fn to_grid(&self) -> String {
        let mut out = String::new();
        for rank in (1..=RANKS).rev() {
            out.push('|');
            for file in 1..=FILES {
                let ch = match self.piece_at(Pos::new(rank, file)) {
                    Some(piece) => piece.to_char(),
                    None => ' ',
                };
                out.push(ch);
                out.push('|');
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
