//! Boards: square index → signed offset.
//!
//! A positive offset is a ladder, a negative one a snake, zero is a plain
//! square. Squares run from `0` to `final_square` inclusive, so a board has
//! `final_square + 1` entries.
//!
//! ```text
//!   0   1   2   3 ──▶ 11
//!   ○   ○   ○   ▲ ...
//! ```

use playground_core::TextRepresentable;
use serde::{Deserialize, Serialize};

use crate::GameError;

/// Final square of the classic board.
pub const CLASSIC_FINAL_SQUARE: usize = 25;

/// Ladders and snakes of the classic board as `(square, offset)` pairs.
pub const CLASSIC_OFFSETS: [(usize, i32); 8] = [
    (3, 8),
    (6, 11),
    (9, 9),
    (10, 2),
    (14, -10),
    (19, -11),
    (22, -2),
    (24, -8),
];

/// The classic layout as a dense vector.
pub fn classic_layout() -> Vec<i32> {
    let mut layout = vec![0; CLASSIC_FINAL_SQUARE + 1];
    for (square, offset) in CLASSIC_OFFSETS {
        layout[square] = offset;
    }
    layout
}

/// A validated board layout.
///
/// Deserializing goes through [`Board::with_final_square`], so a board read
/// from JSON is checked like one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout")]
pub struct Board {
    final_square: usize,
    offsets: Vec<i32>,
}

impl Board {
    /// Create a board whose final square is `offsets.len() - 1`.
    pub fn new(offsets: Vec<i32>) -> Result<Self, GameError> {
        let final_square = offsets.len().checked_sub(1).ok_or_else(|| GameError::InvalidBoard {
            reason: "board has no squares".to_string(),
        })?;
        Self::with_final_square(final_square, offsets)
    }

    /// Create a board with an explicit final square.
    ///
    /// Fails when the layout length is not `final_square + 1` or when any
    /// offset would move a piece off the board.
    pub fn with_final_square(final_square: usize, offsets: Vec<i32>) -> Result<Self, GameError> {
        let expected = final_square.checked_add(1).ok_or_else(|| GameError::InvalidBoard {
            reason: format!("final square {} is too large", final_square),
        })?;
        if offsets.len() != expected {
            return Err(GameError::InvalidBoard {
                reason: format!(
                    "expected {} squares for final square {}, got {}",
                    expected,
                    final_square,
                    offsets.len()
                ),
            });
        }

        for (square, &offset) in offsets.iter().enumerate() {
            match shift(square, offset) {
                Some(target) if target <= final_square => {}
                _ => {
                    return Err(GameError::InvalidBoard {
                        reason: format!(
                            "offset {:+} on square {} leaves the board [0, {}]",
                            offset, square, final_square
                        ),
                    })
                }
            }
        }

        Ok(Self {
            final_square,
            offsets,
        })
    }

    /// The classic 25-square board.
    pub fn classic() -> Self {
        Self {
            final_square: CLASSIC_FINAL_SQUARE,
            offsets: classic_layout(),
        }
    }

    pub fn final_square(&self) -> usize {
        self.final_square
    }

    /// Offset on `square`, or 0 for squares outside the board.
    pub fn offset(&self, square: usize) -> i32 {
        self.offsets.get(square).copied().unwrap_or(0)
    }

    /// Where a piece ends up after landing on `square`.
    pub fn destination(&self, square: usize) -> usize {
        // Offsets were checked on construction.
        shift(square, self.offset(square)).unwrap_or(square)
    }

    /// Squares with a positive offset, as `(from, to)`.
    pub fn ladders(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.jumps().filter(|(from, to)| to > from)
    }

    /// Squares with a negative offset, as `(from, to)`.
    pub fn snakes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.jumps().filter(|(from, to)| to < from)
    }

    fn jumps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.offsets.len())
            .filter(|&square| self.offsets[square] != 0)
            .map(|square| (square, self.destination(square)))
    }

    /// One symbol per square from 1 to the final square: `▲` ladder,
    /// `▼` snake, `○` plain.
    pub fn render(&self) -> String {
        let symbols: Vec<&str> = (1..=self.final_square)
            .map(|square| match self.offset(square) {
                o if o > 0 => "▲",
                o if o < 0 => "▼",
                _ => "○",
            })
            .collect();
        symbols.join(" ")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardLayout {
    final_square: usize,
    offsets: Vec<i32>,
}

impl TryFrom<BoardLayout> for Board {
    type Error = GameError;

    fn try_from(layout: BoardLayout) -> Result<Self, Self::Error> {
        Self::with_final_square(layout.final_square, layout.offsets)
    }
}

impl TextRepresentable for Board {
    fn textual_description(&self) -> String {
        format!(
            "A board with {} squares, {} ladders and {} snakes",
            self.final_square,
            self.ladders().count(),
            self.snakes().count()
        )
    }

    fn pretty_textual_description(&self) -> String {
        self.render()
    }
}

fn shift(square: usize, offset: i32) -> Option<usize> {
    square.checked_add_signed(offset as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_board() {
        let board = Board::classic();

        assert_eq!(board.final_square(), 25);
        assert_eq!(board.destination(3), 11);
        assert_eq!(board.destination(14), 4);
        assert_eq!(board.destination(5), 5);
        assert_eq!(board.ladders().count(), 4);
        assert_eq!(board.snakes().count(), 4);
    }

    #[test]
    fn test_classic_is_valid() {
        let board = Board::with_final_square(CLASSIC_FINAL_SQUARE, classic_layout()).unwrap();
        assert_eq!(board, Board::classic());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = Board::with_final_square(25, vec![0; 10]).unwrap_err();
        assert!(matches!(err, GameError::InvalidBoard { .. }));
    }

    #[test]
    fn test_empty_board_rejected() {
        assert!(Board::new(vec![]).is_err());
    }

    #[test]
    fn test_offset_off_board_rejected() {
        // Square 2 + 5 = 7 > final square 4
        assert!(Board::new(vec![0, 0, 5, 0, 0]).is_err());
        // Square 1 - 2 < 0
        assert!(Board::new(vec![0, -2, 0]).is_err());
        // Exactly to the ends is fine
        assert!(Board::new(vec![0, -1, 1, 0]).is_ok());
    }

    #[test]
    fn test_huge_final_square_rejected() {
        let err = Board::with_final_square(usize::MAX, vec![0]).unwrap_err();
        assert!(matches!(err, GameError::InvalidBoard { .. }));
    }

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<Board>(r#"{"final_square":3,"offsets":[0,-9,40]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("leaves the board"));

        assert!(serde_json::from_str::<Board>(r#"{"final_square":25,"offsets":[0,1]}"#).is_err());

        let classic = Board::classic();
        let json = serde_json::to_string(&classic).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), classic);
    }

    #[test]
    fn test_render() {
        let board = Board::new(vec![0, 1, 0, -2, 0]).unwrap();
        assert_eq!(board.render(), "▲ ○ ▼ ○");
    }

    #[test]
    fn test_description() {
        let board = Board::classic();
        assert_eq!(
            board.textual_description(),
            "A board with 25 squares, 4 ladders and 4 snakes"
        );
    }
}
