//! Board coordinates: files, ranks, and squares.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A file (column) on the board, 0 = a through 7 = h.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct File(u8);

impl File {
    pub const A: File = File(0);
    pub const B: File = File(1);
    pub const C: File = File(2);
    pub const D: File = File(3);
    pub const E: File = File(4);
    pub const F: File = File(5);
    pub const G: File = File(6);
    pub const H: File = File(7);

    /// All files in a-to-h order
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Create a file with bounds checking (0-7)
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(File(index))
        } else {
            None
        }
    }

    /// Parse a file letter (a-h, case-insensitive)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            f @ 'a'..='h' => Some(File(f as u8 - b'a')),
            _ => None,
        }
    }

    /// Get the file letter (a-h)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (self.0 + b'a') as char
    }

    /// Get the file index (0-7)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the board, 0 = rank 1 through 7 = rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rank(u8);

impl Rank {
    pub const R1: Rank = Rank(0);
    pub const R2: Rank = Rank(1);
    pub const R3: Rank = Rank(2);
    pub const R4: Rank = Rank(3);
    pub const R5: Rank = Rank(4);
    pub const R6: Rank = Rank(5);
    pub const R7: Rank = Rank(6);
    pub const R8: Rank = Rank(7);

    /// All ranks in 1-to-8 order
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Create a rank with bounds checking (0-7)
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Rank(index))
        } else {
            None
        }
    }

    /// Parse a rank digit (1-8)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            r @ '1'..='8' => Some(Rank(r as u8 - b'1')),
            _ => None,
        }
    }

    /// Get the rank digit (1-8)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (self.0 + b'1') as char
    }

    /// Get the rank index (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board.
///
/// A square is always valid once constructed: the canonical index
/// `rank * 8 + file` lies in 0-63, with a1 = 0 and h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Create a square from typed coordinates. Total: `File` and `Rank`
    /// are already range-checked.
    #[inline]
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// Create a square from raw coordinates with bounds checking
    #[must_use]
    pub const fn from_coords(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square {
                file: File(file as u8),
                rank: Rank(rank as u8),
            })
        } else {
            None
        }
    }

    /// Create a square from an index (0-63, a1=0, b1=1, ..., h8=63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square {
                file: File((idx % 8) as u8),
                rank: Rank((idx / 8) as u8),
            })
        } else {
            None
        }
    }

    /// Get the file (a-h)
    #[inline]
    #[must_use]
    pub const fn file(self) -> File {
        self.file
    }

    /// Get the rank (1-8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank.index() * 8 + self.file.index()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        };

        let file = File::from_char(file_char).ok_or_else(|| SquareError::InvalidNotation {
            notation: s.to_string(),
        })?;
        let rank = Rank::from_char(rank_char).ok_or_else(|| SquareError::InvalidNotation {
            notation: s.to_string(),
        })?;

        Ok(Square::new(file, rank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bijection() {
        for idx in 0..64 {
            let sq = Square::from_index(idx).unwrap();
            assert_eq!(sq.index(), idx);
        }
        assert_eq!(Square::from_index(64), None);
        assert_eq!(Square::from_index(1000), None);
    }

    #[test]
    fn test_index_formula() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.index(), 3 * 8 + 4);
        assert_eq!(Square::new(File::A, Rank::R1).index(), 0);
        assert_eq!(Square::new(File::H, Rank::R8).index(), 63);
    }

    #[test]
    fn test_coords_bounds() {
        assert!(Square::from_coords(7, 7).is_some());
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
        assert_eq!(File::new(8), None);
        assert_eq!(Rank::new(8), None);
    }

    #[test]
    fn test_algebraic_round_trip() {
        for file in File::ALL {
            for rank in Rank::ALL {
                let sq = Square::new(file, rank);
                let parsed: Square = sq.to_string().parse().unwrap();
                assert_eq!(parsed, sq);
            }
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        let lower: Square = "e4".parse().unwrap();
        let upper: Square = "E4".parse().unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
        assert!("i4".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e0".parse::<Square>().is_err());
        assert!("44".parse::<Square>().is_err());
    }

    #[test]
    fn test_ordering_by_index() {
        let a1 = Square::new(File::A, Rank::R1);
        let h1 = Square::new(File::H, Rank::R1);
        let a2 = Square::new(File::A, Rank::R2);
        assert!(a1 < h1);
        assert!(h1 < a2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(File::E, Rank::R4).to_string(), "e4");
        assert_eq!(Square::new(File::A, Rank::R1).to_string(), "a1");
    }
}
