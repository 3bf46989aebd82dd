//! Cell address type

use crate::error::{Error, Result};
use lazy_regex::regex_captures;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "B12")
///
/// Both coordinates are 1-based. Columns are written as bijective base-26
/// letters: there is no zero digit, so 1 = A, 26 = Z, 27 = AA, 702 = ZZ.
///
/// Addresses order row-major (row first, then column), which is the order
/// cells are produced in when a table is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, B=2, ..., Z=26, AA=27)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from 1-based coordinates
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Encode a 1-based (row, column) pair as a label
    ///
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// assert_eq!(CellAddress::encode(12, 2), "B12");
    /// assert_eq!(CellAddress::encode(1, 27), "AA1");
    /// ```
    pub fn encode(row: u32, col: u32) -> String {
        format!("{}{}", Self::column_to_letters(col), row)
    }

    /// Parse a cell address from a label
    ///
    /// The label must be one run of uppercase letters followed by one run of
    /// digits. The row must be at least 1 and carry no leading zeros, so
    /// every accepted label is exactly what [`CellAddress::to_label`] gives
    /// back.
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B12").unwrap();
    /// assert_eq!(addr.row, 12);
    /// assert_eq!(addr.col, 2);
    ///
    /// assert!(CellAddress::parse("b12").is_err());
    /// assert!(CellAddress::parse("A0").is_err());
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let invalid = || Error::InvalidCellIndex(label.to_string());

        let (_, letters, digits) =
            regex_captures!(r"^([A-Z]+)([1-9][0-9]*)$", label).ok_or_else(invalid)?;

        let col = Self::letters_to_column(letters).map_err(|_| invalid())?;
        let row: u32 = digits.parse().map_err(|_| invalid())?;

        Ok(Self { row, col })
    }

    /// Check whether a label is a well-formed cell address
    pub fn is_valid(label: &str) -> bool {
        Self::parse(label).is_ok()
    }

    /// Compare this address against a label
    ///
    /// Fails with [`Error::InvalidCellIndex`] when the label is malformed,
    /// rather than answering `false`.
    pub fn matches(&self, label: &str) -> Result<bool> {
        let other = Self::parse(label)?;
        Ok(*self == other)
    }

    /// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA)
    ///
    /// Column 0 has no letter form and yields an empty string.
    pub fn column_to_letters(col: u32) -> String {
        let mut letters = Vec::new();
        let mut n = col;

        while n > 0 {
            n -= 1;
            letters.push((n % 26) as u8 + b'A');
            n /= 26;
        }

        letters.iter().rev().map(|&b| b as char).collect()
    }

    /// Convert uppercase column letters to a 1-based column number
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        let invalid = || Error::InvalidCellIndex(letters.to_string());

        if letters.is_empty() {
            return Err(invalid());
        }

        let mut col: u32 = 0;
        for c in letters.bytes() {
            if !c.is_ascii_uppercase() {
                return Err(invalid());
            }
            col = col
                .checked_mul(26)
                .and_then(|v| v.checked_add(u32::from(c - b'A') + 1))
                .ok_or_else(invalid)?;
        }

        Ok(col)
    }

    /// Format as a label (e.g. "B12")
    pub fn to_label(&self) -> String {
        Self::encode(self.row, self.col)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_to_letters(self.col), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
