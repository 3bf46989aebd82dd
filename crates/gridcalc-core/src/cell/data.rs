//! Cell data

use super::CellAddress;
use crate::error::Result;

/// A single grid entry: the raw text found at one address
///
/// Cells never store a computed value. The displayed value is derived on
/// demand by the formula engine, which builds an expression from
/// [`Cell::raw_content`] every time it is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    address: CellAddress,
    raw_content: String,
}

impl Cell {
    /// Create a new cell
    pub fn new<S: Into<String>>(address: CellAddress, raw_content: S) -> Self {
        Self {
            address,
            raw_content: raw_content.into(),
        }
    }

    /// The cell's address
    pub fn address(&self) -> CellAddress {
        self.address
    }

    /// The cell's label (e.g. "B2")
    pub fn label(&self) -> String {
        self.address.to_label()
    }

    /// The text exactly as it appeared in the table (trimmed)
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Whether the content is a formula (starts with `=`)
    pub fn is_formula(&self) -> bool {
        self.raw_content.starts_with('=')
    }

    /// Check whether this cell lives at `label`
    ///
    /// Propagates [`crate::Error::InvalidCellIndex`] for malformed labels.
    pub fn matches(&self, label: &str) -> Result<bool> {
        self.address.matches(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_cell_accessors() {
        let cell = Cell::new(CellAddress::new(2, 3), "=ADD(A1,1)");
        assert_eq!(cell.address(), CellAddress::new(2, 3));
        assert_eq!(cell.label(), "C2");
        assert_eq!(cell.raw_content(), "=ADD(A1,1)");
        assert!(cell.is_formula());
        assert!(!Cell::new(CellAddress::new(1, 1), "42").is_formula());
    }

    #[test]
    fn test_cell_matches() {
        let cell = Cell::new(CellAddress::new(1, 1), "x");
        assert_eq!(cell.matches("A1"), Ok(true));
        assert_eq!(cell.matches("A2"), Ok(false));
        assert_eq!(
            cell.matches("1A"),
            Err(Error::InvalidCellIndex("1A".into()))
        );
    }
}
