//! Table type
//!
//! A table is the grid of cells parsed from plain text. Rows are separated by
//! newlines, cells within a row by a tab or a run of two or more spaces.
//! Blank lines and empty cells are dropped, so a missing cell is simply
//! absent rather than stored as an empty string.

use std::ops::Range;

use regex::Regex;

use crate::cell::{Cell, CellAddress};
use crate::error::{Error, Result};
use crate::options::ParseOptions;

/// An immutable grid of cells
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Cells in parse order (row-major, so sorted by address)
    cells: Vec<Cell>,
    /// Index span into `cells` for each row
    rows: Vec<Range<usize>>,
}

/// Separator for [`ParseOptions::default`], compiled once
fn default_separator() -> &'static Regex {
    lazy_regex::regex!(r"\t| {2,}")
}

impl Table {
    /// Parse table text with the default separators
    ///
    /// # Example
    /// ```
    /// use gridcalc_core::Table;
    ///
    /// let table = Table::parse("1\t2\n3  =A1");
    /// assert_eq!(table.raw_content_at("B2").unwrap(), "=A1");
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::parse_with_separator(text, default_separator())
    }

    /// Parse table text with custom separators
    pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Self> {
        if options.min_space_run == 0 {
            return Err(Error::InvalidOptions(
                "min_space_run must be at least 1".into(),
            ));
        }

        let separator = Regex::new(&options.separator_pattern())
            .map_err(|e| Error::InvalidOptions(e.to_string()))?;

        Ok(Self::parse_with_separator(text, &separator))
    }

    fn parse_with_separator(text: &str, separator: &Regex) -> Self {
        let mut table = Table::default();

        let lines = text
            .trim()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        for (row_idx, line) in lines.enumerate() {
            let start = table.cells.len();

            let tokens = separator
                .split(line)
                .map(str::trim)
                .filter(|token| !token.is_empty());

            for (col_idx, token) in tokens.enumerate() {
                let address = CellAddress::new(row_idx as u32 + 1, col_idx as u32 + 1);
                table.cells.push(Cell::new(address, token));
            }

            table.rows.push(start..table.cells.len());
        }

        tracing::debug!(
            cells = table.cells.len(),
            rows = table.rows.len(),
            "parsed table"
        );

        table
    }

    /// Whether the text produced no cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows, each a slice of its cells in column order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(move |span| &self.cells[span.clone()])
    }

    /// Look up a cell by address
    pub fn cell_at(&self, address: CellAddress) -> Option<&Cell> {
        self.cells
            .binary_search_by_key(&address, Cell::address)
            .ok()
            .map(|idx| &self.cells[idx])
    }

    /// Look up a cell by label
    ///
    /// Fails with [`Error::InvalidCellIndex`] if the label is malformed and
    /// [`Error::CellNotFound`] if no cell sits at it.
    pub fn cell(&self, label: &str) -> Result<&Cell> {
        let address = CellAddress::parse(label)?;
        self.cell_at(address)
            .ok_or_else(|| Error::CellNotFound(label.to_string()))
    }

    /// The raw (unevaluated) content at a label
    pub fn raw_content_at(&self, label: &str) -> Result<&str> {
        self.cell(label).map(Cell::raw_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw_grid(table: &Table) -> Vec<Vec<&str>> {
        table
            .rows()
            .map(|row| row.iter().map(Cell::raw_content).collect())
            .collect()
    }

    #[test]
    fn test_parse_tabs_and_space_runs() {
        let table = Table::parse("3   2.5\n=ADD(A1,B1)  =MULTIPLY(A1,2)");
        assert_eq!(
            raw_grid(&table),
            vec![vec!["3", "2.5"], vec!["=ADD(A1,B1)", "=MULTIPLY(A1,2)"]]
        );
        assert_eq!(table.len(), 4);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_single_space_does_not_split() {
        let table = Table::parse("hello world\tnext");
        assert_eq!(raw_grid(&table), vec![vec!["hello world", "next"]]);
    }

    #[test]
    fn test_trims_and_drops_blanks() {
        let table = Table::parse("\n\n   a \t\t b  \n\n   \n c\n\n");
        assert_eq!(raw_grid(&table), vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(table.cell("A2").unwrap().raw_content(), "c");
    }

    #[test]
    fn test_addresses_from_position() {
        let table = Table::parse("a\tb\tc\nd");
        let labels: Vec<_> = table.cells().iter().map(Cell::label).collect();
        assert_eq!(labels, vec!["A1", "B1", "C1", "A2"]);
    }

    #[test]
    fn test_empty() {
        assert!(Table::parse("").is_empty());
        assert!(Table::parse("  \n\t\n  ").is_empty());
        assert!(!Table::parse("x").is_empty());
        assert_eq!(Table::parse("").column_count(), 0);
    }

    #[test]
    fn test_raw_content_at() {
        let table = Table::parse("1\t=A1");
        assert_eq!(table.raw_content_at("B1"), Ok("=A1"));
        assert_eq!(
            table.raw_content_at("C1"),
            Err(Error::CellNotFound("C1".into()))
        );
        assert_eq!(
            table.raw_content_at("A0"),
            Err(Error::InvalidCellIndex("A0".into()))
        );
        assert_eq!(
            table.raw_content_at("1A"),
            Err(Error::InvalidCellIndex("1A".into()))
        );
    }

    #[test]
    fn test_ragged_rows() {
        let table = Table::parse("a\nb\tc\td");
        assert_eq!(table.column_count(), 3);
        assert!(table.cell_at(CellAddress::new(1, 2)).is_none());
        assert_eq!(table.cell_at(CellAddress::new(2, 3)).unwrap().raw_content(), "d");
    }

    #[test]
    fn test_default_separator_matches_default_options() {
        assert_eq!(
            default_separator().as_str(),
            ParseOptions::default().separator_pattern()
        );
    }

    #[test]
    fn test_parse_with_options() {
        let options = ParseOptions {
            min_space_run: 1,
            split_on_tab: false,
        };
        let table = Table::parse_with_options("a b\tc", &options).unwrap();
        assert_eq!(raw_grid(&table), vec![vec!["a", "b\tc"]]);

        let options = ParseOptions {
            min_space_run: 0,
            split_on_tab: true,
        };
        assert!(matches!(
            Table::parse_with_options("a", &options),
            Err(Error::InvalidOptions(_))
        ));
    }
}
