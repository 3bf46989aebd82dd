//! # gridcalc-core
//!
//! Core data structures for the gridcalc formula engine.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`CellAddress`] - Labels like `B12` and their (row, column) form
//! - [`Cell`] - Raw content at one address
//! - [`Table`] - The grid parsed from tab/space separated text
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, Table};
//!
//! let table = Table::parse("3   2.5\n=ADD(A1,B1)  =MULTIPLY(A1,2)");
//!
//! assert_eq!(table.raw_content_at("B2").unwrap(), "=MULTIPLY(A1,2)");
//! assert_eq!(CellAddress::encode(2, 27), "AA2");
//! ```

pub mod cell;
pub mod error;
pub mod options;
pub mod table;

// Re-exports for convenience
pub use cell::{Cell, CellAddress};
pub use error::{Error, Result};
pub use options::ParseOptions;
pub use table::Table;
