//! Cell-related types
//!
//! This module contains:
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`Cell`] - The raw content stored at an address

mod address;
mod data;

pub use address::CellAddress;
pub use data::Cell;
