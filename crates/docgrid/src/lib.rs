//! docgrid — rebuild a sparse character grid from the tables of a published HTML document.
//!
//! The pipeline is linear: [`fetch`] retrieves the document, [`extract`] decodes
//! every `(x, value, y)` table row into a [`Grid`], and [`render`] prints the grid
//! top row first.

pub mod extract;
pub mod fetch;
pub mod render;
pub mod types;

pub use extract::{decode_row, extract_grid, extract_grid_with_stats, ExtractStats};
pub use fetch::{DocFetcher, FetchError, FetchOptions, FetchedDocument};
pub use render::{render_lines, render_to};
pub use types::*;
