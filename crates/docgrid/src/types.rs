//! Core data types for the sparse coordinate grid.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fetch::FetchError;

/// A cell position. `y = 0` is the bottom row of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Upper canvas bounds. The lower bounds are always the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Number of columns on the canvas (`max_x + 1`), zero when every key lies left of the origin.
    pub fn width(&self) -> u64 {
        self.max_x.saturating_add(1).max(0) as u64
    }

    /// Number of rows on the canvas (`max_y + 1`), zero when every key lies below the origin.
    pub fn height(&self) -> u64 {
        self.max_y.saturating_add(1).max(0) as u64
    }
}

/// A single placed value, flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub value: String,
}

/// Sparse mapping from coordinate to the text token placed there.
///
/// Keys are unique; inserting an existing coordinate replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: BTreeMap<Coord, String>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `value` at `coord`, returning the value it replaced.
    pub fn insert(&mut self, coord: Coord, value: impl Into<String>) -> Option<String> {
        self.cells.insert(coord, value.into())
    }

    pub fn get(&self, coord: Coord) -> Option<&str> {
        self.cells.get(&coord).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate entries ordered by `(x, y)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &str)> {
        self.cells.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// Maximum x and y over all keys, or `None` for an empty grid.
    pub fn bounds(&self) -> Option<Bounds> {
        let max_x = self.cells.keys().map(|c| c.x).max()?;
        let max_y = self.cells.keys().map(|c| c.y).max()?;
        Some(Bounds { max_x, max_y })
    }

    /// All entries as flat records, ordered by `(x, y)`.
    pub fn cells(&self) -> Vec<Cell> {
        self.iter()
            .map(|(c, v)| Cell {
                x: c.x,
                y: c.y,
                value: v.to_string(),
            })
            .collect()
    }
}

impl FromIterator<(Coord, String)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Coord, String)>>(iter: I) -> Self {
        let mut grid = Grid::new();
        for (coord, value) in iter {
            grid.insert(coord, value);
        }
        grid
    }
}

/// Errors that can occur anywhere in the docgrid pipeline.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type.
pub type GridResult<T> = Result<T, GridError>;
