//! One run: fetch the document, decode its tables, write the grid.

use std::io::Write;

use serde_json::json;
use tracing::info;

use docgrid::{extract_grid, render_to, DocFetcher, Grid, GridResult};

use crate::config::{OutputFormat, Settings};

/// Execute the pipeline, writing the result to `out`.
///
/// Nothing is written unless the fetch succeeds.
pub async fn run<W: Write>(settings: &Settings, out: &mut W) -> GridResult<Grid> {
    let fetcher = DocFetcher::new(settings.fetch.clone())?;

    info!("fetching {}", settings.url);
    let doc = fetcher.fetch(&settings.url).await?;

    let grid = extract_grid(&doc.body);

    write_output(&grid, settings.format, out)?;
    Ok(grid)
}

/// Write `grid` in the requested format.
pub fn write_output<W: Write>(grid: &Grid, format: OutputFormat, out: &mut W) -> GridResult<()> {
    match format {
        OutputFormat::Text => render_to(grid, out)?,
        OutputFormat::Json => {
            let (width, height) = grid
                .bounds()
                .map(|b| (b.width(), b.height()))
                .unwrap_or((0, 0));
            let value = json!({
                "width": width,
                "height": height,
                "cells": grid.cells(),
            });
            serde_json::to_writer(&mut *out, &value)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
