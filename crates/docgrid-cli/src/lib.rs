//! docgrid CLI — configuration resolution and the fetch/extract/render pipeline.

pub mod config;
pub mod pipeline;

pub use config::{resolve_url, OutputFormat, Settings, URL_ENV_VAR};
pub use pipeline::{run, write_output};
